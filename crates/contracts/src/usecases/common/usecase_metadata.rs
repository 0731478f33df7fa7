/// Identification of a use case
pub trait UseCaseMetadata {
    /// Index of the use case (e.g. "u501")
    fn usecase_index() -> &'static str;

    /// Technical name (e.g. "qr_batch")
    fn usecase_name() -> &'static str;

    /// Name shown in the UI
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Full name, e.g. "u501_qr_batch"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
