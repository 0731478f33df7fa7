use super::AggregateId;

/// Common surface of the catalog aggregates
pub trait AggregateRoot {
    type Id: AggregateId;

    fn id(&self) -> Self::Id;

    /// Business code (e.g. "CAM001")
    fn code(&self) -> &str;

    /// Index of the aggregate in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name (e.g. "product")
    fn collection_name() -> &'static str;

    /// Singular UI name (e.g. "Producto"), used in lookup errors
    fn element_name() -> &'static str;

    /// Full name, e.g. "a001_product"
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
