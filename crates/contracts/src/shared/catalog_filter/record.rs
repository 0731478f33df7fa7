use super::aggregate::AggregateSpec;
use super::schema::RecordSchema;
use super::value::FieldValue;

/// A catalog entity the filter engine can read
///
/// `field` returns `None` for a schema field the record does not carry
/// (an unset optional); ids outside the schema are never asked for.
pub trait Record {
    /// Static schema of this record type
    fn schema() -> &'static RecordSchema;

    /// Value of one field by wire id
    fn field(&self, field_id: &str) -> Option<FieldValue<'_>>;

    /// Aggregates a view computes when it does not ask for its own
    fn default_aggregates() -> AggregateSpec {
        AggregateSpec::default()
    }
}
