use super::aggregate::{summarize, AggregateResult, AggregateSpec};
use super::filter_spec::FilterSpec;
use super::predicate::matches_all;
use super::record::Record;

/// Filtered view over a borrowed collection
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome<'a, R> {
    /// Matching records, in original relative order
    pub matches: Vec<&'a R>,
    pub summary: AggregateResult,
}

impl<R: Clone> FilterOutcome<'_, R> {
    /// Clone the matches out of the borrowed collection
    pub fn into_owned(self) -> (Vec<R>, AggregateResult) {
        let items = self.matches.into_iter().cloned().collect();
        (items, self.summary)
    }
}

/// Records satisfying every active predicate of `criteria`
pub fn filter<'a, R: Record>(records: &'a [R], criteria: &FilterSpec) -> Vec<&'a R> {
    let schema = R::schema();
    records
        .iter()
        .filter(|record| matches_all(*record, criteria, schema))
        .collect()
}

/// Filter with the record type's default aggregates
pub fn evaluate<'a, R: Record>(records: &'a [R], criteria: &FilterSpec) -> FilterOutcome<'a, R> {
    evaluate_with(records, criteria, &R::default_aggregates())
}

/// Filter and compute the requested aggregates
pub fn evaluate_with<'a, R: Record>(
    records: &'a [R],
    criteria: &FilterSpec,
    aggregates: &AggregateSpec,
) -> FilterOutcome<'a, R> {
    let matches = filter(records, criteria);
    let summary = summarize(records, &matches, aggregates);
    FilterOutcome { matches, summary }
}
