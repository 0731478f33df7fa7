//! Single-predicate checks used by the engine
//!
//! Every check answers "does this record satisfy this predicate". Unknown
//! fields answer `true`, missing values on known fields answer `false`,
//! values that cannot be compared answer `false`.

use chrono::NaiveDate;
use std::cmp::Ordering;

use super::filter_spec::{FilterSpec, RangeBound, RangeFilter, ALL};
use super::record::Record;
use super::schema::{parse_date, RecordSchema};
use super::value::FieldValue;

/// Conjunction of every enabled predicate in `spec`
pub(crate) fn matches_all<R: Record>(record: &R, spec: &FilterSpec, schema: &RecordSchema) -> bool {
    matches_text(record, &spec.text_query, schema)
        && spec
            .equality_filters
            .iter()
            .all(|(field, value)| matches_equality(record, schema, field, value))
        && spec
            .range_filters
            .iter()
            .all(|(field, range)| matches_range(record, schema, field, range))
        && spec
            .boolean_filters
            .iter()
            .all(|(field, flag)| matches_flag(record, schema, field, *flag))
}

pub(crate) fn matches_text<R: Record>(record: &R, query: &str, schema: &RecordSchema) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();

    schema.search_fields.iter().any(|field_id| {
        record
            .field(field_id)
            .map_or(false, |value| value.bucket_key().to_lowercase().contains(&needle))
    })
}

pub(crate) fn matches_equality<R: Record>(
    record: &R,
    schema: &RecordSchema,
    field_id: &str,
    expected: &str,
) -> bool {
    if expected == ALL {
        return true;
    }
    if !schema.is_known(field_id) {
        return true;
    }
    let Some(value) = record.field(field_id) else {
        return false;
    };

    match value {
        FieldValue::Text(actual) => actual == expected,
        FieldValue::Integer(actual) => match expected.trim().parse::<i64>() {
            Ok(parsed) => actual == parsed,
            Err(_) => expected
                .trim()
                .parse::<f64>()
                .map_or(false, |p| actual as f64 == p),
        },
        FieldValue::Number(actual) => expected.trim().parse::<f64>().map_or(false, |p| actual == p),
        FieldValue::Boolean(actual) => expected.trim().parse::<bool>().map_or(false, |p| actual == p),
        FieldValue::Date(actual) => parse_date(expected) == Some(actual),
    }
}

pub(crate) fn matches_range<R: Record>(
    record: &R,
    schema: &RecordSchema,
    field_id: &str,
    range: &RangeFilter,
) -> bool {
    if range.is_unbounded() || !schema.is_known(field_id) {
        return true;
    }
    let Some(value) = record.field(field_id) else {
        return false;
    };
    let Some(actual) = Comparable::from_value(&value) else {
        return false;
    };

    let from = match &range.from {
        Some(bound) => match actual.bound(bound) {
            Some(b) => Some(b),
            None => return false,
        },
        None => None,
    };
    let to = match &range.to {
        Some(bound) => match actual.bound(bound) {
            Some(b) => Some(b),
            None => return false,
        },
        None => None,
    };

    // from > to matches nothing
    if let (Some(f), Some(t)) = (&from, &to) {
        if matches!(f.compare(t), Some(Ordering::Greater) | None) {
            return false;
        }
    }

    let above_from = from.map_or(true, |f| {
        matches!(actual.compare(&f), Some(Ordering::Greater | Ordering::Equal))
    });
    let below_to = to.map_or(true, |t| {
        matches!(actual.compare(&t), Some(Ordering::Less | Ordering::Equal))
    });

    above_from && below_to
}

pub(crate) fn matches_flag<R: Record>(
    record: &R,
    schema: &RecordSchema,
    field_id: &str,
    expected: bool,
) -> bool {
    if !schema.is_known(field_id) {
        return true;
    }
    matches!(record.field(field_id), Some(FieldValue::Boolean(actual)) if actual == expected)
}

/// Orderable projection of a field value
#[derive(Debug, Clone)]
enum Comparable {
    Number(f64),
    Date(NaiveDate),
    Text(String),
}

impl Comparable {
    fn from_value(value: &FieldValue<'_>) -> Option<Self> {
        match value {
            FieldValue::Number(n) => Some(Comparable::Number(*n)),
            FieldValue::Integer(i) => Some(Comparable::Number(*i as f64)),
            FieldValue::Date(d) => Some(Comparable::Date(*d)),
            FieldValue::Text(s) => Some(Comparable::Text((*s).to_string())),
            FieldValue::Boolean(_) => None,
        }
    }

    /// Interpret a bound in the same domain as `self`
    fn bound(&self, bound: &RangeBound) -> Option<Comparable> {
        match (self, bound) {
            (Comparable::Number(_), RangeBound::Number(n)) => Some(Comparable::Number(*n)),
            (Comparable::Number(_), RangeBound::Text(s)) => {
                s.trim().parse::<f64>().ok().map(Comparable::Number)
            }
            (Comparable::Date(_), RangeBound::Text(s)) => parse_date(s).map(Comparable::Date),
            (Comparable::Date(_), RangeBound::Number(_)) => None,
            (Comparable::Text(_), RangeBound::Text(s)) => Some(Comparable::Text(s.clone())),
            (Comparable::Text(_), RangeBound::Number(_)) => None,
        }
    }

    fn compare(&self, other: &Comparable) -> Option<Ordering> {
        match (self, other) {
            (Comparable::Number(a), Comparable::Number(b)) => a.partial_cmp(b),
            (Comparable::Date(a), Comparable::Date(b)) => Some(a.cmp(b)),
            (Comparable::Text(a), Comparable::Text(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}
