use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::record::Record;

/// Which aggregates a view wants over its matches
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AggregateSpec {
    /// Fields counted by distinct value (status, type, ...)
    pub bucket_fields: Vec<String>,
    /// Numeric fields summed over the matches
    pub sum_fields: Vec<String>,
    /// Margin over two summed fields
    pub margin: Option<MarginSpec>,
}

impl AggregateSpec {
    pub fn buckets(fields: &[&str]) -> Self {
        Self {
            bucket_fields: fields.iter().map(|f| f.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn with_sums(mut self, fields: &[&str]) -> Self {
        self.sum_fields = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn with_margin(mut self, revenue_field: &str, cost_field: &str) -> Self {
        self.margin = Some(MarginSpec {
            revenue_field: revenue_field.to_string(),
            cost_field: cost_field.to_string(),
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginSpec {
    pub revenue_field: String,
    pub cost_field: String,
}

/// Counts by value of one field
pub type BucketCounts = BTreeMap<String, usize>;

/// Summary statistics of a filtered view
///
/// `total` and `total_buckets` describe the unfiltered collection ("3 of 1247
/// shown"); everything else is computed from the matches only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    pub total: usize,
    pub total_buckets: BTreeMap<String, BucketCounts>,
    pub count: usize,
    pub buckets: BTreeMap<String, BucketCounts>,
    pub sums: BTreeMap<String, f64>,
    pub margin: Option<f64>,
}

impl AggregateResult {
    /// Count of matches whose `field` equals `key`
    pub fn bucket(&self, field: &str, key: &str) -> usize {
        self.buckets
            .get(field)
            .and_then(|counts| counts.get(key))
            .copied()
            .unwrap_or(0)
    }

    /// Count over the unfiltered collection
    pub fn total_bucket(&self, field: &str, key: &str) -> usize {
        self.total_buckets
            .get(field)
            .and_then(|counts| counts.get(key))
            .copied()
            .unwrap_or(0)
    }

    pub fn sum(&self, field: &str) -> f64 {
        self.sums.get(field).copied().unwrap_or(0.0)
    }

    /// "N de M" caption shown above result tables
    pub fn shown_caption(&self) -> String {
        format!("{} de {}", self.count, self.total)
    }
}

/// `(revenue - cost) / revenue * 100`, one decimal; `None` when revenue is zero
pub fn margin_percent(revenue: f64, cost: f64) -> Option<f64> {
    if revenue == 0.0 || !revenue.is_finite() || !cost.is_finite() {
        return None;
    }
    Some(round_to((revenue - cost) / revenue * 100.0, 1))
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub(crate) fn count_buckets<R: Record>(
    records: &[&R],
    fields: &[String],
) -> BTreeMap<String, BucketCounts> {
    let schema = R::schema();
    let mut result = BTreeMap::new();

    for field in fields.iter().filter(|f| schema.is_known(f)) {
        let mut counts = BucketCounts::new();
        for record in records {
            if let Some(value) = record.field(field) {
                *counts.entry(value.bucket_key()).or_insert(0) += 1;
            }
        }
        result.insert(field.clone(), counts);
    }

    result
}

/// Unrounded sum of a numeric field; missing values are skipped
pub(crate) fn raw_sum<R: Record>(records: &[&R], field: &str) -> Option<f64> {
    let def = R::schema().field(field)?;
    if !def.kind.is_numeric() {
        return None;
    }
    Some(
        records
            .iter()
            .filter_map(|r| r.field(field).and_then(|v| v.as_f64()))
            .sum(),
    )
}

pub(crate) fn summarize<R: Record>(
    all: &[R],
    matches: &[&R],
    spec: &AggregateSpec,
) -> AggregateResult {
    let everything: Vec<&R> = all.iter().collect();

    let sums = spec
        .sum_fields
        .iter()
        .filter_map(|field| raw_sum(matches, field).map(|s| (field.clone(), round_to(s, 2))))
        .collect();

    let margin = spec.margin.as_ref().and_then(|m| {
        let revenue = raw_sum(matches, &m.revenue_field)?;
        let cost = raw_sum(matches, &m.cost_field)?;
        margin_percent(revenue, cost)
    });

    AggregateResult {
        total: all.len(),
        total_buckets: count_buckets(&everything, &spec.bucket_fields),
        count: matches.len(),
        buckets: count_buckets(matches, &spec.bucket_fields),
        sums,
        margin,
    }
}
