use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::schema::RecordSchema;

/// Equality value that disables the filter
pub const ALL: &str = "all";

/// Active predicates of one view, as sent by the UI
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSpec {
    /// Case-insensitive substring over the schema's search fields
    pub text_query: String,
    /// field -> exact value ("all" disables)
    pub equality_filters: BTreeMap<String, String>,
    /// field -> inclusive bounds
    pub range_filters: BTreeMap<String, RangeFilter>,
    /// field -> required flag value
    pub boolean_filters: BTreeMap<String, bool>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, query: impl Into<String>) -> Self {
        self.text_query = query.into();
        self
    }

    pub fn with_equality(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.equality_filters.insert(field.into(), value.into());
        self
    }

    pub fn with_range(mut self, field: impl Into<String>, range: RangeFilter) -> Self {
        self.range_filters.insert(field.into(), range);
        self
    }

    pub fn with_flag(mut self, field: impl Into<String>, value: bool) -> Self {
        self.boolean_filters.insert(field.into(), value);
        self
    }

    /// Number of predicates that constrain the result
    pub fn active_count(&self) -> usize {
        let text = usize::from(!self.text_query.is_empty());
        let equality = self
            .equality_filters
            .values()
            .filter(|v| v.as_str() != ALL)
            .count();
        let ranges = self
            .range_filters
            .values()
            .filter(|r| !r.is_unbounded())
            .count();
        text + equality + ranges + self.boolean_filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Human-readable chips for the active predicates, labelled from the schema
    pub fn describe(&self, schema: &RecordSchema) -> Vec<String> {
        let mut chips = Vec::new();

        if !self.text_query.is_empty() {
            chips.push(format!("Búsqueda: \"{}\"", self.text_query));
        }

        for (field, value) in &self.equality_filters {
            if value != ALL {
                chips.push(format!("{} = {}", schema.label(field), value));
            }
        }

        for (field, range) in &self.range_filters {
            let label = schema.label(field);
            match (&range.from, &range.to) {
                (Some(f), Some(t)) => chips.push(format!("{}: {} — {}", label, f, t)),
                (Some(f), None) => chips.push(format!("{} ≥ {}", label, f)),
                (None, Some(t)) => chips.push(format!("{} ≤ {}", label, t)),
                (None, None) => {}
            }
        }

        for (field, value) in &self.boolean_filters {
            let state = if *value { "sí" } else { "no" };
            chips.push(format!("{}: {}", schema.label(field), state));
        }

        chips
    }
}

/// Inclusive range; a missing bound leaves that side open
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<RangeBound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<RangeBound>,
}

impl RangeFilter {
    pub fn between(from: impl Into<RangeBound>, to: impl Into<RangeBound>) -> Self {
        Self {
            from: Some(from.into()),
            to: Some(to.into()),
        }
    }

    pub fn at_least(from: impl Into<RangeBound>) -> Self {
        Self {
            from: Some(from.into()),
            to: None,
        }
    }

    pub fn at_most(to: impl Into<RangeBound>) -> Self {
        Self {
            from: None,
            to: Some(to.into()),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

/// A range bound: JSON numbers for numeric fields, strings for dates and text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RangeBound {
    Number(f64),
    Text(String),
}

impl std::fmt::Display for RangeBound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RangeBound::Number(n) => write!(f, "{}", n),
            RangeBound::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for RangeBound {
    fn from(value: f64) -> Self {
        RangeBound::Number(value)
    }
}

impl From<i64> for RangeBound {
    fn from(value: i64) -> Self {
        RangeBound::Number(value as f64)
    }
}

impl From<&str> for RangeBound {
    fn from(value: &str) -> Self {
        RangeBound::Text(value.to_string())
    }
}

impl From<String> for RangeBound {
    fn from(value: String) -> Self {
        RangeBound::Text(value)
    }
}

impl From<NaiveDate> for RangeBound {
    fn from(value: NaiveDate) -> Self {
        RangeBound::Text(value.format("%Y-%m-%d").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog_filter::schema::{FieldDef, FieldKind};

    const SCHEMA: RecordSchema = RecordSchema {
        id: "test",
        name: "Test",
        fields: &[
            FieldDef::new("category", "Categoría", FieldKind::Text),
            FieldDef::new("date", "Fecha", FieldKind::Date),
            FieldDef::new("available", "Disponible", FieldKind::Boolean),
        ],
        search_fields: &["category"],
    };

    #[test]
    fn test_deserialize_from_ui_payload() {
        let json = r#"{
            "textQuery": "pan",
            "equalityFilters": {"category": "all", "size": "32"},
            "rangeFilters": {"date": {"from": "2024-01-14"}, "price": {"from": 10, "to": 50.5}},
            "booleanFilters": {"available": true}
        }"#;
        let spec: FilterSpec = serde_json::from_str(json).unwrap();

        assert_eq!(spec.text_query, "pan");
        assert_eq!(
            spec.range_filters["date"].from,
            Some(RangeBound::Text("2024-01-14".into()))
        );
        assert_eq!(spec.range_filters["price"].to, Some(RangeBound::Number(50.5)));
        // category = "all" is not counted
        assert_eq!(spec.active_count(), 5);
    }

    #[test]
    fn test_empty_payload_defaults() {
        let spec: FilterSpec = serde_json::from_str("{}").unwrap();
        assert!(spec.is_empty());
        assert_eq!(spec, FilterSpec::new());
    }

    #[test]
    fn test_sentinel_and_unbounded_are_inactive() {
        let spec = FilterSpec::new()
            .with_equality("category", ALL)
            .with_range("date", RangeFilter::default());
        assert!(spec.is_empty());
    }

    #[test]
    fn test_describe_uses_schema_labels() {
        let spec = FilterSpec::new()
            .with_text("cam")
            .with_equality("category", "Camisetas")
            .with_equality("size", ALL)
            .with_range(
                "date",
                RangeFilter::between("2024-01-14", "2024-01-16"),
            )
            .with_flag("available", false);

        let chips = spec.describe(&SCHEMA);
        assert_eq!(
            chips,
            vec![
                "Búsqueda: \"cam\"".to_string(),
                "Categoría = Camisetas".to_string(),
                "Fecha: 2024-01-14 — 2024-01-16".to_string(),
                "Disponible: no".to_string(),
            ]
        );
    }
}
