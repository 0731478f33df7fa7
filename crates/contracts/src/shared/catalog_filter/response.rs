use serde::{Deserialize, Serialize};

use super::aggregate::AggregateResult;

/// Items of a filtered view together with its summary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterResponse<T> {
    pub items: Vec<T>,
    pub summary: AggregateResult,
    /// Human-readable chips for the active predicates
    #[serde(default)]
    pub applied: Vec<String>,
}
