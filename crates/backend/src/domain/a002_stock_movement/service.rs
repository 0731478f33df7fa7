use contracts::domain::a002_stock_movement::{
    audit_balances, movement_type::MovementType, BalanceAudit, Movement,
};
use contracts::domain::common::AggregateRoot;
use contracts::shared::catalog_filter::{evaluate, filter, FilterResponse, FilterSpec, Record};
use std::collections::BTreeMap;

use super::export::movements_to_csv;
use crate::shared::data::store::{find_by_id, get_store, CatalogStore};
use crate::shared::error::ServiceError;

pub fn search(criteria: &FilterSpec) -> Result<FilterResponse<Movement>, ServiceError> {
    Ok(search_in(&get_store()?.movements, criteria))
}

/// Filtered movements with counts by type and reason
pub fn search_in(movements: &[Movement], criteria: &FilterSpec) -> FilterResponse<Movement> {
    let applied = criteria.describe(Movement::schema());
    let (items, summary) = evaluate(movements, criteria).into_owned();
    FilterResponse {
        items,
        summary,
        applied,
    }
}

/// Movement by numeric id, given as path text
pub fn get_by_id(id: &str) -> Result<Movement, ServiceError> {
    find_by_id(&get_store()?.movements, id).cloned()
}

/// CSV of the movements matching `criteria`
pub fn export(criteria: &FilterSpec) -> Result<String, ServiceError> {
    let store = get_store()?;
    let matches = filter(&store.movements, criteria);
    tracing::info!("{} export: {} movements", Movement::full_name(), matches.len());
    movements_to_csv(&matches)
}

pub fn audit() -> Result<BalanceAudit, ServiceError> {
    Ok(audit_store(get_store()?))
}

/// Balance audit of the store's movements against current stock
pub fn audit_store(store: &CatalogStore) -> BalanceAudit {
    let report = audit_balances(&store.movements, &BTreeMap::new(), &store.stock_levels());
    for d in &report.discrepancies {
        tracing::warn!(
            "Balance discrepancy {:?} on {} (movement {}): expected {}, recorded {}",
            d.kind,
            d.product_code,
            d.movement_id.value(),
            d.expected_balance,
            d.recorded_balance
        );
    }
    report
}

/// Allowed reasons per movement type
pub fn reasons() -> BTreeMap<&'static str, &'static [&'static str]> {
    MovementType::all()
        .into_iter()
        .map(|t| (t.code(), t.reasons()))
        .collect()
}
