use contracts::dashboards::d400_financial_report::{BalanceLine, SaleLine};
use contracts::domain::a001_product::Product;
use contracts::domain::a002_stock_movement::Movement;
use contracts::domain::common::{AggregateId, AggregateRoot};
use once_cell::sync::OnceCell;
use std::collections::BTreeMap;

use crate::shared::error::ServiceError;

/// Read-only catalog shared by every request
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    pub products: Vec<Product>,
    pub movements: Vec<Movement>,
    pub sales: Vec<SaleLine>,
    pub assets: Vec<BalanceLine>,
    pub liabilities: Vec<BalanceLine>,
}

impl CatalogStore {
    /// Current stock per product code
    pub fn stock_levels(&self) -> BTreeMap<String, i64> {
        self.products
            .iter()
            .map(|p| (p.code.clone(), i64::from(p.quantity)))
            .collect()
    }
}

/// Case-insensitive lookup by business code
pub fn find_by_code<'a, A: AggregateRoot>(items: &'a [A], code: &str) -> Result<&'a A, ServiceError> {
    items
        .iter()
        .find(|a| a.code().eq_ignore_ascii_case(code.trim()))
        .ok_or_else(|| ServiceError::NotFound(format!("{} {}", A::element_name(), code)))
}

/// Lookup by the text form of the id, as it arrives in a path
pub fn find_by_id<'a, A: AggregateRoot>(items: &'a [A], raw: &str) -> Result<&'a A, ServiceError> {
    let id = A::Id::from_string(raw)
        .map_err(|e| ServiceError::InvalidRequest(format!("{} {}: {}", A::element_name(), raw, e)))?;
    items
        .iter()
        .find(|a| a.id() == id)
        .ok_or_else(|| ServiceError::NotFound(format!("{} {}", A::element_name(), id.as_string())))
}

static STORE: OnceCell<CatalogStore> = OnceCell::new();

/// Install the catalog; fails if one is already installed
pub fn initialize(store: CatalogStore) -> anyhow::Result<()> {
    STORE
        .set(store)
        .map_err(|_| anyhow::anyhow!("Catalog store has already been initialized"))
}

pub fn get_store() -> Result<&'static CatalogStore, ServiceError> {
    STORE.get().ok_or(ServiceError::Unavailable)
}

/// Install the seed catalog once for tests that go through the global store
#[cfg(test)]
pub fn init_for_tests() -> &'static CatalogStore {
    STORE.get_or_init(|| super::seed::load(true).unwrap())
}
