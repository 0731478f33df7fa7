//! Demo catalog the service starts with

use anyhow::Context;
use contracts::dashboards::d400_financial_report::{BalanceLine, SaleLine};
use contracts::domain::a001_product::Product;
use contracts::domain::a002_stock_movement::Movement;
use serde::Deserialize;

use super::store::CatalogStore;

const PRODUCTS_JSON: &str = include_str!("seed/products.json");
const MOVEMENTS_JSON: &str = include_str!("seed/movements.json");
const SALES_JSON: &str = include_str!("seed/sales.json");
const BALANCE_JSON: &str = include_str!("seed/balance.json");

#[derive(Debug, Deserialize)]
struct BalanceSeed {
    assets: Vec<BalanceLine>,
    liabilities: Vec<BalanceLine>,
}

/// Parse the embedded seed data
///
/// With `validate` set, any product or movement failing its own validation
/// aborts the load.
pub fn load(validate: bool) -> anyhow::Result<CatalogStore> {
    let products: Vec<Product> =
        serde_json::from_str(PRODUCTS_JSON).context("Failed to parse products seed")?;
    let movements: Vec<Movement> =
        serde_json::from_str(MOVEMENTS_JSON).context("Failed to parse movements seed")?;
    let sales: Vec<SaleLine> =
        serde_json::from_str(SALES_JSON).context("Failed to parse sales seed")?;
    let balance: BalanceSeed =
        serde_json::from_str(BALANCE_JSON).context("Failed to parse balance seed")?;

    if validate {
        for product in &products {
            product
                .validate()
                .map_err(|e| anyhow::anyhow!("Product {}: {}", product.code, e))?;
        }
        for movement in &movements {
            movement
                .validate()
                .map_err(|e| anyhow::anyhow!("Movement {}: {}", movement.id.value(), e))?;
        }
    }

    Ok(CatalogStore {
        products,
        movements,
        sales,
        assets: balance.assets,
        liabilities: balance.liabilities,
    })
}
