use anyhow::Result;

use crate::domain::a002_stock_movement::service as movements;
use crate::shared::config::Config;
use crate::shared::data::{seed, store};
use crate::shared::format::{format_money, format_number};
use crate::system::settings;

/// Load the seed catalog into the process-wide store and apply the
/// configured settings
pub fn initialize_catalog(config: &Config) -> Result<()> {
    let catalog = seed::load(config.catalog.validate_seed)?;

    let defaults = contracts::system::settings::AppSettings::from(&config.settings);
    let stock_value: f64 = catalog.products.iter().map(|p| p.stock_value()).sum();
    tracing::info!(
        "Catalog loaded: {} products, {} movements, {} sale lines, stock value {}",
        format_number(catalog.products.len()),
        format_number(catalog.movements.len()),
        format_number(catalog.sales.len()),
        format_money(stock_value, defaults.currency)
    );

    let audit = movements::audit_store(&catalog);
    if !audit.is_consistent() {
        tracing::warn!(
            "Movement balances: {} discrepancies in {} products",
            audit.discrepancies.len(),
            audit.products
        );
    }

    store::initialize(catalog)?;
    settings::service::initialize(defaults);
    Ok(())
}
