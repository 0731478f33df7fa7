use axum::extract::Query;
use axum::Json;
use contracts::dashboards::d401_inventory_overview::InventoryOverview;
use serde::Deserialize;

use crate::dashboards::d401_inventory_overview;
use crate::shared::{config, error::to_status};

#[derive(Debug, Deserialize)]
pub struct OverviewQuery {
    /// Recent movements to include
    pub recent: Option<usize>,
}

/// GET /api/d401/overview
pub async fn get_overview(
    Query(query): Query<OverviewQuery>,
) -> Result<Json<InventoryOverview>, axum::http::StatusCode> {
    let limit = query.recent.unwrap_or_else(|| config::catalog().recent_movements);
    d401_inventory_overview::service::get_overview(limit)
        .map(Json)
        .map_err(to_status)
}
