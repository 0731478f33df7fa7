use axum::{
    routing::{get, post},
    Router,
};

use crate::{api::handlers, system};

/// All application routes
pub fn configure_routes() -> Router {
    Router::new()
        .merge(system::api::routes::configure_system_routes())
        // ========================================
        // A001 PRODUCTS
        // ========================================
        .route("/api/a001/products", get(handlers::a001_product::list_all))
        .route(
            "/api/a001/products/search",
            post(handlers::a001_product::search),
        )
        .route(
            "/api/a001/products/options",
            get(handlers::a001_product::options),
        )
        .route(
            "/api/a001/products/id/:id",
            get(handlers::a001_product::get_by_id),
        )
        .route(
            "/api/a001/products/:code",
            get(handlers::a001_product::get_by_code),
        )
        // ========================================
        // A002 STOCK MOVEMENTS
        // ========================================
        .route(
            "/api/a002/movements/search",
            post(handlers::a002_stock_movement::search),
        )
        .route(
            "/api/a002/movements/export",
            post(handlers::a002_stock_movement::export),
        )
        .route(
            "/api/a002/movements/audit",
            get(handlers::a002_stock_movement::audit),
        )
        .route(
            "/api/a002/movements/reasons",
            get(handlers::a002_stock_movement::reasons),
        )
        .route(
            "/api/a002/movements/id/:id",
            get(handlers::a002_stock_movement::get_by_id),
        )
        // ========================================
        // USECASES
        // ========================================
        .route("/api/u501/qr-batch", post(handlers::usecases::u501_generate))
        // ========================================
        // DASHBOARDS
        // ========================================
        .route(
            "/api/d400/financial-report",
            post(handlers::d400_financial_report::get_financial_report),
        )
        .route(
            "/api/d401/overview",
            get(handlers::d401_inventory_overview::get_overview),
        )
}
