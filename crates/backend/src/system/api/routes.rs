use axum::{routing::get, Router};

use super::handlers;

/// System routes: health check and settings
pub fn configure_system_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/api/system/settings",
            get(handlers::settings::get_settings).put(handlers::settings::update_settings),
        )
}
