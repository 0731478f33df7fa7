use axum::Json;
use contracts::system::settings::AppSettings;

use crate::system::settings::service;

/// GET /api/system/settings
pub async fn get_settings() -> Json<AppSettings> {
    Json(service::get())
}

/// PUT /api/system/settings
pub async fn update_settings(Json(settings): Json<AppSettings>) -> Json<AppSettings> {
    Json(service::replace(settings))
}
