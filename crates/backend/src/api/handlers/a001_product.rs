use axum::{extract::Path, Json};
use contracts::domain::a001_product::Product;
use contracts::enums::catalog_options::CatalogOptions;
use contracts::shared::catalog_filter::{FilterResponse, FilterSpec};

use crate::domain::a001_product;
use crate::shared::error::to_status;

/// GET /api/a001/products
pub async fn list_all() -> Result<Json<Vec<Product>>, axum::http::StatusCode> {
    a001_product::service::list_all().map(Json).map_err(to_status)
}

/// GET /api/a001/products/:code
pub async fn get_by_code(
    Path(code): Path<String>,
) -> Result<Json<Product>, axum::http::StatusCode> {
    a001_product::service::get_by_code(&code)
        .map(Json)
        .map_err(to_status)
}

/// GET /api/a001/products/id/:id
pub async fn get_by_id(
    Path(id): Path<String>,
) -> Result<Json<Product>, axum::http::StatusCode> {
    a001_product::service::get_by_id(&id)
        .map(Json)
        .map_err(to_status)
}

/// POST /api/a001/products/search
pub async fn search(
    Json(criteria): Json<FilterSpec>,
) -> Result<Json<FilterResponse<Product>>, axum::http::StatusCode> {
    a001_product::service::search(&criteria)
        .map(Json)
        .map_err(to_status)
}

/// GET /api/a001/products/options
pub async fn options() -> Json<CatalogOptions> {
    Json(a001_product::service::options())
}
