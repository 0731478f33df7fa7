use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::extract::Path;
use axum::Json;
use contracts::domain::a002_stock_movement::{BalanceAudit, Movement};
use contracts::shared::catalog_filter::{FilterResponse, FilterSpec};
use std::collections::BTreeMap;

use crate::domain::a002_stock_movement;
use crate::shared::error::to_status;

/// POST /api/a002/movements/search
pub async fn search(
    Json(criteria): Json<FilterSpec>,
) -> Result<Json<FilterResponse<Movement>>, StatusCode> {
    a002_stock_movement::service::search(&criteria)
        .map(Json)
        .map_err(to_status)
}

/// GET /api/a002/movements/id/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Movement>, StatusCode> {
    a002_stock_movement::service::get_by_id(&id)
        .map(Json)
        .map_err(to_status)
}

/// POST /api/a002/movements/export
pub async fn export(Json(criteria): Json<FilterSpec>) -> Result<impl IntoResponse, StatusCode> {
    let csv = a002_stock_movement::service::export(&criteria).map_err(to_status)?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"movimientos.csv\"",
            ),
        ],
        csv,
    ))
}

/// GET /api/a002/movements/audit
pub async fn audit() -> Result<Json<BalanceAudit>, StatusCode> {
    a002_stock_movement::service::audit()
        .map(Json)
        .map_err(to_status)
}

/// GET /api/a002/movements/reasons
pub async fn reasons() -> Json<BTreeMap<&'static str, &'static [&'static str]>> {
    Json(a002_stock_movement::service::reasons())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::store;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_export_response() {
        store::init_for_tests();
        let criteria = FilterSpec::new().with_equality("type", "Salida");
        let response = export(Json(criteria)).await.unwrap().into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/csv; charset=utf-8"
        );
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert_eq!(text.lines().count(), 3);
    }

    #[tokio::test]
    async fn test_unparsable_id_is_400() {
        store::init_for_tests();
        let status = get_by_id(Path("uno".into())).await.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_audit_handler() {
        store::init_for_tests();
        let Json(report) = audit().await.unwrap();
        assert_eq!(report.checked, 5);
        assert!(!report.is_consistent());
    }
}
