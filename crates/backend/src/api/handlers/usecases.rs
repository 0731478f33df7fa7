use axum::http::StatusCode;
use axum::Json;
use contracts::usecases::common::UseCaseError;
use contracts::usecases::u501_qr_batch::{QrBatchRequest, QrBatchResponse};
use once_cell::sync::Lazy;

use crate::usecases;

// ============================================================================
// UseCase u501: QR batch
// ============================================================================

static QR_EXECUTOR: Lazy<usecases::u501_qr_batch::QrBatchExecutor> =
    Lazy::new(usecases::u501_qr_batch::QrBatchExecutor::new);

/// POST /api/u501/qr-batch
pub async fn u501_generate(
    Json(request): Json<QrBatchRequest>,
) -> Result<Json<QrBatchResponse>, (StatusCode, Json<UseCaseError>)> {
    match QR_EXECUTOR.generate(&request) {
        Ok(response) => Ok(Json(response)),
        Err(e) if e.is_validation() => {
            tracing::warn!("QR batch rejected: {}", e);
            Err((StatusCode::UNPROCESSABLE_ENTITY, Json(e)))
        }
        Err(e) => {
            tracing::error!("QR batch failed: {}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, Json(e)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::store;

    #[tokio::test]
    async fn test_empty_selection_is_422() {
        store::init_for_tests();
        let request: QrBatchRequest = serde_json::from_str("{}").unwrap();
        let (status, Json(err)) = u501_generate(Json(request)).await.unwrap_err();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(err.is_validation());
    }
}
