use axum::http::StatusCode;
use thiserror::Error;

/// Failures of the catalog services
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Catalog store is not initialized")]
    Unavailable,

    #[error("Export failed: {0}")]
    Export(String),
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            ServiceError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<csv::Error> for ServiceError {
    fn from(e: csv::Error) -> Self {
        ServiceError::Export(e.to_string())
    }
}

/// Log the error and turn it into the handler's status code
pub fn to_status(e: ServiceError) -> StatusCode {
    let status = e.status_code();
    if status.is_server_error() {
        tracing::error!("{}", e);
    } else {
        tracing::warn!("{}", e);
    }
    status
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ServiceError::NotFound("CAM999".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(to_status(ServiceError::InvalidRequest("x".into())), StatusCode::BAD_REQUEST);
        assert_eq!(ServiceError::Unavailable.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            ServiceError::NotFound("CAM999".into()).to_string(),
            "Not found: CAM999"
        );
    }
}
