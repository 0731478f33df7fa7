use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::request::QrSize;

/// Value of the `source` field of every payload
pub const QR_SOURCE: &str = "StyleStock";

/// One product as encoded in the QR
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QrProductEntry {
    pub code: String,
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
}

/// Data to be encoded into the QR image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QrPayload {
    pub products: Vec<QrProductEntry>,
    pub generated: DateTime<Utc>,
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrBatchResponse {
    pub batch_id: Uuid,
    pub size: QrSize,
    pub pixels: u32,
    pub payload: QrPayload,
    /// Confirmation shown to the user
    pub message: String,
}

impl QrBatchResponse {
    pub fn new(size: QrSize, payload: QrPayload) -> Self {
        let message = format!("QR generado con {} producto(s)", payload.products.len());
        Self {
            batch_id: Uuid::new_v4(),
            size,
            pixels: size.pixels(),
            payload,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_are_omitted() {
        let entry = QrProductEntry {
            code: "CAM001".into(),
            name: "Camiseta Basic Blanca".into(),
            category: "Camisetas".into(),
            price: Some(29.99),
            stock: None,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["price"], 29.99);
        assert!(json.get("stock").is_none());
    }

    #[test]
    fn test_response_message() {
        let payload = QrPayload {
            products: vec![],
            generated: Utc::now(),
            source: QR_SOURCE.into(),
        };
        let response = QrBatchResponse::new(QrSize::Small, payload);
        assert_eq!(response.pixels, 200);
        assert_eq!(response.message, "QR generado con 0 producto(s)");
        assert_eq!(response.batch_id.get_version_num(), 4);
    }
}
