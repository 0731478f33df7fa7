pub mod request;
pub mod response;
pub mod selection;

pub use request::{QrBatchRequest, QrSize};
pub use response::{QrBatchResponse, QrPayload, QrProductEntry, QR_SOURCE};
pub use selection::Selection;

use crate::usecases::common::UseCaseMetadata;

pub struct QrBatch;

impl UseCaseMetadata for QrBatch {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "qr_batch"
    }

    fn display_name() -> &'static str {
        "Generador de Códigos QR"
    }

    fn description() -> &'static str {
        "Códigos QR para los productos seleccionados del catálogo filtrado"
    }
}
