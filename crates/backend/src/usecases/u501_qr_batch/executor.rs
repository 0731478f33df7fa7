use chrono::{DateTime, Utc};
use contracts::domain::a001_product::Product;
use contracts::shared::catalog_filter::filter;
use contracts::usecases::common::{UseCaseError, UseCaseMetadata, UseCaseResult};
use contracts::usecases::u501_qr_batch::{
    QrBatch, QrBatchRequest, QrBatchResponse, QrPayload, QrProductEntry, Selection, QR_SOURCE,
};

use crate::shared::data::store::get_store;

/// Executor of the QR batch use case
#[derive(Debug, Clone, Default)]
pub struct QrBatchExecutor;

impl QrBatchExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Build the QR payload for the selection against the live catalog
    pub fn generate(&self, request: &QrBatchRequest) -> UseCaseResult<QrBatchResponse> {
        let store = get_store().map_err(|e| UseCaseError::internal(e.to_string()))?;
        let payload = self.build_payload(&store.products, request, Utc::now())?;
        tracing::info!(
            "{}: {} product(s), {}",
            QrBatch::full_name(),
            payload.products.len(),
            request.size.label()
        );
        Ok(QrBatchResponse::new(request.size, payload))
    }

    /// Selected products that are also visible under the request's filter,
    /// in catalog order
    pub fn build_payload(
        &self,
        products: &[Product],
        request: &QrBatchRequest,
        generated: DateTime<Utc>,
    ) -> UseCaseResult<QrPayload> {
        let selection = Selection::from_ids(request.selected_ids.iter().copied());
        if selection.is_empty() {
            return Err(UseCaseError::validation("Selecciona al menos un producto"));
        }

        let entries: Vec<QrProductEntry> = filter(products, &request.filter)
            .into_iter()
            .filter(|p| selection.contains(p.id))
            .map(|p| QrProductEntry {
                code: p.code.clone(),
                name: p.name.clone(),
                category: p.category.clone(),
                price: request.include_price.then_some(p.price),
                stock: request.include_stock.then_some(p.quantity),
            })
            .collect();

        if entries.is_empty() {
            return Err(UseCaseError::validation(
                "Ninguno de los productos seleccionados coincide con los filtros",
            )
            .with_details(format!("{} id(s) seleccionados", selection.len())));
        }

        Ok(QrPayload {
            products: entries,
            generated,
            source: QR_SOURCE.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::{seed, store};
    use contracts::domain::a001_product::ProductId;
    use contracts::shared::catalog_filter::FilterSpec;
    use contracts::usecases::u501_qr_batch::QrSize;

    fn request(filter: FilterSpec, ids: &[u32]) -> QrBatchRequest {
        QrBatchRequest {
            filter,
            selected_ids: ids.iter().copied().map(ProductId).collect(),
            include_price: true,
            include_stock: false,
            size: QrSize::Medium,
        }
    }

    #[test]
    fn test_selection_is_intersected_with_filter() {
        let products = seed::load(true).unwrap().products;
        let now = Utc::now();
        // VES003 (id 3) is unavailable and filtered out
        let req = request(FilterSpec::new().with_flag("available", true), &[5, 3, 1]);
        let payload = QrBatchExecutor::new().build_payload(&products, &req, now).unwrap();
        let codes: Vec<&str> = payload.products.iter().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, vec!["CAM001", "ACC005"]);
        assert_eq!(payload.products[0].price, Some(29.99));
        assert_eq!(payload.products[0].stock, None);
        assert_eq!(payload.source, "StyleStock");
        assert_eq!(payload.generated, now);
    }

    #[test]
    fn test_stock_without_price() {
        let products = seed::load(true).unwrap().products;
        let mut req = request(FilterSpec::new(), &[4]);
        req.include_price = false;
        req.include_stock = true;
        let payload = QrBatchExecutor::new()
            .build_payload(&products, &req, Utc::now())
            .unwrap();
        assert_eq!(payload.products.len(), 1);
        assert_eq!(payload.products[0].price, None);
        assert_eq!(payload.products[0].stock, Some(25));
    }

    #[test]
    fn test_empty_selection_is_rejected() {
        let products = seed::load(true).unwrap().products;
        let executor = QrBatchExecutor::new();
        let err = executor
            .build_payload(&products, &request(FilterSpec::new(), &[]), Utc::now())
            .unwrap_err();
        assert!(err.is_validation());

        let req = request(FilterSpec::new().with_equality("category", "Calzado"), &[1]);
        let err = executor.build_payload(&products, &req, Utc::now()).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.details.as_deref(), Some("1 id(s) seleccionados"));
    }

    #[test]
    fn test_generate_uses_store() {
        store::init_for_tests();
        let response = QrBatchExecutor::new()
            .generate(&request(FilterSpec::new(), &[2]))
            .unwrap();
        assert_eq!(response.pixels, 400);
        assert_eq!(response.message, "QR generado con 1 producto(s)");
        assert_eq!(response.payload.products[0].code, "PAN002");
    }
}
