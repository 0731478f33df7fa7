use contracts::domain::a001_product::Product;
use contracts::domain::common::AggregateRoot;
use contracts::enums::catalog_options::CatalogOptions;
use contracts::shared::catalog_filter::{evaluate, FilterResponse, FilterSpec, Record};

use crate::shared::data::store::{find_by_code, find_by_id, get_store};
use crate::shared::error::ServiceError;

pub fn list_all() -> Result<Vec<Product>, ServiceError> {
    Ok(get_store()?.products.clone())
}

/// Product by business code (case-insensitive)
pub fn get_by_code(code: &str) -> Result<Product, ServiceError> {
    find_by_code(&get_store()?.products, code).cloned()
}

/// Product by numeric id, given as path text
pub fn get_by_id(id: &str) -> Result<Product, ServiceError> {
    find_by_id(&get_store()?.products, id).cloned()
}

pub fn search(criteria: &FilterSpec) -> Result<FilterResponse<Product>, ServiceError> {
    Ok(search_in(&get_store()?.products, criteria))
}

/// Filtered products with status buckets, stock sums and margin
pub fn search_in(products: &[Product], criteria: &FilterSpec) -> FilterResponse<Product> {
    let applied = criteria.describe(Product::schema());
    let (items, summary) = evaluate(products, criteria).into_owned();
    tracing::debug!(
        "{} search: {} ({} filters)",
        Product::full_name(),
        summary.shown_caption(),
        criteria.active_count()
    );
    FilterResponse {
        items,
        summary,
        applied,
    }
}

pub fn options() -> CatalogOptions {
    CatalogOptions::current()
}
