use chrono::NaiveDate;
use contracts::dashboards::d400_financial_report::{ReportPeriod, SaleLine};
use contracts::dashboards::d401_inventory_overview::{InventoryOverview, RecentMovement, RestockItem};
use contracts::domain::a001_product::StockStatus;
use contracts::shared::catalog_filter::{evaluate, AggregateResult, FilterSpec, RangeFilter};
use std::collections::BTreeMap;

use crate::shared::data::store::{get_store, CatalogStore};
use crate::shared::error::ServiceError;

pub fn get_overview(recent_limit: usize) -> Result<InventoryOverview, ServiceError> {
    Ok(build_overview(get_store()?, recent_limit))
}

pub fn build_overview(store: &CatalogStore, recent_limit: usize) -> InventoryOverview {
    let summary = evaluate(&store.products, &FilterSpec::new()).summary;

    let mut stock_by_category: BTreeMap<String, u64> = BTreeMap::new();
    for p in &store.products {
        *stock_by_category.entry(p.category.clone()).or_insert(0) += u64::from(p.quantity);
    }

    let mut restock: Vec<RestockItem> = store
        .products
        .iter()
        .filter(|p| p.status().needs_restock())
        .map(RestockItem::from)
        .collect();
    restock.sort_by_key(|r| r.stock);

    let mut recent: Vec<_> = store.movements.iter().collect();
    recent.sort_by_key(|m| std::cmp::Reverse(m.occurred_at()));
    let recent_movements = recent
        .into_iter()
        .take(recent_limit)
        .map(RecentMovement::from)
        .collect();

    let sales_date = store.sales.iter().map(|s| s.date).max();
    let today = sales_date.map(|day| sales_between(&store.sales, day, day));
    let month = sales_date
        .and_then(|anchor| ReportPeriod::Month.range(anchor))
        .map(|(from, to)| sales_between(&store.sales, from, to));

    InventoryOverview {
        total_products: summary.count,
        total_stock: summary.sum("quantity") as u64,
        total_value: summary.sum("stockValue"),
        in_stock: summary.bucket("status", StockStatus::InStock.key()),
        low_stock: summary.bucket("status", StockStatus::LowStock.key()),
        out_of_stock: summary.bucket("status", StockStatus::OutOfStock.key()),
        sales_date,
        today_sales: today.as_ref().map_or(0, |t| t.sum("units") as u64),
        today_revenue: today.as_ref().map_or(0.0, |t| t.sum("revenue")),
        month_revenue: month.as_ref().map_or(0.0, |m| m.sum("revenue")),
        stock_by_category,
        restock,
        recent_movements,
    }
}

fn sales_between(sales: &[SaleLine], from: NaiveDate, to: NaiveDate) -> AggregateResult {
    let criteria = FilterSpec::new().with_range("date", RangeFilter::between(from, to));
    evaluate(sales, &criteria).summary
}
