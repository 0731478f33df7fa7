use chrono::NaiveDate;
use contracts::dashboards::d400_financial_report::{
    BalanceSheet, CategoryPerformance, FinancialReport, FinancialReportRequest,
    FinancialSummary, SaleLine, StockRotation, TopProduct,
};
use contracts::shared::catalog_filter::{
    evaluate, evaluate_with, round_to, AggregateSpec, FilterSpec, RangeFilter, Record, ALL,
};
use std::collections::BTreeMap;

use crate::shared::data::store::{get_store, CatalogStore};
use crate::shared::error::ServiceError;
use crate::shared::format::{format_money, format_number, format_percent};
use crate::system::settings;

/// Get the financial report for the requested period
pub fn get_financial_report(
    request: &FinancialReportRequest,
    default_top: usize,
) -> Result<FinancialReport, ServiceError> {
    let report = build_report(get_store()?, request, default_top)?;
    let currency = settings::service::get().currency;
    tracing::info!(
        "d400 {}: {} sales, revenue {}, margin {}",
        report.period.code(),
        format_number(report.summary.total_sales),
        format_money(report.summary.total_revenue, currency),
        format_percent(report.summary.profit_margin)
    );
    Ok(report)
}

pub fn build_report(
    store: &CatalogStore,
    request: &FinancialReportRequest,
    default_top: usize,
) -> Result<FinancialReport, ServiceError> {
    let (date_from, date_to) = resolve_range(&store.sales, request);
    if let (Some(from), Some(to)) = (date_from, date_to) {
        if from > to {
            return Err(ServiceError::InvalidRequest(format!(
                "La fecha inicial {} es posterior a la final {}",
                from, to
            )));
        }
    }

    let criteria = build_criteria(date_from, date_to, request.category.as_deref());
    let outcome = evaluate(&store.sales, &criteria);

    let revenue = outcome.summary.sum("revenue");
    let count = outcome.summary.count;
    let summary = FinancialSummary {
        total_revenue: revenue,
        total_cost: outcome.summary.sum("cost"),
        gross_profit: outcome.summary.sum("profit"),
        profit_margin: outcome.summary.margin,
        total_sales: count,
        average_ticket: (count > 0).then(|| round_to(revenue / count as f64, 2)),
    };

    let categories = category_performance(&store.sales, &criteria, &outcome.summary.buckets);
    let top_products = top_products(&outcome.matches, request.top_limit.unwrap_or(default_top));
    let period_days = period_days(date_from, date_to, &outcome.matches);
    let rotation = stock_rotation(store, &outcome.matches, period_days, request.category.as_deref());

    Ok(FinancialReport {
        period: request.period,
        period_label: request.period.label().to_string(),
        date_from,
        date_to,
        summary,
        categories,
        top_products,
        rotation,
        balance_sheet: BalanceSheet::new(store.assets.clone(), store.liabilities.clone()),
        applied: criteria.describe(SaleLine::schema()),
    })
}

/// Any explicit bound makes a custom range, missing sides stay open;
/// otherwise the preset is anchored at the latest sale
fn resolve_range(
    sales: &[SaleLine],
    request: &FinancialReportRequest,
) -> (Option<NaiveDate>, Option<NaiveDate>) {
    if request.date_from.is_some() || request.date_to.is_some() {
        return (request.date_from, request.date_to);
    }
    sales
        .iter()
        .map(|s| s.date)
        .max()
        .and_then(|anchor| request.period.range(anchor))
        .map_or((None, None), |(from, to)| (Some(from), Some(to)))
}

fn build_criteria(from: Option<NaiveDate>, to: Option<NaiveDate>, category: Option<&str>) -> FilterSpec {
    let mut criteria = FilterSpec::new();
    if from.is_some() || to.is_some() {
        criteria = criteria.with_range(
            "date",
            RangeFilter {
                from: from.map(Into::into),
                to: to.map(Into::into),
            },
        );
    }
    criteria.with_equality("category", category.unwrap_or(ALL))
}

/// One engine pass per category present in the matches, by revenue
fn category_performance(
    sales: &[SaleLine],
    criteria: &FilterSpec,
    buckets: &BTreeMap<String, BTreeMap<String, usize>>,
) -> Vec<CategoryPerformance> {
    let aggregates = AggregateSpec::default()
        .with_sums(&["units", "revenue", "profit"])
        .with_margin("revenue", "cost");

    let mut rows: Vec<CategoryPerformance> = buckets
        .get("category")
        .map(|counts| counts.keys().cloned().collect::<Vec<_>>())
        .unwrap_or_default()
        .into_iter()
        .map(|category| {
            let narrowed = criteria.clone().with_equality("category", category.clone());
            let summary = evaluate_with(sales, &narrowed, &aggregates).summary;
            CategoryPerformance {
                category,
                sales: summary.sum("units") as u64,
                revenue: summary.sum("revenue"),
                profit: summary.sum("profit"),
                margin: summary.margin,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    rows
}

fn top_products(matches: &[&SaleLine], limit: usize) -> Vec<TopProduct> {
    let mut by_code: BTreeMap<&str, TopProduct> = BTreeMap::new();
    for line in matches {
        let entry = by_code
            .entry(line.product_code.as_str())
            .or_insert_with(|| TopProduct {
                code: line.product_code.clone(),
                name: line.product_name.clone(),
                sales: 0,
                revenue: 0.0,
                profit: 0.0,
            });
        entry.sales += u64::from(line.units);
        entry.revenue += line.revenue();
        entry.profit += line.profit();
    }

    let mut rows: Vec<TopProduct> = by_code
        .into_values()
        .map(|mut p| {
            p.revenue = round_to(p.revenue, 2);
            p.profit = round_to(p.profit, 2);
            p
        })
        .collect();
    // stable sort keeps code order among equal unit counts
    rows.sort_by(|a, b| b.sales.cmp(&a.sales));
    rows.truncate(limit);
    rows
}

/// Length of the report window in days
///
/// Open bounds fall back to the first/last matching sale.
fn period_days(from: Option<NaiveDate>, to: Option<NaiveDate>, matches: &[&SaleLine]) -> Option<i64> {
    let from = from.or_else(|| matches.iter().map(|s| s.date).min())?;
    let to = to.or_else(|| matches.iter().map(|s| s.date).max())?;
    Some((to - from).num_days() + 1)
}

fn stock_rotation(
    store: &CatalogStore,
    matches: &[&SaleLine],
    period_days: Option<i64>,
    category: Option<&str>,
) -> Vec<StockRotation> {
    let mut units_by_code: BTreeMap<&str, u64> = BTreeMap::new();
    for line in matches {
        *units_by_code.entry(line.product_code.as_str()).or_insert(0) += u64::from(line.units);
    }

    store
        .products
        .iter()
        .filter(|p| category.map_or(true, |c| c == ALL || p.category == c))
        .map(|p| {
            let sold = units_by_code.get(p.code.as_str()).copied().unwrap_or(0);
            let days = match period_days {
                Some(window) if sold > 0 && window > 0 => {
                    let per_day = sold as f64 / window as f64;
                    Some((f64::from(p.quantity) / per_day).round() as u32)
                }
                _ => None,
            };
            StockRotation {
                code: p.code.clone(),
                product: p.name.clone(),
                rotation: p.rotation,
                days,
                status: p.rotation.status_label().to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::seed;
    use contracts::dashboards::d400_financial_report::ReportPeriod;

    fn store() -> CatalogStore {
        seed::load(true).unwrap()
    }

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_month_report_summary() {
        let report = build_report(&store(), &FinancialReportRequest::default(), 5).unwrap();
        assert_eq!(report.date_from, Some(d("2024-01-01")));
        assert_eq!(report.date_to, Some(d("2024-01-31")));
        assert_eq!(report.summary.total_sales, 10);
        assert_eq!(report.summary.total_revenue, 1879.55);
        assert_eq!(report.summary.total_cost, 890.0);
        assert_eq!(report.summary.gross_profit, 989.55);
        assert_eq!(report.summary.profit_margin, Some(52.6));
        let ticket = report.summary.average_ticket.unwrap();
        assert!((ticket - 187.96).abs() < 0.011, "{ticket}");
    }

    #[test]
    fn test_categories_sorted_by_revenue() {
        let report = build_report(&store(), &FinancialReportRequest::default(), 5).unwrap();
        let order: Vec<&str> = report.categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(order, vec!["Calzado", "Pantalones", "Camisetas", "Accesorios", "Vestidos"]);
        let camisetas = &report.categories[2];
        assert_eq!(camisetas.sales, 12);
        assert_eq!(camisetas.revenue, 359.88);
        assert_eq!(camisetas.profit, 179.88);
        assert_eq!(camisetas.margin, Some(50.0));
    }

    #[test]
    fn test_top_products_by_units() {
        let report = build_report(&store(), &FinancialReportRequest::default(), 3).unwrap();
        let top: Vec<(&str, u64)> = report
            .top_products
            .iter()
            .map(|p| (p.code.as_str(), p.sales))
            .collect();
        assert_eq!(top, vec![("ACC005", 15), ("CAM001", 12), ("PAN002", 8)]);
        assert_eq!(report.top_products[0].revenue, 299.85);
    }

    #[test]
    fn test_custom_period_without_bounds_covers_everything() {
        let request = FinancialReportRequest {
            period: ReportPeriod::Custom,
            ..Default::default()
        };
        let report = build_report(&store(), &request, 5).unwrap();
        assert_eq!(report.summary.total_sales, 12);
        assert_eq!(report.summary.total_revenue, 2119.46);
        assert!(report.applied.is_empty());
    }

    #[test]
    fn test_category_restriction() {
        let request = FinancialReportRequest {
            category: Some("Camisetas".into()),
            ..Default::default()
        };
        let report = build_report(&store(), &request, 5).unwrap();
        assert_eq!(report.summary.total_revenue, 359.88);
        assert_eq!(report.categories.len(), 1);
        assert_eq!(report.rotation.len(), 1);
        assert_eq!(report.rotation[0].code, "CAM001");
        // 45 units at 12 units per 31 days
        assert_eq!(report.rotation[0].days, Some(116));
        assert_eq!(report.rotation[0].status, "Excelente");
    }

    #[test]
    fn test_rotation_days() {
        let report = build_report(&store(), &FinancialReportRequest::default(), 5).unwrap();
        let days: Vec<(&str, Option<u32>)> = report
            .rotation
            .iter()
            .map(|r| (r.code.as_str(), r.days))
            .collect();
        assert_eq!(days[2], ("VES003", Some(0)));
        assert_eq!(report.rotation.len(), 5);
    }

    #[test]
    fn test_inverted_dates_are_rejected() {
        let request = FinancialReportRequest {
            period: ReportPeriod::Custom,
            date_from: Some(d("2024-01-15")),
            date_to: Some(d("2024-01-14")),
            ..Default::default()
        };
        let err = build_report(&store(), &request, 5).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidRequest(_)));
    }

    #[test]
    fn test_only_date_to_leaves_start_open() {
        let request = FinancialReportRequest {
            date_to: Some(d("2023-12-31")),
            ..Default::default()
        };
        let report = build_report(&store(), &request, 5).unwrap();
        assert_eq!(report.date_from, None);
        assert_eq!(report.date_to, Some(d("2023-12-31")));
        assert_eq!(report.summary.total_sales, 2);
        assert_eq!(report.summary.total_revenue, 239.91);
    }

    #[test]
    fn test_only_date_from_leaves_end_open() {
        let request = FinancialReportRequest {
            date_from: Some(d("2024-01-10")),
            ..Default::default()
        };
        let report = build_report(&store(), &request, 5).unwrap();
        assert_eq!(report.date_from, Some(d("2024-01-10")));
        assert_eq!(report.date_to, None);
        assert_eq!(report.summary.total_sales, 6);
        assert_eq!(report.summary.total_revenue, 1159.74);
    }

    #[test]
    fn test_balance_sheet_in_report() {
        let report = build_report(&store(), &FinancialReportRequest::default(), 5).unwrap();
        assert_eq!(report.balance_sheet.equity, 106200.0);
    }
}
