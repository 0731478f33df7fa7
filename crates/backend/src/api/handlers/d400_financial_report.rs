use axum::Json;
use contracts::dashboards::d400_financial_report::{FinancialReport, FinancialReportRequest};

use crate::dashboards::d400_financial_report;
use crate::shared::{config, error::to_status};

/// POST /api/d400/financial-report
pub async fn get_financial_report(
    Json(request): Json<FinancialReportRequest>,
) -> Result<Json<FinancialReport>, axum::http::StatusCode> {
    d400_financial_report::service::get_financial_report(&request, config::catalog().top_products)
        .map(Json)
        .map_err(to_status)
}
