use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::period::ReportPeriod;
use crate::enums::Rotation;

/// Request for the financial report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialReportRequest {
    pub period: ReportPeriod,
    /// Explicit lower bound, wins over the preset
    pub date_from: Option<NaiveDate>,
    /// Explicit upper bound, wins over the preset
    pub date_to: Option<NaiveDate>,
    /// Category restriction ("all" or absent for every category)
    pub category: Option<String>,
    /// Length of the top products table
    pub top_limit: Option<usize>,
}

/// Headline figures of the period
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub total_revenue: f64,
    pub total_cost: f64,
    pub gross_profit: f64,
    /// Percent, one decimal; `None` without revenue
    pub profit_margin: Option<f64>,
    /// Number of sale lines
    pub total_sales: usize,
    pub average_ticket: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPerformance {
    pub category: String,
    /// Units sold
    pub sales: u64,
    pub revenue: f64,
    pub profit: f64,
    pub margin: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopProduct {
    pub code: String,
    pub name: String,
    /// Units sold
    pub sales: u64,
    pub revenue: f64,
    pub profit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRotation {
    pub code: String,
    pub product: String,
    pub rotation: Rotation,
    /// Days the current stock lasts at the period's sales pace
    pub days: Option<u32>,
    /// "Excelente" / "Buena" / "Lenta"
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceLine {
    pub item: String,
    pub value: f64,
    /// "Corriente", "Fijo", "Largo Plazo"
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheet {
    pub assets: Vec<BalanceLine>,
    pub liabilities: Vec<BalanceLine>,
    pub total_assets: f64,
    pub total_liabilities: f64,
    /// `total_assets - total_liabilities`
    pub equity: f64,
}

impl BalanceSheet {
    pub fn new(assets: Vec<BalanceLine>, liabilities: Vec<BalanceLine>) -> Self {
        let total_assets: f64 = assets.iter().map(|a| a.value).sum();
        let total_liabilities: f64 = liabilities.iter().map(|l| l.value).sum();
        Self {
            assets,
            liabilities,
            total_assets,
            total_liabilities,
            equity: total_assets - total_liabilities,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialReport {
    pub period: ReportPeriod,
    pub period_label: String,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub summary: FinancialSummary,
    /// Sorted by revenue, highest first
    pub categories: Vec<CategoryPerformance>,
    /// Sorted by units sold, highest first
    pub top_products: Vec<TopProduct>,
    pub rotation: Vec<StockRotation>,
    pub balance_sheet: BalanceSheet,
    /// Chips of the filters the report was computed with
    pub applied: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(item: &str, value: f64, kind: &str) -> BalanceLine {
        BalanceLine {
            item: item.into(),
            value,
            kind: kind.into(),
        }
    }

    #[test]
    fn test_balance_sheet_equity() {
        let sheet = BalanceSheet::new(
            vec![
                line("Inventario Total", 28400.0, "Corriente"),
                line("Efectivo", 15200.0, "Corriente"),
                line("Cuentas por Cobrar", 3200.0, "Corriente"),
                line("Equipos", 12000.0, "Fijo"),
                line("Local Comercial", 85000.0, "Fijo"),
            ],
            vec![
                line("Cuentas por Pagar", 8400.0, "Corriente"),
                line("Préstamo Bancario", 25000.0, "Largo Plazo"),
                line("Salarios por Pagar", 4200.0, "Corriente"),
            ],
        );
        assert_eq!(sheet.total_assets, 143800.0);
        assert_eq!(sheet.total_liabilities, 37600.0);
        assert_eq!(sheet.equity, 106200.0);
    }

    #[test]
    fn test_request_defaults() {
        let request: FinancialReportRequest = serde_json::from_str(r#"{"dateFrom": "2024-01-01"}"#).unwrap();
        assert_eq!(request.period, ReportPeriod::Month);
        assert_eq!(request.date_from, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(request.date_to, None);
        assert_eq!(request.category, None);
    }

    #[test]
    fn test_balance_line_wire_name() {
        let json = serde_json::to_value(line("Equipos", 12000.0, "Fijo")).unwrap();
        assert_eq!(json["type"], "Fijo");
    }
}
