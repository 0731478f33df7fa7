pub mod dto;
pub mod period;
pub mod sale_line;

pub use dto::{
    BalanceLine, BalanceSheet, CategoryPerformance, FinancialReport, FinancialReportRequest,
    FinancialSummary, StockRotation, TopProduct,
};
pub use period::ReportPeriod;
pub use sale_line::SaleLine;
