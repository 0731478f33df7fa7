pub mod d400_financial_report;
pub mod d401_inventory_overview;
