pub mod a001_product;
pub mod a002_stock_movement;
pub mod d400_financial_report;
pub mod d401_inventory_overview;
pub mod usecases;
