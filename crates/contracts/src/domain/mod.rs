pub mod a001_product;
pub mod a002_stock_movement;
pub mod common;
