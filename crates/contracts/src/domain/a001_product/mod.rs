pub mod aggregate;
pub mod status;

pub use aggregate::{Product, ProductId};
pub use status::StockStatus;
