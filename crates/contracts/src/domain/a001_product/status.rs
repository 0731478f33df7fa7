use serde::{Deserialize, Serialize};

/// Stock status bucket of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

/// Wire keys of [`StockStatus`], in declaration order
pub const STOCK_STATUS_KEYS: &[&str] = &["inStock", "lowStock", "outOfStock"];

impl StockStatus {
    /// Status from on-hand quantity and the reorder threshold
    ///
    /// `0` is out of stock, anything up to and including `min_stock` is low.
    pub fn derive(quantity: u32, min_stock: u32) -> Self {
        if quantity == 0 {
            StockStatus::OutOfStock
        } else if quantity <= min_stock {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// Key used in filter maps and bucket counts
    pub fn key(&self) -> &'static str {
        match self {
            StockStatus::InStock => "inStock",
            StockStatus::LowStock => "lowStock",
            StockStatus::OutOfStock => "outOfStock",
        }
    }

    /// Badge label
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "En Stock",
            StockStatus::LowStock => "Stock Bajo",
            StockStatus::OutOfStock => "Sin Stock",
        }
    }

    /// Whether the product should appear in restock lists
    pub fn needs_restock(&self) -> bool {
        !matches!(self, StockStatus::InStock)
    }

    pub fn all() -> &'static [StockStatus] {
        &[
            StockStatus::InStock,
            StockStatus::LowStock,
            StockStatus::OutOfStock,
        ]
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|s| s.key() == key)
    }
}
