use serde::{Deserialize, Serialize};

use crate::domain::a001_product::ProductId;
use crate::shared::catalog_filter::FilterSpec;

/// Request to build a QR payload for a product selection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrBatchRequest {
    /// Filter of the product list the selection was made on
    #[serde(default)]
    pub filter: FilterSpec,

    /// Checked products; ids outside the filtered set are ignored
    #[serde(default)]
    pub selected_ids: Vec<ProductId>,

    #[serde(default = "default_true")]
    pub include_price: bool,

    #[serde(default)]
    pub include_stock: bool,

    #[serde(default)]
    pub size: QrSize,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QrSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl QrSize {
    /// Side of the square image in pixels
    pub fn pixels(&self) -> u32 {
        match self {
            QrSize::Small => 200,
            QrSize::Medium => 400,
            QrSize::Large => 600,
        }
    }

    pub fn label(&self) -> String {
        let name = match self {
            QrSize::Small => "Pequeño",
            QrSize::Medium => "Mediano",
            QrSize::Large => "Grande",
        };
        format!("{} ({}x{})", name, self.pixels(), self.pixels())
    }
}
