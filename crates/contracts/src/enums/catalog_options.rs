//! Fixed option sets offered by the catalog select boxes

use serde::{Deserialize, Serialize};

use super::rotation::ROTATION_CODES;
use crate::domain::a001_product::StockStatus;

pub const CATEGORIES: &[&str] = &[
    "Camisetas",
    "Pantalones",
    "Vestidos",
    "Abrigos",
    "Calzado",
    "Accesorios",
    "Bebés",
];

pub const AGE_GROUPS: &[&str] = &[
    "Bebés (0-2)",
    "Niños (3-12)",
    "Adolescentes (13-17)",
    "Adultos (18+)",
];

pub const SEASONS: &[&str] = &["Primavera", "Verano", "Otoño", "Invierno", "Todo el año"];

pub const SIZES: &[&str] = &[
    "XS", "S", "M", "L", "XL", "XXL", "28", "30", "32", "34", "36", "38", "40", "42", "UNI",
];

pub const COLORS: &[&str] = &[
    "Negro",
    "Blanco",
    "Azul",
    "Rojo",
    "Verde",
    "Amarillo",
    "Gris",
    "Rosa",
    "Morado",
    "Naranja",
    "Multicolor",
];

/// Whether `value` belongs to `options`
pub fn is_valid_option(options: &[&str], value: &str) -> bool {
    options.contains(&value)
}

/// Key/label pair for select boxes whose value differs from the caption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledOption {
    pub key: String,
    pub label: String,
}

/// Every option set of the product filters, as served to the UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogOptions {
    pub categories: Vec<String>,
    pub age_groups: Vec<String>,
    pub seasons: Vec<String>,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub rotations: Vec<String>,
    pub statuses: Vec<LabeledOption>,
}

impl CatalogOptions {
    pub fn current() -> Self {
        fn owned(options: &[&str]) -> Vec<String> {
            options.iter().map(|o| o.to_string()).collect()
        }
        Self {
            categories: owned(CATEGORIES),
            age_groups: owned(AGE_GROUPS),
            seasons: owned(SEASONS),
            sizes: owned(SIZES),
            colors: owned(COLORS),
            rotations: owned(ROTATION_CODES),
            statuses: StockStatus::all()
                .iter()
                .map(|s| LabeledOption {
                    key: s.key().to_string(),
                    label: s.label().to_string(),
                })
                .collect(),
        }
    }
}
