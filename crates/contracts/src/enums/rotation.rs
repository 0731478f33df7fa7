use serde::{Deserialize, Serialize};

/// Stock turnover class of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    Alta,
    Media,
    Baja,
}

impl Rotation {
    pub fn code(&self) -> &'static str {
        match self {
            Rotation::Alta => "Alta",
            Rotation::Media => "Media",
            Rotation::Baja => "Baja",
        }
    }

    /// Status label shown next to the rotation badge in reports
    pub fn status_label(&self) -> &'static str {
        match self {
            Rotation::Alta => "Excelente",
            Rotation::Media => "Buena",
            Rotation::Baja => "Lenta",
        }
    }

    pub fn all() -> Vec<Rotation> {
        vec![Rotation::Alta, Rotation::Media, Rotation::Baja]
    }

    /// Unknown codes fall back to `Media`, matching the badge fallback
    pub fn from_code(code: &str) -> Self {
        match code {
            "Alta" => Rotation::Alta,
            "Baja" => Rotation::Baja,
            _ => Rotation::Media,
        }
    }
}

pub const ROTATION_CODES: &[&str] = &["Alta", "Media", "Baja"];
