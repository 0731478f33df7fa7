use serde::{Deserialize, Serialize};

/// Direction of a stock movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MovementType {
    /// Goods in
    Entrada,
    /// Goods out
    Salida,
    /// Correction in either direction
    Ajuste,
}

pub const MOVEMENT_TYPE_CODES: &[&str] = &["Entrada", "Salida", "Ajuste"];

impl MovementType {
    pub fn code(&self) -> &'static str {
        match self {
            MovementType::Entrada => "Entrada",
            MovementType::Salida => "Salida",
            MovementType::Ajuste => "Ajuste",
        }
    }

    /// Reasons that may be recorded for this movement type
    pub fn reasons(&self) -> &'static [&'static str] {
        match self {
            MovementType::Entrada => &["Compra", "Devolución", "Transferencia", "Ajuste"],
            MovementType::Salida => &["Venta", "Dañado", "Vencido", "Transferencia", "Ajuste"],
            MovementType::Ajuste => &["Ajuste", "Corrección", "Inventario físico"],
        }
    }

    /// Signed stock change for a recorded quantity
    ///
    /// Entrada adds and Salida removes the magnitude; Ajuste keeps its sign.
    pub fn signed(&self, quantity: i64) -> i64 {
        match self {
            MovementType::Entrada => quantity.abs(),
            MovementType::Salida => -quantity.abs(),
            MovementType::Ajuste => quantity,
        }
    }

    pub fn all() -> Vec<MovementType> {
        vec![
            MovementType::Entrada,
            MovementType::Salida,
            MovementType::Ajuste,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Entrada" => Some(MovementType::Entrada),
            "Salida" => Some(MovementType::Salida),
            "Ajuste" => Some(MovementType::Ajuste),
            _ => None,
        }
    }
}
