pub mod aggregate;
pub mod audit;
pub mod movement_type;

pub use aggregate::{Movement, MovementId};
pub use audit::{audit_balances, BalanceAudit, BalanceDiscrepancy, DiscrepancyKind};
pub use movement_type::MovementType;
