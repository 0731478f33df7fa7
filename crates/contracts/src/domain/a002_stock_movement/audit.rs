//! Advisory running-balance audit
//!
//! `balance_after` is entered by hand, so it is checked rather than enforced:
//! movements are replayed per product in chronological order and every
//! disagreement is reported. Records are never changed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::aggregate::{Movement, MovementId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiscrepancyKind {
    /// `balance_after` differs from previous balance + signed quantity
    Mismatch,
    /// A balance (recorded or implied) is below zero
    Negative,
    /// Last recorded balance differs from the product's current stock
    ClosingMismatch,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceDiscrepancy {
    pub movement_id: MovementId,
    pub product_code: String,
    pub kind: DiscrepancyKind,
    pub expected_balance: i64,
    pub recorded_balance: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceAudit {
    /// Movements replayed
    pub checked: usize,
    /// Distinct products seen
    pub products: usize,
    pub discrepancies: Vec<BalanceDiscrepancy>,
}

impl BalanceAudit {
    pub fn is_consistent(&self) -> bool {
        self.discrepancies.is_empty()
    }
}

/// Replay `movements` per product
///
/// `opening` gives the balance before the first movement of a product; when
/// absent it is implied from that movement. `closing` gives the current
/// stock to compare the last movement against; products missing from it are
/// not closing-checked.
pub fn audit_balances(
    movements: &[Movement],
    opening: &BTreeMap<String, i64>,
    closing: &BTreeMap<String, i64>,
) -> BalanceAudit {
    let mut by_product: BTreeMap<&str, Vec<&Movement>> = BTreeMap::new();
    for movement in movements {
        by_product
            .entry(movement.product_code.as_str())
            .or_default()
            .push(movement);
    }

    let mut audit = BalanceAudit {
        checked: movements.len(),
        products: by_product.len(),
        discrepancies: Vec::new(),
    };

    for (code, mut history) in by_product {
        history.sort_by_key(|m| m.occurred_at());

        let Some(first) = history.first() else {
            continue;
        };
        let mut running = opening
            .get(code)
            .copied()
            .unwrap_or_else(|| first.balance_before());

        if running < 0 {
            audit.discrepancies.push(BalanceDiscrepancy {
                movement_id: first.id,
                product_code: code.to_string(),
                kind: DiscrepancyKind::Negative,
                expected_balance: running,
                recorded_balance: first.balance_after,
            });
        }

        for movement in &history {
            let expected = running + movement.signed_delta();
            if expected != movement.balance_after {
                audit.discrepancies.push(BalanceDiscrepancy {
                    movement_id: movement.id,
                    product_code: code.to_string(),
                    kind: DiscrepancyKind::Mismatch,
                    expected_balance: expected,
                    recorded_balance: movement.balance_after,
                });
            }
            if movement.balance_after < 0 {
                audit.discrepancies.push(BalanceDiscrepancy {
                    movement_id: movement.id,
                    product_code: code.to_string(),
                    kind: DiscrepancyKind::Negative,
                    expected_balance: expected,
                    recorded_balance: movement.balance_after,
                });
            }
            // continue from the recorded figure so one bad entry is reported once
            running = movement.balance_after;
        }

        if let (Some(current), Some(last)) = (closing.get(code), history.last()) {
            if *current != last.balance_after {
                audit.discrepancies.push(BalanceDiscrepancy {
                    movement_id: last.id,
                    product_code: code.to_string(),
                    kind: DiscrepancyKind::ClosingMismatch,
                    expected_balance: *current,
                    recorded_balance: last.balance_after,
                });
            }
        }
    }

    audit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_stock_movement::MovementType;
    use chrono::{NaiveDate, NaiveTime};
    use maplit::btreemap;

    fn movement(id: u32, day: u32, hour: u32, code: &str, t: MovementType, quantity: i64, balance_after: i64) -> Movement {
        Movement {
            id: MovementId(id),
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            product_code: code.into(),
            product_name: code.into(),
            movement_type: t,
            quantity,
            reason: "Ajuste".into(),
            notes: None,
            user: "Admin".into(),
            balance_after,
        }
    }

    #[test]
    fn test_consistent_history_passes() {
        // listed newest first, as the movements table shows them
        let history = vec![
            movement(3, 16, 9, "CAM001", MovementType::Ajuste, -2, 53),
            movement(2, 15, 12, "CAM001", MovementType::Salida, 5, 55),
            movement(1, 15, 9, "CAM001", MovementType::Entrada, 50, 60),
        ];
        let audit = audit_balances(
            &history,
            &btreemap! { "CAM001".to_string() => 10 },
            &btreemap! { "CAM001".to_string() => 53 },
        );
        assert!(audit.is_consistent(), "{:?}", audit.discrepancies);
        assert_eq!(audit.checked, 3);
        assert_eq!(audit.products, 1);
    }

    #[test]
    fn test_mismatch_is_reported_once() {
        let history = vec![
            movement(1, 15, 9, "PAN002", MovementType::Entrada, 10, 30),
            movement(2, 15, 10, "PAN002", MovementType::Salida, 12, 20),
            movement(3, 16, 9, "PAN002", MovementType::Salida, 12, 8),
        ];
        let audit = audit_balances(&history, &btreemap! {}, &btreemap! {});
        assert_eq!(
            audit.discrepancies,
            vec![BalanceDiscrepancy {
                movement_id: MovementId(2),
                product_code: "PAN002".into(),
                kind: DiscrepancyKind::Mismatch,
                expected_balance: 18,
                recorded_balance: 20,
            }]
        );
    }

    #[test]
    fn test_implied_negative_opening() {
        let history = vec![movement(1, 14, 9, "VES003", MovementType::Salida, 2, 0)];
        let audit = audit_balances(&history, &btreemap! {}, &btreemap! {});
        assert!(audit.is_consistent());

        let history = vec![movement(1, 14, 9, "VES003", MovementType::Entrada, 30, 25)];
        let audit = audit_balances(&history, &btreemap! {}, &btreemap! {});
        assert_eq!(audit.discrepancies.len(), 1);
        assert_eq!(audit.discrepancies[0].kind, DiscrepancyKind::Negative);
        assert_eq!(audit.discrepancies[0].expected_balance, -5);
    }

    #[test]
    fn test_closing_mismatch() {
        let history = vec![movement(1, 16, 14, "CAM001", MovementType::Entrada, 50, 95)];
        let audit = audit_balances(
            &history,
            &btreemap! {},
            &btreemap! { "CAM001".to_string() => 45, "ZAP004".to_string() => 25 },
        );
        assert_eq!(audit.discrepancies.len(), 1);
        let d = &audit.discrepancies[0];
        assert_eq!(d.kind, DiscrepancyKind::ClosingMismatch);
        assert_eq!((d.expected_balance, d.recorded_balance), (45, 95));
    }

    #[test]
    fn test_audit_does_not_touch_input() {
        let history = vec![
            movement(2, 16, 9, "A", MovementType::Salida, 1, 4),
            movement(1, 15, 9, "A", MovementType::Entrada, 5, 5),
        ];
        let before = history.clone();
        let _ = audit_balances(&history, &btreemap! {}, &btreemap! {});
        assert_eq!(history, before);
    }
}
