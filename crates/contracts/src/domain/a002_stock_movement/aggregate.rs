use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::movement_type::{MovementType, MOVEMENT_TYPE_CODES};
use crate::domain::common::AggregateRoot;
use crate::shared::catalog_filter::{
    AggregateSpec, FieldDef, FieldKind, FieldValue, Record, RecordSchema,
};

crate::numeric_aggregate_id!(MovementId);

/// One stock entry, exit or adjustment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    pub id: MovementId,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub product_code: String,
    pub product_name: String,
    #[serde(rename = "type")]
    pub movement_type: MovementType,
    /// Magnitude for Entrada/Salida, signed for Ajuste
    pub quantity: i64,
    pub reason: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub user: String,
    /// Balance recorded by whoever entered the movement (advisory)
    pub balance_after: i64,
}

impl Movement {
    /// Stock change this movement applies
    pub fn signed_delta(&self) -> i64 {
        self.movement_type.signed(self.quantity)
    }

    /// Balance implied by the recorded one, before this movement
    pub fn balance_before(&self) -> i64 {
        self.balance_after - self.signed_delta()
    }

    /// Chronological sort key
    pub fn occurred_at(&self) -> (NaiveDate, NaiveTime, MovementId) {
        (self.date, self.time, self.id)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.product_code.trim().is_empty() {
            return Err("El código de producto no puede estar vacío".into());
        }
        if self.quantity == 0 {
            return Err("La cantidad no puede ser cero".into());
        }
        if self.movement_type != MovementType::Ajuste && self.quantity < 0 {
            return Err(format!(
                "La cantidad de una {} debe ser positiva",
                self.movement_type.code()
            ));
        }
        if !self.movement_type.reasons().contains(&self.reason.as_str()) {
            return Err(format!(
                "Motivo \"{}\" no válido para {}",
                self.reason,
                self.movement_type.code()
            ));
        }
        if self.user.trim().is_empty() {
            return Err("El usuario no puede estar vacío".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Movement {
    type Id = MovementId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn code(&self) -> &str {
        &self.product_code
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "stock_movement"
    }

    fn element_name() -> &'static str {
        "Movimiento"
    }
}

static MOVEMENT_FIELDS: &[FieldDef] = &[
    FieldDef::new("id", "ID", FieldKind::Integer),
    FieldDef::new("date", "Fecha", FieldKind::Date),
    FieldDef::new("productCode", "Código", FieldKind::Text),
    FieldDef::new("productName", "Producto", FieldKind::Text),
    FieldDef::new("type", "Tipo", FieldKind::Enum(MOVEMENT_TYPE_CODES)),
    FieldDef::new("quantity", "Cantidad", FieldKind::Integer),
    FieldDef::new("signedQuantity", "Variación", FieldKind::Integer),
    FieldDef::new("reason", "Motivo", FieldKind::Text),
    FieldDef::new("notes", "Notas", FieldKind::Text),
    FieldDef::new("user", "Usuario", FieldKind::Text),
    FieldDef::new("balanceAfter", "Saldo", FieldKind::Integer),
];

static MOVEMENT_SCHEMA: RecordSchema = RecordSchema {
    id: "a002_stock_movement",
    name: "Movimientos de Stock",
    fields: MOVEMENT_FIELDS,
    search_fields: &["productName", "productCode", "user"],
};

impl Record for Movement {
    fn schema() -> &'static RecordSchema {
        &MOVEMENT_SCHEMA
    }

    fn field(&self, field_id: &str) -> Option<FieldValue<'_>> {
        let value: FieldValue<'_> = match field_id {
            "id" => self.id.0.into(),
            "date" => self.date.into(),
            "productCode" => self.product_code.as_str().into(),
            "productName" => self.product_name.as_str().into(),
            "type" => self.movement_type.code().into(),
            "quantity" => self.quantity.into(),
            "signedQuantity" => self.signed_delta().into(),
            "reason" => self.reason.as_str().into(),
            "notes" => return self.notes.as_deref().map(FieldValue::Text),
            "user" => self.user.as_str().into(),
            "balanceAfter" => self.balance_after.into(),
            _ => return None,
        };
        Some(value)
    }

    fn default_aggregates() -> AggregateSpec {
        AggregateSpec::buckets(&["type", "reason"]).with_sums(&["quantity", "signedQuantity"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog_filter::{evaluate, filter, FilterSpec, RangeFilter};

    fn movement(id: u32, date: &str, code: &str, movement_type: MovementType, quantity: i64, reason: &str, user: &str) -> Movement {
        Movement {
            id: MovementId(id),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            product_code: code.into(),
            product_name: format!("Producto {code}"),
            movement_type,
            quantity,
            reason: reason.into(),
            notes: None,
            user: user.into(),
            balance_after: 10,
        }
    }

    fn sample() -> Vec<Movement> {
        vec![
            movement(1, "2024-01-16", "CAM001", MovementType::Entrada, 50, "Compra", "Admin"),
            movement(2, "2024-01-16", "PAN002", MovementType::Salida, 12, "Venta", "Vendedor1"),
            movement(3, "2024-01-15", "VES003", MovementType::Salida, 2, "Dañado", "Admin"),
            movement(4, "2024-01-14", "ACC005", MovementType::Ajuste, -5, "Ajuste", "Admin"),
        ]
    }

    #[test]
    fn test_type_and_date_range() {
        let data = sample();
        let spec = FilterSpec::new()
            .with_equality("type", "Salida")
            .with_range("date", RangeFilter::between("2024-01-15", "2024-01-16"));
        let ids: Vec<u32> = filter(&data, &spec).iter().map(|m| m.id.0).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_search_covers_user() {
        let data = sample();
        let ids: Vec<u32> = filter(&data, &FilterSpec::new().with_text("VENDEDOR"))
            .iter()
            .map(|m| m.id.0)
            .collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_notes_filter_excludes_records_without_notes() {
        let mut data = sample();
        data[0].notes = Some("Reposición stock temporada".into());
        let spec = FilterSpec::new().with_range("notes", RangeFilter::at_least("A"));
        assert_eq!(filter(&data, &spec).len(), 1);
    }

    #[test]
    fn test_default_summary_counts_types() {
        let data = sample();
        let summary = evaluate(&data, &FilterSpec::new()).summary;
        assert_eq!(summary.bucket("type", "Entrada"), 1);
        assert_eq!(summary.bucket("type", "Salida"), 2);
        assert_eq!(summary.bucket("type", "Ajuste"), 1);
        assert_eq!(summary.sum("signedQuantity"), 50.0 - 12.0 - 2.0 - 5.0);
    }

    #[test]
    fn test_validate() {
        let data = sample();
        assert!(data.iter().all(|m| m.validate().is_ok()));

        let mut bad = data[1].clone();
        bad.reason = "Compra".into();
        assert!(bad.validate().is_err());

        let mut bad = data[0].clone();
        bad.quantity = -1;
        assert!(bad.validate().is_err());

        let mut bad = data[3].clone();
        bad.quantity = 0;
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_balance_before() {
        let m = movement(1, "2024-01-16", "CAM001", MovementType::Entrada, 50, "Compra", "Admin");
        assert_eq!(m.balance_before(), 10 - 50);
    }

    #[test]
    fn test_wire_format() {
        let json = r#"{
            "id": 1, "date": "2024-01-16", "time": "14:30:25", "productCode": "CAM001",
            "productName": "Camiseta Basic Blanca", "type": "Entrada", "quantity": 50,
            "reason": "Compra", "notes": "Reposición stock temporada", "user": "Admin",
            "balanceAfter": 95
        }"#;
        let m: Movement = serde_json::from_str(json).unwrap();
        assert_eq!(m.movement_type, MovementType::Entrada);
        assert_eq!(m.time, NaiveTime::from_hms_opt(14, 30, 25).unwrap());
        assert_eq!(m.balance_before(), 45);
    }
}
