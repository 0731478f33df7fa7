use contracts::domain::a002_stock_movement::Movement;

use crate::shared::error::ServiceError;

const HEADERS: [&str; 11] = [
    "ID", "Fecha", "Hora", "Código", "Producto", "Tipo", "Cantidad", "Motivo", "Notas",
    "Usuario", "Saldo",
];

/// Movements as CSV, one row per movement in the given order
pub fn movements_to_csv(movements: &[&Movement]) -> Result<String, ServiceError> {
    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(HEADERS)?;

    for m in movements {
        writer.write_record([
            m.id.value().to_string(),
            m.date.format("%Y-%m-%d").to_string(),
            m.time.format("%H:%M:%S").to_string(),
            m.product_code.clone(),
            m.product_name.clone(),
            m.movement_type.code().to_string(),
            m.signed_delta().to_string(),
            m.reason.clone(),
            m.notes.clone().unwrap_or_default(),
            m.user.clone(),
            m.balance_after.to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ServiceError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ServiceError::Export(e.to_string()))
}
