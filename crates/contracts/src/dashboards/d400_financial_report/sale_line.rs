use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::catalog_options::CATEGORIES;
use crate::shared::catalog_filter::{
    AggregateSpec, FieldDef, FieldKind, FieldValue, Record, RecordSchema,
};

/// One sold product line, the input of the financial report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleLine {
    pub date: NaiveDate,
    pub product_code: String,
    pub product_name: String,
    pub category: String,
    pub units: u32,
    pub unit_price: f64,
    pub unit_cost: f64,
}

impl SaleLine {
    pub fn revenue(&self) -> f64 {
        f64::from(self.units) * self.unit_price
    }

    pub fn cost(&self) -> f64 {
        f64::from(self.units) * self.unit_cost
    }

    pub fn profit(&self) -> f64 {
        self.revenue() - self.cost()
    }
}

static SALE_FIELDS: &[FieldDef] = &[
    FieldDef::new("date", "Fecha", FieldKind::Date),
    FieldDef::new("productCode", "Código", FieldKind::Text),
    FieldDef::new("productName", "Producto", FieldKind::Text),
    FieldDef::new("category", "Categoría", FieldKind::Enum(CATEGORIES)),
    FieldDef::new("units", "Unidades", FieldKind::Integer),
    FieldDef::new("unitPrice", "Precio", FieldKind::Number),
    FieldDef::new("unitCost", "Costo", FieldKind::Number),
    FieldDef::new("revenue", "Ingresos", FieldKind::Number),
    FieldDef::new("cost", "Costos", FieldKind::Number),
    FieldDef::new("profit", "Ganancia", FieldKind::Number),
];

static SALE_SCHEMA: RecordSchema = RecordSchema {
    id: "d400_sale_line",
    name: "Ventas",
    fields: SALE_FIELDS,
    search_fields: &["productName", "productCode", "category"],
};

impl Record for SaleLine {
    fn schema() -> &'static RecordSchema {
        &SALE_SCHEMA
    }

    fn field(&self, field_id: &str) -> Option<FieldValue<'_>> {
        let value: FieldValue<'_> = match field_id {
            "date" => self.date.into(),
            "productCode" => self.product_code.as_str().into(),
            "productName" => self.product_name.as_str().into(),
            "category" => self.category.as_str().into(),
            "units" => self.units.into(),
            "unitPrice" => self.unit_price.into(),
            "unitCost" => self.unit_cost.into(),
            "revenue" => self.revenue().into(),
            "cost" => self.cost().into(),
            "profit" => self.profit().into(),
            _ => return None,
        };
        Some(value)
    }

    fn default_aggregates() -> AggregateSpec {
        AggregateSpec::buckets(&["category"])
            .with_sums(&["units", "revenue", "cost", "profit"])
            .with_margin("revenue", "cost")
    }
}
