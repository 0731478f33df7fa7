use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::status::{StockStatus, STOCK_STATUS_KEYS};
use crate::domain::common::AggregateRoot;
use crate::enums::catalog_options::{is_valid_option, AGE_GROUPS, CATEGORIES, COLORS, SEASONS, SIZES};
use crate::enums::rotation::{Rotation, ROTATION_CODES};
use crate::shared::catalog_filter::{
    margin_percent, AggregateSpec, FieldDef, FieldKind, FieldValue, Record, RecordSchema,
};

// ============================================================================
// ID Type
// ============================================================================
crate::numeric_aggregate_id!(ProductId);

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub code: String,
    pub name: String,
    pub category: String,
    pub size: String,
    pub color: String,
    #[serde(rename = "age")]
    pub age_group: String,
    pub season: String,

    // Stock
    pub quantity: u32,
    pub min_stock: u32,
    pub max_stock: u32,

    // Prices
    pub cost: f64,
    pub price: f64,

    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub last_movement: Option<NaiveDate>,
    pub rotation: Rotation,
    /// Offered for sale (QR labels, storefront)
    #[serde(default = "default_true")]
    pub available: bool,
}

fn default_true() -> bool {
    true
}

impl Product {
    /// Status bucket from quantity vs. `min_stock`
    pub fn status(&self) -> StockStatus {
        StockStatus::derive(self.quantity, self.min_stock)
    }

    /// On-hand units valued at cost
    pub fn stock_value(&self) -> f64 {
        f64::from(self.quantity) * self.cost
    }

    /// On-hand units valued at price
    pub fn retail_value(&self) -> f64 {
        f64::from(self.quantity) * self.price
    }

    /// Margin of one unit, percent with one decimal
    pub fn unit_margin(&self) -> Option<f64> {
        margin_percent(self.price, self.cost)
    }

    /// Units missing to reach `max_stock`
    pub fn reorder_quantity(&self) -> u32 {
        self.max_stock.saturating_sub(self.quantity)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.code.trim().is_empty() {
            return Err("El código no puede estar vacío".into());
        }
        if self.name.trim().is_empty() {
            return Err("El nombre no puede estar vacío".into());
        }
        if !is_valid_option(CATEGORIES, &self.category) {
            return Err(format!("Categoría desconocida: {}", self.category));
        }
        if !is_valid_option(SIZES, &self.size) {
            return Err(format!("Talla desconocida: {}", self.size));
        }
        if !is_valid_option(COLORS, &self.color) {
            return Err(format!("Color desconocido: {}", self.color));
        }
        if !is_valid_option(AGE_GROUPS, &self.age_group) {
            return Err(format!("Grupo de edad desconocido: {}", self.age_group));
        }
        if !is_valid_option(SEASONS, &self.season) {
            return Err(format!("Temporada desconocida: {}", self.season));
        }
        if self.min_stock > self.max_stock {
            return Err("El stock mínimo no puede superar el máximo".into());
        }
        if !(self.cost >= 0.0) || !(self.price >= 0.0) {
            return Err("Costo y precio deben ser positivos".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn code(&self) -> &str {
        &self.code
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "product"
    }

    fn element_name() -> &'static str {
        "Producto"
    }
}

// ============================================================================
// Filter schema
// ============================================================================
static PRODUCT_FIELDS: &[FieldDef] = &[
    FieldDef::new("id", "ID", FieldKind::Integer),
    FieldDef::new("code", "Código", FieldKind::Text),
    FieldDef::new("name", "Nombre", FieldKind::Text),
    FieldDef::new("category", "Categoría", FieldKind::Enum(CATEGORIES)),
    FieldDef::new("size", "Talla", FieldKind::Enum(SIZES)),
    FieldDef::new("color", "Color", FieldKind::Enum(COLORS)),
    FieldDef::new("age", "Edad", FieldKind::Enum(AGE_GROUPS)),
    FieldDef::new("season", "Temporada", FieldKind::Enum(SEASONS)),
    FieldDef::new("quantity", "Cantidad", FieldKind::Integer),
    FieldDef::new("minStock", "Stock Mínimo", FieldKind::Integer),
    FieldDef::new("maxStock", "Stock Máximo", FieldKind::Integer),
    FieldDef::new("cost", "Costo", FieldKind::Number),
    FieldDef::new("price", "Precio", FieldKind::Number),
    FieldDef::new("description", "Descripción", FieldKind::Text),
    FieldDef::new("lastMovement", "Último Movimiento", FieldKind::Date),
    FieldDef::new("rotation", "Rotación", FieldKind::Enum(ROTATION_CODES)),
    FieldDef::new("available", "Disponible", FieldKind::Boolean),
    FieldDef::new("status", "Estado", FieldKind::Enum(STOCK_STATUS_KEYS)),
    FieldDef::new("stockValue", "Valor en Stock", FieldKind::Number),
    FieldDef::new("retailValue", "Valor de Venta", FieldKind::Number),
    FieldDef::new("unitMargin", "Margen", FieldKind::Number),
];

static PRODUCT_SCHEMA: RecordSchema = RecordSchema {
    id: "a001_product",
    name: "Productos",
    fields: PRODUCT_FIELDS,
    search_fields: &["name", "code", "category"],
};

impl Record for Product {
    fn schema() -> &'static RecordSchema {
        &PRODUCT_SCHEMA
    }

    fn field(&self, field_id: &str) -> Option<FieldValue<'_>> {
        let value: FieldValue<'_> = match field_id {
            "id" => self.id.0.into(),
            "code" => self.code.as_str().into(),
            "name" => self.name.as_str().into(),
            "category" => self.category.as_str().into(),
            "size" => self.size.as_str().into(),
            "color" => self.color.as_str().into(),
            "age" => self.age_group.as_str().into(),
            "season" => self.season.as_str().into(),
            "quantity" => self.quantity.into(),
            "minStock" => self.min_stock.into(),
            "maxStock" => self.max_stock.into(),
            "cost" => self.cost.into(),
            "price" => self.price.into(),
            "description" => self.description.as_str().into(),
            "lastMovement" => return self.last_movement.map(FieldValue::Date),
            "rotation" => self.rotation.code().into(),
            "available" => self.available.into(),
            "status" => self.status().key().into(),
            "stockValue" => self.stock_value().into(),
            "retailValue" => self.retail_value().into(),
            "unitMargin" => return self.unit_margin().map(FieldValue::Number),
            _ => return None,
        };
        Some(value)
    }

    fn default_aggregates() -> AggregateSpec {
        AggregateSpec::buckets(&["status", "category"])
            .with_sums(&["quantity", "stockValue", "retailValue"])
            .with_margin("retailValue", "stockValue")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog_filter::{evaluate, filter, FilterSpec, RangeFilter, ALL};

    fn product(id: u32, code: &str, name: &str, category: &str, quantity: u32, min_stock: u32) -> Product {
        Product {
            id: ProductId(id),
            code: code.into(),
            name: name.into(),
            category: category.into(),
            size: "M".into(),
            color: "Negro".into(),
            age_group: "Adultos (18+)".into(),
            season: "Todo el año".into(),
            quantity,
            min_stock,
            max_stock: 100,
            cost: 10.0,
            price: 20.0,
            description: String::new(),
            last_movement: None,
            rotation: Rotation::Media,
            available: quantity > 0,
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product(1, "CAM001", "Camiseta Basic Blanca", "Camisetas", 45, 10),
            product(2, "PAN002", "Pantalón Skinny Negro", "Pantalones", 8, 15),
        ]
    }

    #[test]
    fn test_category_filter_scenario() {
        let data = sample();
        let outcome = evaluate(&data, &FilterSpec::new().with_equality("category", "Camisetas"));
        assert_eq!(outcome.matches.len(), 1);
        assert_eq!(outcome.matches[0].code, "CAM001");
        assert_eq!(outcome.summary.count, 1);
        assert_eq!(outcome.summary.total, 2);
    }

    #[test]
    fn test_text_query_scenario() {
        let data = sample();
        let matches = filter(&data, &FilterSpec::new().with_text("pan"));
        let codes: Vec<&str> = matches.iter().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, vec!["PAN002"]);
    }

    #[test]
    fn test_inverted_last_movement_range_is_empty() {
        let mut data = sample();
        for p in &mut data {
            p.last_movement = NaiveDate::from_ymd_opt(2024, 1, 14);
        }
        let spec = FilterSpec::new()
            .with_equality("category", ALL)
            .with_range("lastMovement", RangeFilter::between("2024-01-15", "2024-01-14"));
        assert!(filter(&data, &spec).is_empty());
    }

    #[test]
    fn test_status_is_filterable() {
        let data = sample();
        let low = filter(&data, &FilterSpec::new().with_equality("status", "lowStock"));
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].code, "PAN002");
        assert_eq!(low[0].status(), StockStatus::LowStock);
    }

    #[test]
    fn test_default_summary() {
        let data = sample();
        let summary = evaluate(&data, &FilterSpec::new()).summary;
        assert_eq!(summary.bucket("status", "inStock"), 1);
        assert_eq!(summary.bucket("status", "lowStock"), 1);
        assert_eq!(summary.sum("quantity"), 53.0);
        assert_eq!(summary.sum("stockValue"), 530.0);
        assert_eq!(summary.sum("retailValue"), 1060.0);
        assert_eq!(summary.margin, Some(50.0));
    }

    #[test]
    fn test_validate() {
        let mut p = product(3, "VES003", "Vestido", "Vestidos", 0, 8);
        assert!(p.validate().is_ok());

        p.category = "Sombreros".into();
        assert!(p.validate().unwrap_err().contains("Sombreros"));

        let mut p = product(3, "VES003", "Vestido", "Vestidos", 0, 8);
        p.max_stock = 5;
        assert!(p.validate().is_err());

        let mut p = product(3, " ", "Vestido", "Vestidos", 0, 8);
        assert!(p.validate().is_err());
        p.code = "VES003".into();
        p.price = f64::NAN;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_derived_values() {
        let p = product(1, "CAM001", "Camiseta", "Camisetas", 45, 10);
        assert_eq!(p.stock_value(), 450.0);
        assert_eq!(p.retail_value(), 900.0);
        assert_eq!(p.unit_margin(), Some(50.0));
        assert_eq!(p.reorder_quantity(), 55);
        assert_eq!(Product::full_name(), "a001_product");
    }

    #[test]
    fn test_wire_format() {
        let json = r#"{
            "id": 5, "code": "ACC005", "name": "Gorra Deportiva", "category": "Accesorios",
            "size": "UNI", "color": "Rojo", "age": "Adultos (18+)", "season": "Verano",
            "quantity": 12, "minStock": 12, "maxStock": 30, "cost": 8.0, "price": 19.99,
            "rotation": "Media"
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, ProductId(5));
        assert!(p.available);
        assert_eq!(p.last_movement, None);
        assert_eq!(p.status(), StockStatus::LowStock);
        assert!(p.validate().is_ok());
    }
}
