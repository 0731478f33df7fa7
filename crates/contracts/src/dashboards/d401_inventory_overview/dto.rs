use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::a001_product::{Product, ProductId, StockStatus};
use crate::domain::a002_stock_movement::{Movement, MovementType};

/// Movements shown on the dashboard when the caller does not say
pub const DEFAULT_RECENT_LIMIT: usize = 4;

/// Landing page counters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryOverview {
    pub total_products: usize,
    /// Units on hand over all products
    pub total_stock: u64,
    /// Stock valued at cost
    pub total_value: f64,
    pub in_stock: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
    /// Latest day with sales, the dashboard's "today"
    pub sales_date: Option<NaiveDate>,
    /// Units sold on `sales_date`
    pub today_sales: u64,
    pub today_revenue: f64,
    /// Revenue of the calendar month containing `sales_date`
    pub month_revenue: f64,
    /// Units on hand per category
    pub stock_by_category: BTreeMap<String, u64>,
    /// Products with status other than in stock, lowest stock first
    pub restock: Vec<RestockItem>,
    /// Newest first
    pub recent_movements: Vec<RecentMovement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestockItem {
    pub id: ProductId,
    pub code: String,
    pub name: String,
    pub category: String,
    pub stock: u32,
    pub min_stock: u32,
    pub size: String,
    pub color: String,
    pub status: StockStatus,
    /// Units to order to reach max stock
    pub reorder: u32,
}

impl From<&Product> for RestockItem {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id,
            code: p.code.clone(),
            name: p.name.clone(),
            category: p.category.clone(),
            stock: p.quantity,
            min_stock: p.min_stock,
            size: p.size.clone(),
            color: p.color.clone(),
            status: p.status(),
            reorder: p.reorder_quantity(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentMovement {
    #[serde(rename = "type")]
    pub movement_type: MovementType,
    pub product: String,
    pub quantity: i64,
    pub reason: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl From<&Movement> for RecentMovement {
    fn from(m: &Movement) -> Self {
        Self {
            movement_type: m.movement_type,
            product: m.product_name.clone(),
            quantity: m.quantity,
            reason: m.reason.clone(),
            date: m.date,
            time: m.time,
        }
    }
}
