pub mod dto;

pub use dto::{InventoryOverview, RecentMovement, RestockItem, DEFAULT_RECENT_LIMIT};
