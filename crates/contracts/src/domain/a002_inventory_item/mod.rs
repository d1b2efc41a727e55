pub mod aggregate;
pub mod filter;
pub mod seed;

pub use aggregate::{InventoryItem, InventoryItemDto, InventoryItemPatch, StockStatus};
pub use filter::InventoryFilter;
