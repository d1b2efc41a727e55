pub mod aggregate;
pub mod seed;

pub use aggregate::{Warehouse, WarehouseDto, WarehousePatch};
