pub mod a001_category;
pub mod a002_inventory_item;
pub mod a003_warehouse;
pub mod a004_project;
