//! Warehouse form modal.
//!
//! - view_model.rs: form state, SKU assignment and the save command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::WarehouseDetails;
pub use view_model::WarehouseDetailsViewModel;
