//! Inventory item modals.
//!
//! - view_model.rs: form state and the save command
//! - view.rs: create / edit form
//! - preview.rs: read-only card opened from the eye button

mod preview;
mod view;
mod view_model;

pub use preview::{stock_badge, InventoryPreview};
pub use view::InventoryDetails;
pub use view_model::InventoryDetailsViewModel;
