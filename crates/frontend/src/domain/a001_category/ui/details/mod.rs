//! Category form modal (create and update share one form).
//!
//! - view_model.rs: form state and the save command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::CategoryDetails;
pub use view_model::CategoryDetailsViewModel;
