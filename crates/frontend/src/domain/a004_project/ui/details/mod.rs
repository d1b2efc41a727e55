//! Project form modal and the project detail page.
//!
//! - view_model.rs / view.rs: create and edit form of a project
//! - dated_work.rs: fields shared with the work item form
//! - page.rs: `/dashboard/projects/:id` with its tabs
//! - tabs/: overview plus the items, materials and staff tables

mod dated_work;
mod page;
mod tabs;
mod view;
mod view_model;

pub use page::ProjectDetail;
pub use tabs::ProjectTab;
pub use view::ProjectDetails;
pub use view_model::ProjectDetailsViewModel;
