//! Common types and traits for all records

pub mod patch;
pub mod record;
pub mod record_id;

// Re-exports
pub use patch::Patch;
pub use record::Record;
pub use record_id::{new_record_id, new_unique_id};
