//! Shared domain types for the construction materials dashboard.
//!
//! Everything here is plain data and pure functions: records, drafts,
//! patches, seed data, validation rules and collection operations.

pub mod domain;
pub mod shared;
