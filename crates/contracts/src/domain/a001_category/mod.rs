pub mod aggregate;
pub mod seed;

pub use aggregate::{Category, CategoryDto, CategoryPatch, CategoryStatus};
