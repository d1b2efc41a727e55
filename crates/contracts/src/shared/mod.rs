pub mod collection;
pub mod metadata;
pub mod search;
pub mod settings;
