//! Field validation used by record drafts and settings forms.

mod validation;

pub use validation::{FieldPattern, FormErrors, ValidationRules};
