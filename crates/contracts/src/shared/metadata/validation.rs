//! Validation rules for form fields

use thiserror::Error;

/// Closed set of value shapes a text field can be checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPattern {
    /// Only ASCII digits, length within `min..=max`
    Digits { min: usize, max: usize },
    /// `local@domain.tld` with no whitespace
    Email,
    /// At least 8 chars with an upper case letter, a lower case letter and a digit
    StrongPassword,
}

impl FieldPattern {
    pub fn matches(&self, value: &str) -> bool {
        match *self {
            FieldPattern::Digits { min, max } => {
                let len = value.chars().count();
                len >= min && len <= max && value.chars().all(|c| c.is_ascii_digit())
            }
            FieldPattern::Email => {
                if value.chars().any(char::is_whitespace) {
                    return false;
                }
                match value.split_once('@') {
                    Some((local, domain)) => {
                        !local.is_empty()
                            && !domain.contains('@')
                            && domain
                                .split_once('.')
                                .map(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
                                .unwrap_or(false)
                    }
                    None => false,
                }
            }
            FieldPattern::StrongPassword => {
                value.chars().count() >= 8
                    && value.chars().any(|c| c.is_uppercase())
                    && value.chars().any(|c| c.is_lowercase())
                    && value.chars().any(|c| c.is_ascii_digit())
            }
        }
    }

    fn default_error(&self, field_label: &str) -> String {
        match self {
            FieldPattern::Digits { min, max } if min == max => {
                format!("{} must be {} digits", field_label, min)
            }
            FieldPattern::Digits { min, max } => {
                format!("{} must be {}-{} digits", field_label, min, max)
            }
            FieldPattern::Email => format!("{} is not a valid email", field_label),
            FieldPattern::StrongPassword => format!(
                "{} must have at least 8 characters with upper case, lower case and a digit",
                field_label
            ),
        }
    }
}

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<FieldPattern>,
    pub custom_error: Option<&'static str>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
            pattern: None,
            custom_error: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    pub const fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    pub const fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    pub const fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub const fn at_least(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub const fn pattern(mut self, pattern: FieldPattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub const fn with_error(mut self, message: &'static str) -> Self {
        self.custom_error = Some(message);
        self
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Custom message when set, otherwise the generic one
    fn fail(&self, generic: impl FnOnce() -> String) -> Result<(), String> {
        Err(self.custom_error.map(str::to_string).unwrap_or_else(generic))
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            if self.required {
                return self.fail(|| format!("{} is required", field_label));
            }
            // optional and empty: nothing else to check
            return Ok(());
        }

        let len = trimmed.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return self.fail(|| format!("{} must have at least {} characters", field_label, min));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return self.fail(|| format!("{} must not exceed {} characters", field_label, max));
            }
        }

        if let Some(pattern) = self.pattern {
            if !pattern.matches(trimmed) {
                return self.fail(|| pattern.default_error(field_label));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if !value.is_finite() {
            return self.fail(|| format!("{} must be a number", field_label));
        }

        if let Some(min) = self.min {
            if value < min {
                return self.fail(|| format!("{} must be at least {}", field_label, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return self.fail(|| format!("{} must be at most {}", field_label, max));
            }
        }

        Ok(())
    }
}

/// One failed field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Per-field messages collected while validating a form.
/// Only the first failure of each field is kept.
#[derive(Debug, Clone, PartialEq, Eq, Default, Error)]
#[error("invalid form: {}", summarize(.errors))]
pub struct FormErrors {
    errors: Vec<FieldError>,
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.field)
        .collect::<Vec<_>>()
        .join(", ")
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a field check
    pub fn check(&mut self, field: &'static str, result: Result<(), String>) {
        if let Err(message) = result {
            self.add(field, message);
        }
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        if self.get(field).is_none() {
            self.errors.push(FieldError {
                field,
                message: message.into(),
            });
        }
    }

    /// Forget the message of one field, e.g. once the user edits it
    pub fn clear(&mut self, field: &str) {
        self.errors.retain(|e| e.field != field);
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// `Ok` when no field failed
    pub fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_and_length() {
        let rules = ValidationRules::required().min_length(3);
        assert_eq!(rules.validate_string("  ", "Name"), Err("Name is required".into()));
        assert!(rules.validate_string("ab", "Name").is_err());
        assert!(rules.validate_string("abc", "Name").is_ok());

        let optional = ValidationRules::none().min_length(3);
        assert!(optional.validate_string("", "Note").is_ok());
    }

    #[test]
    fn test_phone_digits() {
        let rules = ValidationRules::required().pattern(FieldPattern::Digits { min: 10, max: 11 });
        assert!(rules.validate_string("0901234567", "Phone").is_ok());
        assert!(rules.validate_string("09012345678", "Phone").is_ok());
        assert!(rules.validate_string("090123456", "Phone").is_err());
        assert!(rules.validate_string("090-123-4567", "Phone").is_err());
    }

    #[test]
    fn test_email() {
        let p = FieldPattern::Email;
        assert!(p.matches("admin@vlxd.vn"));
        assert!(!p.matches("admin@vlxd"));
        assert!(!p.matches("@vlxd.vn"));
        assert!(!p.matches("ad min@vlxd.vn"));
    }

    #[test]
    fn test_strong_password() {
        let p = FieldPattern::StrongPassword;
        assert!(p.matches("Secret123"));
        assert!(!p.matches("secret123"));
        assert!(!p.matches("SECRET123"));
        assert!(!p.matches("Secretabc"));
        assert!(!p.matches("Sec12"));
    }

    #[test]
    fn test_custom_error_and_numbers() {
        let rules = ValidationRules::required()
            .pattern(FieldPattern::Digits { min: 10, max: 10 })
            .with_error("Bad phone");
        assert_eq!(rules.validate_string("1", "Phone"), Err("Bad phone".into()));
        assert_eq!(rules.validate_string(" ", "Phone"), Err("Bad phone".into()));

        let name = ValidationRules::required().max_length(5).with_error("Nhập tên ngắn!");
        assert_eq!(name.validate_string("", "Name"), Err("Nhập tên ngắn!".into()));
        assert_eq!(name.validate_string("abcdef", "Name"), Err("Nhập tên ngắn!".into()));

        let ranged = ValidationRules::none().range(0.0, 100.0).with_error("Giá trị từ 0-100!");
        assert_eq!(ranged.validate_number(-1.0, "Progress"), Err("Giá trị từ 0-100!".into()));
        assert_eq!(ranged.validate_number(101.0, "Progress"), Err("Giá trị từ 0-100!".into()));

        let progress = ValidationRules::none().range(0.0, 100.0);
        assert!(progress.validate_number(50.0, "Progress").is_ok());
        assert!(progress.validate_number(101.0, "Progress").is_err());
        assert!(progress.validate_number(f64::NAN, "Progress").is_err());
    }

    #[test]
    fn test_form_errors_keep_first_message() {
        let mut errors = FormErrors::new();
        errors.check("name", Ok(()));
        errors.add("name", "first");
        errors.add("name", "second");
        errors.add("phone", "bad");
        assert_eq!(errors.get("name"), Some("first"));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.to_string(), "invalid form: name, phone");
        assert!(FormErrors::new().into_result().is_ok());

        errors.clear("name");
        assert_eq!(errors.get("name"), None);
        assert_eq!(errors.len(), 1);
    }
}
