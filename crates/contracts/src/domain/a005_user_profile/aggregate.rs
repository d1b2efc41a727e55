use crate::shared::metadata::{FieldPattern, FormErrors, ValidationRules};
use serde::{Deserialize, Serialize};

const EMAIL_RULES: ValidationRules = ValidationRules::required()
    .pattern(FieldPattern::Email)
    .with_error("Email không hợp lệ!");
const PHONE_RULES: ValidationRules = ValidationRules::required()
    .pattern(FieldPattern::Digits { min: 10, max: 11 })
    .with_error("Số điện thoại không hợp lệ!");

/// Profile of the signed-in user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub department: String,
    pub address: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            full_name: "Nguyễn Văn A".into(),
            email: "nguyenvana@example.com".into(),
            phone: "0123456789".into(),
            position: "Quản lý dự án".into(),
            department: "Phòng Kỹ thuật".into(),
            address: "123 Đường ABC, Quận 1, TP.HCM".into(),
        }
    }
}

impl UserProfile {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        errors.check(
            "full_name",
            ValidationRules::required()
                .with_error("Vui lòng nhập họ tên!")
                .validate_string(&self.full_name, "Họ tên"),
        );
        errors.check("email", EMAIL_RULES.validate_string(&self.email, "Email"));
        errors.check("phone", PHONE_RULES.validate_string(&self.phone, "Số điện thoại"));
        errors.into_result()
    }

    /// Initials for the avatar placeholder: first and last word
    pub fn initials(&self) -> String {
        let mut words = self.full_name.split_whitespace();
        let first = words.next().and_then(|w| w.chars().next());
        let last = words.last().and_then(|w| w.chars().next());
        first.into_iter().chain(last).collect::<String>().to_uppercase()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordDto {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl ChangePasswordDto {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        if self.current_password.is_empty() {
            errors.add("current_password", "Vui lòng nhập mật khẩu hiện tại!");
        }

        if self.new_password.is_empty() {
            errors.add("new_password", "Vui lòng nhập mật khẩu mới!");
        } else if self.new_password.chars().count() < 8 {
            errors.add("new_password", "Mật khẩu phải có ít nhất 8 ký tự!");
        } else if !FieldPattern::StrongPassword.matches(&self.new_password) {
            errors.add("new_password", "Mật khẩu phải chứa chữ hoa, chữ thường và số!");
        }

        if self.confirm_password.is_empty() {
            errors.add("confirm_password", "Vui lòng xác nhận mật khẩu mới!");
        } else if self.confirm_password != self.new_password {
            errors.add("confirm_password", "Mật khẩu xác nhận không khớp!");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_valid() {
        let profile = UserProfile::default();
        assert!(profile.validate().is_ok());
        assert_eq!(profile.initials(), "NA");
    }

    #[test]
    fn test_profile_rules() {
        let profile = UserProfile {
            email: "not-an-email".into(),
            phone: "01234".into(),
            full_name: " ".into(),
            ..Default::default()
        };
        let errors = profile.validate().unwrap_err();
        assert_eq!(errors.get("email"), Some("Email không hợp lệ!"));
        assert_eq!(errors.get("phone"), Some("Số điện thoại không hợp lệ!"));
        assert_eq!(errors.get("full_name"), Some("Vui lòng nhập họ tên!"));
    }

    #[test]
    fn test_change_password() {
        let ok = ChangePasswordDto {
            current_password: "old".into(),
            new_password: "NewPass123".into(),
            confirm_password: "NewPass123".into(),
        };
        assert!(ok.validate().is_ok());

        let weak = ChangePasswordDto {
            new_password: "newpass123".into(),
            confirm_password: "other".into(),
            ..Default::default()
        };
        let errors = weak.validate().unwrap_err();
        assert!(errors.get("current_password").is_some());
        assert_eq!(
            errors.get("new_password"),
            Some("Mật khẩu phải chứa chữ hoa, chữ thường và số!")
        );
        assert_eq!(errors.get("confirm_password"), Some("Mật khẩu xác nhận không khớp!"));

        let short = ChangePasswordDto {
            new_password: "Ab1".into(),
            ..ok
        };
        assert_eq!(
            short.validate().unwrap_err().get("new_password"),
            Some("Mật khẩu phải có ít nhất 8 ký tự!")
        );
    }
}
