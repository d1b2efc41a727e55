//! User preferences edited on the settings page.

use crate::shared::metadata::{FormErrors, ValidationRules};
use serde::{Deserialize, Serialize};

pub const SESSION_TIMEOUT_MIN: u32 = 5;
pub const SESSION_TIMEOUT_MAX: u32 = 120;

const SESSION_TIMEOUT_RULES: ValidationRules = ValidationRules::required()
    .range(SESSION_TIMEOUT_MIN as f64, SESSION_TIMEOUT_MAX as f64)
    .with_error("Thời gian chờ từ 5-120 phút!");

/// Theme chosen by the user. `Auto` follows the system color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
    Auto,
}

impl ThemePreference {
    /// Stored value and `data-theme` attribute value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::Auto => "auto",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ThemePreference::Light => "Light Mode",
            ThemePreference::Dark => "Dark Mode",
            ThemePreference::Auto => "Auto (System Preference)",
        }
    }

    /// Unknown values fall back to the default.
    pub fn from_str(s: &str) -> Self {
        match s.trim() {
            "dark" => ThemePreference::Dark,
            "auto" => ThemePreference::Auto,
            _ => ThemePreference::Light,
        }
    }

    pub fn all() -> [ThemePreference; 3] {
        [
            ThemePreference::Light,
            ThemePreference::Dark,
            ThemePreference::Auto,
        ]
    }

    /// Concrete theme to render, given whether the system prefers dark.
    pub fn resolve(&self, system_prefers_dark: bool) -> ThemePreference {
        match self {
            ThemePreference::Auto if system_prefers_dark => ThemePreference::Dark,
            ThemePreference::Auto => ThemePreference::Light,
            other => *other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Vi,
    Es,
    Fr,
    De,
    Ja,
    Zh,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Vi => "vi",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
            Language::Ja => "ja",
            Language::Zh => "zh",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Vi => "Tiếng Việt",
            Language::Es => "Español",
            Language::Fr => "Français",
            Language::De => "Deutsch",
            Language::Ja => "日本語",
            Language::Zh => "中文",
        }
    }

    pub fn from_code(code: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|l| l.code() == code)
            .unwrap_or_default()
    }

    pub fn all() -> [Language; 7] {
        [
            Language::En,
            Language::Vi,
            Language::Es,
            Language::Fr,
            Language::De,
            Language::Ja,
            Language::Zh,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestFrequency {
    Realtime,
    #[default]
    Daily,
    Weekly,
    Never,
}

impl DigestFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            DigestFrequency::Realtime => "realtime",
            DigestFrequency::Daily => "daily",
            DigestFrequency::Weekly => "weekly",
            DigestFrequency::Never => "never",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DigestFrequency::Realtime => "Real-time",
            DigestFrequency::Daily => "Daily digest",
            DigestFrequency::Weekly => "Weekly digest",
            DigestFrequency::Never => "Never",
        }
    }

    pub fn from_str(s: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|f| f.as_str() == s)
            .unwrap_or_default()
    }

    pub fn all() -> [DigestFrequency; 4] {
        [
            DigestFrequency::Realtime,
            DigestFrequency::Daily,
            DigestFrequency::Weekly,
            DigestFrequency::Never,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppearanceSettings {
    pub theme: ThemePreference,
    pub language: Language,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            theme: ThemePreference::Light,
            language: Language::En,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferences {
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub sms_notifications: bool,
    pub order_updates: bool,
    pub promotions: bool,
    pub newsletter: bool,
    pub frequency: DigestFrequency,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email_notifications: true,
            push_notifications: false,
            sms_notifications: false,
            order_updates: true,
            promotions: false,
            newsletter: true,
            frequency: DigestFrequency::Daily,
        }
    }
}

/// Account protection options of the security tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySettings {
    pub two_factor: bool,
    /// Sign out after `session_timeout_minutes` of inactivity
    pub auto_logout: bool,
    pub session_timeout_minutes: u32,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            two_factor: false,
            auto_logout: true,
            session_timeout_minutes: 30,
        }
    }
}

impl SecuritySettings {
    /// The timeout is only checked while auto logout is on
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        if self.auto_logout {
            errors.check(
                "session_timeout_minutes",
                SESSION_TIMEOUT_RULES
                    .validate_number(self.session_timeout_minutes as f64, "Thời gian chờ"),
            );
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_round_trip_and_fallback() {
        for theme in ThemePreference::all() {
            assert_eq!(ThemePreference::from_str(theme.as_str()), theme);
        }
        assert_eq!(ThemePreference::from_str("forest"), ThemePreference::Light);
        assert_eq!(ThemePreference::from_str(""), ThemePreference::Light);
    }

    #[test]
    fn test_auto_resolves_by_system() {
        assert_eq!(ThemePreference::Auto.resolve(true), ThemePreference::Dark);
        assert_eq!(ThemePreference::Auto.resolve(false), ThemePreference::Light);
        assert_eq!(ThemePreference::Dark.resolve(false), ThemePreference::Dark);
    }

    #[test]
    fn test_defaults() {
        let prefs = NotificationPreferences::default();
        assert!(prefs.email_notifications);
        assert!(!prefs.push_notifications);
        assert_eq!(prefs.frequency, DigestFrequency::Daily);
        assert_eq!(Language::from_code("vi"), Language::Vi);
        assert_eq!(Language::from_code("xx"), Language::En);
        let json = serde_json::to_string(&AppearanceSettings::default()).unwrap();
        assert_eq!(json, r#"{"theme":"light","language":"en"}"#);
    }

    #[test]
    fn test_session_timeout_bounds() {
        let mut security = SecuritySettings::default();
        assert!(security.validate().is_ok());

        security.session_timeout_minutes = SESSION_TIMEOUT_MAX + 1;
        let errors = security.validate().unwrap_err();
        assert_eq!(errors.get("session_timeout_minutes"), Some("Thời gian chờ từ 5-120 phút!"));

        security.session_timeout_minutes = SESSION_TIMEOUT_MIN;
        assert!(security.validate().is_ok());

        // ignored while auto logout is off
        security.session_timeout_minutes = 0;
        security.auto_logout = false;
        assert!(security.validate().is_ok());
    }
}
