use anyhow::bail;
use leptos::prelude::*;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    pub table: TableConfig,
    pub search: SearchConfig,
    pub notifications: NotificationConfig,
    pub theme: ThemeConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TableConfig {
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SearchConfig {
    pub debounce_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotificationConfig {
    pub display_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub default: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[table]
default_page_size = 10
page_size_options = [10, 20, 50, 100]

[search]
debounce_ms = 300

[notifications]
display_ms = 3000

[theme]
storage_key = "theme"
default = "light"
"#;

/// Id of the optional `<script type="text/toml">` override in index.html
const OVERRIDE_ELEMENT_ID: &str = "ui-config";

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            table: TableConfig {
                default_page_size: 10,
                page_size_options: vec![10, 20, 50, 100],
            },
            search: SearchConfig { debounce_ms: 300 },
            notifications: NotificationConfig { display_ms: 3000 },
            theme: ThemeConfig {
                storage_key: "theme".to_string(),
                default: "light".to_string(),
            },
        }
    }
}

pub fn parse_config(contents: &str) -> anyhow::Result<UiConfig> {
    let config: UiConfig = toml::from_str(contents)?;
    if config.table.page_size_options.is_empty() {
        bail!("table.page_size_options must not be empty");
    }
    if !config
        .table
        .page_size_options
        .contains(&config.table.default_page_size)
    {
        bail!(
            "table.default_page_size {} is not one of {:?}",
            config.table.default_page_size,
            config.table.page_size_options
        );
    }
    Ok(config)
}

fn override_source() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(OVERRIDE_ELEMENT_ID)?
        .text_content()
        .filter(|s| !s.trim().is_empty())
}

/// Load the UI configuration
///
/// Search order:
/// 1. `#ui-config` element of the host page
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<UiConfig> {
    if let Some(contents) = override_source() {
        log::info!("Loading config from #{}", OVERRIDE_ELEMENT_ID);
        match parse_config(&contents) {
            Ok(config) => return Ok(config),
            Err(e) => log::warn!("Ignoring invalid #{}: {}", OVERRIDE_ELEMENT_ID, e),
        }
    }

    log::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn provide_config() -> UiConfig {
    let config = load_config().unwrap_or_else(|e| {
        log::warn!("Config could not be loaded, using defaults: {}", e);
        UiConfig::default()
    });
    provide_context(config.clone());
    config
}

pub fn use_config() -> UiConfig {
    use_context::<UiConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, UiConfig::default());
        assert_eq!(config.theme.storage_key, "theme");
    }

    #[test]
    fn test_rejects_unknown_page_size() {
        let broken = DEFAULT_CONFIG.replace("default_page_size = 10", "default_page_size = 15");
        assert!(parse_config(&broken).is_err());
        assert!(parse_config("[table]").is_err());
    }
}
