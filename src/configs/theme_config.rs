use serde::{ Deserialize, Serialize };
use crate::error::ThemeError;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const CONFIG_ENV_VAR: &str = "THEME_CONFIG";
pub const CONFIG_ATTRIBUTE: &str = "data-theme-config";

/// Names the controller needs to find its elements and its stored value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub dark_class: String,
    pub hidden_class: String,
    pub toggle_id: String,
    pub dark_icon_id: String,
    pub light_icon_id: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            dark_class: "dark".to_string(),
            hidden_class: "hidden".to_string(),
            toggle_id: "theme-toggle".to_string(),
            dark_icon_id: "theme-toggle-dark-icon".to_string(),
            light_icon_id: "theme-toggle-light-icon".to_string(),
        }
    }
}

impl ThemeConfig {
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        let config: ThemeConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses `raw` if present, otherwise returns the defaults. Bad input is logged, not fatal.
    pub fn from_optional_json(raw: Option<&str>, source: &str) -> Self {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            None => {
                log::debug!("No theme config in {}, using defaults", source);
                ThemeConfig::default()
            }
            Some(json) =>
                match ThemeConfig::from_json(json) {
                    Ok(config) => {
                        log::info!("Loaded theme config from {}", source);
                        config
                    }
                    Err(e) => {
                        log::warn!("Ignoring theme config from {}: {}", source, e);
                        ThemeConfig::default()
                    }
                }
        }
    }

    fn validate(&self) -> Result<(), ThemeError> {
        let fields = [
            ("storage_key", &self.storage_key),
            ("dark_class", &self.dark_class),
            ("hidden_class", &self.hidden_class),
            ("toggle_id", &self.toggle_id),
            ("dark_icon_id", &self.dark_icon_id),
            ("light_icon_id", &self.light_icon_id),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ThemeError::Config(format!("{} must not be empty", name)));
            }
            // DOMTokenList rejects tokens containing whitespace
            if value.chars().any(char::is_whitespace) {
                return Err(ThemeError::Config(format!("{} must not contain whitespace", name)));
            }
        }
        Ok(())
    }
}
