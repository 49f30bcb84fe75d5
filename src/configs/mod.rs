pub mod theme_config;

pub use theme_config::ThemeConfig;

/// Reads the theme config from the root element's `data-theme-config` attribute.
#[cfg(target_arch = "wasm32")]
pub fn load() -> ThemeConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|root| root.get_attribute(theme_config::CONFIG_ATTRIBUTE));
    ThemeConfig::from_optional_json(raw.as_deref(), theme_config::CONFIG_ATTRIBUTE)
}

/// Reads the theme config from the `THEME_CONFIG` environment variable.
#[cfg(not(target_arch = "wasm32"))]
pub fn load() -> ThemeConfig {
    let raw = std::env::var(theme_config::CONFIG_ENV_VAR).ok();
    ThemeConfig::from_optional_json(raw.as_deref(), theme_config::CONFIG_ENV_VAR)
}
