mod views;
mod routes;
pub mod utils;
pub mod configs;
pub mod controller;
pub mod dom;
pub mod error;
pub mod storage;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::views::{ Home, Navbar };
pub use crate::configs::ThemeConfig;
pub use crate::controller::{ Lifecycle, ThemeController };
pub use crate::error::ThemeError;

/// Entry point for pages that ship their own markup: binds the default element ids.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn init_theme() -> Result<(), wasm_bindgen::JsValue> {
    dom::start(configs::load()).map_err(|e| wasm_bindgen::JsValue::from_str(&e.to_string()))
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn init_theme_with_config(json: &str) -> Result<(), wasm_bindgen::JsValue> {
    let config = ThemeConfig::from_json(json).map_err(|e| wasm_bindgen::JsValue::from_str(&e.to_string()))?;
    dom::start(config).map_err(|e| wasm_bindgen::JsValue::from_str(&e.to_string()))
}
