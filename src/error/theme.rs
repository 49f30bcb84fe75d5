use std::fmt::{ Display, Formatter };

#[derive(Debug, Clone, PartialEq)]
pub enum ThemeError {
    NoWindow,
    NoDocument,
    NoRootElement,
    MissingElement(String),
    Storage(String),
    Dom(String),
    Config(String),
    AlreadyInitialized,
}

impl Display for ThemeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::NoWindow => write!(f, "Browser Error: no global window"),
            ThemeError::NoDocument => write!(f, "Browser Error: window has no document"),
            ThemeError::NoRootElement => write!(f, "Browser Error: document has no root element"),
            ThemeError::MissingElement(id) =>
                write!(f, "Initialization Error: element #{} not found", id),
            ThemeError::Storage(msg) => write!(f, "Storage Error: {}", msg),
            ThemeError::Dom(msg) => write!(f, "DOM Error: {}", msg),
            ThemeError::Config(msg) => write!(f, "Config Error: {}", msg),
            ThemeError::AlreadyInitialized =>
                write!(f, "Initialization Error: theme controller already initialized"),
        }
    }
}

impl std::error::Error for ThemeError {}

impl From<serde_json::Error> for ThemeError {
    fn from(error: serde_json::Error) -> Self {
        ThemeError::Config(error.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for ThemeError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        ThemeError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
