use web_sys::Storage;
use crate::error::ThemeError;
use super::ThemeStore;

/// `window.localStorage`.
#[derive(Debug, Clone)]
pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    pub fn open() -> Result<Self, ThemeError> {
        let window = web_sys::window().ok_or(ThemeError::NoWindow)?;
        // Privacy modes either throw here or hand back null
        let storage = window
            .local_storage()
            .map_err(|e| ThemeError::Storage(format!("localStorage access denied: {:?}", e)))?
            .ok_or_else(|| ThemeError::Storage("localStorage is not available".to_string()))?;
        Ok(Self { storage })
    }
}

impl ThemeStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.storage
            .get_item(key)
            .map_err(|e| ThemeError::Storage(format!("getItem({}) failed: {:?}", key, e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| ThemeError::Storage(format!("setItem({}) failed: {:?}", key, e)))
    }
}
