pub mod memory;
pub mod fallback;
#[cfg(target_arch = "wasm32")]
pub mod local;

use crate::error::ThemeError;

pub use memory::MemoryStore;
pub use fallback::FallbackStore;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStore;

/// String key/value persistence, scoped to the page's origin.
pub trait ThemeStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;
}

