use std::cell::Cell;
use crate::error::ThemeError;
use super::{ MemoryStore, ThemeStore };

/// Wraps a durable store and switches to memory for the rest of the page's
/// lifetime after the first failed read or write.
#[derive(Debug)]
pub struct FallbackStore<S> {
    durable: Option<S>,
    // Set by a failed read; `get` only has `&self`
    read_failed: Cell<bool>,
    memory: MemoryStore,
}

impl<S: ThemeStore> FallbackStore<S> {
    pub fn new(durable: S) -> Self {
        Self { durable: Some(durable), read_failed: Cell::new(false), memory: MemoryStore::new() }
    }

    /// Memory-only; used when the durable store could not be opened at all.
    pub fn memory_only() -> Self {
        Self { durable: None, read_failed: Cell::new(false), memory: MemoryStore::new() }
    }

    pub fn from_result(durable: Result<S, ThemeError>) -> Self {
        match durable {
            Ok(store) => Self::new(store),
            Err(e) => {
                log::warn!("Durable storage unavailable, theme will not persist: {}", e);
                Self::memory_only()
            }
        }
    }

    pub fn is_durable(&self) -> bool {
        self.durable.is_some() && !self.read_failed.get()
    }

    #[cfg(test)]
    pub fn durable(&self) -> Option<&S> {
        self.durable.as_ref()
    }

    fn degrade(&mut self, op: &str, e: &ThemeError) {
        log::warn!("Theme storage {} failed, keeping theme in memory only: {}", op, e);
        self.durable = None;
    }
}

impl<S: ThemeStore> ThemeStore for FallbackStore<S> {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        let store = match &self.durable {
            Some(store) if !self.read_failed.get() => store,
            _ => return self.memory.get(key),
        };
        match store.get(key) {
            Ok(value) => Ok(value),
            Err(e) => {
                log::warn!("Theme storage read failed, keeping theme in memory only: {}", e);
                self.read_failed.set(true);
                self.memory.get(key)
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.memory.set(key, value)?;
        if self.read_failed.get() {
            self.durable = None;
        }
        let result = match self.durable.as_mut() {
            Some(store) => store.set(key, value),
            None => return Ok(()),
        };
        if let Err(e) = result {
            self.degrade("write", &e);
        }
        Ok(())
    }
}
