use crate::error::ThemeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LifecycleState {
    #[default]
    Uninitialized,
    Initialized,
}

/// Guards a page's one-time theme initialization.
#[derive(Debug, Default)]
pub struct Lifecycle {
    state: LifecycleState,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Runs `init` if nothing has been initialized yet. A failed `init` leaves
    /// the state untouched so a later attempt can retry.
    pub fn enter<R>(&mut self, init: impl FnOnce() -> Result<R, ThemeError>) -> Result<R, ThemeError> {
        if self.state == LifecycleState::Initialized {
            log::warn!("Theme controller already initialized, ignoring");
            return Err(ThemeError::AlreadyInitialized);
        }
        let out = init()?;
        self.state = LifecycleState::Initialized;
        Ok(out)
    }
}
