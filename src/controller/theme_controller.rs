use crate::configs::ThemeConfig;
use crate::dom::{ ColorSchemeSignal, Icon, ThemeSurface };
use crate::error::ThemeError;
use crate::storage::ThemeStore;
use crate::utils::ThemeState;

/// Owns the page's theme: where it is stored, how it is shown, and what the
/// environment prefers when nothing is stored.
pub struct ThemeController<S, D, P> {
    store: S,
    surface: D,
    signal: P,
    storage_key: String,
    current: Option<ThemeState>,
}

impl<S, D, P> ThemeController<S, D, P>
    where S: ThemeStore, D: ThemeSurface, P: ColorSchemeSignal
{
    pub fn new(store: S, surface: D, signal: P, config: &ThemeConfig) -> Self {
        Self {
            store,
            surface,
            signal,
            storage_key: config.storage_key.clone(),
            current: None,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    #[cfg(test)]
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    /// The last theme applied, if any.
    pub fn current(&self) -> Option<ThemeState> {
        self.current
    }

    /// Stored theme, else the environment's preference, else light.
    pub fn resolve_initial_theme(&self) -> ThemeState {
        self.stored_theme().unwrap_or_else(|| self.preferred_theme())
    }

    pub fn apply_theme(&mut self, theme: ThemeState) -> Result<(), ThemeError> {
        let dark = theme.is_dark();
        self.surface.mark_root_dark(dark)?;
        self.surface.set_icon_visible(Icon::DarkMode, !dark)?;
        self.surface.set_icon_visible(Icon::LightMode, dark)?;
        // The page shows `theme` from here on, even if the write below fails
        self.current = Some(theme);
        self.store.set(&self.storage_key, theme.as_str())
    }

    /// Flips the theme on screen and returns the one now applied. Before
    /// anything has been applied, falls back to the initial resolution.
    pub fn toggle_theme(&mut self) -> Result<ThemeState, ThemeError> {
        let active = self.current.unwrap_or_else(|| self.resolve_initial_theme());
        let next = active.opposite();
        self.apply_theme(next)?;
        Ok(next)
    }

    pub fn initialize(&mut self) -> Result<ThemeState, ThemeError> {
        let theme = self.resolve_initial_theme();
        self.apply_theme(theme)?;
        Ok(theme)
    }

    fn stored_theme(&self) -> Option<ThemeState> {
        let raw = match self.store.get(&self.storage_key) {
            Ok(raw) => raw?,
            Err(e) => {
                log::warn!("Could not read stored theme: {}", e);
                return None;
            }
        };
        match raw.parse() {
            Ok(theme) => Some(theme),
            Err(e) => {
                log::warn!("Ignoring stored theme under {:?}: {}", self.storage_key, e);
                None
            }
        }
    }

    fn preferred_theme(&self) -> ThemeState {
        self.signal.prefers_dark().map(ThemeState::from_prefers_dark).unwrap_or_default()
    }
}
