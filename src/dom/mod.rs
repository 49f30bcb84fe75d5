pub mod boot;
#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::error::ThemeError;

pub use boot::{ defer_init, BootStep, PageBoot, PendingInit };

#[cfg(target_arch = "wasm32")]
pub use web::{ start, DocumentSurface, MediaQuerySignal };

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    /// Offered while the page is light.
    DarkMode,
    /// Offered while the page is dark.
    LightMode,
}

/// The visible parts of the page a theme touches.
pub trait ThemeSurface {
    fn mark_root_dark(&mut self, dark: bool) -> Result<(), ThemeError>;
    fn set_icon_visible(&mut self, icon: Icon, visible: bool) -> Result<(), ThemeError>;
}

/// The environment's "prefers dark color scheme" signal. `None` when the
/// environment cannot answer.
pub trait ColorSchemeSignal {
    fn prefers_dark(&self) -> Option<bool>;
}

#[cfg(not(target_arch = "wasm32"))]
pub fn start(config: crate::configs::ThemeConfig) -> Result<(), ThemeError> {
    log::info!(
        "No browser document on this target, leaving #{} unbound",
        config.toggle_id
    );
    Ok(())
}
