pub mod lifecycle;
pub mod theme_controller;

pub use lifecycle::{ Lifecycle, LifecycleState };
pub use theme_controller::ThemeController;
