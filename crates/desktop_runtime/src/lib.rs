//! Desktop shell runtime: window manager state, reducer, shell chrome, and host effect wiring.

pub mod apps;
pub mod components;
mod effect_executor;
pub mod host;
pub mod icons;
pub mod menus;
pub mod model;
pub mod persistence;
pub mod reducer;
mod runtime_context;
pub mod shortcuts;
pub mod spotlight;
pub mod wallpaper;
pub mod window_manager;

pub use components::{
    use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell, BOOT_DURATION,
};
pub use model::*;
pub use persistence::{load_preferences, StoredPreferences};
pub use reducer::{
    action_for_app_command, reduce_desktop, DesktopAction, ReducerError, RuntimeEffect,
};
