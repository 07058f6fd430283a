//! Preference persistence for theme and wallpaper state.
//!
//! Each value is stored as JSON under its own key through the injected [`PrefsStore`]. A key that
//! fails to load is logged and treated as absent so boot always proceeds with defaults.

use desktop_app_contract::{ThemeMode, WallpaperOption};
use leptos::logging;
use platform_host::{load_pref_with, save_pref_with, PrefsStore};

use crate::reducer::DesktopAction;

pub const THEME_KEY: &str = "theme";
pub const WALLPAPER_KEY: &str = "selected-wallpaper";
pub const CUSTOM_WALLPAPERS_KEY: &str = "custom-wallpapers";

/// Values read from storage at boot. Missing or unreadable keys are `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredPreferences {
    pub theme_mode: Option<ThemeMode>,
    pub selected_wallpaper: Option<String>,
    pub custom_wallpapers: Option<Vec<WallpaperOption>>,
}

impl StoredPreferences {
    pub fn is_empty(&self) -> bool {
        self.theme_mode.is_none()
            && self.selected_wallpaper.is_none()
            && self.custom_wallpapers.is_none()
    }

    pub fn into_action(self) -> DesktopAction {
        DesktopAction::HydratePreferences {
            theme_mode: self.theme_mode,
            selected_wallpaper: self.selected_wallpaper,
            custom_wallpapers: self.custom_wallpapers,
        }
    }
}

async fn load_or_warn<T: serde::de::DeserializeOwned>(
    prefs: &dyn PrefsStore,
    key: &str,
) -> Option<T> {
    match load_pref_with(prefs, key).await {
        Ok(value) => value,
        Err(err) => {
            logging::warn!("preference load failed: {err}");
            None
        }
    }
}

/// Loads every stored appearance preference.
pub async fn load_preferences(prefs: &dyn PrefsStore) -> StoredPreferences {
    StoredPreferences {
        theme_mode: load_or_warn(prefs, THEME_KEY).await,
        selected_wallpaper: load_or_warn(prefs, WALLPAPER_KEY).await,
        custom_wallpapers: load_or_warn(prefs, CUSTOM_WALLPAPERS_KEY).await,
    }
}

pub async fn persist_theme(prefs: &dyn PrefsStore, mode: ThemeMode) -> Result<(), String> {
    save_pref_with(prefs, THEME_KEY, &mode).await
}

pub async fn persist_wallpaper(prefs: &dyn PrefsStore, wallpaper_id: &str) -> Result<(), String> {
    save_pref_with(prefs, WALLPAPER_KEY, wallpaper_id).await
}

pub async fn persist_custom_wallpapers(
    prefs: &dyn PrefsStore,
    wallpapers: &[WallpaperOption],
) -> Result<(), String> {
    save_pref_with(prefs, CUSTOM_WALLPAPERS_KEY, wallpapers).await
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::DeviceClass;
    use futures::executor::block_on;
    use platform_host::MemoryPrefsStore;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::wallpaper::custom_wallpaper;

    #[test]
    fn empty_store_loads_nothing() {
        let store = MemoryPrefsStore::default();
        let loaded = block_on(load_preferences(&store));
        assert!(loaded.is_empty());
    }

    #[test]
    fn persisted_values_load_back() {
        let store = MemoryPrefsStore::default();
        let custom = vec![custom_wallpaper(
            "Harbor",
            "https://img.example/harbor.jpg",
            DeviceClass::Desktop,
            42,
        )];
        block_on(persist_theme(&store, ThemeMode::Light)).expect("theme");
        block_on(persist_wallpaper(&store, "custom-42")).expect("wallpaper");
        block_on(persist_custom_wallpapers(&store, &custom)).expect("custom");

        assert_eq!(store.raw(THEME_KEY), Some("\"light\"".to_string()));
        assert_eq!(
            block_on(load_preferences(&store)),
            StoredPreferences {
                theme_mode: Some(ThemeMode::Light),
                selected_wallpaper: Some("custom-42".to_string()),
                custom_wallpapers: Some(custom),
            }
        );
    }

    #[test]
    fn corrupt_key_is_skipped_without_losing_the_others() {
        let store = MemoryPrefsStore::default();
        block_on(store.save_pref(THEME_KEY, "not-json")).expect("save raw");
        block_on(persist_wallpaper(&store, "solid-teal")).expect("wallpaper");

        let loaded = block_on(load_preferences(&store));
        assert_eq!(loaded.theme_mode, None);
        assert_eq!(loaded.selected_wallpaper.as_deref(), Some("solid-teal"));
    }

    #[test]
    fn hydration_action_carries_loaded_values() {
        let prefs = StoredPreferences {
            theme_mode: Some(ThemeMode::Auto),
            ..StoredPreferences::default()
        };
        assert_eq!(
            prefs.into_action(),
            DesktopAction::HydratePreferences {
                theme_mode: Some(ThemeMode::Auto),
                selected_wallpaper: None,
                custom_wallpapers: None,
            }
        );
    }
}
