//! Reducer helpers for theme and wallpaper transitions.

use desktop_app_contract::DeviceClass;

use crate::{
    model::DesktopState,
    reducer::{DesktopAction, ReducerError, RuntimeEffect},
    wallpaper,
};

pub(super) fn reduce_appearance_action(
    state: &mut DesktopState,
    action: &DesktopAction,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<bool, ReducerError> {
    let appearance = &mut state.appearance;
    match action {
        DesktopAction::ToggleTheme => {
            appearance.theme_mode = appearance.theme_mode.toggled();
            effects.push(RuntimeEffect::PersistTheme);
        }
        DesktopAction::SetThemeMode { mode } => {
            appearance.theme_mode = *mode;
            effects.push(RuntimeEffect::PersistTheme);
        }
        DesktopAction::SetHostPrefersDark { prefers_dark } => {
            appearance.host_prefers_dark = *prefers_dark;
        }
        DesktopAction::SelectWallpaper { wallpaper_id } => {
            appearance.selected_wallpaper = wallpaper_id.clone();
            effects.push(RuntimeEffect::PersistWallpaper);
        }
        DesktopAction::AddCustomWallpaper {
            name,
            url,
            created_at_ms,
        } => {
            let url = url.trim();
            if url.is_empty() {
                return Ok(true);
            }
            let name = match name.trim() {
                "" => "Custom Wallpaper",
                trimmed => trimmed,
            };
            let option =
                wallpaper::custom_wallpaper(name, url, state.device_class(), *created_at_ms);
            let appearance = &mut state.appearance;
            appearance.selected_wallpaper = option.id.clone();
            appearance.custom_wallpapers.push(option);
            effects.push(RuntimeEffect::PersistCustomWallpapers);
            effects.push(RuntimeEffect::PersistWallpaper);
        }
        DesktopAction::HydratePreferences {
            theme_mode,
            selected_wallpaper,
            custom_wallpapers,
        } => {
            if let Some(mode) = theme_mode {
                appearance.theme_mode = *mode;
            }
            if let Some(custom) = custom_wallpapers {
                appearance.custom_wallpapers = custom.clone();
            }
            if let Some(selected) = selected_wallpaper {
                appearance.selected_wallpaper = selected.clone();
            }
            ensure_wallpaper_matches_device(state, effects);
        }
        _ => return Ok(false),
    }

    Ok(true)
}

/// Swaps the selection for the device default when it targets another device class.
pub(super) fn ensure_wallpaper_matches_device(
    state: &mut DesktopState,
    effects: &mut Vec<RuntimeEffect>,
) {
    let device: DeviceClass = state.device_class();
    let appearance = &mut state.appearance;
    if let Some(replacement) = wallpaper::device_mismatch_replacement(
        &appearance.custom_wallpapers,
        &appearance.selected_wallpaper,
        device,
    ) {
        appearance.selected_wallpaper = replacement;
        effects.push(RuntimeEffect::PersistWallpaper);
    }
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::{ThemeMode, WallpaperDevice};
    use pretty_assertions::assert_eq;

    use crate::{
        model::{InteractionState, ShellMetrics, Viewport},
        reducer::reduce_desktop,
    };

    use super::*;

    fn reduce(state: &mut DesktopState, action: DesktopAction) -> Vec<RuntimeEffect> {
        reduce_desktop(state, &mut InteractionState::default(), action).expect("reduce")
    }

    #[test]
    fn toggle_theme_flips_and_persists() {
        let mut state = DesktopState::default();
        assert_eq!(
            reduce(&mut state, DesktopAction::ToggleTheme),
            vec![RuntimeEffect::PersistTheme]
        );
        assert_eq!(state.appearance.theme_mode, ThemeMode::Light);
        assert!(!state.appearance.is_dark());

        reduce(
            &mut state,
            DesktopAction::SetThemeMode {
                mode: ThemeMode::Auto,
            },
        );
        reduce(
            &mut state,
            DesktopAction::SetHostPrefersDark {
                prefers_dark: false,
            },
        );
        assert!(!state.appearance.is_dark());
        reduce(&mut state, DesktopAction::ToggleTheme);
        assert_eq!(state.appearance.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn custom_wallpaper_is_added_for_current_device_and_selected() {
        let mut state = DesktopState::new(ShellMetrics::default(), Viewport::new(900, 700));
        let effects = reduce(
            &mut state,
            DesktopAction::AddCustomWallpaper {
                name: "  ".to_string(),
                url: "https://img.example/lake.jpg".to_string(),
                created_at_ms: 1_234,
            },
        );

        assert_eq!(
            effects,
            vec![
                RuntimeEffect::PersistCustomWallpapers,
                RuntimeEffect::PersistWallpaper
            ]
        );
        let added = &state.appearance.custom_wallpapers[0];
        assert_eq!(added.id, "custom-1234");
        assert_eq!(added.name, "Custom Wallpaper");
        assert_eq!(added.device_type, WallpaperDevice::Tablet);
        assert_eq!(state.appearance.selected_wallpaper, "custom-1234");
    }

    #[test]
    fn blank_custom_wallpaper_url_is_ignored() {
        let mut state = DesktopState::default();
        let effects = reduce(
            &mut state,
            DesktopAction::AddCustomWallpaper {
                name: "Empty".to_string(),
                url: " ".to_string(),
                created_at_ms: 1,
            },
        );
        assert!(effects.is_empty());
        assert!(state.appearance.custom_wallpapers.is_empty());
    }

    #[test]
    fn shrinking_to_mobile_switches_to_mobile_default_wallpaper() {
        let mut state = DesktopState::default();
        let effects = reduce(
            &mut state,
            DesktopAction::SetViewport {
                viewport: Viewport::new(390, 844),
            },
        );
        assert_eq!(state.appearance.selected_wallpaper, "download2");
        assert_eq!(effects, vec![RuntimeEffect::PersistWallpaper]);
    }

    #[test]
    fn hydration_restores_preferences_without_persisting() {
        let mut state = DesktopState::default();
        let effects = reduce(
            &mut state,
            DesktopAction::HydratePreferences {
                theme_mode: Some(ThemeMode::Light),
                selected_wallpaper: Some("solid-teal".to_string()),
                custom_wallpapers: Some(Vec::new()),
            },
        );
        assert!(effects.is_empty());
        assert_eq!(state.appearance.theme_mode, ThemeMode::Light);
        assert_eq!(state.appearance.selected_wallpaper, "solid-teal");
    }
}
