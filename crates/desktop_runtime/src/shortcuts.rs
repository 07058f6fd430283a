//! Global keyboard shortcut resolution.
//!
//! The primary modifier is Command on macOS hosts and Control elsewhere.

use desktop_app_contract::AppId;

use crate::{model::FinderViewMode, reducer::DesktopAction};

/// Apps bound to `Mod+1` through `Mod+9`.
pub const NUMBERED_APPS: [AppId; 9] = [
    AppId::Finder,
    AppId::Terminal,
    AppId::About,
    AppId::Projects,
    AppId::Skills,
    AppId::Experience,
    AppId::Resume,
    AppId::Contact,
    AppId::Settings,
];

/// Modifier state and key identity of one `keydown` event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyChord {
    /// `KeyboardEvent.key`.
    pub key: String,
    /// `KeyboardEvent.code` (physical key).
    pub code: String,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyChord {
    fn primary_modifier(&self, mac_platform: bool) -> bool {
        if mac_platform {
            self.meta
        } else {
            self.ctrl
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellShortcut {
    ToggleSpotlight,
    ToggleTheme,
    OpenLaunchpad,
    CloseActiveWindow,
    MinimizeActiveWindow,
    OpenApp(AppId),
    SetFinderViewMode(FinderViewMode),
    DismissOverlays,
}

impl ShellShortcut {
    pub fn action(self) -> DesktopAction {
        match self {
            Self::ToggleSpotlight => DesktopAction::ToggleSpotlight,
            Self::ToggleTheme => DesktopAction::ToggleTheme,
            Self::OpenLaunchpad => DesktopAction::OpenLaunchpad,
            Self::CloseActiveWindow => DesktopAction::CloseActiveWindow,
            Self::MinimizeActiveWindow => DesktopAction::MinimizeActiveWindow,
            Self::OpenApp(app_id) => DesktopAction::OpenApp { app_id },
            Self::SetFinderViewMode(mode) => DesktopAction::SetFinderViewMode { mode },
            Self::DismissOverlays => DesktopAction::DismissOverlays,
        }
    }
}

fn digit(chord: &KeyChord) -> Option<usize> {
    let from_code = chord
        .code
        .strip_prefix("Digit")
        .and_then(|d| d.parse::<usize>().ok());
    from_code.or_else(|| chord.key.parse::<usize>().ok())
}

/// Maps a key chord to a shell shortcut.
///
/// Window shortcuts (`Mod+W`, `Mod+M`) only resolve while a window is active so the browser
/// keeps its own binding otherwise.
pub fn resolve_shortcut(
    chord: &KeyChord,
    mac_platform: bool,
    has_active_window: bool,
) -> Option<ShellShortcut> {
    if chord.key == "Escape" {
        return Some(ShellShortcut::DismissOverlays);
    }
    if !chord.primary_modifier(mac_platform) {
        return None;
    }

    let key = chord.key.to_lowercase();
    if key == " " || chord.code == "Space" {
        return Some(ShellShortcut::ToggleSpotlight);
    }
    if chord.alt {
        return match digit(chord) {
            Some(n @ 1..=3) => Some(ShellShortcut::SetFinderViewMode(FinderViewMode::ALL[n - 1])),
            _ => None,
        };
    }
    match key.as_str() {
        "t" if chord.shift => return Some(ShellShortcut::ToggleTheme),
        "a" if !chord.shift => return Some(ShellShortcut::OpenLaunchpad),
        "w" if has_active_window => return Some(ShellShortcut::CloseActiveWindow),
        "m" if has_active_window => return Some(ShellShortcut::MinimizeActiveWindow),
        _ => {}
    }
    match chord.key.parse::<usize>() {
        Ok(n @ 1..=9) => Some(ShellShortcut::OpenApp(NUMBERED_APPS[n - 1])),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ctrl(key: &str, code: &str) -> KeyChord {
        KeyChord {
            key: key.to_string(),
            code: code.to_string(),
            ctrl: true,
            ..KeyChord::default()
        }
    }

    #[test]
    fn primary_modifier_depends_on_platform() {
        let chord = ctrl(" ", "Space");
        assert_eq!(
            resolve_shortcut(&chord, false, false),
            Some(ShellShortcut::ToggleSpotlight)
        );
        assert_eq!(resolve_shortcut(&chord, true, false), None);

        let cmd = KeyChord {
            meta: true,
            ctrl: false,
            ..chord
        };
        assert_eq!(
            resolve_shortcut(&cmd, true, false),
            Some(ShellShortcut::ToggleSpotlight)
        );
    }

    #[test]
    fn shift_t_toggles_theme_and_plain_a_opens_launchpad() {
        let theme = KeyChord {
            shift: true,
            ..ctrl("T", "KeyT")
        };
        assert_eq!(
            resolve_shortcut(&theme, false, false),
            Some(ShellShortcut::ToggleTheme)
        );
        assert_eq!(
            resolve_shortcut(&ctrl("a", "KeyA"), false, false),
            Some(ShellShortcut::OpenLaunchpad)
        );
        let shifted_a = KeyChord {
            shift: true,
            ..ctrl("A", "KeyA")
        };
        assert_eq!(resolve_shortcut(&shifted_a, false, false), None);
    }

    #[test]
    fn window_shortcuts_need_an_active_window() {
        assert_eq!(resolve_shortcut(&ctrl("w", "KeyW"), false, false), None);
        assert_eq!(
            resolve_shortcut(&ctrl("w", "KeyW"), false, true),
            Some(ShellShortcut::CloseActiveWindow)
        );
        assert_eq!(
            resolve_shortcut(&ctrl("m", "KeyM"), false, true),
            Some(ShellShortcut::MinimizeActiveWindow)
        );
    }

    #[test]
    fn digits_open_numbered_apps() {
        assert_eq!(
            resolve_shortcut(&ctrl("1", "Digit1"), false, false),
            Some(ShellShortcut::OpenApp(AppId::Finder))
        );
        assert_eq!(
            resolve_shortcut(&ctrl("9", "Digit9"), false, false),
            Some(ShellShortcut::OpenApp(AppId::Settings))
        );
        assert_eq!(resolve_shortcut(&ctrl("0", "Digit0"), false, false), None);
    }

    #[test]
    fn alt_digits_switch_finder_view_by_physical_key() {
        let chord = KeyChord {
            key: "¡".to_string(),
            code: "Digit1".to_string(),
            meta: true,
            alt: true,
            ..KeyChord::default()
        };
        assert_eq!(
            resolve_shortcut(&chord, true, false),
            Some(ShellShortcut::SetFinderViewMode(FinderViewMode::Icon))
        );
        let column = KeyChord {
            alt: true,
            ..ctrl("3", "Digit3")
        };
        assert_eq!(
            resolve_shortcut(&column, false, false),
            Some(ShellShortcut::SetFinderViewMode(FinderViewMode::Column))
        );
    }

    #[test]
    fn escape_dismisses_without_modifier() {
        let chord = KeyChord {
            key: "Escape".to_string(),
            code: "Escape".to_string(),
            ..KeyChord::default()
        };
        assert_eq!(
            resolve_shortcut(&chord, false, false),
            Some(ShellShortcut::DismissOverlays)
        );
        assert_eq!(
            ShellShortcut::DismissOverlays.action(),
            DesktopAction::DismissOverlays
        );
    }
}
