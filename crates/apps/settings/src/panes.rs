//! Pure data behind the settings panes.

use desktop_app_contract::{WallpaperCategory, WallpaperOption};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sidebar sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsSection {
    /// Theme mode.
    #[default]
    Appearance,
    /// Wallpaper picker and custom wallpapers.
    Wallpaper,
    /// Keyboard shortcut reference.
    Shortcuts,
    /// About this desktop.
    About,
}

impl SettingsSection {
    /// Sidebar order.
    pub const ALL: [Self; 4] = [Self::Appearance, Self::Wallpaper, Self::Shortcuts, Self::About];

    /// Sidebar label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Appearance => "Appearance",
            Self::Wallpaper => "Wallpaper",
            Self::Shortcuts => "Keyboard Shortcuts",
            Self::About => "About",
        }
    }
}

/// Category heading shown in the wallpaper grid.
pub const fn category_label(category: WallpaperCategory) -> &'static str {
    match category {
        WallpaperCategory::Default => "Default",
        WallpaperCategory::Nature => "Nature",
        WallpaperCategory::Abstract => "Abstract",
        WallpaperCategory::Solid => "Solid Colors",
    }
}

/// Groups wallpapers by category in display order, keeping input order within a group and
/// omitting empty groups.
pub fn group_wallpapers(
    wallpapers: &[WallpaperOption],
) -> Vec<(WallpaperCategory, Vec<WallpaperOption>)> {
    [
        WallpaperCategory::Default,
        WallpaperCategory::Nature,
        WallpaperCategory::Abstract,
        WallpaperCategory::Solid,
    ]
    .into_iter()
    .filter_map(|category| {
        let members: Vec<_> = wallpapers
            .iter()
            .filter(|wallpaper| wallpaper.category == category)
            .cloned()
            .collect();
        (!members.is_empty()).then_some((category, members))
    })
    .collect()
}

/// Rejections for the custom wallpaper form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustomWallpaperError {
    /// Nothing was entered.
    #[error("Enter an image URL")]
    EmptyUrl,
    /// The URL is not http(s), a data image or a site-relative path.
    #[error("Use an https://, http://, data:image or /path URL")]
    UnsupportedUrl,
}

/// Normalized custom wallpaper submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomWallpaperInput {
    /// Display name; "Custom" when left blank.
    pub name: String,
    /// Image URL.
    pub url: String,
}

/// Validates the custom wallpaper form.
pub fn parse_custom_wallpaper(
    name: &str,
    url: &str,
) -> Result<CustomWallpaperInput, CustomWallpaperError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(CustomWallpaperError::EmptyUrl);
    }
    let lower = url.to_ascii_lowercase();
    let supported = lower.starts_with("https://")
        || lower.starts_with("http://")
        || lower.starts_with("data:image/")
        || (url.starts_with('/') && !url.starts_with("//"));
    if !supported {
        return Err(CustomWallpaperError::UnsupportedUrl);
    }
    let name = name.trim();
    Ok(CustomWallpaperInput {
        name: if name.is_empty() { "Custom" } else { name }.to_string(),
        url: url.to_string(),
    })
}

/// One row of the shortcut reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortcutRow {
    /// Keys after the platform modifier (empty modifier rows use `bare`).
    pub keys: &'static str,
    /// Whether the platform modifier is held.
    pub modified: bool,
    /// What the shortcut does.
    pub action: &'static str,
}

const fn row(keys: &'static str, action: &'static str) -> ShortcutRow {
    ShortcutRow {
        keys,
        modified: true,
        action,
    }
}

/// Global desktop shortcuts.
pub const SHORTCUTS: [ShortcutRow; 12] = [
    row("Space", "Spotlight search"),
    row("Shift+T", "Toggle dark mode"),
    row("A", "Launchpad"),
    row("W", "Close window"),
    row("M", "Minimize window"),
    row(
        "1 to 9",
        "Finder, Terminal, About, Projects, Skills, Experience, Resume, Contact, Settings",
    ),
    row("Alt+1", "Finder icon view"),
    row("Alt+2", "Finder list view"),
    row("Alt+3", "Finder column view"),
    ShortcutRow {
        keys: "Escape",
        modified: false,
        action: "Close Spotlight and Launchpad",
    },
    ShortcutRow {
        keys: "Up / Down",
        modified: false,
        action: "Move the Spotlight selection",
    },
    ShortcutRow {
        keys: "Enter",
        modified: false,
        action: "Open the selected Spotlight result",
    },
];

/// Renders a row's key chord for the given platform.
pub fn chord_label(row: &ShortcutRow, mac: bool) -> String {
    if !row.modified {
        return row.keys.to_string();
    }
    let modifier = if mac { "⌘" } else { "Ctrl+" };
    format!("{modifier}{}", row.keys)
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::WallpaperDevice;
    use pretty_assertions::assert_eq;

    use super::*;

    fn wallpaper(id: &str, category: WallpaperCategory) -> WallpaperOption {
        WallpaperOption {
            id: id.to_string(),
            name: id.to_string(),
            thumbnail: format!("/{id}.jpg"),
            url: format!("/{id}.jpg"),
            category,
            device_type: WallpaperDevice::Desktop,
        }
    }

    #[test]
    fn groups_follow_category_order_and_skip_empty_ones() {
        let groups = group_wallpapers(&[
            wallpaper("teal", WallpaperCategory::Solid),
            wallpaper("m3", WallpaperCategory::Default),
            wallpaper("navy", WallpaperCategory::Solid),
        ]);
        let summary: Vec<_> = groups
            .iter()
            .map(|(category, members)| {
                (
                    *category,
                    members.iter().map(|w| w.id.as_str()).collect::<Vec<_>>(),
                )
            })
            .collect();
        assert_eq!(
            summary,
            vec![
                (WallpaperCategory::Default, vec!["m3"]),
                (WallpaperCategory::Solid, vec!["teal", "navy"]),
            ]
        );
    }

    #[test]
    fn custom_wallpaper_form_validation() {
        assert_eq!(
            parse_custom_wallpaper("", "  https://img.example/a.jpg "),
            Ok(CustomWallpaperInput {
                name: "Custom".to_string(),
                url: "https://img.example/a.jpg".to_string(),
            })
        );
        assert_eq!(
            parse_custom_wallpaper(" Dunes ", "/wallpapers/dunes.jpg").map(|input| input.name),
            Ok("Dunes".to_string())
        );
        assert!(parse_custom_wallpaper("x", "data:image/png;base64,AAAA").is_ok());
        assert_eq!(parse_custom_wallpaper("x", " "), Err(CustomWallpaperError::EmptyUrl));
        assert_eq!(
            parse_custom_wallpaper("x", "javascript:alert(1)"),
            Err(CustomWallpaperError::UnsupportedUrl)
        );
        assert_eq!(
            parse_custom_wallpaper("x", "//evil.example/a.jpg"),
            Err(CustomWallpaperError::UnsupportedUrl)
        );
    }

    #[test]
    fn chord_labels_use_the_platform_modifier() {
        assert_eq!(chord_label(&SHORTCUTS[0], true), "⌘Space");
        assert_eq!(chord_label(&SHORTCUTS[1], false), "Ctrl+Shift+T");
        assert_eq!(chord_label(&SHORTCUTS[9], true), "Escape");
    }
}
