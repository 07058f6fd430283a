//! Built-in wallpaper catalog, device filtering, and desktop background resolution.

use desktop_app_contract::{
    DeviceClass, WallpaperCategory, WallpaperDevice, WallpaperOption,
};

/// Wallpaper selected on first boot.
pub const DESKTOP_DEFAULT_WALLPAPER_ID: &str = "macbook-m3";

struct BuiltInWallpaper {
    id: &'static str,
    name: &'static str,
    path: &'static str,
    category: WallpaperCategory,
    device: WallpaperDevice,
}

const BUILTIN_WALLPAPERS: [BuiltInWallpaper; 8] = [
    BuiltInWallpaper {
        id: "macbook-m3",
        name: "Sonoma Hills",
        path: "/macbook-m3.jpg",
        category: WallpaperCategory::Default,
        device: WallpaperDevice::Desktop,
    },
    BuiltInWallpaper {
        id: "solid-purple",
        name: "Purple Gradient",
        path: "/macbook02.jpg",
        category: WallpaperCategory::Abstract,
        device: WallpaperDevice::Desktop,
    },
    BuiltInWallpaper {
        id: "solid-teal",
        name: "Teal Wave",
        path: "/macbook4.jpg",
        category: WallpaperCategory::Abstract,
        device: WallpaperDevice::Desktop,
    },
    BuiltInWallpaper {
        id: "solid-orange",
        name: "Warm Sunset",
        path: "/wallpaper.jpg",
        category: WallpaperCategory::Nature,
        device: WallpaperDevice::Desktop,
    },
    BuiltInWallpaper {
        id: "download2",
        name: "Mobile Default",
        path: "/download2.jfif",
        category: WallpaperCategory::Default,
        device: WallpaperDevice::Mobile,
    },
    BuiltInWallpaper {
        id: "solid-dark",
        name: "Dark Mode",
        path: "/download3.jfif",
        category: WallpaperCategory::Solid,
        device: WallpaperDevice::Mobile,
    },
    BuiltInWallpaper {
        id: "solid-blue",
        name: "Ocean Blue",
        path: "/download4.jfif",
        category: WallpaperCategory::Abstract,
        device: WallpaperDevice::Mobile,
    },
    BuiltInWallpaper {
        id: "download5",
        name: "Tablet Default",
        path: "/download5.jfif",
        category: WallpaperCategory::Default,
        device: WallpaperDevice::Tablet,
    },
];

const SOLID_COLORS: [(&str, &str); 5] = [
    ("solid-dark", "#1a1a2e"),
    ("solid-blue", "#0a1628"),
    ("solid-purple", "#2d1b69"),
    ("solid-teal", "#0d3b3e"),
    ("solid-orange", "#3b1a0a"),
];

const FALLBACK_SOLID_COLOR: &str = "#1a1a2e";

/// Built-in wallpapers in catalog order.
pub fn builtin_wallpapers() -> Vec<WallpaperOption> {
    BUILTIN_WALLPAPERS
        .iter()
        .map(|entry| WallpaperOption {
            id: entry.id.to_string(),
            name: entry.name.to_string(),
            thumbnail: entry.path.to_string(),
            url: entry.path.to_string(),
            category: entry.category,
            device_type: entry.device,
        })
        .collect()
}

/// Built-in wallpapers followed by user additions.
pub fn all_wallpapers(custom: &[WallpaperOption]) -> Vec<WallpaperOption> {
    let mut all = builtin_wallpapers();
    all.extend(custom.iter().cloned());
    all
}

/// Wallpapers offered on `device`.
pub fn wallpapers_for_device(
    custom: &[WallpaperOption],
    device: DeviceClass,
) -> Vec<WallpaperOption> {
    all_wallpapers(custom)
        .into_iter()
        .filter(|wp| wp.device_type.matches(device))
        .collect()
}

pub fn find_wallpaper(custom: &[WallpaperOption], wallpaper_id: &str) -> Option<WallpaperOption> {
    all_wallpapers(custom)
        .into_iter()
        .find(|wp| wp.id == wallpaper_id)
}

/// First `default`-category wallpaper targeted at `device`.
pub fn default_wallpaper_for(custom: &[WallpaperOption], device: DeviceClass) -> Option<String> {
    all_wallpapers(custom)
        .into_iter()
        .find(|wp| {
            wp.category == WallpaperCategory::Default
                && wp.device_type == WallpaperDevice::from(device)
        })
        .map(|wp| wp.id)
}

/// Replacement id when the selected wallpaper targets a different device class.
///
/// Unknown ids are left alone; background resolution falls back for them.
pub fn device_mismatch_replacement(
    custom: &[WallpaperOption],
    selected: &str,
    device: DeviceClass,
) -> Option<String> {
    let current = find_wallpaper(custom, selected)?;
    if current.device_type.matches(device) {
        return None;
    }
    default_wallpaper_for(custom, device)
}

pub fn solid_color(wallpaper_id: &str) -> &'static str {
    SOLID_COLORS
        .iter()
        .find(|(id, _)| *id == wallpaper_id)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_SOLID_COLOR)
}

fn fallback_url(device: DeviceClass) -> &'static str {
    match device {
        DeviceClass::Mobile => "/download2.jfif",
        DeviceClass::Tablet => "/download5.jfif",
        DeviceClass::Desktop => "/macbook-m3.jpg",
    }
}

/// Resolved desktop background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopBackground {
    Image { url: String },
    Color { color: &'static str },
}

impl DesktopBackground {
    /// Inline CSS for the desktop surface.
    pub fn css(&self) -> String {
        match self {
            Self::Image { url } => format!(
                "background-image:url('{url}');background-size:cover;\
                 background-position:center;background-repeat:no-repeat;"
            ),
            Self::Color { color } => {
                format!("background-color:{color};background-image:none;")
            }
        }
    }
}

/// Resolves the background for the selected wallpaper, falling back to the device default image.
pub fn background_for(
    custom: &[WallpaperOption],
    selected: &str,
    device: DeviceClass,
) -> DesktopBackground {
    match find_wallpaper(custom, selected) {
        Some(wp) if wp.category == WallpaperCategory::Solid => DesktopBackground::Color {
            color: solid_color(&wp.id),
        },
        Some(wp) => DesktopBackground::Image { url: wp.url },
        None => DesktopBackground::Image {
            url: fallback_url(device).to_string(),
        },
    }
}

/// Builds a user wallpaper for the current device class.
pub fn custom_wallpaper(
    name: &str,
    url: &str,
    device: DeviceClass,
    created_at_ms: u64,
) -> WallpaperOption {
    WallpaperOption {
        id: format!("custom-{created_at_ms}"),
        name: name.to_string(),
        thumbnail: url.to_string(),
        url: url.to_string(),
        category: WallpaperCategory::Nature,
        device_type: device.into(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn device_filter_includes_only_matching_entries() {
        let ids: Vec<_> = wallpapers_for_device(&[], DeviceClass::Mobile)
            .into_iter()
            .map(|wp| wp.id)
            .collect();
        assert_eq!(ids, vec!["download2", "solid-dark", "solid-blue"]);
        assert_eq!(wallpapers_for_device(&[], DeviceClass::Tablet).len(), 1);
        assert_eq!(wallpapers_for_device(&[], DeviceClass::Desktop).len(), 4);
    }

    #[test]
    fn mismatched_selection_switches_to_device_default() {
        assert_eq!(
            device_mismatch_replacement(&[], "macbook-m3", DeviceClass::Mobile),
            Some("download2".to_string())
        );
        assert_eq!(
            device_mismatch_replacement(&[], "solid-teal", DeviceClass::Desktop),
            None
        );
        assert_eq!(
            device_mismatch_replacement(&[], "missing", DeviceClass::Tablet),
            None
        );
    }

    #[test]
    fn solid_category_renders_color_and_unknown_ids_fall_back() {
        assert_eq!(
            background_for(&[], "solid-dark", DeviceClass::Mobile),
            DesktopBackground::Color { color: "#1a1a2e" }
        );
        assert_eq!(
            background_for(&[], "solid-teal", DeviceClass::Desktop),
            DesktopBackground::Image {
                url: "/macbook4.jpg".to_string()
            }
        );
        assert_eq!(
            background_for(&[], "gone", DeviceClass::Tablet),
            DesktopBackground::Image {
                url: "/download5.jfif".to_string()
            }
        );
        assert!(background_for(&[], "solid-dark", DeviceClass::Mobile)
            .css()
            .contains("background-color:#1a1a2e"));
    }

    #[test]
    fn custom_wallpapers_target_the_current_device() {
        let custom = vec![custom_wallpaper(
            "Beach",
            "https://img.example/beach.jpg",
            DeviceClass::Tablet,
            1_700_000_000_000,
        )];
        assert_eq!(custom[0].id, "custom-1700000000000");
        assert_eq!(custom[0].device_type, WallpaperDevice::Tablet);
        assert_eq!(wallpapers_for_device(&custom, DeviceClass::Tablet).len(), 2);
        assert_eq!(
            background_for(&custom, "custom-1700000000000", DeviceClass::Tablet),
            DesktopBackground::Image {
                url: "https://img.example/beach.jpg".to_string()
            }
        );
    }
}
