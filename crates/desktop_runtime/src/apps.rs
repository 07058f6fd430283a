//! Static app catalog and the app id → mountable module lookup.

use desktop_app_contract::{AppId, AppModule};

use crate::model::{WindowSize, FALLBACK_WINDOW_SIZE};

#[derive(Debug, Clone, Copy)]
pub struct AppDescriptor {
    pub app_id: AppId,
    /// Dock, launchpad, spotlight and window title label.
    pub name: &'static str,
    /// File name under `/icons/`.
    pub icon: &'static str,
    pub accent_color: &'static str,
    pub default_size: WindowSize,
    pub show_on_desktop: bool,
    pub module: AppModule,
}

impl AppDescriptor {
    pub fn icon_url(&self) -> String {
        format!("/icons/{}", self.icon)
    }
}

const fn size(width: i32, height: i32) -> WindowSize {
    WindowSize { width, height }
}

const APP_REGISTRY: [AppDescriptor; 14] = [
    AppDescriptor {
        app_id: AppId::Finder,
        name: "Finder",
        icon: "Finder.png",
        accent_color: "#007aff",
        default_size: size(850, 500),
        show_on_desktop: false,
        module: AppModule::new(desktop_app_portfolio::mount_finder_app),
    },
    AppDescriptor {
        app_id: AppId::Terminal,
        name: "Terminal",
        icon: "Terminal.png",
        accent_color: "#34c759",
        default_size: size(750, 500),
        show_on_desktop: false,
        module: AppModule::new(desktop_app_terminal::mount_terminal_app),
    },
    AppDescriptor {
        app_id: AppId::Gallery,
        name: "Photos",
        icon: "Photo.png",
        accent_color: "#ff9500",
        default_size: size(700, 500),
        show_on_desktop: false,
        module: AppModule::new(desktop_app_portfolio::mount_gallery_app),
    },
    AppDescriptor {
        app_id: AppId::Contact,
        name: "Contact",
        icon: "Contact.png",
        accent_color: "#007aff",
        default_size: size(800, 500),
        show_on_desktop: false,
        module: AppModule::new(desktop_app_portfolio::mount_contact_app),
    },
    AppDescriptor {
        app_id: AppId::Settings,
        name: "Settings",
        icon: "Setting.png",
        accent_color: "#8e8e93",
        default_size: size(700, 500),
        show_on_desktop: false,
        module: AppModule::new(desktop_app_settings::mount_settings_app),
    },
    AppDescriptor {
        app_id: AppId::Spotify,
        name: "Spotify",
        icon: "Spotify.png",
        accent_color: "#1db954",
        default_size: size(850, 500),
        show_on_desktop: false,
        module: AppModule::new(desktop_app_portfolio::mount_spotify_app),
    },
    AppDescriptor {
        app_id: AppId::Youtube,
        name: "Youtube",
        icon: "Youtube.png",
        accent_color: "#ff0000",
        default_size: size(1100, 500),
        show_on_desktop: false,
        module: AppModule::new(desktop_app_portfolio::mount_youtube_app),
    },
    AppDescriptor {
        app_id: AppId::Journal,
        name: "Journal",
        icon: "journal.png",
        accent_color: "#ff6b35",
        default_size: size(900, 500),
        show_on_desktop: false,
        module: AppModule::new(desktop_app_portfolio::mount_journal_app),
    },
    AppDescriptor {
        app_id: AppId::Camera,
        name: "Camera",
        icon: "Camera.png",
        accent_color: "#8e8e93",
        default_size: size(600, 500),
        show_on_desktop: false,
        module: AppModule::new(desktop_app_portfolio::mount_camera_app),
    },
    AppDescriptor {
        app_id: AppId::Resume,
        name: "Resume",
        icon: "PDF.png",
        accent_color: "#1db954",
        default_size: size(900, 500),
        show_on_desktop: true,
        module: AppModule::new(desktop_app_portfolio::mount_resume_app),
    },
    AppDescriptor {
        app_id: AppId::About,
        name: "About Me",
        icon: "Folder.png",
        accent_color: "#ff9500",
        default_size: size(700, 500),
        show_on_desktop: true,
        module: AppModule::new(desktop_app_portfolio::mount_about_app),
    },
    AppDescriptor {
        app_id: AppId::Projects,
        name: "Projects",
        icon: "Folder.png",
        accent_color: "#af52de",
        default_size: size(750, 500),
        show_on_desktop: true,
        module: AppModule::new(desktop_app_portfolio::mount_projects_app),
    },
    AppDescriptor {
        app_id: AppId::Skills,
        name: "Skills",
        icon: "Folder.png",
        accent_color: "#ff3b30",
        default_size: size(800, 500),
        show_on_desktop: true,
        module: AppModule::new(desktop_app_portfolio::mount_skills_app),
    },
    AppDescriptor {
        app_id: AppId::Experience,
        name: "Experience",
        icon: "Folder.png",
        accent_color: "#5ac8fa",
        default_size: size(800, 500),
        show_on_desktop: true,
        module: AppModule::new(desktop_app_portfolio::mount_experience_app),
    },
];

/// Order of the desktop icon column.
const DESKTOP_ICON_ORDER: [AppId; 5] = [
    AppId::About,
    AppId::Projects,
    AppId::Skills,
    AppId::Experience,
    AppId::Resume,
];

pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

pub fn app_descriptor(app_id: AppId) -> Option<&'static AppDescriptor> {
    app_registry().iter().find(|entry| entry.app_id == app_id)
}

pub fn app_name(app_id: AppId) -> &'static str {
    app_descriptor(app_id)
        .map(|entry| entry.name)
        .unwrap_or_else(|| app_id.as_str())
}

pub fn default_window_size(app_id: AppId) -> WindowSize {
    app_descriptor(app_id)
        .map(|entry| entry.default_size)
        .unwrap_or(FALLBACK_WINDOW_SIZE)
}

/// Desktop icon entries with their fixed top-left positions.
pub fn desktop_icons() -> Vec<(&'static AppDescriptor, (i32, i32))> {
    DESKTOP_ICON_ORDER
        .iter()
        .filter_map(|app_id| app_descriptor(*app_id))
        .filter(|entry| entry.show_on_desktop)
        .enumerate()
        .map(|(index, entry)| (entry, (20, 20 + index as i32 * 100)))
        .collect()
}

/// Case-insensitive substring match on the display name; blank queries match everything.
pub fn filter_apps(query: &str) -> Vec<&'static AppDescriptor> {
    let needle = query.trim().to_lowercase();
    app_registry()
        .iter()
        .filter(|entry| needle.is_empty() || entry.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn registry_covers_every_app_once() {
        for app_id in AppId::ALL {
            assert_eq!(
                app_registry()
                    .iter()
                    .filter(|entry| entry.app_id == app_id)
                    .count(),
                1,
                "{app_id}"
            );
        }
    }

    #[test]
    fn default_sizes_match_catalog() {
        assert_eq!(default_window_size(AppId::Youtube), size(1100, 500));
        assert_eq!(default_window_size(AppId::Camera), size(600, 500));
        assert_eq!(app_name(AppId::Gallery), "Photos");
        assert_eq!(app_name(AppId::About), "About Me");
    }

    #[test]
    fn desktop_icons_stack_in_a_column() {
        let icons: Vec<_> = desktop_icons()
            .into_iter()
            .map(|(entry, pos)| (entry.app_id, pos))
            .collect();
        assert_eq!(
            icons,
            vec![
                (AppId::About, (20, 20)),
                (AppId::Projects, (20, 120)),
                (AppId::Skills, (20, 220)),
                (AppId::Experience, (20, 320)),
                (AppId::Resume, (20, 420)),
            ]
        );
    }

    #[test]
    fn filter_apps_matches_name_substrings() {
        let names: Vec<_> = filter_apps("  PHO ").iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Photos"]);
        assert_eq!(filter_apps("").len(), 14);
        assert!(filter_apps("zzz").is_empty());
    }
}
