//! Shared contract types between the desktop window manager runtime and the apps it hosts.
//!
//! Apps never touch runtime state directly: they receive an [`AppMountContext`] with read-only
//! appearance signals and an [`AppServices`] bundle that turns calls into [`AppCommand`]
//! values for the runtime to reduce.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::{fmt, str::FromStr};

use leptos::{Callable, Callback, Signal, View};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stable identifier for a runtime-managed window.
pub type WindowRuntimeId = u64;

/// Catalog identifier of a desktop app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppId {
    /// File browser.
    Finder,
    /// Terminal emulator.
    Terminal,
    /// Photo gallery ("Photos").
    Gallery,
    /// Contact form.
    Contact,
    /// Appearance and wallpaper settings.
    Settings,
    /// Embedded Spotify player.
    Spotify,
    /// Embedded Youtube player.
    Youtube,
    /// Journal entries.
    Journal,
    /// Camera capture.
    Camera,
    /// Resume viewer.
    Resume,
    /// About page.
    About,
    /// Project showcase.
    Projects,
    /// Skills overview.
    Skills,
    /// Work experience timeline.
    Experience,
}

impl AppId {
    /// Every app in catalog (dock) order.
    pub const ALL: [AppId; 14] = [
        Self::Finder,
        Self::Terminal,
        Self::Gallery,
        Self::Contact,
        Self::Settings,
        Self::Spotify,
        Self::Youtube,
        Self::Journal,
        Self::Camera,
        Self::Resume,
        Self::About,
        Self::Projects,
        Self::Skills,
        Self::Experience,
    ];

    /// Stable string key (`"terminal"`, `"finder"`, ...).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Finder => "finder",
            Self::Terminal => "terminal",
            Self::Gallery => "gallery",
            Self::Contact => "contact",
            Self::Settings => "settings",
            Self::Spotify => "spotify",
            Self::Youtube => "youtube",
            Self::Journal => "journal",
            Self::Camera => "camera",
            Self::Resume => "resume",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Experience => "experience",
        }
    }

    /// Parses a key case-insensitively. `"photos"` is accepted as an alias for the gallery.
    pub fn parse(raw: &str) -> Option<Self> {
        let key = raw.trim().to_ascii_lowercase();
        if key == "photos" {
            return Some(Self::Gallery);
        }
        Self::ALL.into_iter().find(|app| app.as_str() == key)
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown app `{s}`"))
    }
}

/// User color-scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Always dark.
    #[default]
    Dark,
    /// Always light.
    Light,
    /// Follow the host `prefers-color-scheme`.
    Auto,
}

impl ThemeMode {
    /// Dark becomes light; light and auto become dark.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light | Self::Auto => Self::Dark,
        }
    }

    /// Resolves the effective scheme given the host preference.
    pub const fn is_dark(self, host_prefers_dark: bool) -> bool {
        match self {
            Self::Dark => true,
            Self::Light => false,
            Self::Auto => host_prefers_dark,
        }
    }

    /// Stable string token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Auto => "auto",
        }
    }
}

/// Viewport size class used for wallpaper filtering and dock behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    /// Narrower than 768px.
    Mobile,
    /// 768px up to (not including) 1024px.
    Tablet,
    /// 1024px and wider.
    #[default]
    Desktop,
}

impl DeviceClass {
    /// Classifies a viewport width.
    pub const fn from_width(width: i32) -> Self {
        if width < 768 {
            Self::Mobile
        } else if width < 1024 {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }

    /// Stable string token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }
}

/// Wallpaper grouping shown in Settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallpaperCategory {
    /// Device default images.
    Default,
    /// Photographic.
    Nature,
    /// Gradients and shapes.
    Abstract,
    /// Rendered as a flat background color instead of an image.
    Solid,
}

/// Devices a wallpaper is offered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallpaperDevice {
    /// Phones.
    Mobile,
    /// Tablets.
    Tablet,
    /// Desktops and laptops.
    Desktop,
    /// Every device class.
    All,
}

impl WallpaperDevice {
    /// Whether a wallpaper targeted at `self` is offered on `device`.
    pub const fn matches(self, device: DeviceClass) -> bool {
        matches!(
            (self, device),
            (Self::All, _)
                | (Self::Mobile, DeviceClass::Mobile)
                | (Self::Tablet, DeviceClass::Tablet)
                | (Self::Desktop, DeviceClass::Desktop)
        )
    }
}

impl From<DeviceClass> for WallpaperDevice {
    fn from(value: DeviceClass) -> Self {
        match value {
            DeviceClass::Mobile => Self::Mobile,
            DeviceClass::Tablet => Self::Tablet,
            DeviceClass::Desktop => Self::Desktop,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Selectable wallpaper (built-in or user-added).
pub struct WallpaperOption {
    /// Stable id (`custom-<unix ms>` for user additions).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Thumbnail URL.
    pub thumbnail: String,
    /// Full-size URL.
    pub url: String,
    /// Category.
    pub category: WallpaperCategory,
    /// Target devices.
    #[serde(rename = "deviceType")]
    pub device_type: WallpaperDevice,
}

/// Finder presentation, switched from the View menu or keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinderViewMode {
    /// Icon grid.
    #[default]
    Icon,
    /// Detail rows.
    List,
    /// Miller columns.
    Column,
}

impl FinderViewMode {
    /// Menu order.
    pub const ALL: [FinderViewMode; 3] = [Self::Icon, Self::List, Self::Column];

    /// View menu label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Icon => "as Icons",
            Self::List => "as List",
            Self::Column => "as Columns",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Commands emitted by app services to the desktop runtime.
pub enum AppCommand {
    /// Open (or restore and focus) an app window.
    OpenApp {
        /// Target app.
        app_id: AppId,
    },
    /// Close the calling window.
    CloseWindow,
    /// Minimize the calling window.
    MinimizeWindow,
    /// Shallow-merge keys into the calling window's data bag.
    MergeWindowData {
        /// JSON object whose keys overwrite existing data keys.
        data: Value,
    },
    /// Flip dark/light.
    ToggleTheme,
    /// Set an explicit theme mode.
    SetThemeMode {
        /// New mode.
        mode: ThemeMode,
    },
    /// Select a wallpaper by id.
    SelectWallpaper {
        /// Wallpaper id.
        wallpaper_id: String,
    },
    /// Add a custom wallpaper for the current device class and select it.
    AddCustomWallpaper {
        /// Display name.
        name: String,
        /// Image URL (remote or data URL).
        url: String,
    },
    /// Open a URL outside the shell.
    OpenExternalUrl {
        /// Target URL.
        url: String,
    },
    /// Switch the Finder presentation.
    SetFinderViewMode {
        /// New mode.
        mode: FinderViewMode,
    },
}

#[derive(Clone, Copy)]
/// Window integration for the calling app.
pub struct WindowService {
    sender: Callback<AppCommand>,
}

impl WindowService {
    /// Closes the calling window.
    pub fn close(&self) {
        self.sender.call(AppCommand::CloseWindow);
    }

    /// Minimizes the calling window.
    pub fn minimize(&self) {
        self.sender.call(AppCommand::MinimizeWindow);
    }

    /// Merges transient per-window state into the window data bag.
    pub fn merge_data(&self, data: Value) {
        self.sender.call(AppCommand::MergeWindowData { data });
    }
}

#[derive(Clone, Copy)]
/// Theme query and control.
pub struct ThemeService {
    sender: Callback<AppCommand>,
    /// Stored theme preference.
    pub mode: Signal<ThemeMode>,
    /// Effective dark flag after resolving `auto`.
    pub is_dark: Signal<bool>,
}

impl ThemeService {
    /// Flips dark/light.
    pub fn toggle(&self) {
        self.sender.call(AppCommand::ToggleTheme);
    }

    /// Sets an explicit theme mode.
    pub fn set_mode(&self, mode: ThemeMode) {
        self.sender.call(AppCommand::SetThemeMode { mode });
    }
}

#[derive(Clone, Copy)]
/// Wallpaper query and control.
pub struct WallpaperService {
    sender: Callback<AppCommand>,
    /// Current device class.
    pub device_class: Signal<DeviceClass>,
    /// Selected wallpaper id.
    pub selected: Signal<String>,
    /// Wallpapers offered on the current device class (built-in then custom).
    pub available: Signal<Vec<WallpaperOption>>,
}

impl WallpaperService {
    /// Selects a wallpaper.
    pub fn select(&self, wallpaper_id: impl Into<String>) {
        self.sender.call(AppCommand::SelectWallpaper {
            wallpaper_id: wallpaper_id.into(),
        });
    }

    /// Adds and selects a custom wallpaper.
    pub fn add_custom(&self, name: impl Into<String>, url: impl Into<String>) {
        self.sender.call(AppCommand::AddCustomWallpaper {
            name: name.into(),
            url: url.into(),
        });
    }
}

#[derive(Clone, Copy)]
/// Shell-level navigation.
pub struct ShellService {
    sender: Callback<AppCommand>,
    /// Current Finder presentation.
    pub finder_view_mode: Signal<FinderViewMode>,
}

impl ShellService {
    /// Opens another app.
    pub fn open_app(&self, app_id: AppId) {
        self.sender.call(AppCommand::OpenApp { app_id });
    }

    /// Opens a URL outside the shell.
    pub fn open_external_url(&self, url: impl Into<String>) {
        self.sender
            .call(AppCommand::OpenExternalUrl { url: url.into() });
    }

    /// Switches the Finder presentation.
    pub fn set_finder_view_mode(&self, mode: FinderViewMode) {
        self.sender.call(AppCommand::SetFinderViewMode { mode });
    }
}

#[derive(Clone, Copy)]
/// Injected app services bundle.
pub struct AppServices {
    /// Window integration.
    pub window: WindowService,
    /// Theme query/control.
    pub theme: ThemeService,
    /// Wallpaper query/control.
    pub wallpaper: WallpaperService,
    /// Shell navigation.
    pub shell: ShellService,
    sender: Callback<AppCommand>,
}

/// Reactive runtime state handed to [`AppServices::new`].
#[derive(Clone, Copy)]
pub struct AppearanceSignals {
    /// Stored theme preference.
    pub theme_mode: Signal<ThemeMode>,
    /// Effective dark flag.
    pub is_dark: Signal<bool>,
    /// Current device class.
    pub device_class: Signal<DeviceClass>,
    /// Selected wallpaper id.
    pub selected_wallpaper: Signal<String>,
    /// Wallpapers offered on the current device class.
    pub wallpapers: Signal<Vec<WallpaperOption>>,
    /// Current Finder presentation.
    pub finder_view_mode: Signal<FinderViewMode>,
}

impl AppServices {
    /// Creates service handles from the runtime command callback.
    pub fn new(sender: Callback<AppCommand>, appearance: AppearanceSignals) -> Self {
        Self {
            window: WindowService { sender },
            theme: ThemeService {
                sender,
                mode: appearance.theme_mode,
                is_dark: appearance.is_dark,
            },
            wallpaper: WallpaperService {
                sender,
                device_class: appearance.device_class,
                selected: appearance.selected_wallpaper,
                available: appearance.wallpapers,
            },
            shell: ShellService {
                sender,
                finder_view_mode: appearance.finder_view_mode,
            },
            sender,
        }
    }

    /// Low-level transport send.
    pub fn send(&self, command: AppCommand) {
        self.sender.call(command);
    }
}

#[derive(Clone)]
/// App mount context injected by the desktop runtime per window instance.
pub struct AppMountContext {
    /// Catalog id of the mounted app.
    pub app_id: AppId,
    /// Runtime window id.
    pub window_id: WindowRuntimeId,
    /// Window data bag at mount time.
    pub restored_data: Value,
    /// Runtime service bundle.
    pub services: AppServices,
}

/// Static app mount function used by the runtime registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mountable app module referenced by the runtime app registry.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use leptos::{create_runtime, SignalGet};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn app_ids_parse_case_insensitively_with_gallery_alias() {
        for app in AppId::ALL {
            assert_eq!(AppId::parse(app.as_str()), Some(app));
        }
        assert_eq!(AppId::parse(" Terminal "), Some(AppId::Terminal));
        assert_eq!(AppId::parse("photos"), Some(AppId::Gallery));
        assert_eq!(AppId::parse("calculator"), None);
        assert!("nope".parse::<AppId>().is_err());
    }

    #[test]
    fn theme_toggle_flips_dark_and_light_and_sends_auto_to_dark() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Auto.toggled(), ThemeMode::Dark);
        assert!(ThemeMode::Auto.is_dark(true));
        assert!(!ThemeMode::Auto.is_dark(false));
    }

    #[test]
    fn device_class_breakpoints() {
        assert_eq!(DeviceClass::from_width(375), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_width(768), DeviceClass::Tablet);
        assert_eq!(DeviceClass::from_width(1023), DeviceClass::Tablet);
        assert_eq!(DeviceClass::from_width(1024), DeviceClass::Desktop);
        assert!(WallpaperDevice::All.matches(DeviceClass::Mobile));
        assert!(!WallpaperDevice::Desktop.matches(DeviceClass::Tablet));
    }

    #[test]
    fn wallpaper_option_uses_device_type_key_on_the_wire() {
        let option = WallpaperOption {
            id: "custom-1".to_string(),
            name: "Mine".to_string(),
            thumbnail: "/a.jpg".to_string(),
            url: "/a.jpg".to_string(),
            category: WallpaperCategory::Nature,
            device_type: WallpaperDevice::Desktop,
        };
        let json = serde_json::to_value(&option).expect("serialize");
        assert_eq!(json["deviceType"], "desktop");
        assert_eq!(json["category"], "nature");
    }

    #[test]
    fn services_forward_commands_to_sender() {
        let runtime = create_runtime();
        let sent = Rc::new(RefCell::new(Vec::new()));
        let sink = sent.clone();
        let sender = Callback::new(move |command: AppCommand| sink.borrow_mut().push(command));
        let services = AppServices::new(
            sender,
            AppearanceSignals {
                theme_mode: Signal::derive(|| ThemeMode::Light),
                is_dark: Signal::derive(|| false),
                device_class: Signal::derive(|| DeviceClass::Desktop),
                selected_wallpaper: Signal::derive(|| "macbook-m3".to_string()),
                wallpapers: Signal::derive(Vec::new),
                finder_view_mode: Signal::derive(|| FinderViewMode::List),
            },
        );

        services.shell.open_app(AppId::Projects);
        services.theme.toggle();
        services.wallpaper.select("solid-teal");
        services.window.minimize();
        services.shell.set_finder_view_mode(FinderViewMode::Column);

        assert_eq!(services.theme.mode.get(), ThemeMode::Light);
        assert_eq!(services.shell.finder_view_mode.get(), FinderViewMode::List);
        assert_eq!(
            *sent.borrow(),
            vec![
                AppCommand::OpenApp {
                    app_id: AppId::Projects
                },
                AppCommand::ToggleTheme,
                AppCommand::SelectWallpaper {
                    wallpaper_id: "solid-teal".to_string()
                },
                AppCommand::MinimizeWindow,
                AppCommand::SetFinderViewMode {
                    mode: FinderViewMode::Column
                },
            ]
        );
        runtime.dispose();
    }
}
