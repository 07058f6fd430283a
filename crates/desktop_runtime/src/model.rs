pub use desktop_app_contract::FinderViewMode;
use desktop_app_contract::{AppId, DeviceClass, ThemeMode, WallpaperOption};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fallback size for apps without a registered default.
pub const FALLBACK_WINDOW_SIZE: WindowSize = WindowSize {
    width: 600,
    height: 400,
};

/// Layout constants shared by the window manager and the shell chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellMetrics {
    pub menu_bar_height: i32,
    pub dock_height: i32,
    /// Dock band reserved below a window while it is dragged.
    pub drag_dock_height: i32,
    pub edge_padding: i32,
    /// Minimum left offset of a centered window.
    pub center_margin: i32,
    /// Viewports at or below this width are compact (every window fullscreen).
    pub compact_breakpoint: i32,
    pub tablet_breakpoint: i32,
    pub min_window_size: WindowSize,
    pub z_index_base: u32,
    /// Distance from the bottom edge that reveals an auto-hidden dock.
    pub dock_reveal_threshold: i32,
}

impl Default for ShellMetrics {
    fn default() -> Self {
        Self {
            menu_bar_height: 28,
            dock_height: 80,
            drag_dock_height: 90,
            edge_padding: 6,
            center_margin: 20,
            compact_breakpoint: 1024,
            tablet_breakpoint: 768,
            min_window_size: WindowSize {
                width: 400,
                height: 350,
            },
            z_index_base: 100,
            dock_reveal_threshold: 100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: i32,
    pub height: i32,
}

/// Browser viewport in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1440,
            height: 900,
        }
    }
}

impl Viewport {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn is_compact(self, metrics: &ShellMetrics) -> bool {
        self.width <= metrics.compact_breakpoint
    }

    pub fn device_class(self) -> DeviceClass {
        DeviceClass::from_width(self.width)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub app_id: AppId,
    pub title: String,
    pub position: WindowPosition,
    pub size: WindowSize,
    /// Size restored when leaving the maximized state.
    pub default_size: WindowSize,
    pub min_size: WindowSize,
    pub z_index: u32,
    pub is_minimized: bool,
    pub is_maximized: bool,
    /// Free-form per-window app data, shallow-merged on update.
    pub data: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpotlightState {
    pub open: bool,
    pub query: String,
    pub selected_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LaunchpadState {
    pub open: bool,
    pub query: String,
}

/// Persisted appearance preferences plus the host color-scheme probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppearanceState {
    pub theme_mode: ThemeMode,
    pub host_prefers_dark: bool,
    pub selected_wallpaper: String,
    pub custom_wallpapers: Vec<WallpaperOption>,
}

impl Default for AppearanceState {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::Dark,
            host_prefers_dark: true,
            selected_wallpaper: crate::wallpaper::DESKTOP_DEFAULT_WALLPAPER_ID.to_string(),
            custom_wallpapers: Vec::new(),
        }
    }
}

impl AppearanceState {
    pub fn is_dark(&self) -> bool {
        self.theme_mode.is_dark(self.host_prefers_dark)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopState {
    pub metrics: ShellMetrics,
    pub viewport: Viewport,
    pub next_window_id: u64,
    /// Last z-index handed out; every raise takes the next value.
    pub z_index_counter: u32,
    /// Windows in insertion order.
    pub windows: Vec<WindowRecord>,
    pub active_window_id: Option<WindowId>,
    pub spotlight: SpotlightState,
    pub launchpad: LaunchpadState,
    pub finder_view_mode: FinderViewMode,
    pub appearance: AppearanceState,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::new(ShellMetrics::default(), Viewport::default())
    }
}

impl DesktopState {
    pub fn new(metrics: ShellMetrics, viewport: Viewport) -> Self {
        Self {
            metrics,
            viewport,
            next_window_id: 1,
            z_index_counter: metrics.z_index_base,
            windows: Vec::new(),
            active_window_id: None,
            spotlight: SpotlightState::default(),
            launchpad: LaunchpadState::default(),
            finder_view_mode: FinderViewMode::default(),
            appearance: AppearanceState::default(),
        }
    }

    pub fn is_compact(&self) -> bool {
        self.viewport.is_compact(&self.metrics)
    }

    pub fn device_class(&self) -> DeviceClass {
        self.viewport.device_class()
    }

    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    pub fn window_for_app(&self, app_id: AppId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.app_id == app_id)
    }

    pub fn active_window(&self) -> Option<&WindowRecord> {
        self.active_window_id.and_then(|id| self.window(id))
    }

    /// An app is open while it owns a window, minimized or not.
    pub fn is_app_open(&self, app_id: AppId) -> bool {
        self.window_for_app(app_id).is_some()
    }

    /// Name shown next to the menu bar logo.
    pub fn active_app_name(&self) -> &str {
        self.active_window()
            .map(|w| w.title.as_str())
            .unwrap_or("Finder")
    }

    /// Whether any visible window covers the dock band.
    pub fn has_visible_maximized_window(&self) -> bool {
        self.windows
            .iter()
            .any(|w| w.is_maximized && !w.is_minimized)
    }

    pub fn windows_by_z_order(&self) -> Vec<&WindowRecord> {
        let mut ordered: Vec<_> = self.windows.iter().collect();
        ordered.sort_by_key(|w| w.z_index);
        ordered
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    /// CSS class suffix of the matching resize handle.
    pub const fn css_token(self) -> &'static str {
        match self {
            Self::North => "n",
            Self::South => "s",
            Self::East => "e",
            Self::West => "w",
            Self::NorthEast => "ne",
            Self::NorthWest => "nw",
            Self::SouthEast => "se",
            Self::SouthWest => "sw",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub position_start: WindowPosition,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub window_id: WindowId,
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub position_start: WindowPosition,
    pub size_start: WindowSize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub resizing: Option<ResizeSession>,
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        self.dragging.is_none() && self.resizing.is_none()
    }
}
