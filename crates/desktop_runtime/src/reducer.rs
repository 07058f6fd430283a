//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

mod appearance;
mod overlays;

use desktop_app_contract::{AppCommand, AppId, ThemeMode, WallpaperOption};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::{
    apps,
    model::{
        DesktopState, DragSession, FinderViewMode, InteractionState, PointerPosition, ResizeEdge,
        ResizeSession, Viewport, WindowId, WindowPosition, WindowRecord, WindowSize,
    },
    window_manager::{
        apply_fullscreen, apply_restored, clamp_drag_position, fit_size_and_position,
        promotion_candidate, raise_window, relayout_for_viewport, resize_geometry,
    },
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open an app, or restore and focus its existing window.
    OpenApp {
        /// App to open.
        app_id: AppId,
    },
    /// Open an app from an untrusted string key (deep links, typed input).
    OpenAppByKey {
        /// Raw app key such as `"terminal"`.
        key: String,
    },
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Toggle between fullscreen and default geometry.
    ToggleMaximize {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Raise and activate a window, restoring it when minimized.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Move a window; the position is clamped to the desktop area.
    UpdatePosition {
        /// Window to move.
        window_id: WindowId,
        /// Requested top-left corner.
        position: WindowPosition,
    },
    /// Resize a window; the size is floored, capped, and the position re-clamped.
    UpdateSize {
        /// Window to resize.
        window_id: WindowId,
        /// Requested size.
        size: WindowSize,
    },
    /// Close the active window, if any.
    CloseActiveWindow,
    /// Minimize the active window, if any.
    MinimizeActiveWindow,
    /// Toggle maximize on the active window, if any.
    ToggleMaximizeActiveWindow,
    /// Begin dragging a window by its title bar.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window drag.
    EndMove,
    /// Begin resizing a window.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Edge or corner being dragged.
        edge: ResizeEdge,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window resize.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window resize.
    EndResize,
    /// Record a new browser viewport and re-apply layout rules.
    SetViewport {
        /// New viewport size.
        viewport: Viewport,
    },
    /// Shallow-merge a JSON object into a window's data bag.
    SetWindowData {
        /// Target window.
        window_id: WindowId,
        /// JSON object whose keys overwrite existing keys.
        data: Value,
    },
    /// Open a URL outside the shell.
    OpenExternalUrl {
        /// Target URL.
        url: String,
    },
    /// Flip dark/light.
    ToggleTheme,
    /// Set an explicit theme mode.
    SetThemeMode {
        /// New mode.
        mode: ThemeMode,
    },
    /// Record the host `prefers-color-scheme` answer.
    SetHostPrefersDark {
        /// Whether the host prefers dark.
        prefers_dark: bool,
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
        /// Image URL.
        url: String,
        /// Creation time used for the generated id.
        created_at_ms: u64,
    },
    /// Restore persisted preferences at boot.
    HydratePreferences {
        /// Stored theme mode.
        theme_mode: Option<ThemeMode>,
        /// Stored wallpaper id.
        selected_wallpaper: Option<String>,
        /// Stored custom wallpapers.
        custom_wallpapers: Option<Vec<WallpaperOption>>,
    },
    /// Open spotlight when closed, close it when open.
    ToggleSpotlight,
    /// Close spotlight and clear its query.
    CloseSpotlight,
    /// Replace the spotlight query and reset the selection.
    SetSpotlightQuery {
        /// New query text.
        query: String,
    },
    /// Move the spotlight selection, wrapping at both ends.
    MoveSpotlightSelection {
        /// Steps to move; negative moves up.
        delta: i32,
    },
    /// Run a spotlight result and close spotlight.
    ActivateSpotlightResult {
        /// Result index, or the current selection when `None`.
        index: Option<usize>,
    },
    /// Show the launchpad with an empty search.
    OpenLaunchpad,
    /// Hide the launchpad.
    CloseLaunchpad,
    /// Replace the launchpad search text.
    SetLaunchpadQuery {
        /// New query text.
        query: String,
    },
    /// Open an app from the launchpad grid and hide the launchpad.
    LaunchFromLaunchpad {
        /// App to open.
        app_id: AppId,
    },
    /// Close every overlay (Escape).
    DismissOverlays,
    /// Change the Finder presentation.
    SetFinderViewMode {
        /// New view mode.
        mode: FinderViewMode,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the host to execute.
pub enum RuntimeEffect {
    /// Persist the theme mode.
    PersistTheme,
    /// Persist the selected wallpaper id.
    PersistWallpaper,
    /// Persist the custom wallpaper list.
    PersistCustomWallpapers,
    /// Open a URL outside the shell.
    OpenExternalUrl(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that reference missing targets.
///
/// The dispatcher treats every error as a no-op: state stays untouched.
pub enum ReducerError {
    /// The target window id was not found in the current state.
    #[error("window not found")]
    WindowNotFound,
    /// The app key does not name a catalog app.
    #[error("app `{0}` not found")]
    AppNotFound(String),
    /// Window data updates must be JSON objects.
    #[error("window data must be a JSON object")]
    InvalidWindowData,
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting side effects.
///
/// # Errors
///
/// Returns a [`ReducerError`] when an action references a window or app that does not exist.
/// State may be partially modified in that case; callers reduce against a copy and discard it.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    if appearance::reduce_appearance_action(state, &action, &mut effects)? {
        return Ok(effects);
    }
    if overlays::reduce_overlay_action(state, &action, &mut effects)? {
        return Ok(effects);
    }

    match action {
        DesktopAction::OpenApp { app_id } => {
            open_app(state, app_id);
        }
        DesktopAction::OpenAppByKey { key } => {
            let app_id = AppId::parse(&key).ok_or(ReducerError::AppNotFound(key))?;
            open_app(state, app_id);
        }
        DesktopAction::CloseWindow { window_id } => {
            close_window(state, interaction, window_id)?;
        }
        DesktopAction::MinimizeWindow { window_id } => {
            minimize_window(state, window_id)?;
        }
        DesktopAction::ToggleMaximize { window_id } => {
            toggle_maximize(state, window_id)?;
        }
        DesktopAction::FocusWindow { window_id } => {
            focus_window(state, window_id)?;
        }
        DesktopAction::UpdatePosition {
            window_id,
            position,
        } => {
            update_position(state, window_id, position)?;
        }
        DesktopAction::UpdateSize { window_id, size } => {
            let position = find_window(state, window_id)?.position;
            update_geometry(state, window_id, position, size)?;
        }
        DesktopAction::CloseActiveWindow => {
            if let Some(window_id) = state.active_window_id {
                close_window(state, interaction, window_id)?;
            }
        }
        DesktopAction::MinimizeActiveWindow => {
            if let Some(window_id) = state.active_window_id {
                minimize_window(state, window_id)?;
            }
        }
        DesktopAction::ToggleMaximizeActiveWindow => {
            if let Some(window_id) = state.active_window_id {
                toggle_maximize(state, window_id)?;
            }
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            let position_start = find_window(state, window_id)?.position;
            if state.active_window_id != Some(window_id) {
                focus_window(state, window_id)?;
            }
            interaction.dragging = Some(DragSession {
                window_id,
                pointer_start: pointer,
                position_start,
            });
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging.as_ref() {
                let position = WindowPosition {
                    x: session.position_start.x + pointer.x - session.pointer_start.x,
                    y: session.position_start.y + pointer.y - session.pointer_start.y,
                };
                update_position(state, session.window_id, position)?;
            }
        }
        DesktopAction::EndMove => {
            interaction.dragging = None;
        }
        DesktopAction::BeginResize {
            window_id,
            edge,
            pointer,
        } => {
            let window = find_window(state, window_id)?;
            let (position_start, size_start) = (window.position, window.size);
            if state.active_window_id != Some(window_id) {
                focus_window(state, window_id)?;
            }
            interaction.resizing = Some(ResizeSession {
                window_id,
                edge,
                pointer_start: pointer,
                position_start,
                size_start,
            });
        }
        DesktopAction::UpdateResize { pointer } => {
            if let Some(session) = interaction.resizing.as_ref() {
                let min_size = find_window(state, session.window_id)?.min_size;
                let (position, size) = resize_geometry(
                    session.position_start,
                    session.size_start,
                    min_size,
                    session.edge,
                    pointer.x - session.pointer_start.x,
                    pointer.y - session.pointer_start.y,
                );
                update_geometry(state, session.window_id, position, size)?;
            }
        }
        DesktopAction::EndResize => {
            interaction.resizing = None;
        }
        DesktopAction::SetViewport { viewport } => {
            let previous_device = state.device_class();
            state.viewport = viewport;
            relayout_for_viewport(state);
            if state.device_class() != previous_device {
                appearance::ensure_wallpaper_matches_device(state, &mut effects);
            }
        }
        DesktopAction::SetWindowData { window_id, data } => {
            let Value::Object(patch) = data else {
                return Err(ReducerError::InvalidWindowData);
            };
            let window = find_window_mut(state, window_id)?;
            if !window.data.is_object() {
                window.data = Value::Object(Map::new());
            }
            if let Value::Object(existing) = &mut window.data {
                existing.extend(patch);
            }
        }
        DesktopAction::OpenExternalUrl { url } => {
            effects.push(RuntimeEffect::OpenExternalUrl(url));
        }
        DesktopAction::ToggleTheme
        | DesktopAction::SetThemeMode { .. }
        | DesktopAction::SetHostPrefersDark { .. }
        | DesktopAction::SelectWallpaper { .. }
        | DesktopAction::AddCustomWallpaper { .. }
        | DesktopAction::HydratePreferences { .. }
        | DesktopAction::ToggleSpotlight
        | DesktopAction::CloseSpotlight
        | DesktopAction::SetSpotlightQuery { .. }
        | DesktopAction::MoveSpotlightSelection { .. }
        | DesktopAction::ActivateSpotlightResult { .. }
        | DesktopAction::OpenLaunchpad
        | DesktopAction::CloseLaunchpad
        | DesktopAction::SetLaunchpadQuery { .. }
        | DesktopAction::LaunchFromLaunchpad { .. }
        | DesktopAction::DismissOverlays
        | DesktopAction::SetFinderViewMode { .. } => {}
    }

    Ok(effects)
}

/// Translates a command sent by the app hosted in `window_id` into a reducer action.
pub fn action_for_app_command(
    window_id: WindowId,
    command: AppCommand,
    now_ms: u64,
) -> DesktopAction {
    match command {
        AppCommand::OpenApp { app_id } => DesktopAction::OpenApp { app_id },
        AppCommand::CloseWindow => DesktopAction::CloseWindow { window_id },
        AppCommand::MinimizeWindow => DesktopAction::MinimizeWindow { window_id },
        AppCommand::MergeWindowData { data } => DesktopAction::SetWindowData { window_id, data },
        AppCommand::ToggleTheme => DesktopAction::ToggleTheme,
        AppCommand::SetThemeMode { mode } => DesktopAction::SetThemeMode { mode },
        AppCommand::SelectWallpaper { wallpaper_id } => {
            DesktopAction::SelectWallpaper { wallpaper_id }
        }
        AppCommand::AddCustomWallpaper { name, url } => DesktopAction::AddCustomWallpaper {
            name,
            url,
            created_at_ms: now_ms,
        },
        AppCommand::OpenExternalUrl { url } => DesktopAction::OpenExternalUrl { url },
        AppCommand::SetFinderViewMode { mode } => DesktopAction::SetFinderViewMode { mode },
    }
}

fn find_window(state: &DesktopState, window_id: WindowId) -> Result<&WindowRecord, ReducerError> {
    state.window(window_id).ok_or(ReducerError::WindowNotFound)
}

fn find_window_mut(
    state: &mut DesktopState,
    window_id: WindowId,
) -> Result<&mut WindowRecord, ReducerError> {
    state
        .windows
        .iter_mut()
        .find(|w| w.id == window_id)
        .ok_or(ReducerError::WindowNotFound)
}

fn next_window_id(state: &mut DesktopState) -> WindowId {
    let id = WindowId(state.next_window_id);
    state.next_window_id = state.next_window_id.saturating_add(1);
    id
}

fn activate(state: &mut DesktopState, window_id: WindowId) {
    raise_window(state, window_id);
    state.active_window_id = Some(window_id);
}

pub(crate) fn open_app(state: &mut DesktopState, app_id: AppId) -> WindowId {
    let metrics = state.metrics;
    let viewport = state.viewport;
    let compact = state.is_compact();

    if let Some(window) = state.windows.iter_mut().find(|w| w.app_id == app_id) {
        let window_id = window.id;
        window.is_minimized = false;
        if compact {
            apply_fullscreen(&metrics, viewport, window);
        }
        activate(state, window_id);
        return window_id;
    }

    let window_id = next_window_id(state);
    let default_size = apps::default_window_size(app_id);
    let mut record = WindowRecord {
        id: window_id,
        app_id,
        title: apps::app_name(app_id).to_string(),
        position: WindowPosition::default(),
        size: default_size,
        default_size,
        min_size: metrics.min_window_size,
        z_index: 0,
        is_minimized: false,
        is_maximized: false,
        data: Value::Object(Map::new()),
    };
    if compact {
        apply_fullscreen(&metrics, viewport, &mut record);
    } else {
        apply_restored(&metrics, viewport, &mut record);
    }
    state.windows.push(record);
    activate(state, window_id);
    window_id
}

fn close_window(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    window_id: WindowId,
) -> Result<(), ReducerError> {
    let index = state
        .windows
        .iter()
        .position(|w| w.id == window_id)
        .ok_or(ReducerError::WindowNotFound)?;
    state.windows.remove(index);
    if state.active_window_id == Some(window_id) {
        state.active_window_id = promotion_candidate(&state.windows);
    }
    if interaction
        .dragging
        .as_ref()
        .is_some_and(|s| s.window_id == window_id)
    {
        interaction.dragging = None;
    }
    if interaction
        .resizing
        .as_ref()
        .is_some_and(|s| s.window_id == window_id)
    {
        interaction.resizing = None;
    }
    Ok(())
}

fn minimize_window(state: &mut DesktopState, window_id: WindowId) -> Result<(), ReducerError> {
    find_window_mut(state, window_id)?.is_minimized = true;
    if state.active_window_id == Some(window_id) {
        state.active_window_id = promotion_candidate(&state.windows);
    }
    Ok(())
}

fn toggle_maximize(state: &mut DesktopState, window_id: WindowId) -> Result<(), ReducerError> {
    let metrics = state.metrics;
    let viewport = state.viewport;
    let compact = state.is_compact();
    let window = find_window_mut(state, window_id)?;
    if compact {
        return Ok(());
    }
    if window.is_maximized {
        apply_restored(&metrics, viewport, window);
    } else {
        apply_fullscreen(&metrics, viewport, window);
    }
    Ok(())
}

fn focus_window(state: &mut DesktopState, window_id: WindowId) -> Result<(), ReducerError> {
    find_window_mut(state, window_id)?.is_minimized = false;
    activate(state, window_id);
    Ok(())
}

fn update_position(
    state: &mut DesktopState,
    window_id: WindowId,
    position: WindowPosition,
) -> Result<(), ReducerError> {
    let metrics = state.metrics;
    let viewport = state.viewport;
    let window = find_window_mut(state, window_id)?;
    if window.is_maximized {
        return Ok(());
    }
    window.position = clamp_drag_position(&metrics, viewport, window.size, position);
    Ok(())
}

fn update_geometry(
    state: &mut DesktopState,
    window_id: WindowId,
    position: WindowPosition,
    size: WindowSize,
) -> Result<(), ReducerError> {
    let metrics = state.metrics;
    let viewport = state.viewport;
    let window = find_window_mut(state, window_id)?;
    if window.is_maximized {
        return Ok(());
    }
    let (position, size) =
        fit_size_and_position(&metrics, viewport, window.min_size, size, position);
    window.position = position;
    window.size = size;
    Ok(())
}
