//! Geometry and stacking helpers used by the desktop reducer.
//!
//! Every function here is pure over [`ShellMetrics`] and [`Viewport`] so layout rules can be
//! tested without a browser.

use crate::model::{
    DesktopState, ResizeEdge, ShellMetrics, Viewport, WindowId, WindowPosition, WindowRecord,
    WindowSize,
};

/// Clamps without panicking when the range is inverted; the lower bound wins.
fn clamp_lenient(value: i32, lower: i32, upper: i32) -> i32 {
    value.min(upper).max(lower)
}

/// Position that centers `size` in the desktop area between the menu bar and the dock.
pub fn centered_position(
    metrics: &ShellMetrics,
    viewport: Viewport,
    size: WindowSize,
) -> WindowPosition {
    WindowPosition {
        x: ((viewport.width - size.width) / 2).max(metrics.center_margin),
        y: ((viewport.height - size.height - metrics.dock_height) / 2)
            .max(metrics.menu_bar_height + 10),
    }
}

/// Fullscreen geometry: pinned below the menu bar, spanning the rest of the viewport.
pub fn fullscreen_geometry(
    metrics: &ShellMetrics,
    viewport: Viewport,
) -> (WindowPosition, WindowSize) {
    (
        WindowPosition {
            x: 0,
            y: metrics.menu_bar_height,
        },
        WindowSize {
            width: viewport.width,
            height: viewport.height - metrics.menu_bar_height,
        },
    )
}

/// Keeps a dragged window inside the horizontal padding, below the menu bar and above the dock.
pub fn clamp_drag_position(
    metrics: &ShellMetrics,
    viewport: Viewport,
    size: WindowSize,
    position: WindowPosition,
) -> WindowPosition {
    WindowPosition {
        x: clamp_lenient(
            position.x,
            metrics.edge_padding,
            viewport.width - size.width - metrics.edge_padding,
        ),
        y: clamp_lenient(
            position.y,
            metrics.menu_bar_height,
            viewport.height - metrics.drag_dock_height - size.height,
        ),
    }
}

/// Largest window that fits in the desktop area.
pub fn max_window_size(metrics: &ShellMetrics, viewport: Viewport) -> WindowSize {
    WindowSize {
        width: viewport.width - 2 * metrics.edge_padding,
        height: viewport.height - metrics.menu_bar_height - metrics.dock_height,
    }
}

/// Floors `size` at `min_size`, caps it to the desktop area and pulls `position` back so the
/// window stays left of the viewport edge and above the dock band.
pub fn fit_size_and_position(
    metrics: &ShellMetrics,
    viewport: Viewport,
    min_size: WindowSize,
    size: WindowSize,
    position: WindowPosition,
) -> (WindowPosition, WindowSize) {
    let max = max_window_size(metrics, viewport);
    let size = WindowSize {
        width: clamp_lenient(size.width, min_size.width, max.width),
        height: clamp_lenient(size.height, min_size.height, max.height),
    };
    let position = WindowPosition {
        x: clamp_lenient(
            position.x,
            metrics.edge_padding,
            viewport.width - metrics.edge_padding - size.width,
        ),
        y: clamp_lenient(
            position.y,
            metrics.menu_bar_height,
            viewport.height - metrics.dock_height - size.height,
        ),
    };
    (position, size)
}

/// Applies resize deltas for a given edge/corner drag.
///
/// Edges on the west/north side move the origin; the opposite edge stays put even when the
/// result has to be floored at `min_size`.
pub fn resize_geometry(
    position: WindowPosition,
    size: WindowSize,
    min_size: WindowSize,
    edge: ResizeEdge,
    dx: i32,
    dy: i32,
) -> (WindowPosition, WindowSize) {
    let (west, east, north, south) = match edge {
        ResizeEdge::North => (false, false, true, false),
        ResizeEdge::South => (false, false, false, true),
        ResizeEdge::East => (false, true, false, false),
        ResizeEdge::West => (true, false, false, false),
        ResizeEdge::NorthEast => (false, true, true, false),
        ResizeEdge::NorthWest => (true, false, true, false),
        ResizeEdge::SouthEast => (false, true, false, true),
        ResizeEdge::SouthWest => (true, false, false, true),
    };

    let mut next_position = position;
    let mut next_size = size;
    if east {
        next_size.width = (size.width + dx).max(min_size.width);
    }
    if west {
        next_size.width = (size.width - dx).max(min_size.width);
        next_position.x = position.x + size.width - next_size.width;
    }
    if south {
        next_size.height = (size.height + dy).max(min_size.height);
    }
    if north {
        next_size.height = (size.height - dy).max(min_size.height);
        next_position.y = position.y + size.height - next_size.height;
    }
    (next_position, next_size)
}

/// Hands out the next z-index and assigns it to `window_id`.
pub fn raise_window(state: &mut DesktopState, window_id: WindowId) -> bool {
    let next = state.z_index_counter.saturating_add(1);
    let Some(window) = state.windows.iter_mut().find(|w| w.id == window_id) else {
        return false;
    };
    window.z_index = next;
    state.z_index_counter = next;
    true
}

/// Picks the most recently added window that is not minimized.
pub fn promotion_candidate(windows: &[WindowRecord]) -> Option<WindowId> {
    windows.iter().rev().find(|w| !w.is_minimized).map(|w| w.id)
}

/// Pins a window to fullscreen geometry and marks it maximized.
pub fn apply_fullscreen(metrics: &ShellMetrics, viewport: Viewport, window: &mut WindowRecord) {
    let (position, size) = fullscreen_geometry(metrics, viewport);
    window.position = position;
    window.size = size;
    window.is_maximized = true;
}

/// Returns a window to its default size at the centered position.
pub fn apply_restored(metrics: &ShellMetrics, viewport: Viewport, window: &mut WindowRecord) {
    let (position, size) = fit_size_and_position(
        metrics,
        viewport,
        window.min_size,
        window.default_size,
        centered_position(metrics, viewport, window.default_size),
    );
    window.position = position;
    window.size = size;
    window.is_maximized = false;
}

/// Re-applies viewport rules to every window after the viewport changed.
pub fn relayout_for_viewport(state: &mut DesktopState) {
    let metrics = state.metrics;
    let viewport = state.viewport;
    let compact = state.is_compact();
    for window in &mut state.windows {
        if compact || window.is_maximized {
            apply_fullscreen(&metrics, viewport, window);
        } else {
            let (position, size) = fit_size_and_position(
                &metrics,
                viewport,
                window.min_size,
                window.size,
                window.position,
            );
            window.position = position;
            window.size = size;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn size(width: i32, height: i32) -> WindowSize {
        WindowSize { width, height }
    }

    fn pos(x: i32, y: i32) -> WindowPosition {
        WindowPosition { x, y }
    }

    #[test]
    fn centered_position_respects_margins() {
        let metrics = ShellMetrics::default();
        assert_eq!(
            centered_position(&metrics, Viewport::new(1440, 900), size(750, 500)),
            pos(345, 160)
        );
        assert_eq!(
            centered_position(&metrics, Viewport::new(1100, 600), size(1100, 500)),
            pos(20, 38)
        );
    }

    #[test]
    fn drag_clamp_keeps_window_between_menu_bar_and_dock() {
        let metrics = ShellMetrics::default();
        let viewport = Viewport::new(1440, 900);
        let window = size(700, 500);

        assert_eq!(
            clamp_drag_position(&metrics, viewport, window, pos(-200, -50)),
            pos(6, 28)
        );
        assert_eq!(
            clamp_drag_position(&metrics, viewport, window, pos(5000, 5000)),
            pos(734, 310)
        );
    }

    #[test]
    fn oversized_window_clamp_prefers_top_left() {
        let metrics = ShellMetrics::default();
        let clamped =
            clamp_drag_position(&metrics, Viewport::new(300, 300), size(700, 500), pos(90, 90));
        assert_eq!(clamped, pos(6, 28));
    }

    #[test]
    fn fit_floors_and_caps_size_then_pulls_position_in() {
        let metrics = ShellMetrics::default();
        let viewport = Viewport::new(1440, 900);
        let min = size(400, 350);

        let (position, fitted) =
            fit_size_and_position(&metrics, viewport, min, size(100, 100), pos(100, 100));
        assert_eq!(fitted, min);
        assert_eq!(position, pos(100, 100));

        let (position, fitted) =
            fit_size_and_position(&metrics, viewport, min, size(5000, 5000), pos(300, 300));
        assert_eq!(fitted, size(1428, 792));
        assert_eq!(position, pos(6, 28));

        let (position, _) =
            fit_size_and_position(&metrics, viewport, min, size(800, 600), pos(1000, 400));
        assert_eq!(position, pos(634, 220));
    }

    #[test]
    fn west_and_north_resizes_keep_the_opposite_edge() {
        let min = size(400, 350);
        let (position, resized) =
            resize_geometry(pos(100, 100), size(600, 500), min, ResizeEdge::NorthWest, 50, 30);
        assert_eq!(resized, size(550, 470));
        assert_eq!(position, pos(150, 130));

        let (position, resized) =
            resize_geometry(pos(100, 100), size(600, 500), min, ResizeEdge::West, 500, 0);
        assert_eq!(resized, size(400, 500));
        assert_eq!(position, pos(300, 100));

        let (position, resized) =
            resize_geometry(pos(100, 100), size(600, 500), min, ResizeEdge::SouthEast, 40, -400);
        assert_eq!(resized, size(640, 350));
        assert_eq!(position, pos(100, 100));
    }

    #[test]
    fn fullscreen_spans_viewport_below_menu_bar() {
        let metrics = ShellMetrics::default();
        let (position, fitted) = fullscreen_geometry(&metrics, Viewport::new(800, 600));
        assert_eq!(position, pos(0, 28));
        assert_eq!(fitted, size(800, 572));
    }

    #[test]
    fn raising_at_the_z_index_ceiling_saturates() {
        let mut state = DesktopState::default();
        crate::reduce_desktop(
            &mut state,
            &mut crate::model::InteractionState::default(),
            crate::DesktopAction::OpenApp {
                app_id: desktop_app_contract::AppId::About,
            },
        )
        .expect("open");
        let about = state.active_window_id.expect("active");
        state.z_index_counter = u32::MAX;

        assert!(raise_window(&mut state, about));
        assert_eq!(state.z_index_counter, u32::MAX);
        assert_eq!(state.window(about).map(|w| w.z_index), Some(u32::MAX));
        assert!(!raise_window(&mut state, WindowId(999)));
    }
}
