use desktop_app_contract::AppId;
use desktop_runtime::{
    reduce_desktop, DesktopAction, DesktopState, InteractionState, PointerPosition, ResizeEdge,
    ShellMetrics, Viewport, WindowId,
};

fn dispatch(state: &mut DesktopState, ui: &mut InteractionState, action: DesktopAction) {
    // Rejected actions are no-ops for the shell, so apply against a copy like the provider does.
    let mut next = state.clone();
    let mut next_ui = ui.clone();
    if reduce_desktop(&mut next, &mut next_ui, action).is_ok() {
        *state = next;
        *ui = next_ui;
    }
}

fn open(state: &mut DesktopState, ui: &mut InteractionState, app_id: AppId) -> WindowId {
    dispatch(state, ui, DesktopAction::OpenApp { app_id });
    state.window_for_app(app_id).expect("window opened").id
}

#[test]
fn terminal_then_finder_then_close_terminal() {
    let mut state = DesktopState::default();
    let mut ui = InteractionState::default();

    let terminal = open(&mut state, &mut ui, AppId::Terminal);
    assert_eq!(state.windows.len(), 1);
    assert_eq!(state.active_window_id, Some(terminal));

    let finder = open(&mut state, &mut ui, AppId::Finder);
    assert_eq!(state.windows.len(), 2);
    assert_eq!(state.active_window_id, Some(finder));
    let terminal_z = state.window(terminal).expect("terminal").z_index;
    let finder_z = state.window(finder).expect("finder").z_index;
    assert!(finder_z > terminal_z);

    dispatch(
        &mut state,
        &mut ui,
        DesktopAction::CloseWindow {
            window_id: terminal,
        },
    );
    assert_eq!(state.active_window_id, Some(finder));
    assert!(!state.is_app_open(AppId::Terminal));
    assert!(state.is_app_open(AppId::Finder));
}

#[test]
fn reopening_restores_instead_of_duplicating() {
    let mut state = DesktopState::default();
    let mut ui = InteractionState::default();

    let about = open(&mut state, &mut ui, AppId::About);
    dispatch(
        &mut state,
        &mut ui,
        DesktopAction::MinimizeWindow { window_id: about },
    );
    assert_eq!(state.active_window_id, None);

    let reopened = open(&mut state, &mut ui, AppId::About);
    assert_eq!(reopened, about);
    assert_eq!(state.windows.len(), 1);
    let window = state.window(about).expect("about");
    assert!(!window.is_minimized);
    assert_eq!(state.active_window_id, Some(about));
}

#[test]
fn drag_and_resize_gestures_stay_inside_the_desktop() {
    let mut state = DesktopState::default();
    let mut ui = InteractionState::default();
    let metrics = state.metrics;
    let viewport = state.viewport;
    let skills = open(&mut state, &mut ui, AppId::Skills);

    dispatch(
        &mut state,
        &mut ui,
        DesktopAction::BeginMove {
            window_id: skills,
            pointer: PointerPosition { x: 500, y: 200 },
        },
    );
    dispatch(
        &mut state,
        &mut ui,
        DesktopAction::UpdateMove {
            pointer: PointerPosition { x: -4000, y: -4000 },
        },
    );
    dispatch(&mut state, &mut ui, DesktopAction::EndMove);
    let moved = state.window(skills).expect("skills");
    assert_eq!(moved.position.x, metrics.edge_padding);
    assert_eq!(moved.position.y, metrics.menu_bar_height);
    assert!(ui.is_idle());

    dispatch(
        &mut state,
        &mut ui,
        DesktopAction::BeginResize {
            window_id: skills,
            edge: ResizeEdge::SouthEast,
            pointer: PointerPosition { x: 900, y: 600 },
        },
    );
    dispatch(
        &mut state,
        &mut ui,
        DesktopAction::UpdateResize {
            pointer: PointerPosition { x: 9000, y: 9000 },
        },
    );
    dispatch(&mut state, &mut ui, DesktopAction::EndResize);
    let resized = state.window(skills).expect("skills");
    assert!(resized.position.x + resized.size.width <= viewport.width - metrics.edge_padding);
    assert!(resized.position.y + resized.size.height <= viewport.height - metrics.dock_height);

    dispatch(
        &mut state,
        &mut ui,
        DesktopAction::BeginResize {
            window_id: skills,
            edge: ResizeEdge::SouthEast,
            pointer: PointerPosition { x: 900, y: 600 },
        },
    );
    dispatch(
        &mut state,
        &mut ui,
        DesktopAction::UpdateResize {
            pointer: PointerPosition { x: -9000, y: -9000 },
        },
    );
    let shrunk = state.window(skills).expect("skills");
    assert_eq!(shrunk.size, metrics.min_window_size);
}

#[test]
fn compact_viewport_forces_fullscreen_windows() {
    let mut state = DesktopState::new(ShellMetrics::default(), Viewport::new(800, 600));
    let mut ui = InteractionState::default();

    let projects = open(&mut state, &mut ui, AppId::Projects);
    let window = state.window(projects).expect("projects");
    assert!(window.is_maximized);
    assert_eq!((window.position.x, window.position.y), (0, 28));
    assert_eq!((window.size.width, window.size.height), (800, 572));

    dispatch(
        &mut state,
        &mut ui,
        DesktopAction::ToggleMaximize {
            window_id: projects,
        },
    );
    assert!(state.window(projects).expect("projects").is_maximized);
}

#[test]
fn unknown_targets_are_silent_no_ops() {
    let mut state = DesktopState::default();
    let mut ui = InteractionState::default();
    open(&mut state, &mut ui, AppId::Contact);
    let before = state.clone();

    for action in [
        DesktopAction::CloseWindow {
            window_id: WindowId(999),
        },
        DesktopAction::FocusWindow {
            window_id: WindowId(999),
        },
        DesktopAction::OpenAppByKey {
            key: "solitaire".to_string(),
        },
    ] {
        dispatch(&mut state, &mut ui, action);
    }

    assert_eq!(state, before);
}
