use super::*;
use crate::{
    apps,
    model::{ResizeEdge, WindowId, WindowRecord},
};
use desktop_app_contract::AppMountContext;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

/// Attribute-level view of a window record: everything the chrome renders besides the app body.
#[derive(Debug, Clone, PartialEq, Eq)]
struct WindowChrome {
    style: String,
    class_name: String,
    title: String,
    app_key: &'static str,
    is_minimized: bool,
    is_maximized: bool,
    show_handles: bool,
}

impl WindowChrome {
    fn from_record(win: &WindowRecord, is_active: bool, compact: bool) -> Self {
        Self {
            style: format!(
                "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
                win.position.x, win.position.y, win.size.width, win.size.height, win.z_index
            ),
            class_name: format!(
                "desktop-window{}{}{}",
                if is_active { " active" } else { "" },
                if win.is_minimized { " minimized" } else { "" },
                if win.is_maximized { " maximized" } else { "" },
            ),
            title: win.title.clone(),
            app_key: win.app_id.as_str(),
            is_minimized: win.is_minimized,
            is_maximized: win.is_maximized,
            show_handles: !win.is_maximized && !compact,
        }
    }
}

fn window_chrome(state: &DesktopState, window_id: WindowId) -> Option<WindowChrome> {
    state.window(window_id).map(|win| {
        WindowChrome::from_record(
            win,
            state.active_window_id == Some(window_id),
            state.is_compact(),
        )
    })
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let chrome = create_memo(move |_| state.with(|s| window_chrome(s, window_id)));
    let is_active = create_memo(move |_| state.with(|s| s.active_window_id == Some(window_id)));
    let attr = move |read: fn(&WindowChrome) -> String| {
        move || chrome.with(|c| c.as_ref().map(read).unwrap_or_default())
    };
    let is_maximized = move || chrome.with(|c| c.as_ref().is_some_and(|c| c.is_maximized));
    let show_handles = move || chrome.with(|c| c.as_ref().is_some_and(|c| c.show_handles));

    let focus = move |_| {
        if !is_active.get_untracked() {
            runtime.dispatch_action(DesktopAction::FocusWindow { window_id });
        }
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        let maximized = chrome
            .with_untracked(|c| c.as_ref().map(|c| c.is_maximized))
            .unwrap_or(true);
        if maximized {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::ToggleMaximize { window_id });
    };
    let control = move |action: DesktopAction| {
        move |ev: web_sys::MouseEvent| {
            stop_mouse_event(&ev);
            runtime.dispatch_action(action.clone());
        }
    };
    let swallow_pointer = |ev: web_sys::PointerEvent| ev.stop_propagation();

    // The body mounts once per window id; only attributes track the record.
    view! {
        <section
            class=attr(|c| c.class_name.clone())
            style=attr(|c| c.style.clone())
            data-app=attr(|c| c.app_key.to_string())
            on:pointerdown=focus
            role="dialog"
            aria-label=attr(|c| c.title.clone())
            aria-hidden=attr(|c| c.is_minimized.to_string())
        >
            <header
                class="titlebar"
                on:pointerdown=begin_move
                on:dblclick=titlebar_double_click
            >
                <div class="traffic-lights">
                    <button
                        class="traffic-light close"
                        aria-label="Close window"
                        on:pointerdown=swallow_pointer
                        on:click=control(DesktopAction::CloseWindow { window_id })
                    />
                    <button
                        class="traffic-light minimize"
                        aria-label="Minimize window"
                        on:pointerdown=swallow_pointer
                        on:click=control(DesktopAction::MinimizeWindow { window_id })
                    />
                    <button
                        class="traffic-light maximize"
                        aria-label=move || {
                            if is_maximized() { "Restore window" } else { "Maximize window" }
                        }
                        on:pointerdown=swallow_pointer
                        on:click=control(DesktopAction::ToggleMaximize { window_id })
                    />
                </div>
                <div class="titlebar-title">{attr(|c| c.title.clone())}</div>
            </header>
            <div class="window-body">
                <WindowBody window_id=window_id />
            </div>
            <Show when=show_handles fallback=|| ()>
                {ResizeEdge::ALL
                    .into_iter()
                    .map(|edge| view! { <WindowResizeHandle window_id=window_id edge=edge /> })
                    .collect_view()}
            </Show>
        </section>
    }
}

#[component]
fn WindowResizeHandle(window_id: WindowId, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let class_name = format!("window-resize-handle edge-{}", edge.css_token());

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            window_id,
            edge,
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    view! { <div class=class_name aria-hidden="true" on:pointerdown=on_pointerdown /> }
}

#[component]
fn WindowBody(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let contents = runtime
        .state
        .with_untracked(|s| s.window(window_id).cloned())
        .and_then(|w| {
            let descriptor = apps::app_descriptor(w.app_id)?;
            Some(descriptor.module.mount(AppMountContext {
                app_id: w.app_id,
                window_id: w.id.0,
                restored_data: w.data,
                services: runtime.app_services(window_id),
            }))
        })
        .unwrap_or_else(|| view! { <p class="window-empty">"Closed"</p> }.into_view());

    view! { <div class="window-body-content">{contents}</div> }
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::AppId;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::model::{InteractionState, PointerPosition, ShellMetrics, Viewport};

    fn reduce(state: &mut DesktopState, action: DesktopAction) {
        crate::reduce_desktop(state, &mut InteractionState::default(), action).expect("reduce");
    }

    fn open(state: &mut DesktopState, app_id: AppId) -> WindowId {
        reduce(state, DesktopAction::OpenApp { app_id });
        state.window_for_app(app_id).expect("window").id
    }

    #[test]
    fn data_merges_leave_the_chrome_untouched() {
        let mut state = DesktopState::new(ShellMetrics::default(), Viewport::new(1440, 900));
        let terminal = open(&mut state, AppId::Terminal);
        let before = window_chrome(&state, terminal);

        reduce(
            &mut state,
            DesktopAction::SetWindowData {
                window_id: terminal,
                data: json!({ "cwd": "~/projects" }),
            },
        );

        assert_eq!(window_chrome(&state, terminal), before);
    }

    #[test]
    fn focus_and_drag_only_touch_attributes() {
        let mut state = DesktopState::new(ShellMetrics::default(), Viewport::new(1440, 900));
        let mut interaction = InteractionState::default();
        let about = open(&mut state, AppId::About);
        let skills = open(&mut state, AppId::Skills);

        let about_chrome = window_chrome(&state, about).expect("about");
        assert!(!about_chrome.class_name.contains("active"));

        reduce(&mut state, DesktopAction::FocusWindow { window_id: about });
        let focused = window_chrome(&state, about).expect("about");
        assert_eq!(focused.class_name, "desktop-window active");
        assert_eq!(focused.title, about_chrome.title);

        for action in [
            DesktopAction::BeginMove {
                window_id: skills,
                pointer: PointerPosition { x: 400, y: 300 },
            },
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 460, y: 340 },
            },
            DesktopAction::EndMove,
        ] {
            crate::reduce_desktop(&mut state, &mut interaction, action).expect("move");
        }
        let moved = state.window(skills).expect("skills");
        let chrome = window_chrome(&state, skills).expect("skills");
        assert!(chrome
            .style
            .starts_with(&format!("left:{}px;top:{}px;", moved.position.x, moved.position.y)));
        assert!(chrome.show_handles);
    }

    #[test]
    fn compact_and_maximized_windows_hide_resize_handles() {
        let mut state = DesktopState::new(ShellMetrics::default(), Viewport::new(800, 600));
        let projects = open(&mut state, AppId::Projects);
        let chrome = window_chrome(&state, projects).expect("projects");

        assert!(chrome.is_maximized);
        assert!(!chrome.show_handles);
        assert_eq!(chrome.app_key, "projects");
        assert_eq!(window_chrome(&state, WindowId(999)), None);
    }
}
