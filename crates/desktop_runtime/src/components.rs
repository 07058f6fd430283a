//! Desktop shell UI composition and interaction surfaces.

mod boot_screen;
mod desktop_icons;
mod dock;
mod launchpad;
mod menu_bar;
mod spotlight;
mod window;

use std::time::Duration;

use leptos::*;

use self::{
    boot_screen::BootScreen, desktop_icons::DesktopIcons, dock::Dock, launchpad::Launchpad,
    menu_bar::MenuBar, spotlight::Spotlight, window::DesktopWindow,
};

use crate::{
    model::{DesktopState, PointerPosition},
    reducer::DesktopAction,
    shortcuts::{resolve_shortcut, KeyChord},
    wallpaper,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

/// How long the boot screen covers the desktop on first load.
pub const BOOT_DURATION: Duration = Duration::from_millis(2500);
const DOCK_HIDE_DELAY: Duration = Duration::from_millis(300);

#[component]
/// Renders the full desktop shell UI: wallpaper, menu bar, windows, dock and overlays.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let booting = create_rw_signal(true);
    set_timeout(move || booting.set(false), BOOT_DURATION);

    let resize_listener = window_event_listener(ev::resize, move |_| {
        let host = runtime.host.get_value();
        runtime.dispatch_action(DesktopAction::SetViewport {
            viewport: host.viewport(),
        });
        let prefers_dark = host.prefers_dark_scheme();
        if state.with_untracked(|s| s.appearance.host_prefers_dark) != prefers_dark {
            runtime.dispatch_action(DesktopAction::SetHostPrefersDark { prefers_dark });
        }
    });
    on_cleanup(move || resize_listener.remove());

    let shortcut_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || booting.get_untracked() {
            return;
        }
        let chord = key_chord_from_event(&ev);
        let mac = runtime.host.get_value().is_mac_platform();
        let has_active = state.with_untracked(|s| s.active_window_id.is_some());
        if let Some(shortcut) = resolve_shortcut(&chord, mac, has_active) {
            ev.prevent_default();
            runtime.dispatch_action(shortcut.action());
        }
    });
    on_cleanup(move || shortcut_listener.remove());

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        let pointer = pointer_from_pointer_event(&ev);
        let interaction = runtime.interaction.get_untracked();

        if interaction.dragging.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateMove { pointer });
        }
        if interaction.resizing.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateResize { pointer });
        }
    };
    let on_pointer_end = move |_| end_active_pointer_interaction(runtime);

    let theme_class = move || {
        if state.with(|s| s.appearance.is_dark()) {
            "desktop-shell dark"
        } else {
            "desktop-shell light"
        }
    };
    let background = move || {
        state.with(|s| {
            wallpaper::background_for(
                &s.appearance.custom_wallpapers,
                &s.appearance.selected_wallpaper,
                s.device_class(),
            )
            .css()
        })
    };

    view! {
        <Show
            when=move || !booting.get()
            fallback=|| view! { <BootScreen /> }
        >
            <div
                id="desktop-shell-root"
                class=theme_class
                style=background
                data-device=move || state.with(|s| s.device_class().as_str())
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_end
                on:pointercancel=on_pointer_end
            >
                <MenuBar />
                <DesktopIcons />
                <div class="desktop-window-layer">
                    <For
                        each=move || state.with(|s| s.windows.iter().map(|w| w.id).collect::<Vec<_>>())
                        key=|window_id| window_id.0
                        let:window_id
                    >
                        <DesktopWindow window_id=window_id />
                    </For>
                </div>
                <Dock />
                <Launchpad />
                <Spotlight />
            </div>
        </Show>
    }
}

fn key_chord_from_event(ev: &web_sys::KeyboardEvent) -> KeyChord {
    KeyChord {
        key: ev.key(),
        code: ev.code(),
        ctrl: ev.ctrl_key(),
        meta: ev.meta_key(),
        shift: ev.shift_key(),
        alt: ev.alt_key(),
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    let interaction = runtime.interaction.get_untracked();
    if interaction.dragging.is_some() {
        runtime.dispatch_action(DesktopAction::EndMove);
    }
    if interaction.resizing.is_some() {
        runtime.dispatch_action(DesktopAction::EndResize);
    }
}

/// Whether the dock is shown for the current pointer position.
///
/// The dock hides while a visible window is maximized unless the pointer is near the bottom
/// edge or over the dock itself.
fn dock_should_show(state: &DesktopState, pointer_y: Option<i32>, hovering_dock: bool) -> bool {
    if !state.has_visible_maximized_window() || hovering_dock {
        return true;
    }
    pointer_y.is_some_and(|y| state.viewport.height - y <= state.metrics.dock_reveal_threshold)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockSnapshot {
    weekday: u32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
}

impl ClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                weekday: date.get_day(),
                month: date.get_month(),
                day: date.get_date(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                weekday: 4,
                month: 0,
                day: 1,
                hour: 0,
                minute: 0,
            }
        }
    }
}

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Menu bar clock text, e.g. `Mon Oct 19 9:41 AM`.
fn format_menu_clock(snapshot: ClockSnapshot) -> String {
    let weekday = WEEKDAYS[(snapshot.weekday % 7) as usize];
    let month = MONTHS[(snapshot.month % 12) as usize];
    let hour = match snapshot.hour % 12 {
        0 => 12,
        h => h,
    };
    let suffix = if snapshot.hour >= 12 { "PM" } else { "AM" };
    format!(
        "{weekday} {month} {} {hour}:{:02} {suffix}",
        snapshot.day, snapshot.minute
    )
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::AppId;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{model::InteractionState, reducer::reduce_desktop};

    #[test]
    fn clock_uses_twelve_hour_time() {
        let snapshot = ClockSnapshot {
            weekday: 1,
            month: 9,
            day: 19,
            hour: 21,
            minute: 5,
        };
        assert_eq!(format_menu_clock(snapshot), "Mon Oct 19 9:05 PM");
        assert_eq!(
            format_menu_clock(ClockSnapshot {
                hour: 0,
                ..snapshot
            }),
            "Mon Oct 19 12:05 AM"
        );
    }

    #[test]
    fn dock_hides_behind_maximized_windows_until_pointer_nears_bottom() {
        let mut state = DesktopState::default();
        assert!(dock_should_show(&state, None, false));

        reduce_desktop(
            &mut state,
            &mut InteractionState::default(),
            DesktopAction::OpenApp {
                app_id: AppId::Projects,
            },
        )
        .expect("open");
        reduce_desktop(
            &mut state,
            &mut InteractionState::default(),
            DesktopAction::ToggleMaximizeActiveWindow,
        )
        .expect("maximize");

        let height = state.viewport.height;
        assert!(!dock_should_show(&state, Some(200), false));
        assert!(dock_should_show(&state, Some(height - 100), false));
        assert!(!dock_should_show(&state, Some(height - 101), false));
        assert!(dock_should_show(&state, Some(200), true));
    }
}
