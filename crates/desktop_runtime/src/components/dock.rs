use super::*;
use crate::apps;

#[component]
pub(super) fn Dock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let pointer_y = create_rw_signal(None::<i32>);
    let hovering = create_rw_signal(false);
    let visible = create_rw_signal(true);

    let pointer_listener = window_event_listener(ev::mousemove, move |ev| {
        pointer_y.set(Some(ev.client_y()));
    });
    on_cleanup(move || pointer_listener.remove());

    let wants_visible =
        create_memo(move |_| state.with(|s| dock_should_show(s, pointer_y.get(), hovering.get())));

    // Reveal immediately; hide only if still unwanted after the delay.
    create_effect(move |_| {
        if wants_visible.get() {
            visible.set(true);
        } else {
            set_timeout(
                move || {
                    if !wants_visible.get_untracked() {
                        visible.set(false);
                    }
                },
                DOCK_HIDE_DELAY,
            );
        }
    });

    let items = move || {
        apps::app_registry()
            .iter()
            .map(|entry| {
                let app_id = entry.app_id;
                let is_open = move || state.with(|s| s.is_app_open(app_id));
                view! {
                    <button
                        class="dock-item"
                        class:open=is_open
                        title=entry.name
                        aria-label=entry.name
                        on:click=move |_| runtime.dispatch_action(DesktopAction::OpenApp { app_id })
                    >
                        <img src=entry.icon_url() alt="" draggable="false" />
                        <span class="dock-tooltip">{entry.name}</span>
                        <span class="dock-indicator" aria-hidden="true"></span>
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <nav
            class="dock"
            class:hidden=move || !visible.get()
            aria-label="Dock"
            on:mouseenter=move |_| hovering.set(true)
            on:mouseleave=move |_| hovering.set(false)
        >
            <div class="dock-shelf">{items}</div>
        </nav>
    }
}
