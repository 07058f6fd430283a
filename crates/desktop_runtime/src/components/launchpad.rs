use super::*;
use crate::apps::filter_apps;

#[component]
pub(super) fn Launchpad() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let is_open = create_memo(move |_| state.with(|s| s.launchpad.open));
    let query = move || state.with(|s| s.launchpad.query.clone());

    view! {
        <Show when=move || is_open.get() fallback=|| ()>
            <div
                class="launchpad"
                on:click=move |_| runtime.dispatch_action(DesktopAction::CloseLaunchpad)
            >
                <input
                    class="launchpad-search"
                    type="text"
                    placeholder="Search"
                    prop:value=query
                    on:click=|ev| ev.stop_propagation()
                    on:input=move |ev| {
                        runtime.dispatch_action(DesktopAction::SetLaunchpadQuery {
                            query: event_target_value(&ev),
                        });
                    }
                />
                <div class="launchpad-grid">
                    {move || {
                        state
                            .with(|s| filter_apps(&s.launchpad.query))
                            .into_iter()
                            .map(|entry| {
                                let app_id = entry.app_id;
                                view! {
                                    <button
                                        class="launchpad-item"
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            runtime.dispatch_action(DesktopAction::LaunchFromLaunchpad { app_id });
                                        }
                                    >
                                        <img src=entry.icon_url() alt="" draggable="false" />
                                        <span>{entry.name}</span>
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </Show>
    }
}
