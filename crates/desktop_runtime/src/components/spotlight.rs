use super::*;
use crate::{
    icons::{IconName, IconSize, ShellIcon},
    spotlight::search,
};

#[component]
pub(super) fn Spotlight() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let input_ref = create_node_ref::<html::Input>();

    let is_open = create_memo(move |_| state.with(|s| s.spotlight.open));
    let query = move || state.with(|s| s.spotlight.query.clone());
    let selected = move || state.with(|s| s.spotlight.selected_index);
    let results = create_memo(move |_| state.with(|s| search(&s.spotlight.query)));

    create_effect(move |_| {
        if is_open.get() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let on_keydown = move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "ArrowDown" => {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::MoveSpotlightSelection { delta: 1 });
        }
        "ArrowUp" => {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::MoveSpotlightSelection { delta: -1 });
        }
        "Enter" => {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::ActivateSpotlightResult { index: None });
        }
        _ => {}
    };

    view! {
        <Show when=move || is_open.get() fallback=|| ()>
            <div
                class="spotlight-backdrop"
                on:click=move |_| runtime.dispatch_action(DesktopAction::CloseSpotlight)
            >
                <div class="spotlight" role="dialog" aria-label="Spotlight Search" on:click=|ev| ev.stop_propagation()>
                    <div class="spotlight-input-row">
                        <ShellIcon icon=IconName::Search size=IconSize::Md />
                        <input
                            node_ref=input_ref
                            type="text"
                            placeholder="Spotlight Search"
                            prop:value=query
                            on:input=move |ev| {
                                runtime.dispatch_action(DesktopAction::SetSpotlightQuery {
                                    query: event_target_value(&ev),
                                });
                            }
                            on:keydown=on_keydown
                        />
                    </div>
                    <Show
                        when=move || !results.with(Vec::is_empty)
                        fallback=move || {
                            view! {
                                <p class="spotlight-empty">
                                    {move || format!("No results for \"{}\"", query())}
                                </p>
                            }
                        }
                    >
                        <ul class="spotlight-results" role="listbox">
                            {move || {
                                results
                                    .get()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, result)| {
                                        view! {
                                            <li
                                                class="spotlight-result"
                                                class:selected=move || selected() == index
                                                role="option"
                                                on:click=move |_| {
                                                    runtime.dispatch_action(DesktopAction::ActivateSpotlightResult {
                                                        index: Some(index),
                                                    });
                                                }
                                            >
                                                <img src=result.icon alt="" />
                                                <span class="spotlight-name">{result.name}</span>
                                                <span class="spotlight-kind">{result.kind.label()}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
