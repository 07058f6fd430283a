use super::*;
use crate::{
    icons::{IconName, IconSize, ShellIcon},
    menus::{menu_bar_menus, MenuCommand, MenuItem},
};

#[component]
pub(super) fn MenuBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let open_menu = create_rw_signal(None::<&'static str>);
    let locked = create_rw_signal(false);
    let clock = create_rw_signal(ClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock.set(ClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let outside_click = window_event_listener(ev::mousedown, move |_| {
        if open_menu.get_untracked().is_some() {
            open_menu.set(None);
        }
    });
    on_cleanup(move || outside_click.remove());

    let run_item = Callback::new(move |item: MenuItem| {
        open_menu.set(None);
        match item.command {
            Some(MenuCommand::Dispatch(action)) => runtime.dispatch_action(action),
            Some(MenuCommand::LockScreen) => locked.set(true),
            None => {}
        }
    });

    let menus = create_memo(move |_| state.with(menu_bar_menus));
    let is_dark = move || state.with(|s| s.appearance.is_dark());

    view! {
        <header class="menu-bar" role="menubar">
            <div class="menu-bar-left">
                <For each=move || menus.get() key=|menu| menu.id let:menu>
                    {{
                        let id = menu.id;
                        let items = menu.items.clone();
                        let is_logo = id == "apple";
                        view! {
                            <div class="menu-root" on:mousedown=|ev| ev.stop_propagation()>
                                <button
                                    class="menu-title"
                                    class:open=move || open_menu.get() == Some(id)
                                    aria-haspopup="true"
                                    on:click=move |_| {
                                        open_menu.update(|open| {
                                            *open = if *open == Some(id) { None } else { Some(id) };
                                        });
                                    }
                                    on:mouseenter=move |_| {
                                        if open_menu.get_untracked().is_some() {
                                            open_menu.set(Some(id));
                                        }
                                    }
                                >
                                    {if is_logo {
                                        view! { <ShellIcon icon=IconName::Logo /> }.into_view()
                                    } else {
                                        menu.label.into_view()
                                    }}
                                </button>
                                <Show when=move || open_menu.get() == Some(id) fallback=|| ()>
                                    <MenuDropdown items=items.clone() run_item=run_item />
                                </Show>
                            </div>
                            {is_logo
                                .then(|| {
                                    view! {
                                        <span class="menu-active-app">
                                            {move || state.with(|s| s.active_app_name().to_string())}
                                        </span>
                                    }
                                })}
                        }
                    }}
                </For>
            </div>
            <div class="menu-bar-right">
                <button
                    class="menu-status"
                    aria-label="Launchpad"
                    on:click=move |_| runtime.dispatch_action(DesktopAction::OpenLaunchpad)
                >
                    <ShellIcon icon=IconName::Launchpad />
                </button>
                <button
                    class="menu-status"
                    aria-label=move || if is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
                    on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleTheme)
                >
                    {move || {
                        let icon = if is_dark() { IconName::Sun } else { IconName::Moon };
                        view! { <ShellIcon icon=icon /> }
                    }}
                </button>
                <button
                    class="menu-status"
                    aria-label="Spotlight Search"
                    on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleSpotlight)
                >
                    <ShellIcon icon=IconName::Search />
                </button>
                <span class="menu-status" aria-hidden="true">
                    <ShellIcon icon=IconName::WifiOn />
                </span>
                <span class="menu-status" aria-hidden="true">
                    <ShellIcon icon=IconName::Bluetooth />
                </span>
                <span class="menu-status" aria-hidden="true">
                    <ShellIcon icon=IconName::Battery />
                </span>
                <span class="menu-clock">{move || format_menu_clock(clock.get())}</span>
            </div>
        </header>
        <Show when=move || locked.get() fallback=|| ()>
            <div class="lock-screen" on:click=move |_| locked.set(false)>
                <div class="lock-clock">{move || format_menu_clock(clock.get())}</div>
                <p>"Click anywhere to unlock"</p>
            </div>
        </Show>
    }
}

#[component]
fn MenuDropdown(items: Vec<MenuItem>, run_item: Callback<MenuItem>) -> impl IntoView {
    let open_submenu = create_rw_signal(None::<&'static str>);

    let rows = items
        .into_iter()
        .map(|item| {
            if item.separator {
                return view! { <div class="menu-separator" role="separator"></div> }.into_view();
            }
            let label = item.label;
            let has_submenu = !item.submenu.is_empty();
            let submenu = item.submenu.clone();
            let actionable = item.is_actionable();
            let disabled = item.disabled;
            let checked = item.checked;
            let shortcut = item.shortcut;
            view! {
                <div
                    class="menu-item"
                    class:disabled=disabled
                    role="menuitem"
                    aria-disabled=disabled.to_string()
                    on:mouseenter=move |_| open_submenu.set(has_submenu.then_some(label))
                    on:click=move |ev| {
                        ev.stop_propagation();
                        if actionable {
                            run_item.call(item.clone());
                        }
                    }
                >
                    <span class="menu-check">
                        {checked.then(|| view! { <ShellIcon icon=IconName::Checkmark size=IconSize::Xs /> })}
                    </span>
                    <span class="menu-label">{label}</span>
                    {shortcut.map(|hint| view! { <span class="menu-shortcut">{hint}</span> })}
                    {has_submenu
                        .then(move || {
                            view! {
                                <span class="menu-submenu-marker">
                                    <ShellIcon icon=IconName::ChevronRight size=IconSize::Xs />
                                </span>
                                <Show when=move || open_submenu.get() == Some(label) fallback=|| ()>
                                    <div class="menu-submenu">
                                        <MenuDropdown items=submenu.clone() run_item=run_item />
                                    </div>
                                </Show>
                            }
                        })}
                </div>
            }
                .into_view()
        })
        .collect_view();

    view! { <div class="menu-dropdown" role="menu">{rows}</div> }
}
