use super::*;
use crate::apps::desktop_icons;

#[component]
pub(super) fn DesktopIcons() -> impl IntoView {
    let runtime = use_desktop_runtime();

    let icons = desktop_icons()
        .into_iter()
        .map(|(entry, (left, top))| {
            let app_id = entry.app_id;
            view! {
                <button
                    class="desktop-icon"
                    style=format!("left:{left}px;top:{top}px;")
                    on:dblclick=move |_| runtime.dispatch_action(DesktopAction::OpenApp { app_id })
                >
                    <img src=entry.icon_url() alt="" draggable="false" />
                    <span>{entry.name}</span>
                </button>
            }
        })
        .collect_view();

    view! { <div class="desktop-icons">{icons}</div> }
}
