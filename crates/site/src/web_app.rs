use desktop_runtime::{
    use_desktop_runtime, DesktopAction, DesktopProvider, DesktopShell, BOOT_DURATION,
};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use platform_host_web::build_host_services;

/// Query parameter naming an app to open once the desktop has booted.
pub const OPEN_QUERY_PARAM: &str = "open";

/// Normalizes the `?open=` value; blank values are ignored.
pub fn deep_link_key(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_ascii_lowercase)
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Jordan Avery" />
        <Meta name="description" content="Jordan Avery's portfolio, presented as a desktop you can explore." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/*any" view=DesktopEntry />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider host_services=build_host_services()>
            <DeepLinkOpener />
            <DesktopShell />
        </DesktopProvider>
    }
}

/// Opens the app named by `?open=<app-id>` after the boot screen.
#[component]
fn DeepLinkOpener() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let query = use_query_map();
    let key = query
        .with_untracked(|map| deep_link_key(map.get(OPEN_QUERY_PARAM).map(String::as_str)));

    if let Some(key) = key {
        logging::log!("deep link: opening `{key}` after boot");
        set_timeout(
            move || runtime.dispatch_action(DesktopAction::OpenAppByKey { key }),
            BOOT_DURATION,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deep_link_key_trims_and_lowercases() {
        assert_eq!(deep_link_key(Some(" Terminal ")), Some("terminal".to_string()));
        assert_eq!(deep_link_key(Some("   ")), None);
        assert_eq!(deep_link_key(None), None);
    }
}
