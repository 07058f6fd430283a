//! Browser entry point: mounts the router, page metadata and the desktop shell.

mod web_app;

pub use web_app::{deep_link_key, DesktopEntry, SiteApp, OPEN_QUERY_PARAM};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
