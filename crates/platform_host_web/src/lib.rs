//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! Browser API calls are routed through `bridge`, which selects a `wasm32` implementation or a
//! non-wasm fallback so the crate builds and tests on native targets.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod bridge;
pub mod camera;
pub mod environment;
pub mod external_url;
pub mod prefs;

use std::rc::Rc;

use platform_host::HostServices;

pub use environment::WebEnvironment;
pub use external_url::WebExternalUrlService;
pub use prefs::WebPrefsStore;

/// Assembles the browser host bundle: `localStorage` prefs, `window.open` URLs and live
/// viewport/media-query probes.
pub fn build_host_services() -> HostServices {
    HostServices::new(
        Rc::new(WebPrefsStore),
        Rc::new(WebExternalUrlService),
        Rc::new(WebEnvironment),
    )
}
