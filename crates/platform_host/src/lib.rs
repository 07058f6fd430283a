//! Typed host-domain contracts shared by the desktop runtime and the browser adapters.
//!
//! This crate is the API boundary for platform services: lightweight preference storage,
//! external URL opening, and the environment probes (viewport, color scheme, platform) the
//! window manager depends on. Concrete browser implementations live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod environment;
pub mod external_url;
pub mod host;
pub mod prefs;
pub mod time;

pub use environment::{FixedEnvironment, HostEnvironment};
pub use external_url::{
    ensure_supported_url, ExternalUrlFuture, ExternalUrlService, NoopExternalUrlService,
    RecordingExternalUrlService,
};
pub use host::HostServices;
pub use prefs::{
    delete_pref_with, load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore,
    PrefsStore, PrefsStoreFuture,
};
pub use time::{next_monotonic_timestamp_ms, unix_time_ms_now};
