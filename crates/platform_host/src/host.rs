//! Host service bundle assembled by the entry layer and injected into the desktop runtime.

use std::rc::Rc;

use crate::{
    ExternalUrlService, FixedEnvironment, HostEnvironment, MemoryPrefsStore, NoopExternalUrlService,
    PrefsStore,
};

#[derive(Clone)]
/// Concrete service handles used by the runtime for side effects and environment queries.
pub struct HostServices {
    /// Preference storage.
    pub prefs: Rc<dyn PrefsStore>,
    /// External URL opening.
    pub external_urls: Rc<dyn ExternalUrlService>,
    /// Display environment probes.
    pub environment: Rc<dyn HostEnvironment>,
}

impl HostServices {
    /// Bundles explicit service implementations.
    pub fn new(
        prefs: Rc<dyn PrefsStore>,
        external_urls: Rc<dyn ExternalUrlService>,
        environment: Rc<dyn HostEnvironment>,
    ) -> Self {
        Self {
            prefs,
            external_urls,
            environment,
        }
    }

    /// In-process bundle: memory prefs, no-op URL opening, fixed 1200×800 environment.
    pub fn in_memory() -> Self {
        Self::new(
            Rc::new(MemoryPrefsStore::default()),
            Rc::new(NoopExternalUrlService),
            Rc::new(FixedEnvironment::default()),
        )
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (width, height) = self.environment.viewport_size();
        f.debug_struct("HostServices")
            .field("viewport", &(width, height))
            .finish_non_exhaustive()
    }
}
