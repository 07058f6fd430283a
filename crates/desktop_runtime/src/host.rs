//! Host-side runtime helpers for executing reducer effects and querying the display environment.
//!
//! The reducer stays pure; everything that touches storage, navigation, or browser probes goes
//! through [`DesktopHostContext`], which wraps the injected [`HostServices`] bundle.

mod boot;
mod effects;

use std::rc::Rc;

use leptos::Callback;
use platform_host::{ExternalUrlService, HostServices, PrefsStore};

use crate::{
    model::{DesktopState, ShellMetrics, Viewport},
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

pub use effects::execute_effect;

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    services: HostServices,
}

impl DesktopHostContext {
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    /// Returns the configured preference store.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.services.prefs.clone()
    }

    /// Returns the configured external URL service.
    pub fn external_url_service(&self) -> Rc<dyn ExternalUrlService> {
        self.services.external_urls.clone()
    }

    /// Current browser viewport.
    pub fn viewport(&self) -> Viewport {
        let (width, height) = self.services.environment.viewport_size();
        Viewport::new(width, height)
    }

    pub fn prefers_dark_scheme(&self) -> bool {
        self.services.environment.prefers_dark_scheme()
    }

    /// Whether shortcuts use Command instead of Control.
    pub fn is_mac_platform(&self) -> bool {
        self.services.environment.is_mac_platform()
    }

    /// Initial desktop state sized to the live viewport.
    pub fn initial_state(&self) -> DesktopState {
        let mut state = DesktopState::new(ShellMetrics::default(), self.viewport());
        state.appearance.host_prefers_dark = self.prefers_dark_scheme();
        state
    }

    /// Installs boot hydration of persisted preferences for the desktop provider.
    pub fn install_boot_hydration(&self, dispatch: Callback<DesktopAction>) {
        boot::install_boot_hydration(self.clone(), dispatch);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        effects::run_runtime_effect(self.clone(), runtime, effect);
    }
}
