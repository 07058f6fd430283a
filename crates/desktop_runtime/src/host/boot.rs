use leptos::{create_effect, logging, spawn_local, Callable, Callback};

use crate::{host::DesktopHostContext, persistence, reducer::DesktopAction};

pub(super) fn install_boot_hydration(host: DesktopHostContext, dispatch: Callback<DesktopAction>) {
    create_effect(move |_| {
        let host = host.clone();
        spawn_local(async move {
            let prefs = host.prefs_store();
            let stored = persistence::load_preferences(prefs.as_ref()).await;
            if stored.is_empty() {
                logging::log!("no stored preferences; using defaults");
                return;
            }
            dispatch.call(stored.into_action());
        });
    });
}
