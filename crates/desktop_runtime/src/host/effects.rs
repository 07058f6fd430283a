//! Runtime-effect execution for the desktop host boundary.

use leptos::{logging, spawn_local, SignalGetUntracked};
use platform_host::ExternalUrlService;

use crate::{
    host::DesktopHostContext, model::AppearanceState, persistence, reducer::RuntimeEffect,
    runtime_context::DesktopRuntimeContext,
};

pub(super) fn run_runtime_effect(
    host: DesktopHostContext,
    runtime: DesktopRuntimeContext,
    effect: RuntimeEffect,
) {
    let appearance = runtime.state.get_untracked().appearance;
    spawn_local(async move {
        if let Err(err) = execute_effect(&host, &appearance, &effect).await {
            logging::warn!("runtime effect {effect:?} failed: {err}");
        }
    });
}

/// Runs one effect against the appearance snapshot taken after the reducer committed.
///
/// # Errors
///
/// Returns the storage or navigation error reported by the host service.
pub async fn execute_effect(
    host: &DesktopHostContext,
    appearance: &AppearanceState,
    effect: &RuntimeEffect,
) -> Result<(), String> {
    let prefs = host.prefs_store();
    let urls = host.external_url_service();
    match effect {
        RuntimeEffect::PersistTheme => {
            persistence::persist_theme(prefs.as_ref(), appearance.theme_mode).await
        }
        RuntimeEffect::PersistWallpaper => {
            persistence::persist_wallpaper(prefs.as_ref(), &appearance.selected_wallpaper).await
        }
        RuntimeEffect::PersistCustomWallpapers => {
            persistence::persist_custom_wallpapers(prefs.as_ref(), &appearance.custom_wallpapers)
                .await
        }
        RuntimeEffect::OpenExternalUrl(url) => urls.open_url(url).await,
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use desktop_app_contract::ThemeMode;
    use futures::executor::block_on;
    use platform_host::{
        FixedEnvironment, HostServices, MemoryPrefsStore, RecordingExternalUrlService,
    };
    use pretty_assertions::assert_eq;

    use super::*;

    fn host() -> (DesktopHostContext, MemoryPrefsStore, RecordingExternalUrlService) {
        let prefs = MemoryPrefsStore::default();
        let urls = RecordingExternalUrlService::default();
        let services = HostServices::new(
            Rc::new(prefs.clone()),
            Rc::new(urls.clone()),
            Rc::new(FixedEnvironment::default()),
        );
        (DesktopHostContext::new(services), prefs, urls)
    }

    #[test]
    fn persist_effects_write_their_keys() {
        let (host, prefs, _) = host();
        let appearance = AppearanceState {
            theme_mode: ThemeMode::Light,
            selected_wallpaper: "solid-orange".to_string(),
            ..AppearanceState::default()
        };

        for effect in [
            RuntimeEffect::PersistTheme,
            RuntimeEffect::PersistWallpaper,
            RuntimeEffect::PersistCustomWallpapers,
        ] {
            block_on(execute_effect(&host, &appearance, &effect)).expect("persist");
        }

        assert_eq!(
            prefs.raw(persistence::THEME_KEY),
            Some("\"light\"".to_string())
        );
        assert_eq!(
            prefs.raw(persistence::WALLPAPER_KEY),
            Some("\"solid-orange\"".to_string())
        );
        assert_eq!(
            prefs.raw(persistence::CUSTOM_WALLPAPERS_KEY),
            Some("[]".to_string())
        );
    }

    #[test]
    fn external_urls_go_through_the_host_service() {
        let (host, _, urls) = host();
        block_on(execute_effect(
            &host,
            &AppearanceState::default(),
            &RuntimeEffect::OpenExternalUrl("https://github.com".to_string()),
        ))
        .expect("open");
        let rejected = block_on(execute_effect(
            &host,
            &AppearanceState::default(),
            &RuntimeEffect::OpenExternalUrl("javascript:void(0)".to_string()),
        ));

        assert!(rejected.is_err());
        assert_eq!(urls.opened(), vec!["https://github.com".to_string()]);
    }
}
