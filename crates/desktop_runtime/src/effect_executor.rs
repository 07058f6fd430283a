//! Drains the reducer effect queue through the host context.

use leptos::{create_effect, SignalGet, SignalSet};

use crate::{reducer::RuntimeEffect, runtime_context::DesktopRuntimeContext};

/// Installs the executor that runs queued [`RuntimeEffect`]s in emission order.
pub fn install(runtime: DesktopRuntimeContext) {
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        // Effects dispatched while draining land in a fresh batch.
        runtime.effects.set(Vec::new());

        let host = runtime.host.get_value();
        for effect in coalesce_persistence(queued) {
            host.run_runtime_effect(runtime, effect);
        }
    });
}

/// Keeps one write per preference key in a batch; URL opens all run.
///
/// Persist effects read the committed appearance when they execute, so repeats within a batch
/// (a burst of theme toggles or wallpaper clicks) would write the same value again.
fn coalesce_persistence(queued: Vec<RuntimeEffect>) -> Vec<RuntimeEffect> {
    let mut drained: Vec<RuntimeEffect> = Vec::with_capacity(queued.len());
    for effect in queued {
        let repeat = !matches!(effect, RuntimeEffect::OpenExternalUrl(_))
            && drained.contains(&effect);
        if !repeat {
            drained.push(effect);
        }
    }
    drained
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn repeated_preference_writes_collapse_but_url_opens_do_not() {
        let github = RuntimeEffect::OpenExternalUrl("https://github.com".to_string());
        let queued = vec![
            RuntimeEffect::PersistTheme,
            RuntimeEffect::PersistWallpaper,
            github.clone(),
            RuntimeEffect::PersistTheme,
            github.clone(),
            RuntimeEffect::PersistCustomWallpapers,
            RuntimeEffect::PersistWallpaper,
        ];

        assert_eq!(
            coalesce_persistence(queued),
            vec![
                RuntimeEffect::PersistTheme,
                RuntimeEffect::PersistWallpaper,
                github.clone(),
                github,
                RuntimeEffect::PersistCustomWallpapers,
            ]
        );
        assert!(coalesce_persistence(Vec::new()).is_empty());
    }
}
