//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, and host boot
//! wiring. UI composition stays in [`crate::components`].

use desktop_app_contract::{AppCommand, AppServices, AppearanceSignals};
use leptos::*;
use platform_host::{unix_time_ms_now, HostServices};

use crate::{
    effect_executor,
    host::DesktopHostContext,
    model::{DesktopState, InteractionState, WindowId},
    reducer::{action_for_app_command, reduce_desktop, DesktopAction, RuntimeEffect},
    wallpaper,
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer drag/resize interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Service handles for the app hosted in `window_id`.
    pub fn app_services(&self, window_id: WindowId) -> AppServices {
        let runtime = *self;
        let sender = Callback::new(move |command: AppCommand| {
            runtime.dispatch_action(action_for_app_command(
                window_id,
                command,
                unix_time_ms_now(),
            ));
        });
        AppServices::new(sender, self.appearance_signals())
    }

    fn appearance_signals(&self) -> AppearanceSignals {
        let state = self.state;
        AppearanceSignals {
            theme_mode: Signal::derive(move || state.with(|s| s.appearance.theme_mode)),
            is_dark: Signal::derive(move || state.with(|s| s.appearance.is_dark())),
            device_class: Signal::derive(move || state.with(DesktopState::device_class)),
            selected_wallpaper: Signal::derive(move || {
                state.with(|s| s.appearance.selected_wallpaper.clone())
            }),
            wallpapers: Signal::derive(move || {
                state.with(|s| {
                    wallpaper::wallpapers_for_device(
                        &s.appearance.custom_wallpapers,
                        s.device_class(),
                    )
                })
            }),
            finder_view_mode: Signal::derive(move || state.with(|s| s.finder_view_mode)),
        }
    }
}

/// Reduces `action` against copies of the current signals and commits only what changed.
fn dispatch_into(
    state: RwSignal<DesktopState>,
    interaction: RwSignal<InteractionState>,
    effects: RwSignal<Vec<RuntimeEffect>>,
    action: DesktopAction,
) {
    let mut desktop = state.get_untracked();
    let mut ui = interaction.get_untracked();
    let previous_ui = ui.clone();

    match reduce_desktop(&mut desktop, &mut ui, action) {
        Ok(new_effects) => {
            if state.with_untracked(|previous| *previous != desktop) {
                state.set(desktop);
            }
            if ui != previous_ui {
                interaction.set(ui);
            }
            if !new_effects.is_empty() {
                effects.update(|queue| queue.extend(new_effects));
            }
        }
        Err(err) => logging::debug_warn!("desktop action ignored: {err}"),
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and boots persisted state.
pub fn DesktopProvider(
    /// Injected browser host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let host_context = DesktopHostContext::new(host_services);
    let state = create_rw_signal(host_context.initial_state());
    let host = store_value(host_context);
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        dispatch_into(state, interaction, effects, action);
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        interaction,
        effects,
        dispatch,
    };

    provide_context(runtime);

    runtime.host.get_value().install_boot_hydration(dispatch);
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
