//! Built-in Settings app: theme mode, wallpaper picker with custom wallpapers, and a keyboard
//! shortcut reference.
//!
//! Everything flows through the injected [`desktop_app_contract::AppServices`], so the runtime
//! stays the single owner of appearance state and its persistence.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod panes;

use desktop_app_contract::{AppMountContext, AppServices, ThemeMode};
use leptos::*;
use platform_host::HostEnvironment;
use platform_host_web::WebEnvironment;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::panes::{
    category_label, chord_label, group_wallpapers, parse_custom_wallpaper, SettingsSection,
    SHORTCUTS,
};

/// Per-window state merged into the runtime window data bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsWindowData {
    /// Section shown when the window mounts.
    pub section: SettingsSection,
}

impl SettingsWindowData {
    /// Reads the settings keys out of a window data bag.
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}

const THEME_CHOICES: [(ThemeMode, &str); 3] = [
    (ThemeMode::Light, "Light"),
    (ThemeMode::Dark, "Dark"),
    (ThemeMode::Auto, "Auto"),
];

#[component]
fn AppearancePane(services: AppServices) -> impl IntoView {
    let theme = services.theme;
    view! {
        <section class="settings-pane">
            <h2>"Appearance"</h2>
            <div class="settings-theme-choices" role="radiogroup" aria-label="Appearance">
                {THEME_CHOICES
                    .into_iter()
                    .map(|(mode, label)| {
                        view! {
                            <button
                                type="button"
                                role="radio"
                                class="settings-theme-choice"
                                class:selected=move || theme.mode.get() == mode
                                aria-checked=move || (theme.mode.get() == mode).to_string()
                                on:click=move |_| theme.set_mode(mode)
                            >
                                <span class=format!("settings-theme-swatch {}", mode.as_str())></span>
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="settings-hint">
                {move || {
                    let scheme = if theme.is_dark.get() { "dark" } else { "light" };
                    match theme.mode.get() {
                        ThemeMode::Auto => format!("Following the system, currently {scheme}."),
                        _ => format!("Using the {scheme} appearance."),
                    }
                }}
            </p>
        </section>
    }
}

#[component]
fn WallpaperPane(services: AppServices) -> impl IntoView {
    let wallpaper = services.wallpaper;
    let custom_name = create_rw_signal(String::new());
    let custom_url = create_rw_signal(String::new());
    let form_error = create_rw_signal(None::<String>);

    let add_custom = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match parse_custom_wallpaper(&custom_name.get_untracked(), &custom_url.get_untracked()) {
            Ok(input) => {
                wallpaper.add_custom(input.name, input.url);
                custom_name.set(String::new());
                custom_url.set(String::new());
                form_error.set(None);
            }
            Err(err) => form_error.set(Some(err.to_string())),
        }
    };

    view! {
        <section class="settings-pane">
            <h2>"Wallpaper"</h2>
            <p class="settings-hint">
                {move || format!("Showing wallpapers for {} screens.", wallpaper.device_class.get().as_str())}
            </p>
            {move || {
                group_wallpapers(&wallpaper.available.get())
                    .into_iter()
                    .map(|(category, members)| {
                        view! {
                            <h3>{category_label(category)}</h3>
                            <div class="settings-wallpaper-grid">
                                {members
                                    .into_iter()
                                    .map(|option| {
                                        let id = option.id.clone();
                                        let selected_id = option.id.clone();
                                        view! {
                                            <button
                                                type="button"
                                                class="settings-wallpaper"
                                                class:selected=move || wallpaper.selected.get() == selected_id
                                                title=option.name.clone()
                                                on:click=move |_| wallpaper.select(id.clone())
                                            >
                                                <img src=option.thumbnail alt="" loading="lazy" />
                                                <span>{option.name}</span>
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()
            }}
            <form class="settings-custom-wallpaper" on:submit=add_custom>
                <h3>"Add Custom Wallpaper"</h3>
                <input
                    type="text"
                    placeholder="Name (optional)"
                    prop:value=move || custom_name.get()
                    on:input=move |ev| custom_name.set(event_target_value(&ev))
                />
                <input
                    type="url"
                    placeholder="https://example.com/wallpaper.jpg"
                    prop:value=move || custom_url.get()
                    on:input=move |ev| custom_url.set(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
                <Show when=move || form_error.with(Option::is_some) fallback=|| ()>
                    <p class="settings-error" role="alert">{move || form_error.get().unwrap_or_default()}</p>
                </Show>
            </form>
        </section>
    }
}

#[component]
fn ShortcutsPane() -> impl IntoView {
    let mac = WebEnvironment.is_mac_platform();
    view! {
        <section class="settings-pane">
            <h2>"Keyboard Shortcuts"</h2>
            <table class="settings-shortcuts">
                <tbody>
                    {SHORTCUTS
                        .iter()
                        .map(|row| {
                            view! {
                                <tr>
                                    <td><kbd>{chord_label(row, mac)}</kbd></td>
                                    <td>{row.action}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </section>
    }
}

#[component]
fn AboutPane(services: AppServices) -> impl IntoView {
    view! {
        <section class="settings-pane settings-about">
            <h2>"About This Desktop"</h2>
            <dl>
                <dt>"Owner"</dt>
                <dd>"Jordan Avery"</dd>
                <dt>"Built with"</dt>
                <dd>"Rust, Leptos and WebAssembly"</dd>
                <dt>"Display"</dt>
                <dd>{move || services.wallpaper.device_class.get().as_str()}</dd>
            </dl>
            <button type="button" on:click=move |_| services.shell.open_external_url("https://github.com")>
                "View Source"
            </button>
        </section>
    }
}

#[component]
/// Settings app window contents.
pub fn SettingsApp(
    /// Window data bag restored by the desktop runtime.
    restored_data: Value,
    /// Injected desktop services bundle.
    services: AppServices,
) -> impl IntoView {
    let section = create_rw_signal(SettingsWindowData::from_value(&restored_data).section);

    create_effect(move |previous: Option<SettingsSection>| {
        let current = section.get();
        if previous.is_some_and(|previous| previous != current) {
            if let Ok(data) = serde_json::to_value(SettingsWindowData { section: current }) {
                services.window.merge_data(data);
            }
        }
        current
    });

    view! {
        <div class="app-shell app-settings-shell">
            <nav class="settings-sidebar" aria-label="Settings sections">
                {SettingsSection::ALL
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <button
                                type="button"
                                class="settings-nav-item"
                                class:active=move || section.get() == entry
                                on:click=move |_| section.set(entry)
                            >
                                {entry.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="settings-content">
                {move || match section.get() {
                    SettingsSection::Appearance => view! { <AppearancePane services=services /> }.into_view(),
                    SettingsSection::Wallpaper => view! { <WallpaperPane services=services /> }.into_view(),
                    SettingsSection::Shortcuts => view! { <ShortcutsPane /> }.into_view(),
                    SettingsSection::About => view! { <AboutPane services=services /> }.into_view(),
                }}
            </div>
        </div>
    }
}

/// Mounts the Settings app into a runtime window.
pub fn mount_settings_app(context: AppMountContext) -> View {
    view! { <SettingsApp restored_data=context.restored_data services=context.services /> }
        .into_view()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn window_data_restores_the_last_section() {
        assert_eq!(
            SettingsWindowData::from_value(&json!({ "section": "wallpaper", "other": 1 })),
            SettingsWindowData {
                section: SettingsSection::Wallpaper
            }
        );
        assert_eq!(
            SettingsWindowData::from_value(&json!({ "section": "sound" })),
            SettingsWindowData::default()
        );
        assert_eq!(
            serde_json::to_value(SettingsWindowData {
                section: SettingsSection::Shortcuts
            })
            .expect("serialize"),
            json!({ "section": "shortcuts" })
        );
    }
}
