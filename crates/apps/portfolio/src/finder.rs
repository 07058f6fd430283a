//! Finder: browses projects, apps and documents in icon, list or column view.

use desktop_app_contract::{AppId, AppServices, FinderViewMode};
use leptos::*;

use crate::content::{PROJECTS, RESUME_PDF};

/// Sidebar locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinderLocation {
    /// Showcased projects.
    Projects,
    /// Every desktop app.
    Applications,
    /// Resume and notes.
    Documents,
}

impl FinderLocation {
    /// Sidebar order.
    pub const ALL: [Self; 3] = [Self::Projects, Self::Applications, Self::Documents];

    /// Sidebar label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Projects => "Projects",
            Self::Applications => "Applications",
            Self::Documents => "Documents",
        }
    }
}

/// What double-clicking an entry does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinderAction {
    /// Open a desktop app.
    OpenApp(AppId),
    /// Open a URL outside the shell.
    OpenUrl(&'static str),
}

/// One row/icon in the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinderEntry {
    /// Stable id within the location.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Kind column text.
    pub kind: &'static str,
    /// Year shown in the date column, if any.
    pub year: Option<u16>,
    /// Double-click action.
    pub action: FinderAction,
}

fn app_label(app_id: AppId) -> &'static str {
    match app_id {
        AppId::Finder => "Finder",
        AppId::Terminal => "Terminal",
        AppId::Gallery => "Photos",
        AppId::Contact => "Contact",
        AppId::Settings => "Settings",
        AppId::Spotify => "Spotify",
        AppId::Youtube => "Youtube",
        AppId::Journal => "Journal",
        AppId::Camera => "Camera",
        AppId::Resume => "Resume",
        AppId::About => "About Me",
        AppId::Projects => "Projects",
        AppId::Skills => "Skills",
        AppId::Experience => "Experience",
    }
}

/// Entries shown for `location`.
pub fn entries_for(location: FinderLocation) -> Vec<FinderEntry> {
    match location {
        FinderLocation::Projects => PROJECTS
            .into_iter()
            .map(|project| FinderEntry {
                id: project.id,
                name: project.name,
                kind: "Folder",
                year: Some(project.year),
                action: FinderAction::OpenUrl(project.repo_url),
            })
            .collect(),
        FinderLocation::Applications => AppId::ALL
            .into_iter()
            .map(|app_id| FinderEntry {
                id: app_id.as_str(),
                name: app_label(app_id),
                kind: "Application",
                year: None,
                action: FinderAction::OpenApp(app_id),
            })
            .collect(),
        FinderLocation::Documents => vec![
            FinderEntry {
                id: "resume",
                name: "Resume.pdf",
                kind: "PDF Document",
                year: Some(2026),
                action: FinderAction::OpenUrl(RESUME_PDF),
            },
            FinderEntry {
                id: "journal",
                name: "Journal",
                kind: "Notes",
                year: Some(2026),
                action: FinderAction::OpenApp(AppId::Journal),
            },
        ],
    }
}

/// Entries whose name contains `query` (case-insensitive).
pub fn filter_entries(entries: Vec<FinderEntry>, query: &str) -> Vec<FinderEntry> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return entries;
    }
    entries
        .into_iter()
        .filter(|entry| entry.name.to_lowercase().contains(&query))
        .collect()
}

#[component]
/// Finder window contents.
pub fn FinderApp(
    /// Runtime services: view mode, opening apps and URLs.
    services: AppServices,
) -> impl IntoView {
    let location = create_rw_signal(FinderLocation::Projects);
    let query = create_rw_signal(String::new());
    let selected = create_rw_signal(None::<&'static str>);
    let view_mode = services.shell.finder_view_mode;
    let entries = create_memo(move |_| {
        query.with(|query| filter_entries(entries_for(location.get()), query))
    });

    let activate = move |entry: FinderEntry| match entry.action {
        FinderAction::OpenApp(app_id) => services.shell.open_app(app_id),
        FinderAction::OpenUrl(url) => services.shell.open_external_url(url),
    };

    let entry_view = move |entry: FinderEntry| {
        let body = match view_mode.get_untracked() {
            FinderViewMode::Icon => view! {
                <span class="finder-icon" data-kind=entry.kind></span>
                <span class="finder-name">{entry.name}</span>
            }
            .into_view(),
            FinderViewMode::List => view! {
                <span class="finder-name">{entry.name}</span>
                <span class="finder-modified">
                    {entry.year.map_or_else(|| "--".to_string(), |year| year.to_string())}
                </span>
                <span class="finder-kind">{entry.kind}</span>
            }
            .into_view(),
            FinderViewMode::Column => view! {
                <span class="finder-name">{entry.name}</span>
                <span class="finder-chevron">"›"</span>
            }
            .into_view(),
        };
        view! {
            <li
                class="finder-entry"
                class:selected=move || selected.get() == Some(entry.id)
                on:click=move |_| selected.set(Some(entry.id))
                on:dblclick=move |_| activate(entry)
            >
                {body}
            </li>
        }
    };

    let preview = move || {
        let entry = selected
            .get()
            .and_then(|id| entries.with(|entries| entries.iter().find(|e| e.id == id).copied()))?;
        Some(view! {
            <div class="finder-preview">
                <span class="finder-icon finder-icon-large" data-kind=entry.kind></span>
                <h3>{entry.name}</h3>
                <p>{entry.kind}</p>
                <button type="button" on:click=move |_| activate(entry)>"Open"</button>
            </div>
        })
    };

    view! {
        <div class="app-shell app-finder-shell">
            <aside class="finder-sidebar">
                <h3>"Favorites"</h3>
                {FinderLocation::ALL
                    .into_iter()
                    .map(|candidate| {
                        view! {
                            <button
                                type="button"
                                class:active=move || location.get() == candidate
                                on:click=move |_| {
                                    location.set(candidate);
                                    selected.set(None);
                                }
                            >
                                {candidate.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </aside>
            <section class="finder-main">
                <header class="finder-toolbar">
                    <span class="finder-path">{move || location.get().label()}</span>
                    <div class="finder-view-modes" role="group" aria-label="View">
                        {FinderViewMode::ALL
                            .into_iter()
                            .map(|mode| {
                                view! {
                                    <button
                                        type="button"
                                        title=mode.label()
                                        class:active=move || view_mode.get() == mode
                                        on:click=move |_| services.shell.set_finder_view_mode(mode)
                                    >
                                        {match mode {
                                            FinderViewMode::Icon => "▦",
                                            FinderViewMode::List => "☰",
                                            FinderViewMode::Column => "▥",
                                        }}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <input
                        class="app-search"
                        type="search"
                        placeholder="Search"
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                </header>
                {move || {
                    let mode = view_mode.get();
                    let list = view! {
                        <ul class=format!("finder-entries finder-{mode:?}").to_lowercase()>
                            {entries.get().into_iter().map(entry_view).collect_view()}
                        </ul>
                    };
                    if mode == FinderViewMode::Column {
                        view! { <div class="finder-columns">{list}{preview}</div> }.into_view()
                    } else {
                        list.into_view()
                    }
                }}
                <footer class="app-statusbar">
                    {move || format!("{} items", entries.with(Vec::len))}
                </footer>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn locations_list_their_entries() {
        assert_eq!(entries_for(FinderLocation::Projects).len(), PROJECTS.len());
        let apps = entries_for(FinderLocation::Applications);
        assert_eq!(apps.len(), AppId::ALL.len());
        assert_eq!(apps[2].name, "Photos");
        assert_eq!(apps[2].action, FinderAction::OpenApp(AppId::Gallery));
        assert_eq!(
            entries_for(FinderLocation::Documents)[0].action,
            FinderAction::OpenUrl(RESUME_PDF)
        );
    }

    #[test]
    fn search_filters_by_name() {
        let found = filter_entries(entries_for(FinderLocation::Applications), " term");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "terminal");
        assert_eq!(
            filter_entries(entries_for(FinderLocation::Projects), "").len(),
            PROJECTS.len()
        );
    }
}
