//! Journal entries with mood and text filters.

use leptos::*;
use serde::{Deserialize, Serialize};

/// How an entry felt to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// Good day.
    Happy,
    /// Got a lot done.
    Productive,
    /// Looking back.
    Reflective,
    /// Something new.
    Excited,
    /// Hard going.
    Challenging,
}

impl Mood {
    /// Filter chip order.
    pub const ALL: [Mood; 5] = [
        Self::Happy,
        Self::Productive,
        Self::Reflective,
        Self::Excited,
        Self::Challenging,
    ];

    /// Lowercase label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Productive => "productive",
            Self::Reflective => "reflective",
            Self::Excited => "excited",
            Self::Challenging => "challenging",
        }
    }

    /// Accent color.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Happy => "#ffcc00",
            Self::Productive => "#34c759",
            Self::Reflective => "#5856d6",
            Self::Excited => "#ff9500",
            Self::Challenging => "#ff3b30",
        }
    }
}

/// One journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JournalEntry {
    /// Stable id.
    pub id: &'static str,
    /// Headline.
    pub title: &'static str,
    /// Display date.
    pub date: &'static str,
    /// Mood tag.
    pub mood: Mood,
    /// Full text.
    pub content: &'static str,
    /// Topic tags.
    pub tags: &'static [&'static str],
}

/// Entries, newest first.
pub const ENTRIES: [JournalEntry; 4] = [
    JournalEntry {
        id: "wasm-window-manager",
        title: "A window manager in WebAssembly",
        date: "September 28, 2026",
        mood: Mood::Excited,
        content: "Rewrote this site's window manager as a pure reducer. Dragging feels \
                  smoother and every layout rule finally has a test.",
        tags: &["rust", "leptos", "portfolio"],
    },
    JournalEntry {
        id: "latency-hunt",
        title: "Hunting a p99 regression",
        date: "August 14, 2026",
        mood: Mood::Challenging,
        content: "Three days of flame graphs to find one accidental clone inside a hot \
                  loop. The fix was four lines.",
        tags: &["performance", "work"],
    },
    JournalEntry {
        id: "quiet-sprint",
        title: "A quiet, productive sprint",
        date: "July 2, 2026",
        mood: Mood::Productive,
        content: "Closed out the sync backlog and wrote the migration guide nobody \
                  wanted to write.",
        tags: &["work", "writing"],
    },
    JournalEntry {
        id: "five-years",
        title: "Five years of Rust",
        date: "May 19, 2026",
        mood: Mood::Reflective,
        content: "Looking back at my first borrow checker fights. The compiler was \
                  right more often than I was.",
        tags: &["rust", "career"],
    },
];

/// Entries matching `mood` (when set) whose title, content or tags contain `query`.
pub fn filter_entries(query: &str, mood: Option<Mood>) -> Vec<JournalEntry> {
    let query = query.trim().to_lowercase();
    ENTRIES
        .into_iter()
        .filter(|entry| mood.map_or(true, |mood| entry.mood == mood))
        .filter(|entry| {
            query.is_empty()
                || entry.title.to_lowercase().contains(&query)
                || entry.content.to_lowercase().contains(&query)
                || entry.tags.iter().any(|tag| tag.contains(query.as_str()))
        })
        .collect()
}

#[component]
/// Entry list with filters and a reading pane.
pub fn JournalApp() -> impl IntoView {
    let query = create_rw_signal(String::new());
    let mood = create_rw_signal(None::<Mood>);
    let selected = create_rw_signal(None::<&'static str>);
    let visible = create_memo(move |_| query.with(|query| filter_entries(query, mood.get())));
    let open_entry = move || {
        selected
            .get()
            .and_then(|id| ENTRIES.into_iter().find(|entry| entry.id == id))
    };

    view! {
        <div class="app-shell app-journal-shell">
            <aside class="journal-sidebar">
                <input
                    class="app-search"
                    type="search"
                    placeholder="Search entries"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <div class="journal-moods" role="group" aria-label="Filter by mood">
                    <button type="button" class:active=move || mood.get().is_none() on:click=move |_| mood.set(None)>
                        "all"
                    </button>
                    {Mood::ALL
                        .into_iter()
                        .map(|candidate| {
                            view! {
                                <button
                                    type="button"
                                    style=format!("--mood:{};", candidate.color())
                                    class:active=move || mood.get() == Some(candidate)
                                    on:click=move |_| {
                                        mood.update(|current| {
                                            *current = if *current == Some(candidate) { None } else { Some(candidate) };
                                        });
                                    }
                                >
                                    {candidate.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <ul class="journal-list">
                    <For
                        each=move || visible.get()
                        key=|entry| entry.id
                        children=move |entry| {
                            view! {
                                <li
                                    class="journal-item"
                                    class:selected=move || selected.get() == Some(entry.id)
                                    on:click=move |_| selected.set(Some(entry.id))
                                >
                                    <span class="journal-mood-dot" style=format!("background:{};", entry.mood.color())></span>
                                    <div>
                                        <strong>{entry.title}</strong>
                                        <small>{entry.date}</small>
                                    </div>
                                </li>
                            }
                        }
                    />
                </ul>
                <Show when=move || visible.with(Vec::is_empty) fallback=|| ()>
                    <p class="app-empty">"No entries found"</p>
                </Show>
            </aside>
            <article class="journal-reader">
                {move || match open_entry() {
                    Some(entry) => view! {
                        <h1>{entry.title}</h1>
                        <p class="journal-meta">
                            {entry.date}
                            " · "
                            <span style=format!("color:{};", entry.mood.color())>
                                {format!("Feeling {}", entry.mood.label())}
                            </span>
                        </p>
                        <p>{entry.content}</p>
                        <ul class="tag-list">
                            {entry.tags.iter().map(|tag| view! { <li>{format!("#{tag}")}</li> }).collect_view()}
                        </ul>
                    }
                    .into_view(),
                    None => view! { <p class="app-empty">"Select an entry to read it"</p> }.into_view(),
                }}
            </article>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ids(entries: Vec<JournalEntry>) -> Vec<&'static str> {
        entries.into_iter().map(|entry| entry.id).collect()
    }

    #[test]
    fn mood_and_text_filters_combine() {
        assert_eq!(filter_entries("", None).len(), ENTRIES.len());
        assert_eq!(
            ids(filter_entries("", Some(Mood::Productive))),
            vec!["quiet-sprint"]
        );
        assert_eq!(
            ids(filter_entries("RUST", None)),
            vec!["wasm-window-manager", "five-years"]
        );
        assert_eq!(
            ids(filter_entries("rust", Some(Mood::Reflective))),
            vec!["five-years"]
        );
        assert!(filter_entries("rust", Some(Mood::Happy)).is_empty());
        assert_eq!(ids(filter_entries("flame", None)), vec!["latency-hunt"]);
    }
}
