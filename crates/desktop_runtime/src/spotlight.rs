//! Spotlight search results and selection movement.

use desktop_app_contract::AppId;

use crate::apps;

pub const GITHUB_URL: &str = "https://github.com";
pub const LINKEDIN_URL: &str = "https://linkedin.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpotlightCommand {
    OpenApp(AppId),
    OpenUrl(&'static str),
    ToggleTheme,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotlightResult {
    pub id: String,
    pub name: String,
    pub kind: SpotlightKind,
    pub icon: String,
    pub command: SpotlightCommand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpotlightKind {
    App,
    Command,
}

impl SpotlightKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::App => "Application",
            Self::Command => "Command",
        }
    }
}

fn all_results() -> Vec<SpotlightResult> {
    let mut results: Vec<_> = apps::app_registry()
        .iter()
        .map(|entry| SpotlightResult {
            id: entry.app_id.as_str().to_string(),
            name: entry.name.to_string(),
            kind: SpotlightKind::App,
            icon: entry.icon_url(),
            command: SpotlightCommand::OpenApp(entry.app_id),
        })
        .collect();
    results.extend([
        SpotlightResult {
            id: "github".to_string(),
            name: "Open GitHub".to_string(),
            kind: SpotlightKind::Command,
            icon: "/icons/Github.png".to_string(),
            command: SpotlightCommand::OpenUrl(GITHUB_URL),
        },
        SpotlightResult {
            id: "linkedin".to_string(),
            name: "Open LinkedIn".to_string(),
            kind: SpotlightKind::Command,
            icon: "/icons/Linkedin.png".to_string(),
            command: SpotlightCommand::OpenUrl(LINKEDIN_URL),
        },
        SpotlightResult {
            id: "theme".to_string(),
            name: "Toggle Theme".to_string(),
            kind: SpotlightKind::Command,
            icon: "/icons/Toggle.png".to_string(),
            command: SpotlightCommand::ToggleTheme,
        },
    ]);
    results
}

/// Results whose name contains the query, case-insensitively.
pub fn search(query: &str) -> Vec<SpotlightResult> {
    let needle = query.trim().to_lowercase();
    all_results()
        .into_iter()
        .filter(|result| needle.is_empty() || result.name.to_lowercase().contains(&needle))
        .collect()
}

/// Moves a selection by `delta`, wrapping at both ends.
pub fn wrap_selection(current: usize, delta: i32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as i64;
    let next = (current as i64 + i64::from(delta)).rem_euclid(len);
    next as usize
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_query_lists_apps_then_commands() {
        let results = search("");
        assert_eq!(results.len(), 17);
        assert_eq!(results[0].command, SpotlightCommand::OpenApp(AppId::Finder));
        assert_eq!(results[16].command, SpotlightCommand::ToggleTheme);
    }

    #[test]
    fn query_filters_case_insensitively() {
        let names: Vec<_> = search("OPEN").into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Open GitHub", "Open LinkedIn"]);
        let names: Vec<_> = search("term").into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Terminal"]);
    }

    #[test]
    fn selection_wraps_both_ways() {
        assert_eq!(wrap_selection(0, -1, 3), 2);
        assert_eq!(wrap_selection(2, 1, 3), 0);
        assert_eq!(wrap_selection(1, 1, 3), 2);
        assert_eq!(wrap_selection(5, 1, 0), 0);
    }
}
