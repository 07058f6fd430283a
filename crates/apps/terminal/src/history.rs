//! Submitted-command history with ArrowUp/ArrowDown navigation.

use serde::{Deserialize, Serialize};

const MAX_HISTORY: usize = 100;

/// Ordered command history plus the navigation cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandHistory {
    entries: Vec<String>,
    #[serde(skip)]
    cursor: Option<usize>,
}

impl CommandHistory {
    /// History seeded from restored entries.
    pub fn from_entries(mut entries: Vec<String>) -> Self {
        if entries.len() > MAX_HISTORY {
            entries.drain(..entries.len() - MAX_HISTORY);
        }
        Self {
            entries,
            cursor: None,
        }
    }

    /// Submitted commands, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Records a submitted command and resets navigation.
    pub fn push(&mut self, command: &str) {
        self.cursor = None;
        let command = command.trim();
        if command.is_empty() {
            return;
        }
        self.entries.push(command.to_string());
        if self.entries.len() > MAX_HISTORY {
            self.entries.remove(0);
        }
    }

    /// Moves toward older entries (ArrowUp); stays on the oldest one.
    pub fn older(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let index = match self.cursor {
            None => self.entries.len() - 1,
            Some(index) => index.saturating_sub(1),
        };
        self.cursor = Some(index);
        Some(self.entries[index].as_str())
    }

    /// Moves toward newer entries (ArrowDown); past the newest it returns an empty line.
    pub fn newer(&mut self) -> &str {
        match self.cursor {
            Some(index) if index + 1 < self.entries.len() => {
                self.cursor = Some(index + 1);
                self.entries[index + 1].as_str()
            }
            _ => {
                self.cursor = None;
                ""
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn navigation_walks_back_and_forward() {
        let mut history = CommandHistory::default();
        assert_eq!(history.older(), None);
        history.push("ls");
        history.push("  ");
        history.push("cd projects");

        assert_eq!(history.entries(), ["ls", "cd projects"]);
        assert_eq!(history.older(), Some("cd projects"));
        assert_eq!(history.older(), Some("ls"));
        assert_eq!(history.older(), Some("ls"));
        assert_eq!(history.newer(), "cd projects");
        assert_eq!(history.newer(), "");
        assert_eq!(history.older(), Some("cd projects"));

        history.push("pwd");
        assert_eq!(history.older(), Some("pwd"));
    }

    #[test]
    fn restored_history_is_capped() {
        let entries = (0..150).map(|i| format!("echo {i}")).collect();
        let history = CommandHistory::from_entries(entries);
        assert_eq!(history.entries().len(), MAX_HISTORY);
        assert_eq!(history.entries()[0], "echo 50");
    }
}
