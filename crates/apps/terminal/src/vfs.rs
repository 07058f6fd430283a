//! Read-only virtual home directory browsed by the terminal.

use std::collections::BTreeMap;

/// Home directory path shown in prompts.
pub const HOME: &str = "~";

/// A node in the virtual file system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VfsNode {
    /// Directory with ordered child names.
    Directory(Vec<&'static str>),
    /// Text file.
    File(&'static str),
}

impl VfsNode {
    /// Whether the node is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory(_))
    }
}

/// Flat path-keyed file tree rooted at `~`.
#[derive(Debug, Clone)]
pub struct VirtualFs {
    nodes: BTreeMap<String, VfsNode>,
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::portfolio_home()
    }
}

impl VirtualFs {
    /// The portfolio home directory.
    pub fn portfolio_home() -> Self {
        let entries: [(&str, VfsNode); 19] = [
            (
                "~",
                VfsNode::Directory(vec![
                    "about.txt",
                    "projects",
                    "skills",
                    "experience",
                    "contact",
                    "resume.pdf",
                    "README.md",
                ]),
            ),
            ("~/about.txt", VfsNode::File(ABOUT)),
            ("~/README.md", VfsNode::File(README)),
            ("~/resume.pdf", VfsNode::File("[PDF resume, run `resume` to open it]")),
            (
                "~/projects",
                VfsNode::Directory(vec!["tidepool.txt", "lanternfs.txt", "sprout.txt"]),
            ),
            (
                "~/projects/tidepool.txt",
                VfsNode::File(
                    "Tidepool - streaming log search\nTech: Rust, Tokio, Tantivy, WebAssembly\nIndexes structured logs as they arrive and serves sub-second queries.",
                ),
            ),
            (
                "~/projects/lanternfs.txt",
                VfsNode::File(
                    "LanternFS - content-addressed sync\nTech: Rust, SQLite, QUIC\nDeduplicating file sync for small teams with offline-first conflict handling.",
                ),
            ),
            (
                "~/projects/sprout.txt",
                VfsNode::File(
                    "Sprout - garden planner\nTech: TypeScript, React, PostgreSQL\nPlans crop rotation and watering schedules from local climate data.",
                ),
            ),
            (
                "~/skills",
                VfsNode::Directory(vec![
                    "languages.txt",
                    "frontend.txt",
                    "backend.txt",
                    "devops.txt",
                ]),
            ),
            (
                "~/skills/languages.txt",
                VfsNode::File(SKILL_LANGUAGES),
            ),
            ("~/skills/frontend.txt", VfsNode::File(SKILL_FRONTEND)),
            ("~/skills/backend.txt", VfsNode::File(SKILL_BACKEND)),
            ("~/skills/devops.txt", VfsNode::File(SKILL_DEVOPS)),
            (
                "~/experience",
                VfsNode::Directory(vec!["harborline.txt", "quillworks.txt"]),
            ),
            (
                "~/experience/harborline.txt",
                VfsNode::File(
                    "Senior Software Engineer\nHarborline Logistics | 2022 - present\n\n- Owns the routing engine and its WebAssembly planner UI.\n- Cut p99 quote latency from 900ms to 120ms.",
                ),
            ),
            (
                "~/experience/quillworks.txt",
                VfsNode::File(
                    "Software Engineer\nQuillworks | 2019 - 2022\n\n- Built the collaborative editor sync service.\n- Led the migration from REST polling to WebSockets.",
                ),
            ),
            (
                "~/contact",
                VfsNode::Directory(vec!["email.txt", "social.txt"]),
            ),
            ("~/contact/email.txt", VfsNode::File(CONTACT_EMAIL)),
            ("~/contact/social.txt", VfsNode::File(CONTACT_SOCIAL)),
        ];
        Self {
            nodes: entries
                .into_iter()
                .map(|(path, node)| (path.to_string(), node))
                .collect(),
        }
    }

    /// Looks up a normalized path.
    pub fn node(&self, path: &str) -> Option<&VfsNode> {
        self.nodes.get(path)
    }

    /// Text of a file, if `path` names one.
    pub fn read(&self, path: &str) -> Option<&'static str> {
        match self.nodes.get(path) {
            Some(VfsNode::File(content)) => Some(content),
            _ => None,
        }
    }
}

/// Resolves `input` against `cwd` into a normalized `~`-rooted path.
///
/// `/x` is treated as `~/x`; `..` never climbs above `~`.
pub fn resolve(cwd: &str, input: &str) -> String {
    let input = input.trim();
    let (mut parts, rest): (Vec<&str>, &str) = if input == HOME {
        (Vec::new(), "")
    } else if let Some(rest) = input.strip_prefix("~/") {
        (Vec::new(), rest)
    } else if let Some(rest) = input.strip_prefix('/') {
        (Vec::new(), rest)
    } else {
        (cwd.split('/').skip(1).collect(), input)
    };

    for segment in rest.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            name => parts.push(name),
        }
    }

    if parts.is_empty() {
        HOME.to_string()
    } else {
        format!("{HOME}/{}", parts.join("/"))
    }
}

/// Display name of the signed-in user.
pub const USER: &str = "jordan";

/// Display name used in about/whoami output.
pub const FULL_NAME: &str = "Jordan Avery";

pub(crate) const ABOUT: &str = "Name: Jordan Avery
Role: Software Engineer
Location: Remote

Builds fast, dependable tools for the web and the terminal.
Enjoys systems programming, developer tooling and
interfaces that stay out of the way.";

const README: &str = "# Welcome to Jordan's portfolio

## Quick commands
- about       - Learn about me
- projects    - View my projects
- skills      - See my technical skills
- experience  - View work experience
- contact     - Get in touch
- resume      - Open my resume

## System commands
- ls / dir    - List files
- cd [dir]    - Change directory
- cat [file]  - Print a file
- clear       - Clear terminal
- help        - Show all commands";

pub(crate) const SKILL_LANGUAGES: &str = "Rust, TypeScript, Go, Python, SQL";
pub(crate) const SKILL_FRONTEND: &str = "Leptos, React, CSS, WebAssembly";
pub(crate) const SKILL_BACKEND: &str = "Axum, Tokio, PostgreSQL, Redis, gRPC";
pub(crate) const SKILL_DEVOPS: &str = "Docker, Kubernetes, Terraform, GitHub Actions";
pub(crate) const CONTACT_EMAIL: &str = "hello@jordanavery.dev";
pub(crate) const CONTACT_SOCIAL: &str = "GitHub: @jordan-avery\nLinkedIn: /in/jordan-avery";

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn resolve_handles_relative_absolute_and_parent_segments() {
        assert_eq!(resolve("~", "projects"), "~/projects");
        assert_eq!(resolve("~/projects", ".."), "~");
        assert_eq!(resolve("~", ".."), "~");
        assert_eq!(resolve("~/projects", "/skills"), "~/skills");
        assert_eq!(resolve("~/projects", "~/contact/./email.txt"), "~/contact/email.txt");
        assert_eq!(resolve("~/skills", "."), "~/skills");
        assert_eq!(resolve("~/skills", "~"), "~");
    }

    #[test]
    fn every_listed_child_exists() {
        let fs = VirtualFs::portfolio_home();
        for (path, node) in &fs.nodes {
            if let VfsNode::Directory(children) = node {
                for child in children {
                    let child_path = resolve(path, child);
                    assert!(fs.node(&child_path).is_some(), "missing {child_path}");
                }
            }
        }
        assert!(fs.read("~/projects").is_none());
        assert_eq!(fs.read("~/contact/email.txt"), Some(CONTACT_EMAIL));
    }
}
