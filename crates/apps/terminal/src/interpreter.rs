//! Command interpreter over the virtual file system.

use desktop_app_contract::AppId;

use crate::{
    ansi::{bold, paint, AnsiColor},
    vfs::{self, resolve, VfsNode, VirtualFs, HOME, USER},
};

/// Resume document opened by `resume`.
pub const RESUME_URL: &str = "/resume.pdf";

/// Side effects a command asks the host view to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEffect {
    /// Wipe the transcript.
    Clear,
    /// Open a desktop app.
    OpenApp(AppId),
    /// Open a URL outside the shell.
    OpenUrl(String),
}

/// Lines printed by a command plus an optional effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Output lines, possibly carrying SGR escapes.
    pub lines: Vec<String>,
    /// Effect for the host view.
    pub effect: Option<ShellEffect>,
}

impl CommandOutput {
    fn lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            effect: None,
        }
    }

    fn error(message: String) -> Self {
        Self::lines(vec![paint(AnsiColor::Red, &message)])
    }
}

/// Shell session state: the file tree and the working directory.
#[derive(Debug, Clone)]
pub struct Shell {
    fs: VirtualFs,
    cwd: String,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(VirtualFs::default())
    }
}

impl Shell {
    /// Session starting in `~`.
    pub fn new(fs: VirtualFs) -> Self {
        Self {
            fs,
            cwd: HOME.to_string(),
        }
    }

    /// Session starting in `cwd`, falling back to `~` when it is not a directory.
    pub fn with_cwd(fs: VirtualFs, cwd: &str) -> Self {
        let mut shell = Self::new(fs);
        let path = resolve(HOME, cwd);
        if shell.fs.node(&path).is_some_and(VfsNode::is_dir) {
            shell.cwd = path;
        }
        shell
    }

    /// Current directory (`~`-rooted).
    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    /// Prompt prefix for the input row and the transcript.
    pub fn prompt(&self) -> String {
        format!("{USER}@portfolio {}$", self.cwd)
    }

    /// Runs one input line.
    ///
    /// `history` holds every submitted line including this one; `now` is the rendered
    /// current date for `date`.
    pub fn execute(&mut self, line: &str, history: &[String], now: &str) -> CommandOutput {
        let line = line.trim();
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return CommandOutput::default();
        };
        let args: Vec<&str> = words.collect();
        let command = command.to_ascii_lowercase();

        match command.as_str() {
            "help" => CommandOutput::lines(help_lines()),
            "ls" | "dir" => self.list(args.first().copied()),
            "cd" => self.change_dir(args.first().copied().unwrap_or(HOME)),
            "pwd" => CommandOutput::lines(vec![self.physical_path()]),
            "cat" => self.cat(args.first().copied()),
            "about" => CommandOutput::lines(split(vfs::ABOUT)),
            "projects" => CommandOutput::lines(vec![
                paint(AnsiColor::Yellow, "Projects:"),
                "1. Tidepool   - Streaming log search".to_string(),
                "2. LanternFS  - Content-addressed sync".to_string(),
                "3. Sprout     - Garden planner".to_string(),
                String::new(),
                "Use 'cd projects' then 'ls' to explore.".to_string(),
            ]),
            "skills" => CommandOutput::lines(vec![
                bold("My stack:"),
                format!("{} {}", paint(AnsiColor::Green, "Languages:"), vfs::SKILL_LANGUAGES),
                format!("{}  {}", paint(AnsiColor::Green, "Frontend:"), vfs::SKILL_FRONTEND),
                format!("{}   {}", paint(AnsiColor::Green, "Backend:"), vfs::SKILL_BACKEND),
                format!("{}    {}", paint(AnsiColor::Green, "DevOps:"), vfs::SKILL_DEVOPS),
            ]),
            "experience" => CommandOutput::lines(vec![
                bold("Work experience:"),
                String::new(),
                format!(
                    "{} (Senior Software Engineer)",
                    paint(AnsiColor::Yellow, "Harborline Logistics")
                ),
                "Owns the routing engine and its WebAssembly planner UI.".to_string(),
                String::new(),
                format!("{} (Software Engineer)", paint(AnsiColor::Yellow, "Quillworks")),
                "Built the collaborative editor sync service.".to_string(),
            ]),
            "contact" => {
                let mut lines = vec![format!("Email: {}", vfs::CONTACT_EMAIL)];
                lines.extend(split(vfs::CONTACT_SOCIAL));
                CommandOutput::lines(lines)
            }
            "resume" => CommandOutput {
                lines: vec![paint(AnsiColor::Green, "Opening resume..."), String::new()],
                effect: Some(ShellEffect::OpenUrl(RESUME_URL.to_string())),
            },
            "open" => open_app(args.first().copied()),
            "clear" => CommandOutput {
                lines: Vec::new(),
                effect: Some(ShellEffect::Clear),
            },
            "whoami" => CommandOutput::lines(vec![
                USER.to_string(),
                vfs::FULL_NAME.to_string(),
                "Software Engineer".to_string(),
            ]),
            "date" => CommandOutput::lines(vec![now.to_string()]),
            "echo" => CommandOutput::lines(vec![args.join(" ")]),
            "history" => CommandOutput::lines(
                history
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| format!("{:>4}  {entry}", index + 1))
                    .collect(),
            ),
            _ => CommandOutput::lines(vec![
                paint(AnsiColor::Red, &format!("Command not found: {command}")),
                "Type \"help\" for available commands".to_string(),
            ]),
        }
    }

    fn physical_path(&self) -> String {
        format!("/home/{USER}{}", self.cwd.trim_start_matches(HOME))
    }

    fn list(&self, target: Option<&str>) -> CommandOutput {
        let path = resolve(&self.cwd, target.unwrap_or("."));
        match self.fs.node(&path) {
            None => CommandOutput::error(format!(
                "ls: cannot access '{}': No such file or directory",
                target.unwrap_or(".")
            )),
            Some(VfsNode::File(_)) => {
                CommandOutput::lines(vec![target.unwrap_or_default().to_string()])
            }
            Some(VfsNode::Directory(children)) => {
                let listing = children
                    .iter()
                    .map(|child| {
                        let child_path = resolve(&path, child);
                        match self.fs.node(&child_path) {
                            Some(node) if node.is_dir() => {
                                paint(AnsiColor::Blue, &format!("{child}/"))
                            }
                            _ if child.ends_with(".txt") || child.ends_with(".md") => {
                                paint(AnsiColor::Green, child)
                            }
                            _ => child.to_string(),
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("    ");
                CommandOutput::lines(vec![listing])
            }
        }
    }

    fn change_dir(&mut self, target: &str) -> CommandOutput {
        let path = resolve(&self.cwd, target);
        match self.fs.node(&path) {
            None => CommandOutput::error(format!("cd: no such file or directory: {target}")),
            Some(node) if !node.is_dir() => {
                CommandOutput::error(format!("cd: not a directory: {target}"))
            }
            Some(_) => {
                self.cwd = path;
                CommandOutput::default()
            }
        }
    }

    fn cat(&self, target: Option<&str>) -> CommandOutput {
        let Some(target) = target else {
            return CommandOutput::error("Usage: cat [file]".to_string());
        };
        let path = resolve(&self.cwd, target);
        match self.fs.node(&path) {
            None => CommandOutput::error(format!("cat: {target}: No such file or directory")),
            Some(VfsNode::Directory(_)) => {
                CommandOutput::error(format!("cat: {target}: Is a directory"))
            }
            Some(VfsNode::File(content)) => CommandOutput::lines(split(content)),
        }
    }
}

fn open_app(target: Option<&str>) -> CommandOutput {
    let Some(target) = target else {
        return CommandOutput::error("Usage: open [app_name]".to_string());
    };
    match AppId::parse(target) {
        Some(app_id) => CommandOutput {
            lines: vec![paint(AnsiColor::Green, &format!("Opening {app_id}..."))],
            effect: Some(ShellEffect::OpenApp(app_id)),
        },
        None => CommandOutput::error(format!("open: unknown app: {target}")),
    }
}

fn split(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

fn help_lines() -> Vec<String> {
    const SECTIONS: [(&str, &[(&str, &str)]); 3] = [
        (
            "Navigation",
            &[
                ("ls, dir", "List directory contents"),
                ("cd [dir]", "Change directory"),
                ("pwd", "Print working directory"),
                ("cat [file]", "Print a file"),
            ],
        ),
        (
            "Portfolio",
            &[
                ("about", "Learn about me"),
                ("projects", "View my projects"),
                ("skills", "See my technical skills"),
                ("experience", "View work experience"),
                ("contact", "Get in touch"),
                ("resume", "Open my resume"),
            ],
        ),
        (
            "System",
            &[
                ("open [app]", "Open an app, e.g. projects"),
                ("clear", "Clear terminal"),
                ("whoami", "Display user info"),
                ("date", "Show current date and time"),
                ("echo [text]", "Print text"),
                ("history", "List previous commands"),
            ],
        ),
    ];

    let mut lines = vec![bold("Available commands")];
    for (title, commands) in SECTIONS {
        lines.push(String::new());
        lines.push(paint(AnsiColor::Cyan, &format!("{title}:")));
        for (usage, summary) in commands {
            lines.push(paint(AnsiColor::Gray, &format!("  {usage:<13} {summary}")));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ansi::strip;

    fn run(shell: &mut Shell, line: &str) -> CommandOutput {
        shell.execute(line, &[line.to_string()], "Mon Oct 19 2026")
    }

    fn plain(output: &CommandOutput) -> Vec<String> {
        output.lines.iter().map(|line| strip(line)).collect()
    }

    #[test]
    fn navigation_commands_track_the_working_directory() {
        let mut shell = Shell::default();
        assert_eq!(plain(&run(&mut shell, "pwd")), vec!["/home/jordan"]);

        assert_eq!(run(&mut shell, "cd projects"), CommandOutput::default());
        assert_eq!(shell.cwd(), "~/projects");
        assert_eq!(plain(&run(&mut shell, "pwd")), vec!["/home/jordan/projects"]);
        assert_eq!(
            plain(&run(&mut shell, "ls")),
            vec!["tidepool.txt    lanternfs.txt    sprout.txt"]
        );

        assert_eq!(
            plain(&run(&mut shell, "cd tidepool.txt")),
            vec!["cd: not a directory: tidepool.txt"]
        );
        assert_eq!(
            plain(&run(&mut shell, "cd nowhere")),
            vec!["cd: no such file or directory: nowhere"]
        );
        assert_eq!(shell.cwd(), "~/projects");

        run(&mut shell, "cd");
        assert_eq!(shell.cwd(), "~");
        assert!(plain(&run(&mut shell, "dir"))[0].contains("projects/"));
        assert_eq!(
            plain(&run(&mut shell, "ls missing")),
            vec!["ls: cannot access 'missing': No such file or directory"]
        );
    }

    #[test]
    fn cat_reads_files_and_rejects_directories() {
        let mut shell = Shell::default();
        assert_eq!(
            plain(&run(&mut shell, "cat contact/email.txt")),
            vec!["hello@jordanavery.dev"]
        );
        assert_eq!(plain(&run(&mut shell, "cat skills")), vec!["cat: skills: Is a directory"]);
        assert_eq!(plain(&run(&mut shell, "cat")), vec!["Usage: cat [file]"]);
    }

    #[test]
    fn open_and_resume_emit_effects() {
        let mut shell = Shell::default();
        assert_eq!(
            run(&mut shell, "open Journal").effect,
            Some(ShellEffect::OpenApp(AppId::Journal))
        );
        let unknown = run(&mut shell, "open solitaire");
        assert_eq!(unknown.effect, None);
        assert_eq!(plain(&unknown), vec!["open: unknown app: solitaire"]);
        assert_eq!(
            run(&mut shell, "resume").effect,
            Some(ShellEffect::OpenUrl(RESUME_URL.to_string()))
        );
        assert_eq!(run(&mut shell, "CLEAR").effect, Some(ShellEffect::Clear));
    }

    #[test]
    fn small_builtins() {
        let mut shell = Shell::default();
        assert_eq!(plain(&run(&mut shell, "echo  hello   world")), vec!["hello world"]);
        assert_eq!(plain(&run(&mut shell, "date")), vec!["Mon Oct 19 2026"]);
        assert_eq!(plain(&run(&mut shell, "whoami"))[0], "jordan");
        assert_eq!(
            plain(&shell.execute("history", &["ls".to_string(), "history".to_string()], "")),
            vec!["   1  ls", "   2  history"]
        );
        assert_eq!(run(&mut shell, "   "), CommandOutput::default());
        assert_eq!(
            plain(&run(&mut shell, "sudo")),
            vec!["Command not found: sudo", "Type \"help\" for available commands"]
        );
        assert!(plain(&run(&mut shell, "help")).iter().any(|line| line.contains("history")));
    }

    #[test]
    fn restored_cwd_must_be_a_directory() {
        assert_eq!(Shell::with_cwd(VirtualFs::default(), "~/skills").cwd(), "~/skills");
        assert_eq!(Shell::with_cwd(VirtualFs::default(), "~/about.txt").cwd(), "~");
        assert_eq!(Shell::with_cwd(VirtualFs::default(), "~/gone").cwd(), "~");
    }
}
