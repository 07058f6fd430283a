//! Terminal desktop app: a small portfolio shell over a read-only virtual home directory.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod ansi;
pub mod history;
pub mod interpreter;
pub mod vfs;

use desktop_app_contract::{AppMountContext, AppServices};
use leptos::{ev::KeyboardEvent, html, *};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    ansi::parse_sgr,
    history::CommandHistory,
    interpreter::{Shell, ShellEffect},
    vfs::{VirtualFs, HOME},
};

const MAX_TRANSCRIPT_LINES: usize = 200;

/// Per-window state merged into the runtime window data bag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalWindowData {
    /// Working directory.
    pub cwd: String,
    /// Submitted commands, oldest first.
    pub history: Vec<String>,
    /// Visible screen lines; `None` until the first command so a fresh window shows the banner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<Vec<TranscriptLine>>,
}

impl Default for TerminalWindowData {
    fn default() -> Self {
        Self {
            cwd: HOME.to_string(),
            history: Vec::new(),
            transcript: None,
        }
    }
}

impl TerminalWindowData {
    /// Reads the terminal keys out of a window data bag; anything unreadable falls back to
    /// defaults.
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// One line of terminal screen output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptLine {
    /// An echoed command with the prompt it was typed at.
    Prompt {
        /// Prompt text at submit time.
        prompt: String,
        /// Submitted command.
        command: String,
    },
    /// Interpreter output, possibly carrying ANSI SGR sequences.
    Output(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Transcript {
    lines: Vec<(u64, TranscriptLine)>,
    next_id: u64,
}

impl Transcript {
    fn welcome() -> Self {
        let mut transcript = Self {
            lines: Vec::new(),
            next_id: 0,
        };
        transcript.push(TranscriptLine::Output(
            "Welcome to Jordan's portfolio terminal".to_string(),
        ));
        transcript.push(TranscriptLine::Output(
            "Type \"help\" to see available commands".to_string(),
        ));
        transcript.push(TranscriptLine::Output(String::new()));
        transcript
    }

    fn restore(saved: Option<Vec<TranscriptLine>>) -> Self {
        let Some(saved) = saved else {
            return Self::welcome();
        };
        let mut transcript = Self {
            lines: Vec::new(),
            next_id: 0,
        };
        for line in saved {
            transcript.push(line);
        }
        transcript
    }

    fn snapshot(&self) -> Vec<TranscriptLine> {
        self.lines.iter().map(|(_, line)| line.clone()).collect()
    }

    fn push(&mut self, line: TranscriptLine) {
        self.lines.push((self.next_id, line));
        self.next_id += 1;
        if self.lines.len() > MAX_TRANSCRIPT_LINES {
            let overflow = self.lines.len() - MAX_TRANSCRIPT_LINES;
            self.lines.drain(..overflow);
        }
    }

    fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(target_arch = "wasm32")]
fn current_date() -> String {
    String::from(js_sys::Date::new_0().to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn current_date() -> String {
    format!("{} ms since the Unix epoch", platform_host::unix_time_ms_now())
}

fn render_line(line: TranscriptLine) -> View {
    match line {
        TranscriptLine::Prompt { prompt, command } => view! {
            <div class="terminal-line">
                <span class="terminal-prompt">{prompt}</span>
                " "
                {command}
            </div>
        }
        .into_view(),
        TranscriptLine::Output(text) => {
            let segments = parse_sgr(&text)
                .into_iter()
                .map(|segment| view! { <span style=segment.css()>{segment.text}</span> })
                .collect_view();
            view! { <div class="terminal-line">{segments}</div> }.into_view()
        }
    }
}

#[component]
/// Terminal app window contents.
pub fn TerminalApp(
    /// Window data bag restored by the desktop runtime.
    restored_data: Value,
    /// Runtime services for opening apps and URLs and saving window state.
    services: AppServices,
) -> impl IntoView {
    let restored = TerminalWindowData::from_value(&restored_data);
    let shell = store_value(Shell::with_cwd(VirtualFs::default(), &restored.cwd));
    let history = store_value(CommandHistory::from_entries(restored.history));
    let prompt = create_rw_signal(shell.with_value(Shell::prompt));
    let input = create_rw_signal(String::new());
    let transcript = create_rw_signal(Transcript::restore(restored.transcript));
    let screen_ref = create_node_ref::<html::Div>();
    let input_ref = create_node_ref::<html::Input>();

    create_effect(move |_| {
        transcript.track();
        if let Some(screen) = screen_ref.get() {
            screen.set_scroll_top(screen.scroll_height());
        }
    });

    let persist = move || {
        let data = TerminalWindowData {
            cwd: shell.with_value(|shell| shell.cwd().to_string()),
            history: history.with_value(|history| history.entries().to_vec()),
            transcript: Some(transcript.with_untracked(Transcript::snapshot)),
        };
        services.window.merge_data(data.to_value());
    };

    let submit = move |line: String| {
        input.set(String::new());
        let line = line.trim().to_string();
        if line.is_empty() {
            return;
        }

        history.update_value(|history| history.push(&line));
        let entries = history.with_value(|history| history.entries().to_vec());
        let prompt_text = prompt.get_untracked();
        let Some(output) =
            shell.try_update_value(|shell| shell.execute(&line, &entries, &current_date()))
        else {
            return;
        };

        match output.effect {
            Some(ShellEffect::Clear) => transcript.update(Transcript::clear),
            effect => {
                transcript.update(|transcript| {
                    transcript.push(TranscriptLine::Prompt {
                        prompt: prompt_text,
                        command: line,
                    });
                    for text in output.lines {
                        transcript.push(TranscriptLine::Output(text));
                    }
                });
                match effect {
                    Some(ShellEffect::OpenApp(app_id)) => services.shell.open_app(app_id),
                    Some(ShellEffect::OpenUrl(url)) => services.shell.open_external_url(url),
                    Some(ShellEffect::Clear) | None => {}
                }
            }
        }

        prompt.set(shell.with_value(Shell::prompt));
        persist();
    };

    let on_keydown = move |ev: KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            submit(input.get_untracked());
        }
        "ArrowUp" => {
            ev.prevent_default();
            if let Some(line) = history
                .try_update_value(|history| history.older().map(str::to_string))
                .flatten()
            {
                input.set(line);
            }
        }
        "ArrowDown" => {
            ev.prevent_default();
            if let Some(line) = history.try_update_value(|history| history.newer().to_string()) {
                input.set(line);
            }
        }
        "l" | "L" if ev.ctrl_key() => {
            ev.prevent_default();
            transcript.update(Transcript::clear);
            persist();
        }
        _ => {}
    };

    view! {
        <div
            class="app-shell app-terminal-shell"
            on:click=move |_| {
                if let Some(field) = input_ref.get() {
                    let _ = field.focus();
                }
            }
        >
            <div class="terminal-screen" role="log" aria-live="polite" node_ref=screen_ref>
                <For
                    each=move || transcript.with(|transcript| transcript.lines.clone())
                    key=|(id, _)| *id
                    children=|(_, line)| render_line(line)
                />
                <div class="terminal-input-row">
                    <span class="terminal-prompt">{move || prompt.get()}</span>
                    <input
                        node_ref=input_ref
                        class="terminal-input"
                        type="text"
                        aria-label="Terminal input"
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=on_keydown
                        autocomplete="off"
                        spellcheck="false"
                        autofocus=true
                    />
                </div>
            </div>
        </div>
    }
}

/// Mounts the terminal into a runtime window.
pub fn mount_terminal_app(context: AppMountContext) -> View {
    view! { <TerminalApp restored_data=context.restored_data services=context.services /> }
        .into_view()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn window_data_round_trips_and_tolerates_missing_keys() {
        assert_eq!(
            TerminalWindowData::from_value(&json!({ "cwd": "~/skills" })),
            TerminalWindowData {
                cwd: "~/skills".to_string(),
                history: Vec::new(),
                transcript: None,
            }
        );
        assert_eq!(
            TerminalWindowData::from_value(&json!("garbage")),
            TerminalWindowData::default()
        );
        let data = TerminalWindowData {
            cwd: "~".to_string(),
            history: vec!["ls".to_string()],
            transcript: None,
        };
        assert_eq!(data.to_value(), json!({ "cwd": "~", "history": ["ls"] }));
    }

    #[test]
    fn transcript_survives_a_remount_from_window_data() {
        let mut screen = Transcript::welcome();
        screen.push(TranscriptLine::Prompt {
            prompt: "jordan@portfolio ~$".to_string(),
            command: "whoami".to_string(),
        });
        screen.push(TranscriptLine::Output("jordan".to_string()));

        let data = TerminalWindowData {
            cwd: "~/projects".to_string(),
            history: vec!["whoami".to_string()],
            transcript: Some(screen.snapshot()),
        };
        let saved = data.to_value();
        assert_eq!(
            saved["transcript"][3],
            json!({ "prompt": { "prompt": "jordan@portfolio ~$", "command": "whoami" } })
        );
        assert_eq!(saved["transcript"][4], json!({ "output": "jordan" }));

        let remounted = Transcript::restore(TerminalWindowData::from_value(&saved).transcript);
        assert_eq!(remounted.snapshot(), screen.snapshot());
        assert_eq!(remounted.next_id, 5);

        let cleared = Transcript::restore(Some(Vec::new()));
        assert!(cleared.lines.is_empty());
        assert_eq!(Transcript::restore(None), Transcript::welcome());
    }

    #[test]
    fn transcript_keeps_unique_ids_and_drops_oldest_lines() {
        let mut transcript = Transcript::welcome();
        assert_eq!(transcript.lines.len(), 3);
        for index in 0..MAX_TRANSCRIPT_LINES {
            transcript.push(TranscriptLine::Output(index.to_string()));
        }
        assert_eq!(transcript.lines.len(), MAX_TRANSCRIPT_LINES);
        assert_eq!(transcript.lines[0].0, 3);
        assert_eq!(
            transcript.lines.last().map(|(id, _)| *id),
            Some(MAX_TRANSCRIPT_LINES as u64 + 2)
        );

        transcript.clear();
        transcript.push(TranscriptLine::Output("after".to_string()));
        assert_eq!(transcript.lines[0].0, MAX_TRANSCRIPT_LINES as u64 + 3);
    }
}
