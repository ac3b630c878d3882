//! Command-line front end and entry point.
//!
//! This module is the thin integration layer between the cvforge library and
//! a terminal. It reads builder events as newline-delimited JSON on stdin,
//! feeds them to the library, executes the resulting actions, and writes the
//! live preview to stdout.
//!
//! # Lifecycle
//!
//! 1. **Load**: Parse arguments (and an optional config file), initialize
//!    tracing, create `AppState`
//! 2. **Initial Render**: Print the preview once before any input
//! 3. **Update**: For each input line, decode an `Event` and delegate to
//!    `handle_event`
//! 4. **Render**: Reprint the preview whenever the handler asks for it
//!
//! # Streams
//!
//! - stdin: one JSON event per line; blank lines and `#` comments are skipped
//! - stdout: preview snapshots, separated by a blank line
//! - stderr: notifications and logs
//!
//! # Example
//!
//! ```text
//! $ printf '%s\n' '{"type":"load_sample"}' '{"type":"select_template","template":"classic"}' \
//!     | cvforge color=false width=72
//! ```

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use cvforge::ui::{self, Template, Theme};
use cvforge::{handle_event, Action, AppState, Config, CvforgeError, Event};

/// Front end state wrapper.
///
/// Wraps the library's `AppState` with the output stream it renders to.
struct Shell<W: Write> {
    app: AppState,
    out: W,
}

impl<W: Write> Shell<W> {
    fn new(app: AppState, out: W) -> Self {
        Self { app, out }
    }

    /// Decodes one input line and applies it. Returns whether a render is due.
    fn update(&mut self, line_no: usize, line: &str) -> Result<bool, CvforgeError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(false);
        }

        let event: Event = match serde_json::from_str(line) {
            Ok(event) => event,
            Err(e) => {
                let err = if e.is_data() {
                    CvforgeError::Event(e.to_string())
                } else {
                    CvforgeError::Json(e)
                };
                tracing::warn!(line = line_no, error = %err, "skipping unreadable event");
                return Ok(false);
            }
        };

        let (should_render, actions) = handle_event(&mut self.app, &event);
        tracing::debug!(
            action_count = actions.len(),
            should_render = should_render,
            "event handled"
        );

        for action in &actions {
            self.execute_action(action)?;
        }

        Ok(should_render)
    }

    fn execute_action(&mut self, action: &Action) -> Result<(), CvforgeError> {
        let _span = tracing::debug_span!("execute_action", action = ?action).entered();

        match action {
            Action::Notify { title, description } => {
                let settings = &self.app.preview;
                let mut err = io::stderr().lock();
                if settings.color {
                    writeln!(
                        err,
                        "{}{}{title}{} {description}",
                        Theme::bold(),
                        Theme::fg(&settings.theme.notice_fg),
                        Theme::reset()
                    )?;
                } else {
                    writeln!(err, "{title}: {description}")?;
                }
            }
            Action::ShowTemplates => {
                let resume = self.app.store.resume();
                let selected = Template::resolve(&resume.selected_template);
                let gallery = ui::render_gallery(
                    selected,
                    &resume.style_customizations.primary_color,
                    &self.app.preview,
                );
                writeln!(self.out, "{gallery}")?;
            }
        }

        Ok(())
    }

    fn render(&mut self) -> Result<(), CvforgeError> {
        let preview = ui::render(&self.app);
        writeln!(self.out, "{preview}")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Collects `key=value` arguments. Bare words are ignored with a warning
/// once tracing is up.
fn parse_args(args: impl Iterator<Item = String>) -> (BTreeMap<String, String>, Vec<String>) {
    let mut map = BTreeMap::new();
    let mut ignored = Vec::new();

    for arg in args {
        match arg.split_once('=') {
            Some((key, value)) => {
                map.insert(key.trim().to_string(), value.to_string());
            }
            None => ignored.push(arg),
        }
    }

    (map, ignored)
}

fn load_config(args: &BTreeMap<String, String>) -> Result<Config, CvforgeError> {
    let base = match args.get("config") {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    Ok(base.with_args(args))
}

fn main() -> Result<(), CvforgeError> {
    let (args, ignored) = parse_args(std::env::args().skip(1));
    let config = load_config(&args)?;
    cvforge::observability::init_tracing(&config);

    let span = tracing::debug_span!("cvforge_run");
    let _guard = span.entered();

    for arg in &ignored {
        tracing::warn!(argument = %arg, "ignoring argument without '='");
    }
    tracing::debug!(config = ?config, "parsed configuration");

    let app = cvforge::initialize(&config);
    let mut shell = Shell::new(app, io::stdout().lock());
    shell.render()?;

    let stdin = io::stdin();
    for (index, line) in stdin.lock().lines().enumerate() {
        let line = line?;
        if shell.update(index + 1, &line)? {
            shell.render()?;
        }
    }

    tracing::debug!(revision = shell.app.store.revision(), "input closed");
    Ok(())
}
