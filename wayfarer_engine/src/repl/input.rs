//! Terminal input handling for the Wayfarer shell.
//!
//! Wraps the interactive rustyline backend (command-word completion and a
//! persistent history file) with a plain stdin fallback, and applies the
//! shell's input policy on every read: trim, length limit, and a bounded
//! in-memory command history.

use std::collections::VecDeque;
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use log::{debug, info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};

use crate::config::GameConfig;

/// Outcome of reading a line of player input.
///
/// End-of-input and interrupts are ordinary values, not errors: the driver
/// loop decides what each one means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

impl InputEvent {
    /// Resolve the event to the line the driver loop should act on.
    ///
    /// End-of-input reads as a request to quit; an interrupt resolves to
    /// `None` so the loop can shut down instead of dispatching.
    pub fn into_line(self) -> Option<String> {
        match self {
            InputEvent::Line(line) => Some(line),
            InputEvent::Eof => Some("quit".to_string()),
            InputEvent::Interrupted => None,
        }
    }
}

const MENU_TERMS: &[&str] = &["start", "play", "settings", "options", "quit", "exit", "help"];
const GAME_TERMS: &[&str] = &["pause", "menu", "main", "quit", "exit", "help"];
const PAUSE_TERMS: &[&str] = &["resume", "continue", "menu", "main", "quit", "exit"];

lazy_static! {
    /// Words the interactive completer offers: every state's vocabulary,
    /// merged, sorted, and deduplicated.
    static ref COMMAND_TERMS: Vec<&'static str> = build_command_terms();
}

fn build_command_terms() -> Vec<&'static str> {
    let mut terms: Vec<&'static str> = MENU_TERMS
        .iter()
        .chain(GAME_TERMS)
        .chain(PAUSE_TERMS)
        .copied()
        .collect();
    terms.sort_unstable();
    terms.dedup();
    terms
}

/// Bounded FIFO of accepted, non-empty input lines.
#[derive(Debug)]
pub struct InputHistory {
    entries: VecDeque<String>,
    capacity: usize,
}

impl InputHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a line, evicting the oldest entry once the buffer is full.
    pub fn push(&mut self, line: &str) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(line.to_string());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, line: &str) -> bool {
        self.entries.iter().any(|entry| entry == line)
    }

    /// Most recent entry, if any.
    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }
}

type ShellEditor = rustyline::Editor<ShellHelper, DefaultHistory>;

/// Rustyline helper providing completion over the shell's command words.
#[derive(Default)]
struct ShellHelper;

impl Helper for ShellHelper {}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, prefix) = word_prefix(line, pos);
        if prefix.is_empty() {
            return Ok((start, Vec::new()));
        }
        let lower = prefix.to_lowercase();
        let pairs = COMMAND_TERMS
            .iter()
            .filter(|term| term.starts_with(&lower))
            .map(|term| Pair {
                display: (*term).to_string(),
                replacement: (*term).to_string(),
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;
}

impl Highlighter for ShellHelper {}

impl Validator for ShellHelper {
    fn validate(&self, ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        let _ = ctx;
        Ok(ValidationResult::Valid(None))
    }
}

fn word_prefix(line: &str, pos: usize) -> (usize, String) {
    let slice = &line[..pos];
    let trimmed = slice.trim_start_matches(char::is_whitespace);
    (pos - trimmed.len(), trimmed.to_string())
}

/// Owns the input backend, the input policy, and the bounded command
/// history.
///
/// Prefers rustyline when an interactive terminal is available, falling
/// back to a basic stdin reader otherwise.
pub struct InputManager {
    backend: Backend,
    history: InputHistory,
    max_input_length: usize,
}

impl InputManager {
    pub fn new(config: &GameConfig) -> Self {
        let backend = if io::stdin().is_terminal() {
            match RustylineInput::new() {
                Ok(editor) => {
                    info!("using rustyline-backed input");
                    Backend::Rustyline(editor)
                },
                Err(err) => {
                    warn!("failed to initialize rustyline ({err}), falling back to plain stdin");
                    Backend::plain()
                },
            }
        } else {
            info!("stdin is not a tty; using plain input mode");
            Backend::plain()
        };

        Self {
            backend,
            history: InputHistory::new(config.command_history_size),
            max_input_length: config.max_input_length,
        }
    }

    /// Read one line of input.
    ///
    /// Accepted lines are trimmed of surrounding whitespace; a line longer
    /// than the configured limit is discarded and comes back as an empty
    /// `Line` so the caller re-prompts. Non-empty accepted lines land in
    /// the command history. If the interactive backend reports an
    /// unrecoverable error, switch to plain stdin and retry once.
    ///
    /// # Errors
    /// Returns the underlying I/O error when even the plain backend cannot
    /// read.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        let event = match self.backend.read_line(prompt) {
            Ok(event) => event,
            Err(err) => {
                if self.backend.is_rustyline() {
                    warn!("rustyline input failed: {err} -- switching to plain stdin");
                    self.backend = Backend::plain();
                    self.backend.read_line(prompt)?
                } else {
                    return Err(err);
                }
            },
        };

        let InputEvent::Line(raw) = event else {
            return Ok(event);
        };
        Ok(InputEvent::Line(self.accept(&raw)))
    }

    /// Apply the input policy to a raw line: trim, enforce the length
    /// limit, and record the survivor in history.
    fn accept(&mut self, raw: &str) -> String {
        let line = raw.trim();
        if line.len() > self.max_input_length {
            warn!(
                "input rejected: {} characters exceeds limit of {}",
                line.len(),
                self.max_input_length
            );
            return String::new();
        }
        if !line.is_empty() {
            self.history.push(line);
        }
        debug!("input accepted: '{line}'");
        line.to_string()
    }

    /// Check an input string against the length limit and an optional
    /// allowed-character set. Empty input never validates.
    pub fn validate(&self, input: &str, allowed_chars: Option<&str>) -> bool {
        if input.is_empty() || input.len() > self.max_input_length {
            return false;
        }
        match allowed_chars {
            Some(allowed) => input.chars().all(|c| allowed.contains(c)),
            None => true,
        }
    }

    /// The bounded history of accepted commands.
    pub fn history(&self) -> &InputHistory {
        &self.history
    }
}

enum Backend {
    Rustyline(RustylineInput),
    Plain(StdinInput),
}

impl Backend {
    fn plain() -> Self {
        Backend::Plain(StdinInput::default())
    }

    fn is_rustyline(&self) -> bool {
        matches!(self, Backend::Rustyline(_))
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self {
            Backend::Rustyline(editor) => editor.read_line(prompt),
            Backend::Plain(stdin) => stdin.read_line(prompt),
        }
    }
}

struct RustylineInput {
    editor: ShellEditor,
    history_path: Option<PathBuf>,
}

impl RustylineInput {
    fn new() -> io::Result<Self> {
        let mut editor = rustyline::Editor::<ShellHelper, _>::new().map_err(into_io_error)?;
        editor.set_helper(Some(ShellHelper::default()));
        let history_path = history_file_path();

        if let Some(path) = history_path.as_ref() {
            if let Some(dir) = path.parent() {
                if let Err(err) = fs::create_dir_all(dir) {
                    warn!("failed to create history directory {}: {err}", dir.display());
                }
            }

            if let Err(err) = editor.load_history(path) {
                match err {
                    ReadlineError::Io(ref io_err) if io_err.kind() == io::ErrorKind::NotFound => {
                        info!("no prior history at {}, starting fresh", path.display());
                    },
                    other => {
                        warn!("failed to load history from {}: {other}", path.display());
                    },
                }
            }
        }

        Ok(Self { editor, history_path })
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(err) = self.editor.add_history_entry(line.as_str()) {
                        warn!("failed to append to readline history: {err}");
                    }
                    if let Some(path) = self.history_path.as_ref() {
                        if let Err(err) = self.editor.save_history(path) {
                            warn!("failed to persist readline history to {}: {err}", path.display());
                        }
                    }
                }
                Ok(InputEvent::Line(line))
            },
            Err(ReadlineError::Interrupted) => Ok(InputEvent::Interrupted),
            Err(ReadlineError::Eof) => Ok(InputEvent::Eof),
            Err(ReadlineError::Io(io_err)) => Err(io_err),
            Err(other) => Err(io::Error::other(other)),
        }
    }
}

#[derive(Default)]
struct StdinInput {
    buffer: String,
}

impl StdinInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        print!("{prompt}");
        io::stdout().flush()?;

        self.buffer.clear();
        let bytes = io::stdin().read_line(&mut self.buffer)?;
        if bytes == 0 {
            return Ok(InputEvent::Eof);
        }
        Ok(InputEvent::Line(self.buffer.clone()))
    }
}

fn into_io_error(err: ReadlineError) -> io::Error {
    match err {
        ReadlineError::Io(io_err) => io_err,
        other => io::Error::other(other),
    }
}

fn history_file_path() -> Option<PathBuf> {
    dirs::data_dir()
        .or_else(dirs::data_local_dir)
        .map(|base| build_history_path(&base))
}

fn build_history_path(base: &Path) -> PathBuf {
    base.join("wayfarer").join("history.txt")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eof_resolves_to_quit() {
        assert_eq!(InputEvent::Eof.into_line().as_deref(), Some("quit"));
    }

    #[test]
    fn interrupt_resolves_to_nothing() {
        assert!(InputEvent::Interrupted.into_line().is_none());
    }

    #[test]
    fn history_path_appends_components() {
        let base = PathBuf::from("/tmp/wayfarer-test");
        let path = build_history_path(&base);
        assert!(path.ends_with(Path::new("wayfarer/history.txt")));
    }

    #[test]
    fn command_terms_sorted_and_unique() {
        assert!(COMMAND_TERMS.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(COMMAND_TERMS.contains(&"pause"));
        assert!(COMMAND_TERMS.contains(&"resume"));
    }

    #[test]
    fn word_prefix_skips_leading_whitespace() {
        assert_eq!(word_prefix("  pa", 4), (2, "pa".to_string()));
    }

    #[test]
    fn oversized_line_rejected_and_not_recorded() {
        let config = GameConfig {
            max_input_length: 5,
            command_history_size: 3,
            ..GameConfig::default()
        };
        let mut manager = InputManager::new(&config);
        assert_eq!(manager.accept("toolongline"), "");
        assert!(manager.history().is_empty());
    }

    #[test]
    fn accepted_line_trimmed_and_recorded() {
        let config = GameConfig::default();
        let mut manager = InputManager::new(&config);
        assert_eq!(manager.accept("  look around  "), "look around");
        assert_eq!(manager.history().last(), Some("look around"));
    }

    #[test]
    fn empty_line_not_recorded() {
        let config = GameConfig::default();
        let mut manager = InputManager::new(&config);
        assert_eq!(manager.accept("   "), "");
        assert!(manager.history().is_empty());
    }
}
