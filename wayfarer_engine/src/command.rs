//! Player input parsing.
//!
//! Raw lines are normalized into a [`Command`]: a lowercased leading token
//! plus whatever arguments followed it. Parsing is total; mapping the token
//! to an action is the per-state dispatchers' job.

/// A parsed line of input. Recomputed for every line, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub token: String,
    pub args: Vec<String>,
}

impl Command {
    /// True when the line held no token at all (empty or pure whitespace).
    pub fn is_empty(&self) -> bool {
        self.token.is_empty()
    }
}

/// Normalize and split a raw input line.
///
/// The line is trimmed and lowercased before splitting on whitespace, so
/// `"  PAUSE now"` routes the same as `"pause now"`.
pub fn parse_command(input: &str) -> Command {
    let lowered = input.trim().to_lowercase();
    let mut words = lowered.split_whitespace();
    let token = words.next().unwrap_or_default().to_string();
    let args = words.map(ToString::to_string).collect();
    Command { token, args }
}
