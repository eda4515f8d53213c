//! Playing-state command routing.
//!
//! Real gameplay verbs do not exist yet; the router recognizes the shell
//! navigation commands and reports everything else as unknown.

use crate::command::parse_command;
use crate::config::GameConfig;
use crate::screen;
use crate::state::{GameState, StateRegister};

/// Route one line of gameplay input.
///
/// Empty input (including a line the reader rejected for length) returns
/// `false` without a message so the loop simply re-prompts.
pub fn dispatch_game(register: &mut StateRegister, config: &GameConfig, line: &str) -> bool {
    let command = parse_command(line);
    if command.is_empty() {
        return false;
    }
    match command.token.as_str() {
        "quit" | "exit" => register.transition(GameState::Quit),
        "menu" | "main" => register.transition(GameState::Menu),
        "pause" => register.transition(GameState::Paused),
        "help" | "?" => {
            screen::show_game_help(config);
            true
        },
        _ => {
            screen::show_unknown_command(&command.token);
            false
        },
    }
}
