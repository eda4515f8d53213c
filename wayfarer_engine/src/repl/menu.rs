//! Menu-state and pause-state command routing.
//!
//! Choices arrive either as the option's numeral or as a command word;
//! both route identically. Every path returns a success flag so the
//! driver loop can tell a handled choice from a rejection.

use log::{info, warn};

use crate::command::parse_command;
use crate::config::GameConfig;
use crate::data::GameData;
use crate::repl::input::InputManager;
use crate::screen;
use crate::state::{GameState, StateRegister};

/// Route one main-menu choice. Returns `false` when the choice was not
/// recognized; the caller re-prompts in the same state.
pub fn dispatch_menu(
    register: &mut StateRegister,
    input: &mut InputManager,
    config: &GameConfig,
    data: &GameData,
    choice: &str,
) -> bool {
    let command = parse_command(choice);
    match command.token.as_str() {
        "1" | "start" | "play" => register.transition(GameState::Playing),
        "2" | "settings" | "options" => {
            settings_handler(input, config, data);
            true
        },
        "3" | "quit" | "exit" => register.transition(GameState::Quit),
        "help" | "?" => {
            screen::show_menu_help();
            true
        },
        _ => {
            warn!("invalid menu choice: '{}'", command.token);
            screen::show_invalid_choice();
            false
        },
    }
}

/// Route one pause-menu choice.
pub fn dispatch_pause(register: &mut StateRegister, choice: &str) -> bool {
    let command = parse_command(choice);
    match command.token.as_str() {
        "1" | "resume" | "continue" => register.transition(GameState::Playing),
        "2" | "menu" | "main" => register.transition(GameState::Menu),
        "3" | "quit" | "exit" => register.transition(GameState::Quit),
        _ => {
            screen::show_invalid_choice();
            false
        },
    }
}

/// Settings sub-flow. Nothing is editable yet; show the current values and
/// hand control back on Enter. No state change.
pub fn settings_handler(input: &mut InputManager, config: &GameConfig, data: &GameData) {
    info!("settings sub-flow opened");
    screen::show_settings(config, data);
    if let Err(err) = input.read_line(&screen::continue_prompt()) {
        warn!("failed to read the continue prompt: {err}");
    }
}
