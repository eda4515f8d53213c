#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

//! Wayfarer engine library.
//!
//! A menu-driven shell for a text adventure that does not have a world yet:
//! a finite state register, a blocking line reader, and per-state command
//! routing, tied together by a single driver loop. Gameplay verbs are
//! deliberately absent; the shell only knows how to move between its own
//! screens.

pub const WAYFARER_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod command;
pub mod config;
pub mod data;
pub mod repl;
pub mod screen;
pub mod state;
pub mod style;

// Re-exports for convenience
pub use command::{Command, parse_command};
pub use config::GameConfig;
pub use data::GameData;
pub use repl::Engine;
pub use repl::input::{InputEvent, InputHistory, InputManager};
pub use state::{GameState, StateRegister};
