//! Game state tracking.
//!
//! [`StateRegister`] owns the engine's current [`GameState`], the state it
//! came from, and a running log of every transition. All state changes go
//! through it; nothing else in the crate mutates the current state.

use std::fmt;

use log::{error, info};
use variantly::Variantly;

/// The states the driver loop can be in.
///
/// `Quit` is terminal: the loop exits on observing it, and no transition
/// originates from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Variantly)]
pub enum GameState {
    Menu,
    Playing,
    Paused,
    Quit,
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameState::Menu => "menu",
            GameState::Playing => "playing",
            GameState::Paused => "paused",
            GameState::Quit => "quit",
        };
        write!(f, "{name}")
    }
}

/// Holds the current and previous game states plus a transition history
/// kept for diagnostics. The history is append-only and unbounded; at a
/// handful of transitions per screen change that is a non-issue.
#[derive(Debug, Clone)]
pub struct StateRegister {
    current: GameState,
    previous: Option<GameState>,
    history: Vec<(GameState, GameState)>,
}

impl Default for StateRegister {
    fn default() -> Self {
        Self::new()
    }
}

impl StateRegister {
    /// Create a register starting at the main menu with no prior state.
    pub fn new() -> Self {
        info!("state register initialized");
        Self {
            current: GameState::Menu,
            previous: None,
            history: Vec::new(),
        }
    }

    /// Change the current state, recording the hop in the history.
    ///
    /// Returns `false` and leaves the register untouched when the current
    /// state is terminal.
    pub fn transition(&mut self, new_state: GameState) -> bool {
        if self.current.is_quit() {
            error!("transition to '{new_state}' attempted from terminal state");
            return false;
        }
        let old = self.current;
        self.previous = Some(old);
        self.current = new_state;
        self.history.push((old, new_state));
        info!("state changed: {old} -> {new_state}");
        true
    }

    /// The state the loop is currently in.
    pub fn current(&self) -> GameState {
        self.current
    }

    /// The state before the most recent transition, if any has happened.
    pub fn previous(&self) -> Option<GameState> {
        self.previous
    }

    /// Every `(from, to)` pair recorded since startup.
    pub fn history(&self) -> &[(GameState, GameState)] {
        &self.history
    }

    /// Swap back to the previous state.
    ///
    /// Returns `false` when no transition has ever occurred. This is a
    /// single-slot toggle, not an undo stack: two reverts in a row land
    /// back where the first one started.
    pub fn revert(&mut self) -> bool {
        match self.previous {
            Some(previous) => {
                let old_current = self.current;
                self.current = previous;
                self.previous = Some(old_current);
                info!("reverted state to '{}'", self.current);
                true
            },
            None => false,
        }
    }
}
