//! The driver loop.
//!
//! [`Engine`] ties the state register, input manager, and per-state
//! dispatchers together: render the current state's screen, read a line,
//! route it, and repeat until the register reaches its terminal state. The
//! loop favors availability: a failed iteration is logged and reported,
//! then the loop carries on.

pub mod game;
pub mod input;
pub mod menu;

use anyhow::Result;
use log::{error, info};

use crate::config::GameConfig;
use crate::data::GameData;
use crate::screen;
use crate::state::{GameState, StateRegister};

use input::{InputEvent, InputManager};

/// The assembled shell: configuration, state register, input, and the
/// typed data block, driven by [`Engine::run`].
pub struct Engine {
    config: GameConfig,
    register: StateRegister,
    input: InputManager,
    data: GameData,
    running: bool,
}

impl Engine {
    /// Build an engine from validated configuration.
    pub fn new(config: GameConfig) -> Self {
        let input = InputManager::new(&config);
        let data = GameData::new(&config);
        info!("engine initialized");
        Self {
            config,
            register: StateRegister::new(),
            input,
            data,
            running: false,
        }
    }

    /// Run the driver loop until the register reaches `Quit` or the player
    /// interrupts.
    pub fn run(&mut self) {
        info!("starting driver loop");
        self.running = true;
        if let Err(err) = self.welcome() {
            error!("error during welcome sequence: {err:#}");
        }

        while self.running {
            if let Err(err) = self.iterate() {
                error!("error in driver loop: {err:#}");
                screen::show_error("An unexpected error occurred. Please try again.");
            }
        }

        info!(
            "session {}: {} commands handled",
            self.data.session.id, self.data.session.commands_handled
        );
        info!("driver loop stopped");
    }

    /// One pass through the loop: branch on the current state, render,
    /// read, dispatch. The match is exhaustive over [`GameState`], so
    /// there is no unknown-state arm to heal.
    fn iterate(&mut self) -> Result<()> {
        match self.register.current() {
            GameState::Menu => self.menu_iteration(),
            GameState::Playing => self.playing_iteration(),
            GameState::Paused => self.paused_iteration(),
            GameState::Quit => {
                screen::show_goodbye(&self.config);
                self.running = false;
                Ok(())
            },
        }
    }

    fn menu_iteration(&mut self) -> Result<()> {
        screen::show_main_menu(&self.config);
        let Some(choice) = self.read_player_line(&screen::menu_prompt())? else {
            return Ok(());
        };
        if menu::dispatch_menu(
            &mut self.register,
            &mut self.input,
            &self.config,
            &self.data,
            &choice,
        ) {
            self.data.session.commands_handled += 1;
        }
        Ok(())
    }

    fn playing_iteration(&mut self) -> Result<()> {
        screen::show_game_banner(&self.config, &self.data);
        let Some(line) = self.read_player_line(&screen::game_prompt())? else {
            return Ok(());
        };
        if game::dispatch_game(&mut self.register, &self.config, &line) {
            self.data.session.commands_handled += 1;
        }
        Ok(())
    }

    fn paused_iteration(&mut self) -> Result<()> {
        screen::show_pause_menu(&self.config);
        let Some(choice) = self.read_player_line(&screen::pause_prompt())? else {
            return Ok(());
        };
        if menu::dispatch_pause(&mut self.register, &choice) {
            self.data.session.commands_handled += 1;
        }
        Ok(())
    }

    /// Read a line, resolving end-of-input to a quit request. `None` means
    /// the player interrupted: the loop shuts down with a short farewell
    /// instead of dispatching anything.
    fn read_player_line(&mut self, prompt: &str) -> Result<Option<String>> {
        let event = self.input.read_line(prompt)?;
        if event == InputEvent::Interrupted {
            info!("interrupt received; leaving the driver loop");
            screen::show_interrupt_farewell(&self.config);
            self.running = false;
            return Ok(None);
        }
        Ok(event.into_line())
    }

    /// Welcome screen, parked until the player presses Enter (or the
    /// stream ends, which simply moves on to the menu).
    fn welcome(&mut self) -> Result<()> {
        screen::show_welcome(&self.config, &self.data);
        self.read_player_line(&screen::continue_prompt())?;
        Ok(())
    }
}
