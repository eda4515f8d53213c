#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Wayfarer **
//! A text adventure waiting for its world.
//!
//! The binary wires configuration, logging, and the engine together; all
//! behavior lives in the library crate.

use std::process::ExitCode;

use anyhow::Result;
use log::{error, info};

use wayfarer_engine::WAYFARER_VERSION;
use wayfarer_engine::config::GameConfig;
use wayfarer_engine::repl::Engine;
use wayfarer_engine::style::GameStyle;

fn main() -> ExitCode {
    env_logger::init();
    info!("Start: loading Wayfarer configuration...");
    let config = GameConfig::load();

    if let Err(err) = run(config) {
        error!("engine crashed: {err:#}");
        eprintln!("{} {err}", "An unexpected error occurred:".error_style());
        eprintln!("Please check the logs for more details.");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(config: GameConfig) -> Result<()> {
    config.validate()?;
    if !config.use_colors {
        colored::control::set_override(false);
    }
    info!("configuration valid; starting {} v{WAYFARER_VERSION}", config.game_name);

    let mut engine = Engine::new(config);
    engine.run();
    Ok(())
}
