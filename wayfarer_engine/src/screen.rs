//! Text output for the shell.
//!
//! Every screen the engine shows lives here: banners, menus, help, and the
//! one-line notices. Dispatchers and the driver loop stay print-free apart
//! from these functions, so presentation can change without touching
//! routing logic.

use std::io::{self, Write};

use textwrap::{fill, termwidth};

use crate::WAYFARER_VERSION;
use crate::config::GameConfig;
use crate::data::GameData;
use crate::style::GameStyle;

/// Main menu entries, rendered in order as choices 1..=3.
pub const MAIN_MENU_OPTIONS: [&str; 3] = ["Start Game", "Settings", "Quit"];

/// Pause menu entries, rendered in order as choices 1..=3.
pub const PAUSE_MENU_OPTIONS: [&str; 3] = ["Resume Game", "Main Menu", "Quit"];

const WELCOME_TEXT: &str = "The world past this menu is still being written. For now the shell \
                            will happily walk you between its screens and take notes on where \
                            you have been.";

const GAME_HELP_FOOTER: &str = "Exploration commands arrive as the world fills in; for now the \
                                shell only knows how to move between its own screens.";

/// Cap the configured width at the real terminal width.
pub fn frame_width(config: &GameConfig) -> usize {
    config.display_width.min(termwidth())
}

/// Clear the terminal and home the cursor.
pub fn clear_screen() {
    print!("\x1B[2J\x1B[H");
    let _ = io::stdout().flush();
}

/// Banner and player introduction shown once at startup.
pub fn show_welcome(config: &GameConfig, data: &GameData) {
    if config.clear_screen_on_start {
        clear_screen();
    }
    let width = frame_width(config);
    let title = format!("{} v{WAYFARER_VERSION}", config.game_name.to_uppercase());
    println!("{}", "=".repeat(width));
    println!("{}", format!("{title:^width$}").title_style());
    println!("{}", "=".repeat(width));
    println!(
        "\nYou are {}, a {}.\n",
        data.player.name.info_style(),
        data.player.class
    );
    println!("{}", fill(WELCOME_TEXT, width));
}

/// Render the main menu between rule lines. The choice prompt itself is
/// passed to the input reader, not printed here.
pub fn show_main_menu(config: &GameConfig) {
    let width = frame_width(config);
    let title = format!("{} - MAIN MENU", config.game_name.to_uppercase());
    println!("\n{}", "=".repeat(width));
    println!("{}", format!("{title:^width$}").title_style());
    println!("{}", "=".repeat(width));
    for (i, option) in MAIN_MENU_OPTIONS.iter().enumerate() {
        println!("  {}. {option}", i + 1);
    }
}

/// Render the pause menu between rule lines.
pub fn show_pause_menu(config: &GameConfig) {
    let width = frame_width(config);
    println!("\n{}", "=".repeat(width));
    println!("{}", format!("{:^width$}", "GAME PAUSED").title_style());
    println!("{}", "=".repeat(width));
    for (i, option) in PAUSE_MENU_OPTIONS.iter().enumerate() {
        println!("  {}. {option}", i + 1);
    }
}

/// Gameplay banner shown before each prompt while playing.
pub fn show_game_banner(config: &GameConfig, data: &GameData) {
    let width = frame_width(config);
    println!("\n{}", "=".repeat(width));
    println!("You find yourself in {}.", data.world.current_area.info_style());
    println!("\nWhat would you like to do?");
    println!("(Type {} for available commands)", "'help'".info_style());
    println!("{}", "=".repeat(width));
}

/// Settings screen. Values are read-only for now.
pub fn show_settings(config: &GameConfig, data: &GameData) {
    let width = frame_width(config);
    println!("\n{}", "=".repeat(width));
    println!("{}", format!("{:^width$}", "SETTINGS").title_style());
    println!("{}", "=".repeat(width));
    println!("  colors        : {}", on_off(data.settings.use_colors));
    println!("  display width : {}", data.settings.display_width);
    println!("  debug mode    : {}", on_off(data.settings.debug_mode));
    println!();
    println!(
        "{}",
        fill(
            "Settings are read-only for now; edit wayfarer.toml to change them.",
            width
        )
    );
}

/// Help for the main menu.
pub fn show_menu_help() {
    println!("\n{}", "Menu Help".subheading_style());
    println!("  1 or 'start'    - Start the game");
    println!("  2 or 'settings' - Open settings");
    println!("  3 or 'quit'     - Exit the game");
    println!("  'help' or '?'   - Show this help");
}

/// Help while playing.
pub fn show_game_help(config: &GameConfig) {
    println!("\n{}", "Game Help".subheading_style());
    println!("  help or ?  - Show this help");
    println!("  pause      - Pause the game");
    println!("  menu       - Return to the main menu");
    println!("  quit       - Exit the game");
    println!("\n{}", fill(GAME_HELP_FOOTER, frame_width(config)));
}

/// Rejection notice for an unrecognized menu choice.
pub fn show_invalid_choice() {
    println!("{}", "Invalid choice. Please try again.".denied_style());
}

/// Rejection notice for an unrecognized gameplay command.
pub fn show_unknown_command(token: &str) {
    println!("Unknown command: {}", token.denied_style());
    println!("Type 'help' for available commands.");
}

/// Generic failure notice for a loop iteration that errored.
pub fn show_error(message: &str) {
    println!("{} {message}", "Error:".error_style());
}

/// Farewell screen for a normal quit.
pub fn show_goodbye(config: &GameConfig) {
    let width = frame_width(config);
    println!("\n{}", "=".repeat(width));
    println!("{:^width$}", "Thank you for playing");
    println!(
        "{}",
        format!("{:^width$}", config.game_name.to_uppercase()).title_style()
    );
    println!(
        "{}",
        format!("{:^width$}", "Your adventure awaits your return...").info_style()
    );
    println!("{}", "=".repeat(width));
}

/// Short farewell printed when the player interrupts a read.
pub fn show_interrupt_farewell(config: &GameConfig) {
    println!("\n\nThank you for playing {}!", config.game_name);
}

/// Prompt for the main menu choice.
pub fn menu_prompt() -> String {
    format!(
        "\nEnter your choice (1-{}) or type a command: ",
        MAIN_MENU_OPTIONS.len()
    )
    .prompt_style()
    .to_string()
}

/// Prompt for the pause menu choice.
pub fn pause_prompt() -> String {
    format!("\nEnter your choice (1-{}): ", PAUSE_MENU_OPTIONS.len())
        .prompt_style()
        .to_string()
}

/// Prompt while playing.
pub fn game_prompt() -> String {
    "> ".prompt_style().to_string()
}

/// Prompt used by screens that park on "press Enter".
pub fn continue_prompt() -> String {
    "\nPress Enter to continue... ".prompt_style().to_string()
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}
