use wayfarer_engine as we;

use we::command::parse_command;
use we::config::{ConfigError, GameConfig};
use we::repl::input::{InputEvent, InputHistory, InputManager};
use we::repl::{game, menu};
use we::state::{GameState, StateRegister};
use we::style::GameStyle;

#[test]
fn test_parse_command_normalizes() {
    let command = parse_command("  PAUSE now  ");
    assert_eq!(command.token, "pause");
    assert_eq!(command.args, vec!["now".to_string()]);
}

#[test]
fn test_parse_command_empty() {
    assert!(parse_command("").is_empty());
    assert!(parse_command(" \t  ").is_empty());
}

#[test]
fn test_register_starts_at_menu() {
    let register = StateRegister::new();
    assert!(register.current().is_menu());
    assert!(register.previous().is_none());
    assert!(register.history().is_empty());
}

#[test]
fn test_transition_records_history() {
    let mut register = StateRegister::new();
    assert!(register.transition(GameState::Playing));
    assert_eq!(register.current(), GameState::Playing);
    assert_eq!(register.previous(), Some(GameState::Menu));
    assert_eq!(register.history(), &[(GameState::Menu, GameState::Playing)]);
}

#[test]
fn test_no_transition_out_of_quit() {
    let mut register = StateRegister::new();
    assert!(register.transition(GameState::Quit));
    assert!(!register.transition(GameState::Menu));
    assert!(register.current().is_quit());
    assert_eq!(register.previous(), Some(GameState::Menu));
    assert_eq!(register.history().len(), 1);
}

#[test]
fn test_revert_requires_a_previous_state() {
    let mut register = StateRegister::new();
    assert!(!register.revert());
    assert!(register.current().is_menu());
}

#[test]
fn test_revert_toggles() {
    let mut register = StateRegister::new();
    register.transition(GameState::Playing);
    assert!(register.revert());
    assert_eq!(register.current(), GameState::Menu);
    assert_eq!(register.previous(), Some(GameState::Playing));
    // second revert is the round trip back
    assert!(register.revert());
    assert_eq!(register.current(), GameState::Playing);
    assert_eq!(register.previous(), Some(GameState::Menu));
}

#[test]
fn test_menu_dispatch_start() {
    let config = GameConfig::default();
    let data = we::GameData::new(&config);
    let mut input = InputManager::new(&config);
    let mut register = StateRegister::new();
    assert!(menu::dispatch_menu(&mut register, &mut input, &config, &data, "1"));
    assert!(register.current().is_playing());
}

#[test]
fn test_menu_dispatch_accepts_words() {
    let config = GameConfig::default();
    let data = we::GameData::new(&config);
    let mut input = InputManager::new(&config);
    let mut register = StateRegister::new();
    assert!(menu::dispatch_menu(&mut register, &mut input, &config, &data, "START"));
    assert!(register.current().is_playing());
}

#[test]
fn test_menu_dispatch_rejects_unknown() {
    let config = GameConfig::default();
    let data = we::GameData::new(&config);
    let mut input = InputManager::new(&config);
    let mut register = StateRegister::new();
    assert!(!menu::dispatch_menu(&mut register, &mut input, &config, &data, "xyz"));
    assert!(register.current().is_menu());
    assert!(register.history().is_empty());
}

#[test]
fn test_menu_dispatch_help_keeps_state() {
    let config = GameConfig::default();
    let data = we::GameData::new(&config);
    let mut input = InputManager::new(&config);
    let mut register = StateRegister::new();
    assert!(menu::dispatch_menu(&mut register, &mut input, &config, &data, "?"));
    assert!(register.current().is_menu());
    assert!(register.history().is_empty());
}

#[test]
fn test_game_dispatch_scenario() {
    let config = GameConfig::default();
    let mut register = StateRegister::new();
    assert!(register.transition(GameState::Playing));
    assert!(game::dispatch_game(&mut register, &config, "pause"));
    assert!(register.current().is_paused());
    assert!(menu::dispatch_pause(&mut register, "resume"));
    assert!(register.current().is_playing());
    assert!(game::dispatch_game(&mut register, &config, "quit"));
    assert!(register.current().is_quit());
}

#[test]
fn test_game_dispatch_empty_input() {
    let config = GameConfig::default();
    let mut register = StateRegister::new();
    register.transition(GameState::Playing);
    assert!(!game::dispatch_game(&mut register, &config, ""));
    assert!(!game::dispatch_game(&mut register, &config, "   "));
    assert!(register.current().is_playing());
    assert_eq!(register.history().len(), 1);
}

#[test]
fn test_game_dispatch_unknown_command() {
    let config = GameConfig::default();
    let mut register = StateRegister::new();
    register.transition(GameState::Playing);
    assert!(!game::dispatch_game(&mut register, &config, "frobnicate the door"));
    assert!(register.current().is_playing());
}

#[test]
fn test_pause_dispatch_numerals() {
    let mut register = StateRegister::new();
    register.transition(GameState::Paused);
    assert!(menu::dispatch_pause(&mut register, "2"));
    assert!(register.current().is_menu());

    let mut register = StateRegister::new();
    register.transition(GameState::Paused);
    assert!(menu::dispatch_pause(&mut register, "3"));
    assert!(register.current().is_quit());
}

#[test]
fn test_pause_dispatch_rejects_unknown() {
    let mut register = StateRegister::new();
    register.transition(GameState::Paused);
    assert!(!menu::dispatch_pause(&mut register, "start"));
    assert!(register.current().is_paused());
}

#[test]
fn test_eof_resolves_to_quit_command() {
    let line = InputEvent::Eof.into_line().unwrap();
    assert_eq!(line, "quit");

    let config = GameConfig::default();
    let mut register = StateRegister::new();
    register.transition(GameState::Playing);
    assert!(game::dispatch_game(&mut register, &config, &line));
    assert!(register.current().is_quit());
}

#[test]
fn test_input_history_evicts_oldest() {
    let mut history = InputHistory::new(3);
    for line in ["one", "two", "three", "four"] {
        history.push(line);
    }
    assert_eq!(history.len(), 3);
    assert!(!history.contains("one"));
    assert!(history.contains("four"));
    assert_eq!(history.last(), Some("four"));
}

#[test]
fn test_validate_rejects_empty_and_oversized() {
    let config = GameConfig {
        max_input_length: 10,
        ..GameConfig::default()
    };
    let manager = InputManager::new(&config);
    assert!(!manager.validate("", None));
    assert!(!manager.validate("0123456789A", None));
    assert!(manager.validate("0123456789", None));
}

#[test]
fn test_validate_allowed_chars() {
    let config = GameConfig::default();
    let manager = InputManager::new(&config);
    assert!(manager.validate("123", Some("0123456789")));
    assert!(!manager.validate("12a", Some("0123456789")));
}

#[test]
fn test_config_defaults_valid() {
    assert!(GameConfig::default().validate().is_ok());
}

#[test]
fn test_config_rejects_zero_history() {
    let config = GameConfig {
        command_history_size: 0,
        ..GameConfig::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::ZeroHistorySize));
}

#[test]
fn test_lib_version() {
    assert!(!we::WAYFARER_VERSION.is_empty());
}

#[test]
fn test_style_applies_ansi() {
    colored::control::set_override(true);
    let styled = "hi".title_style().to_string();
    assert!(styled.contains('\u{1b}'));
}

#[test]
fn test_game_data_snapshots_settings() {
    let config = GameConfig {
        use_colors: false,
        ..GameConfig::default()
    };
    let data = we::GameData::new(&config);
    assert!(!data.settings.use_colors);
    assert_eq!(data.settings.display_width, config.display_width);
    assert_eq!(data.player.name, "Adventurer");
    assert_eq!(data.session.commands_handled, 0);
}
