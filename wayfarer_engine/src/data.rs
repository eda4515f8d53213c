//! Typed game data.
//!
//! The shell predates any real gameplay, but the slots gameplay will fill
//! are typed out now rather than kept in a free-form map: one struct per
//! category, composed into [`GameData`]. Nothing here persists; the block
//! is rebuilt each run and discarded at exit.

use log::info;
use uuid::Uuid;

use crate::config::GameConfig;

/// Everything the engine tracks outside the state register.
#[derive(Debug, Clone)]
pub struct GameData {
    pub player: PlayerData,
    pub world: WorldData,
    pub session: SessionData,
    pub settings: SettingsData,
}

/// Player identity. Character creation is not built yet, so every run uses
/// the default adventurer.
#[derive(Debug, Clone)]
pub struct PlayerData {
    pub name: String,
    pub class: String,
}

impl Default for PlayerData {
    fn default() -> Self {
        Self {
            name: "Adventurer".to_string(),
            class: "Wanderer".to_string(),
        }
    }
}

/// Where the player is. A single named area until a world model exists.
#[derive(Debug, Clone)]
pub struct WorldData {
    pub current_area: String,
}

impl Default for WorldData {
    fn default() -> Self {
        Self {
            current_area: "the Threshold".to_string(),
        }
    }
}

/// Per-run bookkeeping.
#[derive(Debug, Clone)]
pub struct SessionData {
    pub id: Uuid,
    pub commands_handled: u64,
}

impl Default for SessionData {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            commands_handled: 0,
        }
    }
}

/// Presentation values the settings screen reports, snapshotted from
/// [`GameConfig`] at engine start.
#[derive(Debug, Clone, Default)]
pub struct SettingsData {
    pub use_colors: bool,
    pub display_width: usize,
    pub debug_mode: bool,
}

impl GameData {
    /// Build the data block for a new session.
    pub fn new(config: &GameConfig) -> Self {
        let session = SessionData::default();
        info!("session {} started", session.id);
        Self {
            player: PlayerData::default(),
            world: WorldData::default(),
            session,
            settings: SettingsData {
                use_colors: config.use_colors,
                display_width: config.display_width,
                debug_mode: config.debug_mode,
            },
        }
    }
}
