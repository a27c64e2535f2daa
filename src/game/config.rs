use serde::{Deserialize, Serialize};

use crate::engine::positions::is_supported_player_count;
use crate::engine::EngineError;

/// Очки, до которых идёт игра по умолчанию.
pub const DEFAULT_TARGET_SCORE: u32 = 30;

fn default_target_score() -> u32 {
    DEFAULT_TARGET_SCORE
}

/// Место за столом в конфиге.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerSeatConfig {
    pub name: String,
    /// Играет ли за это место NPC.
    #[serde(default)]
    pub npc: bool,
}

/// Конфиг игры: игроки в порядке мест, целевой счёт, seed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    #[serde(default = "default_target_score")]
    pub target_score: u32,
    pub players: Vec<PlayerSeatConfig>,
    /// Базовый seed. `None` – системный RNG.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    /// Четыре NPC, игра до 30.
    fn default() -> Self {
        let players = ["Alice", "Bob", "Charlie", "Dave"]
            .into_iter()
            .map(|name| PlayerSeatConfig {
                name: name.to_string(),
                npc: true,
            })
            .collect();

        Self {
            target_score: DEFAULT_TARGET_SCORE,
            players,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Разбор конфига из JSON с последующей проверкой.
    pub fn from_json_str(raw: &str) -> Result<Self, EngineError> {
        let config: GameConfig =
            serde_json::from_str(raw).map_err(|e| EngineError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.target_score == 0 {
            return Err(EngineError::InvalidConfig(
                "target_score должен быть больше нуля".into(),
            ));
        }
        if !is_supported_player_count(self.players.len()) {
            return Err(EngineError::UnsupportedPlayerCount(self.players.len()));
        }
        if self.players.iter().any(|p| p.name.trim().is_empty()) {
            return Err(EngineError::InvalidConfig("пустое имя игрока".into()));
        }
        Ok(())
    }
}
