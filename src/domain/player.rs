use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::pila::Pila;
use crate::domain::PlayerId;

/// Базовый профиль игрока – то, что не зависит от конкретной ронды.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerProfile {
    pub id: PlayerId,
    pub name: String,
    /// Ходы за игрока делает `ai::Npc`.
    pub is_npc: bool,
}

impl PlayerProfile {
    pub fn human(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_npc: false,
        }
    }

    pub fn npc(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_npc: true,
        }
    }
}

/// Состояние игрока внутри ронды: рука (0–3 карты) и пила.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerState {
    pub hand: Vec<Card>,
    pub pila: Pila,
}

impl PlayerState {
    pub fn holds(&self, card: &Card) -> bool {
        self.hand.contains(card)
    }

    pub fn hand_is_empty(&self) -> bool {
        self.hand.is_empty()
    }
}
