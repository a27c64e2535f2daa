use serde::{Deserialize, Serialize};

use crate::domain::{Card, PlayerId};

/// Ход игрока: карта с руки и карты со стола.
///
/// Пустой `pickups` – просто положить карту на стол.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerMove {
    /// Кто ходит. Должен совпадать с текущим игроком ронды.
    pub player_id: PlayerId,
    pub own_card: Card,
    pub pickups: Vec<Card>,
}

impl PlayerMove {
    pub fn drop(player_id: PlayerId, own_card: Card) -> Self {
        Self {
            player_id,
            own_card,
            pickups: Vec::new(),
        }
    }

    pub fn pick_up(player_id: PlayerId, own_card: Card, pickups: Vec<Card>) -> Self {
        Self {
            player_id,
            own_card,
            pickups,
        }
    }

    pub fn is_drop(&self) -> bool {
        self.pickups.is_empty()
    }
}
