use tracing::debug;

use crate::ai::move_enum::enumerate_pickups;
use crate::domain::{Card, PlayerId};
use crate::engine::{EngineError, PlayerMove, RandomSource, Ronda};

/// Автоматический игрок.
///
/// Если есть взятки на 15 – выбирает одну равновероятно.
/// Если нет – сбрасывает случайную карту с руки.
#[derive(Clone, Copy, Debug, Default)]
pub struct Npc;

impl Npc {
    pub fn new() -> Self {
        Npc
    }

    /// Ход по руке и столу: (карта с руки, карты со стола).
    pub fn get_move<R: RandomSource>(
        &self,
        hand: &[Card],
        table: &[Card],
        rng: &mut R,
    ) -> Result<(Card, Vec<Card>), EngineError> {
        if hand.is_empty() {
            return Err(EngineError::EmptyHand);
        }

        let mut options = enumerate_pickups(table, hand);
        if options.is_empty() {
            let card = hand[rng.choose_index(hand.len())];
            return Ok((card, Vec::new()));
        }

        let pick = options.swap_remove(rng.choose_index(options.len()));
        Ok((pick.own_card, pick.table_cards))
    }

    /// Ход за текущего игрока ронды.
    pub fn choose_move<R: RandomSource>(
        &self,
        ronda: &Ronda,
        rng: &mut R,
    ) -> Result<PlayerMove, EngineError> {
        if ronda.is_finished() {
            return Err(EngineError::RondaFinished);
        }
        let player_id: PlayerId = ronda.current_player();
        let state = ronda
            .player_state(player_id)
            .ok_or(EngineError::UnknownPlayer(player_id))?;

        let (own_card, pickups) = self.get_move(&state.hand, ronda.current_table(), rng)?;
        debug!(player_id, card = %own_card, pickups = pickups.len(), "ход NPC");

        Ok(PlayerMove {
            player_id,
            own_card,
            pickups,
        })
    }
}
