use crate::domain::card::sum_values;
use crate::domain::{Card, PlayerState};
use crate::engine::errors::EngineError;

/// Сумма, которую должна дать взятка: карта с руки + карты со стола.
pub const PICKUP_TARGET: u32 = 15;

/// Допустима ли взятка по сумме. Пустая взятка (сброс) допустима всегда.
pub fn is_valid_pickup(own_card: &Card, pickups: &[Card]) -> bool {
    pickups.is_empty() || own_card.value() as u32 + sum_values(pickups) == PICKUP_TARGET
}

/// Проверка хода до любых изменений состояния.
///
/// Порядок проверок: карта на руке, сумма 15, карты на столе.
/// При успехе возвращает стол без взятых карт.
pub fn validate_turn(
    player: &PlayerState,
    table: &[Card],
    own_card: &Card,
    pickups: &[Card],
) -> Result<Vec<Card>, EngineError> {
    if !player.holds(own_card) {
        return Err(EngineError::NotPlayersCard(*own_card));
    }

    if !is_valid_pickup(own_card, pickups) {
        return Err(EngineError::InvalidPickup {
            total: own_card.value() as u32 + sum_values(pickups),
        });
    }

    remove_from_table(table, pickups)
}

/// Убрать карты со стола. Каждая карта взятки снимает ровно одну карту стола,
/// поэтому повтор карты во взятке тоже даёт `CardsNotOnTable`.
fn remove_from_table(table: &[Card], pickups: &[Card]) -> Result<Vec<Card>, EngineError> {
    let mut rest = table.to_vec();
    for card in pickups {
        let pos = rest
            .iter()
            .position(|c| c == card)
            .ok_or(EngineError::CardsNotOnTable)?;
        rest.remove(pos);
    }
    Ok(rest)
}
