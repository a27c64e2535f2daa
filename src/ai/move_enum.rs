use serde::{Deserialize, Serialize};

use crate::domain::Card;
use crate::engine::PICKUP_TARGET;

/// Взятка на 15: одна карта с руки и одна или несколько со стола.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pickup {
    pub own_card: Card,
    pub table_cards: Vec<Card>,
}

/// Все взятки на 15 для данной руки и стола.
///
/// Для каждой карты руки – поиск в глубину по сочетаниям карт стола
/// (без перестановок, каждое подмножество один раз). Ветка обрывается,
/// как только сумма достигла 15 или перевалила за неё.
/// Порядок результата детерминирован: карты руки по порядку, дальше порядок обхода.
pub fn enumerate_pickups(table: &[Card], hand: &[Card]) -> Vec<Pickup> {
    let mut found = Vec::new();
    let mut partial = Vec::with_capacity(table.len());

    for own_card in hand {
        search(
            table,
            own_card,
            own_card.value() as u32,
            &mut partial,
            &mut found,
        );
    }

    found
}

fn search(
    pool: &[Card],
    own_card: &Card,
    sum: u32,
    partial: &mut Vec<Card>,
    found: &mut Vec<Pickup>,
) {
    if sum == PICKUP_TARGET {
        found.push(Pickup {
            own_card: *own_card,
            table_cards: partial.clone(),
        });
    }
    if sum >= PICKUP_TARGET {
        return;
    }

    for (idx, card) in pool.iter().enumerate() {
        partial.push(*card);
        search(
            &pool[idx + 1..],
            own_card,
            sum + card.value() as u32,
            partial,
            found,
        );
        partial.pop();
    }
}
