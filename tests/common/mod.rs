//! Общие помощники для интеграционных тестов.
#![allow(dead_code)]

use std::collections::HashSet;

use quince_engine::domain::{Card, Deck};
use quince_engine::engine::Ronda;

/// Карта из строки вида "7o".
pub fn c(s: &str) -> Card {
    s.parse().expect("valid card string")
}

pub fn cards(list: &[&str]) -> Vec<Card> {
    list.iter().map(|s| c(s)).collect()
}

/// Колода, которая раздаёт группы `groups` ровно в этом порядке
/// (первая группа – первой раздачей), остальные карты – после них.
pub fn deck_dealing(groups: &[&[&str]]) -> Deck {
    let top: Vec<Card> = groups.iter().flat_map(|g| cards(g)).collect();
    let used: HashSet<Card> = top.iter().copied().collect();
    assert_eq!(used.len(), top.len(), "повтор карты в сценарии");

    let mut order: Vec<Card> = Deck::standard_40()
        .cards()
        .iter()
        .copied()
        .filter(|card| !used.contains(card))
        .collect();

    for group in groups.iter().rev() {
        order.extend(cards(group));
    }

    Deck::from_ordered(order).expect("stacked deck is a full 40-card deck")
}

/// Все 40 карт на месте и без повторов.
pub fn assert_cards_conserved(ronda: &Ronda) {
    let all = ronda.accounted_cards();
    assert_eq!(all.len(), Deck::SIZE, "карт должно быть ровно 40");
    let unique: HashSet<Card> = all.into_iter().collect();
    assert_eq!(unique.len(), Deck::SIZE, "карты не должны повторяться");
}

pub fn hand_of(ronda: &Ronda, player: u64) -> Vec<Card> {
    ronda
        .player_state(player)
        .expect("player in ronda")
        .hand
        .clone()
}
