use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Suit};
use crate::domain::points::SetentaPoints;

/// Пила – карты, которые игрок собрал за ронду, разложенные по мастям,
/// плюс счётчик эскоб.
///
/// Неизменяемая: `add` возвращает новую пилу, получатель не меняется.
/// Новая ронда – новая пустая пила у каждого игрока.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pila {
    /// Индекс – `Suit::index()`.
    by_suit: [Vec<Card>; 4],
    escobas: u32,
}

impl Pila {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавить карты (каждая в свою масть) и, если это эскоба, +1 к счётчику.
    pub fn add(&self, cards: &[Card], is_escoba: bool) -> Pila {
        let mut next = self.clone();
        for card in cards {
            next.by_suit[card.suit().index()].push(*card);
        }
        if is_escoba {
            next.escobas += 1;
        }
        next
    }

    /// Карты одной масти в порядке поступления.
    pub fn cards_of(&self, suit: Suit) -> &[Card] {
        &self.by_suit[suit.index()]
    }

    /// Все карты пилы: Oro, Basto, Espada, Copa.
    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.by_suit.iter().flatten()
    }

    pub fn escobas(&self) -> u32 {
        self.escobas
    }

    pub fn total_cards(&self) -> usize {
        self.by_suit.iter().map(Vec::len).sum()
    }

    pub fn total_oros(&self) -> usize {
        self.cards_of(Suit::Oro).len()
    }

    pub fn has_siete_de_velo(&self) -> bool {
        self.cards_of(Suit::Oro).iter().any(|c| c.value() == 7)
    }

    /// Лучшая сетента: по одной карте максимального веса из каждой масти.
    ///
    /// Пусто, если хотя бы одной масти нет. При равных весах внутри масти
    /// берётся первая встреченная карта.
    pub fn best_setenta(&self) -> Vec<Card> {
        if self.by_suit.iter().any(Vec::is_empty) {
            return Vec::new();
        }

        let mut best = Vec::with_capacity(4);
        for suit_cards in &self.by_suit {
            let mut top = suit_cards[0];
            for card in &suit_cards[1..] {
                if card.setenta_weight() > top.setenta_weight() {
                    top = *card;
                }
            }
            best.push(top);
        }
        best
    }

    /// Лучшая сетента вместе с её очками; `None`, если сетенты нет.
    pub fn setenta(&self) -> Option<(Vec<Card>, SetentaPoints)> {
        let best = self.best_setenta();
        if best.is_empty() {
            return None;
        }
        let points = best
            .iter()
            .map(|c| SetentaPoints::from_tenths(c.setenta_weight()))
            .sum();
        Some((best, points))
    }

    /// Очки лучшей сетенты; `None`, если сетенты нет.
    pub fn setenta_points(&self) -> Option<SetentaPoints> {
        self.setenta().map(|(_, points)| points)
    }
}
