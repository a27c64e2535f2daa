use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Suit};
use crate::engine::errors::EngineError;
use crate::engine::RandomSource;

/// Колода испанских карт. Карты раздаются с конца.
///
/// Колода неизменяемая: `deal` возвращает розданные карты и новую колоду,
/// исходная остаётся как была. Порядок карт хранится один раз (`Arc`),
/// колоды-потомки видят только его префикс длиной `remaining`.
///
/// Десериализация проверяет то же, что `from_ordered`, плюс `remaining <= 40`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawDeck")]
pub struct Deck {
    order: Arc<[Card]>,
    remaining: usize,
}

#[derive(Deserialize)]
struct RawDeck {
    order: Vec<Card>,
    remaining: usize,
}

impl TryFrom<RawDeck> for Deck {
    type Error = EngineError;

    fn try_from(raw: RawDeck) -> Result<Self, Self::Error> {
        let mut deck = Deck::from_ordered(raw.order)?;
        if raw.remaining > deck.order.len() {
            return Err(EngineError::InvalidDeck(format!(
                "осталось {} карт при {} в колоде",
                raw.remaining,
                deck.order.len()
            )));
        }
        deck.remaining = raw.remaining;
        Ok(deck)
    }
}

impl Deck {
    pub const SIZE: usize = 40;

    /// 40 карт в порядке: номинал 1..10, внутри номинала Oro, Basto, Espada, Copa.
    pub fn standard_40() -> Self {
        let mut cards = Vec::with_capacity(Self::SIZE);
        for value in Card::MIN_VALUE..=Card::MAX_VALUE {
            for suit in Suit::ALL {
                cards.push(Card::from_parts(value, suit));
            }
        }
        Self::from_vec(cards)
    }

    /// Новая перемешанная колода. Перемешивание один раз, при создании.
    pub fn shuffled<R: RandomSource>(rng: &mut R) -> Self {
        let mut cards = Self::standard_40().cards().to_vec();
        rng.shuffle(&mut cards);
        Self::from_vec(cards)
    }

    /// Колода в заданном порядке (последняя карта раздаётся первой).
    /// Должна содержать ровно все 40 карт без повторов.
    pub fn from_ordered(cards: Vec<Card>) -> Result<Self, EngineError> {
        if cards.len() != Self::SIZE {
            return Err(EngineError::InvalidDeck(format!(
                "ожидалось {} карт, получено {}",
                Self::SIZE,
                cards.len()
            )));
        }
        let unique: HashSet<&Card> = cards.iter().collect();
        if unique.len() != Self::SIZE {
            return Err(EngineError::InvalidDeck("в колоде есть повторы".into()));
        }
        Ok(Self::from_vec(cards))
    }

    fn from_vec(cards: Vec<Card>) -> Self {
        let remaining = cards.len();
        Deck {
            order: cards.into(),
            remaining,
        }
    }

    pub fn len(&self) -> usize {
        self.remaining
    }

    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Оставшиеся карты; последняя будет роздана первой.
    pub fn cards(&self) -> &[Card] {
        &self.order[..self.remaining]
    }

    /// Раздать n карт с конца колоды. O(n): копируются только розданные карты.
    pub fn deal(&self, n: usize) -> Result<(Vec<Card>, Deck), EngineError> {
        if n > self.remaining {
            return Err(EngineError::InsufficientCards {
                requested: n,
                available: self.remaining,
            });
        }
        let split_at = self.remaining - n;
        let dealt = self.order[split_at..self.remaining].to_vec();
        let rest = Deck {
            order: Arc::clone(&self.order),
            remaining: split_at,
        };
        Ok((dealt, rest))
    }
}

impl PartialEq for Deck {
    fn eq(&self, other: &Self) -> bool {
        self.cards() == other.cards()
    }
}

impl Eq for Deck {}
