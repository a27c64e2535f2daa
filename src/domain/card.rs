use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::errors::EngineError;

/// Очки сетенты по номиналу карты (индекс = value - 1), в десятых долях.
/// 7 стоит 17.5, поэтому храним целые десятые, а не f32.
pub const SETENTA_WEIGHTS: [u32; 10] = [110, 40, 60, 80, 100, 140, 175, 10, 10, 10];

/// Масть испанской колоды.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Oro,
    Basto,
    Espada,
    Copa,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Oro, Suit::Basto, Suit::Espada, Suit::Copa];

    /// Индекс масти для массивов `[_; 4]`.
    pub const fn index(self) -> usize {
        match self {
            Suit::Oro => 0,
            Suit::Basto => 1,
            Suit::Espada => 2,
            Suit::Copa => 3,
        }
    }
}

/// Карта: номинал 1..=10 и масть. Сота, кабальо и рей идут как 8, 9, 10.
///
/// Десериализация идёт через `Card::new`, номинал вне 1..=10 даёт ошибку.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "RawCard")]
pub struct Card {
    value: u8,
    suit: Suit,
}

/// Карта как она приходит снаружи, до проверки номинала.
#[derive(Deserialize)]
struct RawCard {
    value: u8,
    suit: Suit,
}

impl TryFrom<RawCard> for Card {
    type Error = EngineError;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        Card::new(raw.value, raw.suit)
    }
}

impl Card {
    pub const MIN_VALUE: u8 = 1;
    pub const MAX_VALUE: u8 = 10;

    pub fn new(value: u8, suit: Suit) -> Result<Self, EngineError> {
        if !(Self::MIN_VALUE..=Self::MAX_VALUE).contains(&value) {
            return Err(EngineError::InvalidCardValue(value));
        }
        Ok(Self { value, suit })
    }

    /// Для заведомо корректных номиналов (сборка колоды).
    pub(crate) const fn from_parts(value: u8, suit: Suit) -> Self {
        Self { value, suit }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Вес карты в сетенте (десятые доли очка).
    pub fn setenta_weight(&self) -> u32 {
        SETENTA_WEIGHTS[(self.value - 1) as usize]
    }

    /// Семёрка оро.
    pub fn is_siete_de_velo(&self) -> bool {
        self.value == 7 && self.suit == Suit::Oro
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Suit::Oro => 'o',
            Suit::Basto => 'b',
            Suit::Espada => 'e',
            Suit::Copa => 'c',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Card {
    /// Формат вида `7o`, `10e`, `1c`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.suit)
    }
}

/// Парсинг строки вида "7o", "10e", "1c".
impl FromStr for Card {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || EngineError::InvalidCardString(s.to_string());

        let s_ch = s.chars().last().ok_or_else(bad)?;
        let digits = &s[..s.len() - s_ch.len_utf8()];
        // Только "1".."10": без знака и ведущих нулей.
        if digits.is_empty()
            || digits.len() > 2
            || digits.starts_with('0')
            || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(bad());
        }

        let suit = match s_ch {
            'o' | 'O' => Suit::Oro,
            'b' | 'B' => Suit::Basto,
            'e' | 'E' => Suit::Espada,
            'c' | 'C' => Suit::Copa,
            _ => return Err(bad()),
        };

        let value: u8 = digits.parse().map_err(|_| bad())?;
        Card::new(value, suit)
    }
}

/// Сумма номиналов набора карт.
pub fn sum_values(cards: &[Card]) -> u32 {
    cards.iter().map(|c| c.value() as u32).sum()
}
