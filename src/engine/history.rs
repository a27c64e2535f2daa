use serde::{Deserialize, Serialize};

use crate::domain::{Card, PlayerId};

/// Событие ронды.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RondaEventKind {
    /// Ронда началась.
    RondaStarted {
        dealer: PlayerId,
        players: Vec<PlayerId>,
    },

    /// Всем игрокам розданы новые руки.
    HandsDealt { deck_left: usize },

    /// Четыре карты на столе при раздаче дали 15 – ушли дилеру с эскобой.
    DealtEscoba { dealer: PlayerId, cards: Vec<Card> },

    /// Игрок положил карту на стол.
    CardDropped { player_id: PlayerId, card: Card },

    /// Игрок взял карты со стола.
    CardsPickedUp {
        player_id: PlayerId,
        own_card: Card,
        pickups: Vec<Card>,
        escoba: bool,
    },

    /// Остаток стола в конце ронды ушёл последнему бравшему (без эскобы).
    TableSwept { player_id: PlayerId, cards: Vec<Card> },

    /// Ронда закончена.
    RondaFinished,
}

/// Событие с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RondaEvent {
    pub index: u32,
    pub kind: RondaEventKind,
}

/// Полная история ронды.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RondaHistory {
    pub events: Vec<RondaEvent>,
}

impl RondaHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: RondaEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(RondaEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last(&self) -> Option<&RondaEventKind> {
        self.events.last().map(|e| &e.kind)
    }
}
