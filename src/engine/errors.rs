use thiserror::Error;

use crate::domain::{Card, PlayerId};

/// Категория ошибки: битые входные данные, недопустимый ход или неверное состояние.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    IllegalMove,
    State,
}

/// Ошибки движка. Все локальные и синхронные: состояние при ошибке не меняется,
/// вызывающий код должен переспросить ход или прервать ронду.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Номинал карты {0} вне диапазона 1..=10")]
    InvalidCardValue(u8),

    #[error("Не удалось разобрать карту из строки {0:?}")]
    InvalidCardString(String),

    #[error("Некорректная колода: {0}")]
    InvalidDeck(String),

    #[error("В колоде {available} карт, запрошено {requested}")]
    InsufficientCards { requested: usize, available: usize },

    #[error("Неподдерживаемое число игроков: {0}")]
    UnsupportedPlayerCount(usize),

    #[error("Игрок {0} указан дважды")]
    DuplicatePlayer(PlayerId),

    #[error("Игрок {0} не участвует")]
    UnknownPlayer(PlayerId),

    #[error("У игрока нет карт на руке")]
    EmptyHand,

    #[error("Некорректная конфигурация: {0}")]
    InvalidConfig(String),

    #[error("Карты {0} нет на руке у текущего игрока")]
    NotPlayersCard(Card),

    #[error("Сумма {total} вместо 15")]
    InvalidPickup { total: u32 },

    #[error("Не все карты для взятки лежат на столе")]
    CardsNotOnTable,

    #[error("Сейчас не ход игрока с id={0}")]
    NotPlayersTurn(PlayerId),

    #[error("Ронда уже закончена")]
    RondaFinished,

    #[error("Ронда ещё не закончена")]
    RondaNotFinished,

    #[error("Нет активной ронды")]
    NoActiveRonda,

    #[error("Предыдущая ронда ещё идёт")]
    RondaInProgress,

    #[error("Игра уже закончена")]
    GameFinished,
}

impl EngineError {
    pub fn category(&self) -> ErrorCategory {
        use EngineError::*;

        match self {
            InvalidCardValue(_)
            | InvalidCardString(_)
            | InvalidDeck(_)
            | InsufficientCards { .. }
            | UnsupportedPlayerCount(_)
            | DuplicatePlayer(_)
            | UnknownPlayer(_)
            | EmptyHand
            | InvalidConfig(_) => ErrorCategory::Validation,

            NotPlayersCard(_) | InvalidPickup { .. } | CardsNotOnTable | NotPlayersTurn(_) => {
                ErrorCategory::IllegalMove
            }

            RondaFinished | RondaNotFinished | NoActiveRonda | RondaInProgress | GameFinished => {
                ErrorCategory::State
            }
        }
    }
}
