//! Игра из нескольких ронд: смена дилера, общий счёт, победитель.

pub mod config;
pub mod runtime;

pub use config::{GameConfig, PlayerSeatConfig, DEFAULT_TARGET_SCORE};
pub use runtime::{Game, GameStatus};
