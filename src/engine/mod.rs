//! Движок ронды: раздача, ходы, переходы состояния.
//!
//! Высокоуровневый объект: `Ronda`
//! Основные операции:
//!   - `Ronda::start` – раздать руки и стол
//!   - `Ronda::play_turn` – ход текущего игрока, возвращает новый снимок
//!   - `Ronda::calculate_scores` – очки по пилам

pub mod actions;
pub mod errors;
pub mod history;
pub mod positions;
pub mod ronda;
pub mod validation;

pub use actions::PlayerMove;
pub use errors::{EngineError, ErrorCategory};
pub use history::{RondaEvent, RondaEventKind, RondaHistory};
pub use ronda::{Ronda, RondaStatus, HAND_SIZE, INITIAL_TABLE_SIZE};
pub use validation::{is_valid_pickup, PICKUP_TARGET};

/// RNG интерфейс для движка и NPC.
/// Реализации – в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);

    /// Равномерный индекс в `0..len`. `len` должен быть больше нуля.
    fn choose_index(&mut self, len: usize) -> usize;
}
