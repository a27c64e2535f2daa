use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::PlayerId;

/// Генерация id на монотонных счётчиках.
#[derive(Debug)]
pub struct IdGenerator {
    player_counter: AtomicU64,
    game_counter: AtomicU64,
}

impl IdGenerator {
    /// Все счётчики начинаются с 1.
    pub fn new() -> Self {
        Self {
            player_counter: AtomicU64::new(1),
            game_counter: AtomicU64::new(1),
        }
    }

    #[inline]
    pub fn next_player_id(&self) -> PlayerId {
        self.player_counter.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn next_game_id(&self) -> u64 {
        self.game_counter.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
