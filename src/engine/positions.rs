use crate::domain::Deck;
use crate::engine::ronda::{HAND_SIZE, INITIAL_TABLE_SIZE};

/// Следующее место по кругу.
pub fn next_seat(current: usize, players: usize) -> usize {
    (current + 1) % players
}

/// Допустимое число игроков: после стартового стола оставшиеся карты должны
/// делиться на целые раздачи по 3 карты каждому (2, 3, 4 или 6 игроков).
pub fn is_supported_player_count(players: usize) -> bool {
    let after_table = Deck::SIZE - INITIAL_TABLE_SIZE;
    (2..=6).contains(&players) && after_table % (HAND_SIZE * players) == 0
}

/// Дилер следующей ронды – следующий по кругу.
pub fn next_dealer(current_dealer: usize, players: usize) -> usize {
    next_seat(current_dealer, players)
}
