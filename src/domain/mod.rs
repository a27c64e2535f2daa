//! Доменная модель: карты, колода, пила, игроки.

pub mod card;
pub mod deck;
pub mod pila;
pub mod player;
pub mod points;

/// Стабильный числовой id игрока. Всё состояние ронды хранится по этому ключу.
pub type PlayerId = u64;

pub use card::*;
pub use deck::*;
pub use pila::*;
pub use player::*;
pub use points::*;
