//! Автоматические игроки: перебор взяток и выбор хода.

pub mod move_enum;
pub mod npc;

pub use move_enum::{enumerate_pickups, Pickup};
pub use npc::Npc;
