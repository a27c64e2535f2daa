//! Инфраструктура вокруг движка:
//! - генерация id;
//! - RNG-реализации;
//! - производные seed'ы для воспроизводимых игр.

pub mod ids;
pub mod rng;
pub mod rng_seed;

pub use ids::*;
pub use rng::*;
pub use rng_seed::RngSeed;
