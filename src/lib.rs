//! Движок ронды испанской игры «кинсе» (escoba de 15).
//!
//! Слои:
//! - `domain` – карты, колода, пила, игроки;
//! - `engine` – ронда как неизменяемые снимки, ходы, ошибки;
//! - `eval` – подсчёт очков ронды по пяти категориям;
//! - `ai` – перебор взяток на 15 и NPC;
//! - `game` – игра из нескольких ронд до целевого счёта;
//! - `api` – DTO для отображения;
//! - `infra` – RNG, seed'ы, id.

pub mod ai;
pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod game;
pub mod infra;
