//! Подсчёт очков ронды.
//!
//! Основная функция:
//!   `calculate_scores(pilas) -> ScoreReport`

pub mod counters;
pub mod score_report;

pub use counters::{CategoryAggregator, EscobaCount, ScoreCategory, SetentaWinner, TopScore};
pub use score_report::{calculate_scores, ScoreReport};
