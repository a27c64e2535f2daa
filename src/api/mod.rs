//! Внешний API для слоя отображения: только чтение.
//!
//! - DTO (dto.rs) – удобные структуры для фронта / CLI;
//! - запросы (queries.rs) – сборка DTO из ронды и игры.

pub mod dto;
pub mod queries;

pub use dto::*;
pub use queries::*;
