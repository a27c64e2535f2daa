use serde::{Deserialize, Serialize};

use crate::domain::{Card, PlayerId};
use crate::engine::RondaStatus;
use crate::eval::ScoreReport;

/// DTO игрока в ронде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlayerViewDto {
    pub player_id: PlayerId,
    pub display_name: String,
    pub seat_index: u8,
    pub hand_size: usize,
    /// Карты руки – только для "героя".
    pub hand: Option<Vec<Card>>,
    pub pila_size: usize,
    pub escobas: u32,
    pub is_dealer: bool,
    pub is_current: bool,
}

/// DTO ронды для отрисовки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RondaViewDto {
    pub status: RondaStatus,
    pub table: Vec<Card>,
    pub deck_left: usize,
    pub current_player: PlayerId,
    pub dealer: PlayerId,
    pub last_picked_up: PlayerId,
    pub dealt_escoba: bool,
    pub players: Vec<PlayerViewDto>,
}

/// Строка итоговой таблицы очков ронды.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScoreLineDto {
    pub player_id: PlayerId,
    pub display_name: String,
    pub ronda_points: u32,
    pub total: Option<u32>,
}

/// Итоги ронды: подробный отчёт и очки по игрокам.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScoreReportDto {
    pub report: ScoreReport,
    pub lines: Vec<ScoreLineDto>,
}
