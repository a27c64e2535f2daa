use crate::domain::PlayerId;
use crate::engine::Ronda;
use crate::eval::ScoreReport;
use crate::game::Game;

use super::dto::{PlayerViewDto, RondaViewDto, ScoreLineDto, ScoreReportDto};

/// Сформировать DTO ронды. Руку показываем только тем, для кого `is_hero`.
pub fn build_ronda_view(
    ronda: &Ronda,
    resolve_name: impl Fn(PlayerId) -> String,
    is_hero: impl Fn(PlayerId) -> bool,
) -> RondaViewDto {
    let mut players = Vec::with_capacity(ronda.players().len());

    for (idx, &pid) in ronda.players().iter().enumerate() {
        let Some(state) = ronda.player_state(pid) else {
            continue;
        };

        players.push(PlayerViewDto {
            player_id: pid,
            display_name: resolve_name(pid),
            seat_index: idx as u8,
            hand_size: state.hand.len(),
            hand: if is_hero(pid) {
                Some(state.hand.clone())
            } else {
                None
            },
            pila_size: state.pila.total_cards(),
            escobas: state.pila.escobas(),
            is_dealer: pid == ronda.dealer(),
            is_current: !ronda.is_finished() && pid == ronda.current_player(),
        });
    }

    RondaViewDto {
        status: ronda.status(),
        table: ronda.current_table().to_vec(),
        deck_left: ronda.deck_len(),
        current_player: ronda.current_player(),
        dealer: ronda.dealer(),
        last_picked_up: ronda.last_picked_up(),
        dealt_escoba: ronda.dealt_escoba(),
        players,
    }
}

/// Вид текущей ронды игры с именами из профилей.
pub fn build_game_ronda_view(game: &Game, hero: Option<PlayerId>) -> Option<RondaViewDto> {
    let ronda = game.ronda().or_else(|| game.last_ronda())?;
    Some(build_ronda_view(
        ronda,
        |pid| display_name(game, pid),
        |pid| Some(pid) == hero,
    ))
}

/// Итоги ронды с очками; общий счёт – если передана игра.
pub fn build_score_report(
    report: &ScoreReport,
    players: &[PlayerId],
    resolve_name: impl Fn(PlayerId) -> String,
    game: Option<&Game>,
) -> ScoreReportDto {
    let points = report.points_by_player();

    let lines = players
        .iter()
        .map(|&pid| ScoreLineDto {
            player_id: pid,
            display_name: resolve_name(pid),
            ronda_points: points.get(&pid).copied().unwrap_or(0),
            total: game.map(|g| g.total_for(pid)),
        })
        .collect();

    ScoreReportDto {
        report: report.clone(),
        lines,
    }
}

/// Имя из профиля игры; для неизвестного id – "Player {id}".
pub fn display_name(game: &Game, pid: PlayerId) -> String {
    game.player(pid)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| format!("Player {}", pid))
}
