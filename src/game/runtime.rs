use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ai::Npc;
use crate::domain::{Card, PlayerId, PlayerProfile};
use crate::engine::positions::{is_supported_player_count, next_dealer};
use crate::engine::{EngineError, PlayerMove, RandomSource, Ronda};
use crate::eval::ScoreReport;
use crate::game::config::GameConfig;
use crate::infra::IdGenerator;

/// Статус игры для внешнего кода.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    /// Между рондами: можно звать `start_ronda`.
    WaitingForRonda,
    /// Ронда идёт или закончена, но ещё не подсчитана (`finish_ronda`).
    RondaInProgress,
    Finished { winner: PlayerId },
}

/// Игра: ронды подряд, пока кто-то не наберёт `target_score`.
///
/// Игра держит текущий снимок ронды и заменяет его после каждого хода.
/// Конец игры: после подсчёта ронды у лидера `>= target_score`
/// и лидер один. При равенстве наверху играется ещё ронда.
#[derive(Clone, Debug)]
pub struct Game {
    players: Vec<PlayerProfile>,
    target_score: u32,
    totals: BTreeMap<PlayerId, u32>,
    /// Индекс дилера в `players` для следующей/текущей ронды.
    dealer: usize,
    rondas_played: u32,
    ronda: Option<Ronda>,
    last_ronda: Option<Ronda>,
    last_report: Option<ScoreReport>,
    winner: Option<PlayerId>,
}

impl Game {
    /// Первая ронда раздаёт последний игрок, первым ходит игрок на месте 0.
    pub fn new(players: Vec<PlayerProfile>, target_score: u32) -> Result<Game, EngineError> {
        if !is_supported_player_count(players.len()) {
            return Err(EngineError::UnsupportedPlayerCount(players.len()));
        }
        if target_score == 0 {
            return Err(EngineError::InvalidConfig(
                "target_score должен быть больше нуля".into(),
            ));
        }
        for (idx, p) in players.iter().enumerate() {
            if players[..idx].iter().any(|q| q.id == p.id) {
                return Err(EngineError::DuplicatePlayer(p.id));
            }
        }

        let totals = players.iter().map(|p| (p.id, 0)).collect();
        let dealer = players.len() - 1;

        Ok(Game {
            players,
            target_score,
            totals,
            dealer,
            rondas_played: 0,
            ronda: None,
            last_ronda: None,
            last_report: None,
            winner: None,
        })
    }

    /// Игра по конфигу; id игроков выдаёт `ids`.
    pub fn from_config(config: &GameConfig, ids: &IdGenerator) -> Result<Game, EngineError> {
        config.validate()?;
        let players = config
            .players
            .iter()
            .map(|seat| PlayerProfile {
                id: ids.next_player_id(),
                name: seat.name.clone(),
                is_npc: seat.npc,
            })
            .collect();
        Game::new(players, config.target_score)
    }

    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.winner {
            GameStatus::Finished { winner }
        } else if self.ronda.is_some() {
            GameStatus::RondaInProgress
        } else {
            GameStatus::WaitingForRonda
        }
    }

    /// Начать следующую ронду с новой колодой.
    pub fn start_ronda<R: RandomSource>(&mut self, rng: &mut R) -> Result<&Ronda, EngineError> {
        if self.winner.is_some() {
            return Err(EngineError::GameFinished);
        }
        if self.ronda.is_some() {
            return Err(EngineError::RondaInProgress);
        }

        let ids: Vec<PlayerId> = self.players.iter().map(|p| p.id).collect();
        let ronda = Ronda::start(&ids, ids[self.dealer], rng)?;
        Ok(&*self.ronda.insert(ronda))
    }

    fn active_ronda(&self) -> Result<&Ronda, EngineError> {
        if self.winner.is_some() {
            return Err(EngineError::GameFinished);
        }
        self.ronda.as_ref().ok_or(EngineError::NoActiveRonda)
    }

    /// Ход текущего игрока в текущей ронде.
    pub fn play_turn(&mut self, own_card: Card, pickups: &[Card]) -> Result<&Ronda, EngineError> {
        let next = self.active_ronda()?.play_turn(own_card, pickups)?;
        Ok(&*self.ronda.insert(next))
    }

    pub fn apply_move(&mut self, mv: &PlayerMove) -> Result<&Ronda, EngineError> {
        let next = self.active_ronda()?.apply_move(mv)?;
        Ok(&*self.ronda.insert(next))
    }

    /// Ход NPC за текущего игрока. Возвращает сделанный ход.
    pub fn play_npc_turn<R: RandomSource>(
        &mut self,
        npc: &Npc,
        rng: &mut R,
    ) -> Result<PlayerMove, EngineError> {
        let mv = npc.choose_move(self.active_ronda()?, rng)?;
        self.apply_move(&mv)?;
        Ok(mv)
    }

    /// Доиграть текущую ронду ходами NPC за всех и подсчитать её.
    pub fn autoplay_ronda<R: RandomSource>(
        &mut self,
        npc: &Npc,
        rng: &mut R,
    ) -> Result<ScoreReport, EngineError> {
        while !self.active_ronda()?.is_finished() {
            self.play_npc_turn(npc, rng)?;
        }
        self.finish_ronda()
    }

    /// Подсчитать законченную ронду: очки в общий счёт, дилер дальше по кругу,
    /// проверка победителя.
    pub fn finish_ronda(&mut self) -> Result<ScoreReport, EngineError> {
        let report = self.active_ronda()?.final_scores()?;

        for (id, pts) in report.points_by_player() {
            *self.totals.entry(id).or_default() += pts;
        }

        self.rondas_played += 1;
        self.dealer = next_dealer(self.dealer, self.players.len());
        self.last_ronda = self.ronda.take();
        self.last_report = Some(report.clone());
        self.winner = self.leader_at_target();

        info!(
            ronda = self.rondas_played,
            totals = ?self.totals,
            winner = ?self.winner,
            "ронда подсчитана"
        );

        Ok(report)
    }

    /// Единственный лидер с `>= target_score`.
    fn leader_at_target(&self) -> Option<PlayerId> {
        let top = self.totals.values().copied().max()?;
        if top < self.target_score {
            return None;
        }
        let mut leaders = self.totals.iter().filter(|&(_, &t)| t == top);
        match (leaders.next(), leaders.next()) {
            (Some((&id, _)), None) => Some(id),
            _ => None,
        }
    }

    pub fn players(&self) -> &[PlayerProfile] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&PlayerProfile> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn target_score(&self) -> u32 {
        self.target_score
    }

    pub fn totals(&self) -> &BTreeMap<PlayerId, u32> {
        &self.totals
    }

    pub fn total_for(&self, id: PlayerId) -> u32 {
        self.totals.get(&id).copied().unwrap_or(0)
    }

    /// Дилер текущей ронды (или следующей, если ронды нет).
    pub fn dealer(&self) -> PlayerId {
        self.players[self.dealer].id
    }

    pub fn rondas_played(&self) -> u32 {
        self.rondas_played
    }

    pub fn ronda(&self) -> Option<&Ronda> {
        self.ronda.as_ref()
    }

    pub fn last_ronda(&self) -> Option<&Ronda> {
        self.last_ronda.as_ref()
    }

    pub fn last_report(&self) -> Option<&ScoreReport> {
        self.last_report.as_ref()
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }
}
