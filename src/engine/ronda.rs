use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::card::sum_values;
use crate::domain::{Card, Deck, Pila, PlayerId, PlayerState};
use crate::engine::actions::PlayerMove;
use crate::engine::errors::EngineError;
use crate::engine::history::{RondaEventKind, RondaHistory};
use crate::engine::positions::{is_supported_player_count, next_seat};
use crate::engine::validation::{validate_turn, PICKUP_TARGET};
use crate::engine::RandomSource;
use crate::eval::{calculate_scores, ScoreReport};

/// Карт на руку при каждой раздаче.
pub const HAND_SIZE: usize = 3;
/// Карт на стол в начале ронды.
pub const INITIAL_TABLE_SIZE: usize = 4;

/// Статус ронды для внешнего кода.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RondaStatus {
    InProgress,
    Finished,
}

/// Снимок ронды.
///
/// Ронда – неизменяемое значение: `play_turn` не трогает `self`, а возвращает
/// новый снимок. Старые снимки можно держать сколько угодно (история, undo,
/// отрисовка), они никогда не меняются задним числом.
///
/// Инварианты:
/// - каждая из 40 карт лежит ровно в одном месте: колода, стол, рука или пила;
/// - руки содержат 0..=3 карт, ход только у `current_player`;
/// - после `Finished` любое действие даёт `RondaFinished`.
///
/// Только `Serialize`: ронда создаётся через `start`, а не собирается снаружи.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Ronda {
    /// Порядок хода. Фиксирован на всю ронду.
    seats: Vec<PlayerId>,
    /// Индекс дилера в `seats`.
    dealer: usize,
    /// Индекс текущего игрока в `seats`.
    current: usize,
    table: Vec<Card>,
    deck: Deck,
    players: BTreeMap<PlayerId, PlayerState>,
    /// Кто последним брал карты. До первой взятки – дилер.
    last_picked_up: PlayerId,
    dealt_escoba: bool,
    status: RondaStatus,
    history: RondaHistory,
}

impl Ronda {
    /// Старт ронды с новой перемешанной колодой.
    pub fn start<R: RandomSource>(
        players: &[PlayerId],
        dealer: PlayerId,
        rng: &mut R,
    ) -> Result<Ronda, EngineError> {
        Self::start_with_deck(players, dealer, Deck::shuffled(rng))
    }

    /// Старт ронды с заданной колодой (полные 40 карт):
    /// - по 3 карты каждому игроку в порядке `players`;
    /// - 4 карты на стол; если они дают 15 – сразу в пилу дилера с эскобой;
    /// - первым ходит игрок после дилера, дилер ходит последним.
    pub fn start_with_deck(
        players: &[PlayerId],
        dealer: PlayerId,
        deck: Deck,
    ) -> Result<Ronda, EngineError> {
        if !is_supported_player_count(players.len()) {
            return Err(EngineError::UnsupportedPlayerCount(players.len()));
        }
        for (idx, id) in players.iter().enumerate() {
            if players[..idx].contains(id) {
                return Err(EngineError::DuplicatePlayer(*id));
            }
        }
        let dealer_idx = players
            .iter()
            .position(|&p| p == dealer)
            .ok_or(EngineError::UnknownPlayer(dealer))?;
        if deck.len() != Deck::SIZE {
            return Err(EngineError::InvalidDeck(format!(
                "ронда начинается с полной колоды, а в ней {} карт",
                deck.len()
            )));
        }

        let mut ronda = Ronda {
            seats: players.to_vec(),
            dealer: dealer_idx,
            current: dealer_idx,
            table: Vec::new(),
            deck,
            players: players
                .iter()
                .map(|&id| (id, PlayerState::default()))
                .collect(),
            last_picked_up: dealer,
            dealt_escoba: false,
            status: RondaStatus::InProgress,
            history: RondaHistory::new(),
        };

        ronda.history.push(RondaEventKind::RondaStarted {
            dealer,
            players: players.to_vec(),
        });

        ronda.deal_hands()?;

        let (table, rest) = ronda.deck.deal(INITIAL_TABLE_SIZE)?;
        ronda.deck = rest;
        if sum_values(&table) == PICKUP_TARGET {
            ronda.credit_pila(dealer, &table, true)?;
            ronda.dealt_escoba = true;
            ronda
                .history
                .push(RondaEventKind::DealtEscoba { dealer, cards: table });
        } else {
            ronda.table = table;
        }

        ronda.current = next_seat(dealer_idx, ronda.seats.len());

        info!(
            players = ronda.seats.len(),
            dealer,
            dealt_escoba = ronda.dealt_escoba,
            "ронда началась"
        );

        Ok(ronda)
    }

    /// Ход текущего игрока. Возвращает новый снимок, `self` не меняется.
    ///
    /// Пустой `pickups` – карта кладётся на стол. Иначе карта и взятка уходят
    /// в пилу игрока; если стол опустел – это эскоба.
    pub fn play_turn(&self, own_card: Card, pickups: &[Card]) -> Result<Ronda, EngineError> {
        if self.is_finished() {
            return Err(EngineError::RondaFinished);
        }

        let player_id = self.current_player();
        let state = self.state(player_id)?;

        // Вся валидация – до изменений.
        let rest_of_table = validate_turn(state, &self.table, &own_card, pickups)?;

        let mut next = self.clone();
        next.take_from_hand(player_id, &own_card)?;

        if pickups.is_empty() {
            next.table.push(own_card);
            next.history.push(RondaEventKind::CardDropped {
                player_id,
                card: own_card,
            });
            debug!(player_id, card = %own_card, "карта на стол");
        } else {
            next.table = rest_of_table;
            let escoba = next.table.is_empty();

            let mut taken = Vec::with_capacity(pickups.len() + 1);
            taken.push(own_card);
            taken.extend_from_slice(pickups);
            next.credit_pila(player_id, &taken, escoba)?;
            next.last_picked_up = player_id;

            next.history.push(RondaEventKind::CardsPickedUp {
                player_id,
                own_card,
                pickups: pickups.to_vec(),
                escoba,
            });
            debug!(player_id, card = %own_card, taken = pickups.len(), escoba, "взятка");
        }

        next.advance()?;
        Ok(next)
    }

    /// То же, что `play_turn`, но с проверкой, что ходит именно `mv.player_id`.
    pub fn apply_move(&self, mv: &PlayerMove) -> Result<Ronda, EngineError> {
        if self.is_finished() {
            return Err(EngineError::RondaFinished);
        }
        if mv.player_id != self.current_player() {
            return Err(EngineError::NotPlayersTurn(mv.player_id));
        }
        self.play_turn(mv.own_card, &mv.pickups)
    }

    /// Переход после действия игрока.
    fn advance(&mut self) -> Result<(), EngineError> {
        if !self.all_hands_empty() {
            self.current = next_seat(self.current, self.seats.len());
            return Ok(());
        }

        if self.deck.is_empty() {
            self.finish()
        } else {
            self.deal_hands()?;
            self.current = next_seat(self.current, self.seats.len());
            Ok(())
        }
    }

    /// Конец ронды: остаток стола последнему бравшему, без эскобы.
    fn finish(&mut self) -> Result<(), EngineError> {
        if !self.table.is_empty() {
            let cards = std::mem::take(&mut self.table);
            let to = self.last_picked_up;
            self.credit_pila(to, &cards, false)?;
            self.history
                .push(RondaEventKind::TableSwept { player_id: to, cards });
        }

        self.status = RondaStatus::Finished;
        self.history.push(RondaEventKind::RondaFinished);
        info!(last_picked_up = self.last_picked_up, "ронда закончена");
        Ok(())
    }

    /// По 3 карты каждому в порядке мест.
    fn deal_hands(&mut self) -> Result<(), EngineError> {
        for id in &self.seats {
            let (hand, rest) = self.deck.deal(HAND_SIZE)?;
            self.deck = rest;
            let state = self
                .players
                .get_mut(id)
                .ok_or(EngineError::UnknownPlayer(*id))?;
            state.hand = hand;
        }

        self.history.push(RondaEventKind::HandsDealt {
            deck_left: self.deck.len(),
        });
        debug!(deck_left = self.deck.len(), "розданы руки");
        Ok(())
    }

    fn credit_pila(
        &mut self,
        player_id: PlayerId,
        cards: &[Card],
        escoba: bool,
    ) -> Result<(), EngineError> {
        let state = self
            .players
            .get_mut(&player_id)
            .ok_or(EngineError::UnknownPlayer(player_id))?;
        state.pila = state.pila.add(cards, escoba);
        Ok(())
    }

    fn take_from_hand(&mut self, player_id: PlayerId, card: &Card) -> Result<(), EngineError> {
        let state = self
            .players
            .get_mut(&player_id)
            .ok_or(EngineError::UnknownPlayer(player_id))?;
        let pos = state
            .hand
            .iter()
            .position(|c| c == card)
            .ok_or(EngineError::NotPlayersCard(*card))?;
        state.hand.remove(pos);
        Ok(())
    }

    fn all_hands_empty(&self) -> bool {
        self.players.values().all(PlayerState::hand_is_empty)
    }

    fn state(&self, player_id: PlayerId) -> Result<&PlayerState, EngineError> {
        self.players
            .get(&player_id)
            .ok_or(EngineError::UnknownPlayer(player_id))
    }

    pub fn current_player(&self) -> PlayerId {
        self.seats[self.current]
    }

    pub fn dealer(&self) -> PlayerId {
        self.seats[self.dealer]
    }

    /// Игроки в порядке мест.
    pub fn players(&self) -> &[PlayerId] {
        &self.seats
    }

    pub fn current_table(&self) -> &[Card] {
        &self.table
    }

    /// Рука и пила игрока (только чтение).
    pub fn player_state(&self, player_id: PlayerId) -> Option<&PlayerState> {
        self.players.get(&player_id)
    }

    pub fn last_picked_up(&self) -> PlayerId {
        self.last_picked_up
    }

    pub fn dealt_escoba(&self) -> bool {
        self.dealt_escoba
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn status(&self) -> RondaStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status == RondaStatus::Finished
    }

    pub fn history(&self) -> &RondaHistory {
        &self.history
    }

    /// Пилы игроков в порядке мест.
    pub fn pilas(&self) -> impl Iterator<Item = (PlayerId, &Pila)> + '_ {
        self.seats
            .iter()
            .filter_map(|id| self.players.get(id).map(|s| (*id, &s.pila)))
    }

    /// Все карты ронды во всех местах: колода, стол, руки, пилы.
    pub fn accounted_cards(&self) -> Vec<Card> {
        let mut all = Vec::with_capacity(Deck::SIZE);
        all.extend_from_slice(self.deck.cards());
        all.extend_from_slice(&self.table);
        for state in self.players.values() {
            all.extend_from_slice(&state.hand);
            all.extend(state.pila.cards().copied());
        }
        all
    }

    /// Очки по текущим пилам. Можно звать в любой момент.
    pub fn calculate_scores(&self) -> ScoreReport {
        calculate_scores(self.pilas())
    }

    /// Итоговые очки; только для законченной ронды.
    pub fn final_scores(&self) -> Result<ScoreReport, EngineError> {
        if !self.is_finished() {
            return Err(EngineError::RondaNotFinished);
        }
        Ok(self.calculate_scores())
    }
}
