use serde::{Deserialize, Serialize};

use crate::domain::{Card, Pila, PlayerId, SetentaPoints};

/// Лучший результат в одной категории с учётом ничьих.
///
/// `compare`:
/// - равный лучшему (и больше нуля) – добавляется к победителям;
/// - больше лучшего – победители сбрасываются на него;
/// - меньше – игнорируется.
///
/// Если лучший результат так и остался нулевым, победителей нет.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TopScore<S, W = PlayerId> {
    pub top_score: S,
    pub winners: Vec<W>,
}

impl<S: Copy + Ord + Default, W> TopScore<S, W> {
    pub fn new() -> Self {
        Self {
            top_score: S::default(),
            winners: Vec::new(),
        }
    }

    pub fn compare(&mut self, candidate: W, score: S) {
        if score > self.top_score {
            self.top_score = score;
            self.winners.clear();
            self.winners.push(candidate);
        } else if score == self.top_score && score > S::default() {
            self.winners.push(candidate);
        }
    }
}

impl<S: Copy + Ord + Default, W> Default for TopScore<S, W> {
    fn default() -> Self {
        Self::new()
    }
}

/// Победитель по сетенте: игрок, его 4 карты и очки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SetentaWinner {
    pub player_id: PlayerId,
    pub cards: Vec<Card>,
    pub points: SetentaPoints,
}

/// Эскобы одного игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EscobaCount {
    pub player_id: PlayerId,
    pub count: u32,
}

/// Пять категорий очков ронды.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ScoreCategory {
    MostCards,
    MostOros,
    Setenta,
    SieteDeVelo,
    Escobas,
}

impl ScoreCategory {
    pub const ALL: [ScoreCategory; 5] = [
        ScoreCategory::MostCards,
        ScoreCategory::MostOros,
        ScoreCategory::Setenta,
        ScoreCategory::SieteDeVelo,
        ScoreCategory::Escobas,
    ];
}

/// Счётчик одной категории. Закрытый набор вариантов, все умеют
/// `observe` (посмотреть пилу игрока) за один проход по игрокам.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CategoryAggregator {
    MostCards(TopScore<u32>),
    MostOros(TopScore<u32>),
    /// Игрок без какой-либо масти пропускается, а не считается нулём.
    Setenta(TopScore<SetentaPoints, SetentaWinner>),
    SieteDeVelo(Option<PlayerId>),
    Escobas(Vec<EscobaCount>),
}

impl CategoryAggregator {
    pub fn new(category: ScoreCategory) -> Self {
        match category {
            ScoreCategory::MostCards => CategoryAggregator::MostCards(TopScore::new()),
            ScoreCategory::MostOros => CategoryAggregator::MostOros(TopScore::new()),
            ScoreCategory::Setenta => CategoryAggregator::Setenta(TopScore::new()),
            ScoreCategory::SieteDeVelo => CategoryAggregator::SieteDeVelo(None),
            ScoreCategory::Escobas => CategoryAggregator::Escobas(Vec::new()),
        }
    }

    pub fn category(&self) -> ScoreCategory {
        match self {
            CategoryAggregator::MostCards(_) => ScoreCategory::MostCards,
            CategoryAggregator::MostOros(_) => ScoreCategory::MostOros,
            CategoryAggregator::Setenta(_) => ScoreCategory::Setenta,
            CategoryAggregator::SieteDeVelo(_) => ScoreCategory::SieteDeVelo,
            CategoryAggregator::Escobas(_) => ScoreCategory::Escobas,
        }
    }

    pub fn observe(&mut self, player_id: PlayerId, pila: &Pila) {
        match self {
            CategoryAggregator::MostCards(top) => {
                top.compare(player_id, pila.total_cards() as u32);
            }
            CategoryAggregator::MostOros(top) => {
                top.compare(player_id, pila.total_oros() as u32);
            }
            CategoryAggregator::Setenta(top) => {
                let Some((cards, points)) = pila.setenta() else {
                    return;
                };
                top.compare(
                    SetentaWinner {
                        player_id,
                        cards,
                        points,
                    },
                    points,
                );
            }
            CategoryAggregator::SieteDeVelo(holder) => {
                if pila.has_siete_de_velo() {
                    *holder = Some(player_id);
                }
            }
            CategoryAggregator::Escobas(list) => {
                let count = pila.escobas();
                if count > 0 {
                    list.push(EscobaCount { player_id, count });
                }
            }
        }
    }
}
