use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Pila, PlayerId, SetentaPoints};
use crate::eval::counters::{
    CategoryAggregator, EscobaCount, ScoreCategory, SetentaWinner, TopScore,
};

/// Итог ронды по пяти категориям. Только чтение.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreReport {
    /// Больше всего карт.
    pub most_cards: TopScore<u32>,
    /// Больше всего оро.
    pub most_oros: TopScore<u32>,
    /// Лучшая сетента (только игроки со всеми четырьмя мастями).
    pub setenta: TopScore<SetentaPoints, SetentaWinner>,
    /// У кого семёрка оро.
    pub siete_de_velo: Option<PlayerId>,
    /// Все игроки хотя бы с одной эскобой, в порядке мест.
    pub escobas: Vec<EscobaCount>,
}

impl ScoreReport {
    /// Очки за ронду по игрокам: по 1 за каждую выигранную категорию
    /// (при ничьей очко у всех), 1 за семёрку оро, по 1 за каждую эскобу.
    pub fn points_by_player(&self) -> BTreeMap<PlayerId, u32> {
        let mut points: BTreeMap<PlayerId, u32> = BTreeMap::new();

        for &id in &self.most_cards.winners {
            *points.entry(id).or_default() += 1;
        }
        for &id in &self.most_oros.winners {
            *points.entry(id).or_default() += 1;
        }
        for winner in &self.setenta.winners {
            *points.entry(winner.player_id).or_default() += 1;
        }
        if let Some(id) = self.siete_de_velo {
            *points.entry(id).or_default() += 1;
        }
        for e in &self.escobas {
            *points.entry(e.player_id).or_default() += e.count;
        }

        points
    }

    pub fn points_for(&self, player_id: PlayerId) -> u32 {
        self.points_by_player()
            .get(&player_id)
            .copied()
            .unwrap_or(0)
    }

    pub fn setenta_winner_ids(&self) -> Vec<PlayerId> {
        self.setenta.winners.iter().map(|w| w.player_id).collect()
    }
}

/// Подсчёт очков ронды за один проход по пилам игроков.
///
/// Порядок игроков не влияет на множества победителей: ничьи симметричны.
pub fn calculate_scores<'a, I>(pilas: I) -> ScoreReport
where
    I: IntoIterator<Item = (PlayerId, &'a Pila)>,
{
    let mut aggregators: Vec<CategoryAggregator> = ScoreCategory::ALL
        .iter()
        .map(|&c| CategoryAggregator::new(c))
        .collect();

    for (player_id, pila) in pilas {
        for agg in aggregators.iter_mut() {
            agg.observe(player_id, pila);
        }
    }

    let mut report = ScoreReport {
        most_cards: TopScore::new(),
        most_oros: TopScore::new(),
        setenta: TopScore::new(),
        siete_de_velo: None,
        escobas: Vec::new(),
    };

    for agg in aggregators {
        match agg {
            CategoryAggregator::MostCards(top) => report.most_cards = top,
            CategoryAggregator::MostOros(top) => report.most_oros = top,
            CategoryAggregator::Setenta(top) => report.setenta = top,
            CategoryAggregator::SieteDeVelo(holder) => report.siete_de_velo = holder,
            CategoryAggregator::Escobas(list) => report.escobas = list,
        }
    }

    report
}
