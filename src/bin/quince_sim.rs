//! Симулятор: гоняет игры, где за всех играют NPC.
//!
//! Без ввода с клавиатуры – только прогон, статистика и (по флагу) JSON.

use std::fs;

use clap::Parser;
use serde::Serialize;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use quince_engine::ai::Npc;
use quince_engine::api::{build_game_ronda_view, build_score_report, display_name, ScoreLineDto};
use quince_engine::engine::{EngineError, RandomSource};
use quince_engine::game::{Game, GameConfig, PlayerSeatConfig};
use quince_engine::infra::{IdGenerator, RngSeed, SystemRng};

/// Предел ронд на игру: при ничьей наверху игра может тянуться долго.
const MAX_RONDAS_PER_GAME: u32 = 500;

#[derive(Parser)]
#[command(name = "quince_sim")]
#[command(about = "Прогон игр в кинсе, где за всех играют NPC")]
struct Args {
    /// Сколько игр сыграть
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// JSON-конфиг игры (игроки, target_score, seed)
    #[arg(long)]
    config: Option<String>,

    /// Число игроков (2, 3, 4 или 6); перекрывает конфиг
    #[arg(long)]
    players: Option<usize>,

    /// До скольки очков играть; перекрывает конфиг
    #[arg(long)]
    target: Option<u32>,

    /// Базовый seed для воспроизводимых игр; перекрывает конфиг
    #[arg(long)]
    seed: Option<u64>,

    /// Подробный лог (каждый ход)
    #[arg(short, long)]
    verbose: bool,

    /// Показывать итоги ронд и игр
    #[arg(long)]
    show_output: bool,

    /// Печатать итог каждой игры строкой JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct GameSummaryJson {
    game_id: u64,
    rondas: u32,
    winner: Option<String>,
    last_ronda: Vec<ScoreLineDto>,
}

#[derive(Default)]
struct SimStats {
    games: u32,
    rondas: u32,
    unfinished: u32,
    wins_by_seat: Vec<u32>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if args.verbose {
        EnvFilter::new("debug")
    } else if args.show_output {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = build_config(&args)?;
    info!(
        games = args.games,
        players = config.players.len(),
        target = config.target_score,
        seed = ?config.seed,
        "старт симуляции"
    );

    let ids = IdGenerator::new();
    let npc = Npc::new();
    let mut stats = SimStats {
        wins_by_seat: vec![0; config.players.len()],
        ..SimStats::default()
    };

    for _ in 0..args.games {
        let game_id = ids.next_game_id();
        let mut game = Game::from_config(&config, &ids)?;

        let result = match config.seed {
            Some(seed) => {
                let mut rng = RngSeed::from_u64(seed).derive(game_id, 0).to_rng();
                play_game(&mut game, &npc, &mut rng, args.verbose)
            }
            None => play_game(&mut game, &npc, &mut SystemRng, args.verbose),
        };

        if let Err(e) = result {
            warn!(game_id, error = %e, "игра прервана с ошибкой");
            stats.unfinished += 1;
            continue;
        }

        stats.games += 1;
        stats.rondas += game.rondas_played();
        match game.winner() {
            Some(winner) => {
                if let Some(seat) = game.players().iter().position(|p| p.id == winner) {
                    stats.wins_by_seat[seat] += 1;
                }
                info!(game_id, winner = %display_name(&game, winner), rondas = game.rondas_played(), "игра закончена");
            }
            None => stats.unfinished += 1,
        }

        if args.json {
            println!("{}", serde_json::to_string(&summarize(game_id, &game))?);
        }
    }

    print_summary(&config, &stats);
    Ok(())
}

fn build_config(args: &Args) -> Result<GameConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => GameConfig::from_json_str(&fs::read_to_string(path)?)?,
        None => GameConfig::default(),
    };

    if let Some(n) = args.players {
        config.players = (1..=n)
            .map(|i| PlayerSeatConfig {
                name: format!("NPC {i}"),
                npc: true,
            })
            .collect();
    }
    if let Some(target) = args.target {
        config.target_score = target;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    // В симуляторе за всех играет NPC.
    for seat in &mut config.players {
        seat.npc = true;
    }

    config.validate()?;
    Ok(config)
}

fn play_game<R: RandomSource>(
    game: &mut Game,
    npc: &Npc,
    rng: &mut R,
    verbose: bool,
) -> Result<(), EngineError> {
    while !game.is_finished() && game.rondas_played() < MAX_RONDAS_PER_GAME {
        game.start_ronda(rng)?;
        let report = game.autoplay_ronda(npc, rng)?;

        if verbose {
            if let Some(view) = build_game_ronda_view(game, None) {
                debug!(view = ?view, "ронда сыграна");
            }
        }
        debug!(
            most_cards = ?report.most_cards.winners,
            most_oros = ?report.most_oros.winners,
            setenta = ?report.setenta_winner_ids(),
            siete_de_velo = ?report.siete_de_velo,
            escobas = report.escobas.len(),
            "очки ронды"
        );
    }
    Ok(())
}

fn summarize(game_id: u64, game: &Game) -> GameSummaryJson {
    let ids: Vec<_> = game.players().iter().map(|p| p.id).collect();
    let last_ronda = game
        .last_report()
        .map(|r| build_score_report(r, &ids, |pid| display_name(game, pid), Some(game)).lines)
        .unwrap_or_default();

    GameSummaryJson {
        game_id,
        rondas: game.rondas_played(),
        winner: game.winner().map(|w| display_name(game, w)),
        last_ronda,
    }
}

fn print_summary(config: &GameConfig, stats: &SimStats) {
    println!();
    println!("=========== QUINCE SIM SUMMARY ===========");
    println!("Игр сыграно: {}", stats.games);
    println!("Игр без победителя: {}", stats.unfinished);
    if stats.games > 0 {
        println!(
            "Ронд в среднем за игру: {:.2}",
            stats.rondas as f64 / stats.games as f64
        );
    }
    for (seat, wins) in stats.wins_by_seat.iter().enumerate() {
        println!("  место {} ({}): {} побед", seat, config.players[seat].name, wins);
    }
    println!("==========================================");
}
