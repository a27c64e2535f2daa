//! Игра из нескольких ронд: счёт, смена дилера, конец игры, конфиг.

mod common;

use common::hand_of;
use quince_engine::ai::Npc;
use quince_engine::domain::PlayerProfile;
use quince_engine::engine::{EngineError, ErrorCategory};
use quince_engine::game::{Game, GameConfig, GameStatus, DEFAULT_TARGET_SCORE};
use quince_engine::infra::{DeterministicRng, IdGenerator};

fn npc_players(n: u64) -> Vec<PlayerProfile> {
    (1..=n)
        .map(|id| PlayerProfile::npc(id, format!("NPC {id}")))
        .collect()
}

#[test]
fn new_game_validates_players_and_target() {
    assert_eq!(
        Game::new(npc_players(5), 30).unwrap_err(),
        EngineError::UnsupportedPlayerCount(5)
    );
    assert!(matches!(
        Game::new(npc_players(2), 0),
        Err(EngineError::InvalidConfig(_))
    ));

    let mut dup = npc_players(2);
    dup[1].id = 1;
    assert_eq!(
        Game::new(dup, 30).unwrap_err(),
        EngineError::DuplicatePlayer(1)
    );
}

#[test]
fn fresh_game_waits_for_first_ronda() {
    let game = Game::new(npc_players(4), 30).unwrap();

    assert_eq!(game.status(), GameStatus::WaitingForRonda);
    assert_eq!(game.dealer(), 4);
    assert_eq!(game.rondas_played(), 0);
    assert!(game.totals().values().all(|&t| t == 0));
    assert!(game.ronda().is_none());
    assert!(!game.is_finished());
}

#[test]
fn state_errors_before_and_during_ronda() {
    let mut game = Game::new(npc_players(2), 30).unwrap();
    let mut rng = DeterministicRng::from_u64(9);

    let err = game.finish_ronda().unwrap_err();
    assert_eq!(err, EngineError::NoActiveRonda);
    assert_eq!(err.category(), ErrorCategory::State);

    let npc = Npc::new();
    assert_eq!(
        game.play_npc_turn(&npc, &mut rng).unwrap_err(),
        EngineError::NoActiveRonda
    );

    game.start_ronda(&mut rng).unwrap();
    assert_eq!(game.status(), GameStatus::RondaInProgress);
    assert_eq!(
        game.start_ronda(&mut rng).unwrap_err(),
        EngineError::RondaInProgress
    );
    assert_eq!(
        game.finish_ronda().unwrap_err(),
        EngineError::RondaNotFinished
    );
}

#[test]
fn turns_go_through_the_game() {
    let mut game = Game::new(npc_players(2), 30).unwrap();
    let mut rng = DeterministicRng::from_u64(5);

    let ronda = game.start_ronda(&mut rng).unwrap();
    assert_eq!(ronda.dealer(), 2);
    let current = ronda.current_player();
    assert_eq!(current, 1);
    let card = hand_of(ronda, current)[0];

    let ronda = game.play_turn(card, &[]).unwrap();
    assert_eq!(ronda.current_player(), 2);
    assert!(ronda.current_table().contains(&card));

    let npc = Npc::new();
    let mv = game.play_npc_turn(&npc, &mut rng).unwrap();
    assert_eq!(mv.player_id, 2);
    assert_eq!(game.ronda().unwrap().current_player(), 1);
}

#[test]
fn finishing_a_ronda_adds_points_and_rotates_the_dealer() {
    let mut game = Game::new(npc_players(3), 1000).unwrap();
    let mut rng = DeterministicRng::from_u64(77);
    let npc = Npc::new();

    let mut expected_totals = game.totals().clone();
    for ronda_no in 0..3u32 {
        let dealer = game.dealer();
        let ronda = game.start_ronda(&mut rng).unwrap();
        assert_eq!(ronda.dealer(), dealer);

        let report = game.autoplay_ronda(&npc, &mut rng).unwrap();
        for (id, pts) in report.points_by_player() {
            *expected_totals.get_mut(&id).unwrap() += pts;
        }

        assert_eq!(game.totals(), &expected_totals);
        assert_eq!(game.rondas_played(), ronda_no + 1);
        assert_eq!(game.status(), GameStatus::WaitingForRonda);
        assert!(game.ronda().is_none());
        assert!(game.last_ronda().unwrap().is_finished());
        assert_eq!(game.last_report(), Some(&report));
        assert_eq!(game.dealer(), (dealer % 3) + 1);
    }
}

#[test]
fn seeded_game_ends_with_a_unique_leader_at_target() {
    let target = 5;
    let mut game = Game::new(npc_players(4), target).unwrap();
    let mut rng = DeterministicRng::from_u64(2024);
    let npc = Npc::new();

    let mut rondas = 0;
    while !game.is_finished() {
        game.start_ronda(&mut rng).unwrap();
        game.autoplay_ronda(&npc, &mut rng).unwrap();
        rondas += 1;
        assert!(rondas < 200, "игра не закончилась");
    }

    let winner = game.winner().unwrap();
    assert_eq!(game.status(), GameStatus::Finished { winner });
    let top = game.total_for(winner);
    assert!(top >= target);
    for (&id, &total) in game.totals() {
        if id != winner {
            assert!(total < top);
        }
    }

    let err = game.start_ronda(&mut rng).unwrap_err();
    assert_eq!(err, EngineError::GameFinished);
    assert_eq!(
        game.play_npc_turn(&npc, &mut rng).unwrap_err(),
        EngineError::GameFinished
    );
}

#[test]
fn same_seed_gives_the_same_game() {
    let play = |seed: u64| {
        let mut game = Game::new(npc_players(2), 11).unwrap();
        let mut rng = DeterministicRng::from_u64(seed);
        let npc = Npc::new();
        while !game.is_finished() {
            game.start_ronda(&mut rng).unwrap();
            game.autoplay_ronda(&npc, &mut rng).unwrap();
        }
        (game.winner(), game.totals().clone(), game.rondas_played())
    };

    assert_eq!(play(8), play(8));
}

#[test]
fn config_parses_with_defaults() {
    let config = GameConfig::from_json_str(
        r#"{ "players": [ { "name": "Ana" }, { "name": "Luis", "npc": true } ] }"#,
    )
    .unwrap();

    assert_eq!(config.target_score, DEFAULT_TARGET_SCORE);
    assert_eq!(config.seed, None);
    assert_eq!(config.players.len(), 2);
    assert!(!config.players[0].npc);
    assert!(config.players[1].npc);

    let config =
        GameConfig::from_json_str(r#"{ "target_score": 15, "seed": 3, "players": [ {"name": "a"}, {"name": "b"}, {"name": "c"} ] }"#)
            .unwrap();
    assert_eq!(config.target_score, 15);
    assert_eq!(config.seed, Some(3));
}

#[test]
fn config_rejects_bad_input() {
    assert!(matches!(
        GameConfig::from_json_str("not json"),
        Err(EngineError::InvalidConfig(_))
    ));
    assert_eq!(
        GameConfig::from_json_str(
            r#"{ "players": [ {"name": "a"}, {"name": "b"}, {"name": "c"}, {"name": "d"}, {"name": "e"} ] }"#
        )
        .unwrap_err(),
        EngineError::UnsupportedPlayerCount(5)
    );
    assert!(matches!(
        GameConfig::from_json_str(r#"{ "players": [ {"name": "a"}, {"name": "  "} ] }"#),
        Err(EngineError::InvalidConfig(_))
    ));
    assert!(matches!(
        GameConfig::from_json_str(r#"{ "target_score": 0, "players": [ {"name": "a"}, {"name": "b"} ] }"#),
        Err(EngineError::InvalidConfig(_))
    ));
}

#[test]
fn game_from_default_config() {
    let config = GameConfig::default();
    assert!(config.validate().is_ok());

    let ids = IdGenerator::new();
    let game = Game::from_config(&config, &ids).unwrap();

    let names: Vec<&str> = game.players().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Alice", "Bob", "Charlie", "Dave"]);
    assert!(game.players().iter().all(|p| p.is_npc));
    let player_ids: Vec<u64> = game.players().iter().map(|p| p.id).collect();
    assert_eq!(player_ids, vec![1, 2, 3, 4]);
    assert_eq!(game.target_score(), DEFAULT_TARGET_SCORE);
}
