use interval_spoiler::config::{GameConfig, ResourceLimits, SolverConfig};
use interval_spoiler::error::GameError;
use interval_spoiler::game::Game;
use interval_spoiler::state::State;

fn solved(config: GameConfig) -> Game {
    let mut game = Game::new(config, State::new()).unwrap();
    game.solve().unwrap();
    game
}

#[test]
fn two_colors_are_forced_in_three_moves() {
    let game = solved(GameConfig::new(2, 2, 3, 5));
    assert_eq!(game.value(), Some(3));

    let aa = State::load("[Aa]").unwrap();
    let id = game.lookup(&aa).unwrap().unwrap();
    assert_eq!(game.states()[id].max_distance, Some(2));
    assert_eq!(game.states()[id].depth, 1);
}

#[test]
fn start_state_is_slot_zero() {
    let game = solved(GameConfig::new(2, 2, 3, 3));
    assert_eq!(game.lookup(&State::new()).unwrap(), Some(0));
    assert_eq!(game.states()[0].state, State::new());
}

#[test]
fn solving_is_deterministic() {
    let config = GameConfig::new(2, 3, 3, 4);
    let a = solved(config);
    let b = solved(config);
    assert_eq!(a.summary(), b.summary());
    assert_eq!(a.to_string(), b.to_string());
}

#[test]
fn solving_twice_resets_the_arena() {
    let mut game = Game::new(GameConfig::new(2, 2, 3, 4), State::new()).unwrap();
    let first = game.solve().unwrap();
    let states = game.len();
    let second = game.solve().unwrap();
    assert_eq!(first, second);
    assert_eq!(game.len(), states);
}

#[test]
fn relaxation_reaches_a_fixed_point() {
    let mut game = solved(GameConfig::new(2, 3, 3, 4));
    let sweeps = game.sweeps();
    assert!(sweeps > 0);
    assert_eq!(game.summary().sweeps, sweeps);
    assert_eq!(game.relax_sweep().unwrap(), 0);
    assert_eq!(game.sweeps(), sweeps + 1);
}

#[test]
fn bounds_move_monotonically_between_sweeps() {
    let mut game = Game::new(GameConfig::new(2, 3, 3, 4), State::new()).unwrap();
    let mut frontier = game.reset().unwrap();
    for _ in 0..3 {
        frontier = game.expand_depth(frontier).unwrap();
        loop {
            let before: Vec<(u8, Option<u8>)> = game
                .states()
                .iter()
                .map(|s| (s.min_distance, s.max_distance))
                .collect();
            let improved = game.relax_sweep().unwrap();
            for (old, new) in before.iter().zip(game.states()) {
                assert!(new.min_distance >= old.0);
                match (old.1, new.max_distance) {
                    (Some(o), Some(n)) => assert!(n <= o),
                    (Some(_), None) => panic!("upper bound was lost"),
                    _ => {}
                }
            }
            if improved == 0 {
                break;
            }
        }
    }
}

#[test]
fn lower_bounds_never_exceed_upper_bounds() {
    for config in [GameConfig::new(2, 2, 3, 5), GameConfig::new(2, 3, 3, 4)] {
        let game = solved(config);
        for info in game.states() {
            if let Some(max) = info.max_distance {
                assert!(info.min_distance <= max, "{}", info.state.dump());
            }
        }
    }
}

#[test]
fn pruning_never_beats_the_full_search() {
    for (clique, colors) in [(2, 2), (2, 3), (3, 3)] {
        let pruned = solved(GameConfig::new(clique, colors, 3, 4)).value();
        let full = solved(GameConfig::new(clique, colors, 3, 4).with_pruning(false)).value();
        match (full, pruned) {
            (_, None) => {}
            (Some(f), Some(p)) => assert!(f <= p, "clique {clique} colors {colors}"),
            (None, Some(_)) => panic!("pruned search found a win the full search missed"),
        }
    }
}

#[test]
fn a_single_insertion_cannot_force_a_third_color() {
    let game = solved(GameConfig::new(2, 3, 1, 5));
    assert_eq!(game.value(), None);
}

#[test]
fn state_budget_is_enforced() {
    let mut game = Game::new(GameConfig::new(2, 3, 3, 5), State::new())
        .unwrap()
        .with_limits(ResourceLimits {
            max_states: 3,
            max_sweeps: 1_000,
        });
    assert!(matches!(
        game.solve(),
        Err(GameError::LimitExceeded {
            metric: "states",
            ..
        })
    ));
}

#[test]
fn invalid_configs_are_rejected() {
    assert!(Game::new(GameConfig::new(0, 2, 3, 5), State::new()).is_err());
    assert!(Game::new(GameConfig::new(2, 2, 3, 0), State::new()).is_err());
}

#[test]
fn config_files_select_the_start_state() {
    let cfg = SolverConfig::from_json(
        br#"{ "game": { "max_depth": 4 }, "start": "[Aa]" }"#,
        "inline",
    )
    .unwrap();
    let mut game = cfg.build_game().unwrap();
    assert_eq!(game.solve().unwrap(), Some(2));
    assert_eq!(game.summary().start, "[Aa]");
}

#[test]
fn listing_shows_every_state() {
    let game = solved(GameConfig::new(2, 2, 2, 3));
    let listing = game.to_string();
    assert!(listing.starts_with("<Game, "));
    assert_eq!(listing.lines().count(), game.len() + 1);
    assert_eq!(game.state_views().len(), game.len());
    assert_eq!(game.state_views()[1].dump, "[Aa]");
}
