use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use interval_spoiler::core::code::StateCode;
use interval_spoiler::error::GameError;
use interval_spoiler::state::moves::Move;
use interval_spoiler::state::State;

/// Every board reachable from `[]` with at most `max_intervals` intervals.
fn reachable(max_clique: u8, max_colors: u8, max_intervals: usize) -> Vec<State> {
    let mut seen: FxHashSet<State> = FxHashSet::default();
    let mut out = Vec::new();
    let mut q = VecDeque::from([State::new()]);
    while let Some(state) = q.pop_front() {
        if !seen.insert(state.clone()) {
            continue;
        }
        let mut moves = Vec::new();
        if !state.is_closed() {
            moves.push(Move::PushLeft);
            moves.push(Move::PushRight);
        }
        if state.interval_count() < max_intervals {
            for addition in state.get_possible_additions(max_clique, max_colors) {
                moves.push(Move::Insert(addition.interval));
            }
        }
        for mv in moves {
            for succ in state.successors(mv, max_clique, max_colors).unwrap() {
                q.push_back(succ.state);
            }
        }
        out.push(state);
    }
    out
}

#[test]
fn reachable_boards_satisfy_invariants_and_round_trip() {
    let states = reachable(2, 2, 3);
    assert!(states.len() > 10);

    let mut codes: FxHashSet<StateCode> = FxHashSet::default();
    for state in &states {
        state.check().unwrap();
        let code = state.encode().unwrap();
        assert_eq!(&State::decode(code).unwrap(), state);
        assert!(codes.insert(code), "duplicate code for {}", state.dump());
        assert_eq!(&State::load(&state.dump()).unwrap(), state);
    }
}

#[test]
fn mirroring_is_an_involution() {
    for state in reachable(2, 2, 3) {
        let mirror = state.reversed().unwrap();
        mirror.check().unwrap();
        assert_eq!(mirror.reversed().unwrap(), state);
        assert_eq!(mirror.interval_count(), state.interval_count());
    }
}

#[test]
fn mirrored_moves_commute_with_mirroring() {
    for state in reachable(2, 2, 2) {
        let total = state.endpoints().len() as u8;
        let mirror = state.reversed().unwrap();
        for addition in state.get_possible_additions(2, 2) {
            let mv = Move::Insert(addition.interval);
            let direct: FxHashSet<StateCode> = state
                .successors(mv, 2, 2)
                .unwrap()
                .into_iter()
                .map(|s| s.state.reversed().unwrap().encode().unwrap())
                .collect();
            let mirrored: FxHashSet<StateCode> = mirror
                .successors(mv.mirrored(total).unwrap(), 2, 2)
                .unwrap()
                .into_iter()
                .map(|s| s.state.encode().unwrap())
                .collect();
            assert_eq!(direct, mirrored, "{} {}", state.dump(), mv);
        }
    }
}

#[test]
fn mirror_of_a_one_sided_board() {
    let state = State::load("A[Bab]").unwrap();
    assert_eq!(state.reversed().unwrap().dump(), "[ABa]b");
}

#[test]
fn boards_too_wide_for_the_code_are_an_error() {
    // 80 unfrozen endpoints do not fit 64 binary digits.
    let state = State::load(&format!("[{}]", "Aa".repeat(40))).unwrap();
    assert!(matches!(
        state.encode(),
        Err(GameError::SizeOverflow {
            what: "interval code",
            ..
        })
    ));
}
