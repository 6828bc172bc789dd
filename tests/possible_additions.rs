use interval_spoiler::core::interval::Interval;
use interval_spoiler::error::GameError;
use interval_spoiler::state::moves::{Addition, Move};
use interval_spoiler::state::State;

fn additions(text: &str, max_clique: u8, max_colors: u8) -> Vec<(Interval, Vec<u8>)> {
    State::load(text)
        .unwrap()
        .get_possible_additions(max_clique, max_colors)
        .into_iter()
        .map(|Addition { interval, colors }| (interval, colors))
        .collect()
}

#[test]
fn empty_board_has_a_single_slot() {
    assert_eq!(
        additions("[]", 2, 1),
        vec![(Interval::new(0, 0), vec![0])]
    );
    // A fresh color is only offered once the previous one is in use.
    assert_eq!(
        additions("[]", 2, 3),
        vec![(Interval::new(0, 0), vec![0])]
    );
}

#[test]
fn overlapping_slots_exclude_the_neighbour_color() {
    assert_eq!(
        additions("[Aa]", 2, 1),
        vec![
            (Interval::new(0, 0), vec![0]),
            (Interval::new(0, 1), vec![]),
            (Interval::new(1, 2), vec![]),
            (Interval::new(2, 2), vec![0]),
        ]
    );
    assert_eq!(
        additions("[Aa]", 2, 2),
        vec![
            (Interval::new(0, 0), vec![0, 1]),
            (Interval::new(0, 1), vec![1]),
            (Interval::new(1, 2), vec![1]),
            (Interval::new(2, 2), vec![0, 1]),
        ]
    );
}

#[test]
fn clique_cap_blocks_crowded_slots() {
    // With clique 1 nothing may overlap the existing interval.
    assert_eq!(
        additions("[Aa]", 1, 2),
        vec![
            (Interval::new(0, 0), vec![0, 1]),
            (Interval::new(2, 2), vec![0, 1]),
        ]
    );
}

#[test]
fn barriers_limit_the_slots() {
    let slots: Vec<Interval> = additions("A[a]", 2, 2).into_iter().map(|(iv, _)| iv).collect();
    assert_eq!(slots, vec![Interval::new(1, 2), Interval::new(2, 2)]);
    // The only open gap lies inside a frozen interval.
    assert!(additions("A[]a", 2, 2).is_empty());
}

#[test]
fn slots_are_ordered_and_never_nest() {
    let state = State::load("[AaBb]").unwrap();
    let found = state.get_possible_additions(3, 3);
    let mut sorted = found.clone();
    sorted.sort_by_key(|a| a.interval);
    assert_eq!(found, sorted);

    for addition in found {
        for &color in &addition.colors {
            let mut next = state.clone();
            next.add_colored_interval(addition.interval.with_color(color))
                .unwrap();
            next.check().unwrap();
        }
    }
}

#[test]
fn successors_of_declared_moves() {
    let state = State::load("[Aa]").unwrap();

    let pushed = state.successors(Move::PushLeft, 2, 1).unwrap();
    assert_eq!(pushed.len(), 1);
    assert_eq!(pushed[0].color, None);
    assert_eq!(pushed[0].state, State::new());

    let inserted = state
        .successors(Move::Insert(Interval::new(0, 0)), 2, 1)
        .unwrap();
    assert_eq!(inserted.len(), 1);
    assert_eq!(inserted[0].color, Some(0));
    assert_eq!(inserted[0].state.dump(), "[AaAa]");

    let stuck = state
        .successors(Move::Insert(Interval::new(0, 1)), 2, 1)
        .unwrap();
    assert!(stuck.is_empty());
}

#[test]
fn illegal_moves_are_reported() {
    let state = State::load("[Aa]").unwrap();
    assert!(matches!(
        state.successors(Move::Insert(Interval::new(0, 2)), 2, 1),
        Err(GameError::InvalidMove { .. })
    ));
    assert!(matches!(
        State::new().successors(Move::PushRight, 2, 1),
        Err(GameError::InvalidMove { .. })
    ));
}

#[test]
fn mirrored_moves() {
    assert_eq!(Move::PushLeft.mirrored(4), Some(Move::PushRight));
    assert_eq!(
        Move::Insert(Interval::new(0, 1)).mirrored(2),
        Some(Move::Insert(Interval::new(1, 2)))
    );
    // Gaps past the board have no mirror image.
    assert_eq!(Move::Insert(Interval::new(1, 5)).mirrored(2), None);
    assert_eq!(Move::Insert(Interval::new(1, 3)).to_string(), "1 3");
    assert_eq!(Move::PushRight.to_string(), "<");
}
