use interval_spoiler::error::GameError;
use interval_spoiler::state::State;

fn malformed(text: &str) -> bool {
    matches!(
        State::load(text),
        Err(GameError::MalformedStateText { .. })
    )
}

#[test]
fn canonical_boards_survive_load_and_dump() {
    for text in ["[]", "[Aa]", "[AaBb]", "[AaAa]", "A[a]", "[A]a", "[ABab]", "A[Bab]"] {
        let state = State::load(text).unwrap();
        assert_eq!(state.dump(), text, "round trip of {text}");
    }
}

#[test]
fn loading_normalizes_colors() {
    let state = State::load("[BbAa]").unwrap();
    assert_eq!(state.dump(), "[AaBb]");
    assert_eq!(state.colors(), &[0, 1]);
}

#[test]
fn pushing_past_an_interval_drops_it() {
    let mut state = State::load("[Aa]").unwrap();
    state.push_left_barrier().unwrap();
    assert_eq!(state, State::new());

    let mut state = State::load("[AaBb]").unwrap();
    state.push_left_barrier().unwrap();
    assert_eq!(state.dump(), "[Aa]");

    let mut state = State::load("[AaBb]").unwrap();
    state.push_right_barrier().unwrap();
    assert_eq!(state.dump(), "[Aa]");
}

#[test]
fn pushing_into_an_open_interval_freezes_its_left_end() {
    let mut state = State::load("[ABab]").unwrap();
    state.push_left_barrier().unwrap();
    // A is dropped; the left end of B stays frozen behind the barrier.
    assert_eq!(state.dump(), "A[a]");
}

#[test]
fn barriers_and_counts() {
    let state = State::load("A[Bab]").unwrap();
    assert_eq!(state.interval_count(), 2);
    assert_eq!(state.left_barrier(), 1);
    assert_eq!(state.right_barrier(), 4);
    assert!(!state.is_closed());
    assert_eq!(state.max_clique_size(), 2);
    assert_eq!(state.color_count(), 2);
}

#[test]
fn bad_text_is_rejected() {
    assert!(malformed(""));
    assert!(malformed("["));
    assert!(malformed("[Aa"));
    assert!(malformed("[Ab]"));
    assert!(malformed("[aA]"));
    assert!(malformed("]["));
    assert!(malformed("[A]"));
    assert!(malformed("Aa"));
    assert!(malformed("[A1a]"));
    assert!(malformed("[[Aa]]"));
}

#[test]
fn oversized_boards_overflow() {
    let text = format!("[{}{}]", "A".repeat(128), "a".repeat(128));
    assert!(matches!(
        State::load(&text),
        Err(GameError::SizeOverflow { .. })
    ));
}
