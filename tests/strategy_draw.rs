use interval_spoiler::core::interval::Interval;
use interval_spoiler::state::moves::Move;
use interval_spoiler::state::State;
use interval_spoiler::strategy::graph::StrategyGraph;
use interval_spoiler::strategy::parse_strategy;
use interval_spoiler::strategy::tikz::{render_document, state_picture, tikz_color};

#[test]
fn document_draws_every_node_and_edge() {
    let file = parse_strategy("test", "2 2\n[] 0 0\n[Aa] 0 1\n").unwrap();
    let graph = StrategyGraph::build(&[file]).unwrap();
    let doc = render_document(&graph).unwrap();

    assert!(doc.starts_with("\\documentclass[preview]{standalone}\n"));
    assert!(doc.ends_with("\\end{document}\n"));
    assert!(doc.contains("node0 [as={"));
    assert!(doc.contains("node1 [as={"));
    assert!(doc.contains("(node0) --[red,\"A\"] (node1);"));
    assert_eq!(doc.matches("\\begin{tikzpicture}").count(), 5);
}

#[test]
fn barrier_edges_are_unlabelled() {
    let file = parse_strategy("test", "2 2\n[A]a <\n[] 0 0\n[Aa] 0 1\n").unwrap();
    let graph = StrategyGraph::build(&[file]).unwrap();
    let doc = render_document(&graph).unwrap();
    assert!(doc.contains("(node0) -- (node1);"));
}

#[test]
fn stuck_responder_is_marked() {
    let state = State::load("[Aa]").unwrap();
    let picture = state_picture(&state, Move::Insert(Interval::new(0, 1)), &[]);
    assert!(picture.contains("\\textbf{X}"));
    assert!(picture.contains("node [black,opacity=0.3,above,anchor=north east] {[Aa]}"));
    assert!(picture.contains("\\draw [|-|,thick,red,opacity=0.9] (0,0) -- (1,0)"));
}

#[test]
fn palette_wraps_around() {
    assert_eq!(tikz_color(0), "red");
    assert_eq!(tikz_color(13), "red");
    assert_eq!(tikz_color(9), "purple");
}
