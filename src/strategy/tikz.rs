//! TikZ rendering of a strategy graph: one picture per board, laid out as a layered graph with
//! edges labelled by the responder's color.

use std::fmt::Write;

use crate::core::interval::color_letter;
use crate::error::GameError;
use crate::state::moves::Move;
use crate::state::State;
use crate::strategy::graph::{Edge, StrategyGraph};

const TIKZ_COLORS: [&str; 13] = [
    "red", "green", "blue", "cyan", "magenta", "yellow", "maroon", "lime", "navy", "purple",
    "olive", "teal", "fuchsia",
];

pub fn tikz_color(color: u8) -> &'static str {
    TIKZ_COLORS[color as usize % TIKZ_COLORS.len()]
}

fn frame(state: &State) -> (usize, u8) {
    (state.endpoints().len(), state.color_count())
}

/// Invisible box with the same footprint as [`state_picture`]; used as the node shape.
pub fn placeholder_picture(state: &State) -> String {
    let (endpoints, colors) = frame(state);
    format!(
        "\\begin{{tikzpicture}}\n\
         \\draw [rounded corners,black,opacity=0,fill] (-1,-2) rectangle ({endpoints},{colors});\n\
         \\end{{tikzpicture}}"
    )
}

/// Draw the board: barriers dashed, intervals in their colors, and the declared move below.
pub fn state_picture(state: &State, mv: Move, responses: &[Edge]) -> String {
    let (endpoints, colors) = frame(state);
    let top = colors as f32 - 0.5;
    let left_barrier = state.left_barrier() as f32 - 0.85;
    let right_barrier = state.right_barrier() as f32 - 0.15;

    let mut out = String::from("\\begin{tikzpicture}\n");
    let _ = writeln!(
        out,
        "\\draw [rounded corners,black,opacity=0.1,fill] (-1,-2) rectangle ({endpoints},{colors}) \
         node [black,opacity=0.3,above,anchor=north east] {{{}}};",
        state.dump()
    );
    for x in [left_barrier, right_barrier] {
        let _ = writeln!(
            out,
            "\\draw [dashed,black,opacity=0.9] ({x:.2},-0.5) -- ({x:.2},{top:.2});"
        );
    }

    let mut last_left = 0u8;
    let mut first_right = endpoints as u8;
    for cint in state.colored_intervals() {
        last_left = last_left.max(cint.left);
        first_right = first_right.min(cint.right);
        let _ = writeln!(
            out,
            "\\draw [|-|,thick,{},opacity=0.9] ({},{}) -- ({},{}) node [pos=0.5,anchor=south] {{{}}};",
            tikz_color(cint.color),
            cint.left,
            cint.color,
            cint.right,
            cint.color,
            color_letter(cint.color, true)
        );
    }

    match mv {
        Move::PushRight => {
            let from = last_left as f32 - 0.5;
            let _ = writeln!(
                out,
                "\\draw [<-,thick,black,opacity=0.9] ({from:.2},-1) -- ({right_barrier:.2},-1);"
            );
            let _ = writeln!(
                out,
                "\\draw [dashed,black,opacity=0.9] ({from:.2},-1) -- ({from:.2},-0.5);"
            );
        }
        Move::PushLeft => {
            let to = first_right as f32 + 0.5;
            let _ = writeln!(
                out,
                "\\draw [->,thick,black,opacity=0.9] ({left_barrier:.2},-1) -- ({to:.2},-1);"
            );
            let _ = writeln!(
                out,
                "\\draw [dashed,black,opacity=0.9] ({to:.2},-1) -- ({to:.2},-0.5);"
            );
        }
        Move::Insert(iv) => {
            // A stuck responder is marked with a bold cross.
            let symbol = if responses.is_empty() { "\\textbf{X}" } else { "?" };
            let _ = writeln!(
                out,
                "\\draw [|-|,thick,black,opacity=0.9] ({:.2},-1) -- ({:.2},-1) \
                 node [pos=0.5,anchor=south] {{{symbol}}};",
                iv.left as f32 - 0.7,
                iv.right as f32 - 0.3
            );
        }
    }
    out.push_str("\\end{tikzpicture}");
    out
}

/// Standalone LaTeX document drawing the whole graph.
pub fn render_document(graph: &StrategyGraph) -> Result<String, GameError> {
    let mut out = String::new();
    out.push_str("\\documentclass[preview]{standalone}\n");
    out.push_str("\\usepackage{tikz}\n");
    out.push_str("\\usetikzlibrary{graphs, quotes, graphdrawing}\n");
    out.push_str("\\usegdlibrary{layered}\n");
    out.push_str("\\begin{document}\n");
    out.push_str("\\begin{tikzpicture}\n");
    out.push_str("\\graph [layered layout] {\n");

    for id in 0..graph.len() {
        let state = graph.state(id)?;
        let _ = writeln!(
            out,
            "node{id} [as={{{}}},label={{center:{}}}];",
            placeholder_picture(&state),
            state_picture(&state, graph.declared_move(id), graph.responses(id))
        );
    }
    for id in 0..graph.len() {
        for edge in graph.responses(id) {
            let _ = match edge.color {
                Some(c) => writeln!(
                    out,
                    "(node{id}) --[{},\"{}\"] (node{});",
                    tikz_color(c),
                    color_letter(c, true),
                    edge.target
                ),
                None => writeln!(out, "(node{id}) -- (node{});", edge.target),
            };
        }
    }

    out.push_str("};\n");
    out.push_str("\\end{tikzpicture}\n");
    out.push_str("\\end{document}\n");
    Ok(out)
}
