//! Strategy files: a declared move for every board the inserting player may face.
//!
//! Format (line oriented; blank lines and lines starting with `#` or `;` are ignored):
//!
//! ```text
//! # clique colors
//! 2 2
//! []      0 0
//! [Aa]    0 1
//! [AaBb]  >
//! ```
//!
//! The header names the clique cap and the (1-indexed) number of colors to force; the responder's
//! palette is one less. Each entry is a board in canonical textual form followed by `<` (push the
//! right barrier), `>` (push the left barrier) or `<left> <right>` (insert an interval).

pub mod graph;
pub mod reach;
pub mod tikz;
pub mod verify;

use std::fs;
use std::io::Read;

use crate::core::interval::Interval;
use crate::error::GameError;
use crate::state::moves::Move;
use crate::state::State;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyEntry {
    /// 1-based line number in the source.
    pub line: usize,
    pub text: String,
    pub state: State,
    pub mv: Move,
}

#[derive(Debug, Clone)]
pub struct StrategyFile {
    pub source: String,
    pub max_clique: u8,
    /// Responder palette (header colors minus one).
    pub max_colors: u8,
    pub entries: Vec<StrategyEntry>,
}

fn meaningful_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines().enumerate().filter_map(|(i, line)| {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            None
        } else {
            Some((i + 1, line))
        }
    })
}

fn parse_number<T: std::str::FromStr>(
    source: &str,
    line: usize,
    token: Option<&str>,
    what: &str,
) -> Result<T, GameError> {
    let token = token.ok_or_else(|| GameError::Parse {
        source: source.to_string(),
        line,
        reason: format!("missing {what}"),
    })?;
    token.parse().map_err(|_| GameError::Parse {
        source: source.to_string(),
        line,
        reason: format!("invalid {what} {token:?}"),
    })
}

/// Parse one strategy file.
pub fn parse_strategy(source: &str, text: &str) -> Result<StrategyFile, GameError> {
    let mut lines = meaningful_lines(text);
    let parse_error = |line: usize, reason: String| GameError::Parse {
        source: source.to_string(),
        line,
        reason,
    };

    let (header_line, header) = lines
        .next()
        .ok_or_else(|| parse_error(0, "missing header".to_string()))?;
    let mut tokens = header.split_whitespace();
    let max_clique: u8 = parse_number(source, header_line, tokens.next(), "clique size")?;
    let colors: u8 = parse_number(source, header_line, tokens.next(), "color count")?;
    if !(1..=10).contains(&max_clique) {
        return Err(parse_error(
            header_line,
            format!("clique size must be in 1..=10, got {max_clique}"),
        ));
    }
    if !(2..=21).contains(&colors) {
        return Err(parse_error(
            header_line,
            format!("color count must be in 2..=21, got {colors}"),
        ));
    }

    let mut entries = Vec::new();
    for (line, content) in lines {
        let mut tokens = content.split_whitespace();
        let text = tokens
            .next()
            .ok_or_else(|| parse_error(line, "missing state".to_string()))?;
        let state = State::load(text)?;
        let canonical = state.dump();
        if canonical != text {
            return Err(GameError::MalformedStateText {
                text: text.to_string(),
                reason: format!("not in canonical form (expected {canonical})"),
            });
        }

        let mv = match tokens.next() {
            Some("<") => Move::PushRight,
            Some(">") => Move::PushLeft,
            first => {
                let left: u8 = parse_number(source, line, first, "left endpoint")?;
                let right: u8 = parse_number(source, line, tokens.next(), "right endpoint")?;
                Move::Insert(Interval::new(left, right))
            }
        };
        if let Some(extra) = tokens.next() {
            return Err(parse_error(line, format!("unexpected trailing token {extra:?}")));
        }

        entries.push(StrategyEntry {
            line,
            text: text.to_string(),
            state,
            mv,
        });
    }

    Ok(StrategyFile {
        source: source.to_string(),
        max_clique,
        max_colors: colors - 1,
        entries,
    })
}

/// Read and parse a strategy file; `-` reads standard input.
pub fn read_strategy(path: &str) -> Result<StrategyFile, GameError> {
    let io_error = |e: std::io::Error| GameError::Io {
        stage: "read_strategy",
        path: path.to_string(),
        error: e.to_string(),
    };

    let text = if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(io_error)?;
        buf
    } else {
        fs::read_to_string(path).map_err(io_error)?
    };
    parse_strategy(path, &text)
}
