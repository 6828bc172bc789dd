//! Crate-wide error type.
//!
//! Errors split into two families:
//! - problems with externally supplied text (state strings, strategy files, configs), which are
//!   always recoverable and carry the offending text or line, and
//! - resource ceilings (byte-sized fields, state/sweep budgets), which abort a search cleanly
//!   instead of wrapping around or exhausting memory.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A textual board (`[AaBb]`-style) could not be parsed.
    MalformedStateText { text: String, reason: String },
    /// A board violates its structural invariants (bracket balance, barriers, lengths, colors).
    InvariantViolation { state: String, reason: &'static str },
    /// A move is not legal on the given board.
    InvalidMove {
        state: String,
        mv: String,
        reason: &'static str,
    },
    /// The same canonical state was declared twice with different moves.
    ConflictingStrategyEntry {
        line: usize,
        state: String,
        previous: String,
        current: String,
    },
    /// A successor of a declared move has no entry in the strategy.
    MissingStrategyResponse {
        state: String,
        mv: String,
        response: String,
    },
    /// A value does not fit the single-byte (or 64-bit code) ceiling.
    SizeOverflow {
        what: &'static str,
        value: u64,
        limit: u64,
    },
    /// Configuration is internally inconsistent.
    InvalidConfig { reason: String },
    /// A strategy file line could not be parsed.
    Parse {
        source: String,
        line: usize,
        reason: String,
    },
    /// A configured resource budget was exceeded.
    LimitExceeded {
        stage: &'static str,
        metric: &'static str,
        limit: u64,
        observed: u64,
    },
    /// I/O failure while reading inputs.
    Io {
        stage: &'static str,
        path: String,
        error: String,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::MalformedStateText { text, reason } => {
                write!(f, "malformed state text {text:?}: {reason}")
            }
            GameError::InvariantViolation { state, reason } => {
                write!(f, "invariant violated ({reason}) in state {state}")
            }
            GameError::InvalidMove { state, mv, reason } => {
                write!(f, "move {mv} for {state} is not valid: {reason}")
            }
            GameError::ConflictingStrategyEntry {
                line,
                state,
                previous,
                current,
            } => write!(
                f,
                "line {line}: multiple conflicting definitions for {state} ({previous} vs {current})"
            ),
            GameError::MissingStrategyResponse {
                state,
                mv,
                response,
            } => write!(
                f,
                "answer for ({state} {mv}): {response} not found in the strategy"
            ),
            GameError::SizeOverflow { what, value, limit } => {
                write!(f, "{what} overflow: {value} exceeds {limit}")
            }
            GameError::InvalidConfig { reason } => write!(f, "invalid config: {reason}"),
            GameError::Parse {
                source,
                line,
                reason,
            } => write!(f, "{source}:{line}: {reason}"),
            GameError::LimitExceeded {
                stage,
                metric,
                limit,
                observed,
            } => write!(
                f,
                "limit exceeded at {stage}: {metric} (limit={limit}, observed={observed})"
            ),
            GameError::Io { stage, path, error } => {
                write!(f, "io error at {stage} for {path}: {error}")
            }
        }
    }
}

impl std::error::Error for GameError {}
