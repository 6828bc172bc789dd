//! Textual boards: `[` and `]` mark the barriers, `A`.. left endpoints and `a`.. right endpoints.
//!
//! `"[AaBb]"` is two disjoint intervals of different colors with nothing frozen;
//! `"A[]a"` is one interval whose both ends are frozen.

use std::fmt;

use crate::core::interval::color_letter;
use crate::error::GameError;
use crate::state::{State, MAX_INTERVALS};

impl State {
    /// Human-readable form of length `2n + 2`.
    pub fn dump(&self) -> String {
        let len = self.endpoints.len();
        let lb = self.left_barrier as usize;
        let rb = self.right_barrier as usize;

        let mut out = String::with_capacity(len + 2);
        let mut opened = 0;
        let mut closed = 0;
        let mut shift = 0;
        for i in 0..len + 2 {
            if i == lb && shift == 0 {
                out.push('[');
                shift += 1;
            } else if i == rb + 1 && shift == 1 {
                out.push(']');
                shift += 1;
            } else if self.endpoints[i - shift] {
                out.push(color_letter(self.colors[opened], true));
                opened += 1;
            } else {
                out.push(color_letter(self.colors[closed], false));
                closed += 1;
            }
        }
        out
    }

    /// Parse the form produced by [`State::dump`]. Colors are renormalized.
    pub fn load(text: &str) -> Result<State, GameError> {
        let malformed = |reason: String| GameError::MalformedStateText {
            text: text.to_string(),
            reason,
        };

        let bytes = text.as_bytes();
        if bytes.len() < 2 || bytes.len() % 2 != 0 {
            return Err(malformed(
                "length must be even and at least 2".to_string(),
            ));
        }
        let size = (bytes.len() - 2) / 2;
        if size > MAX_INTERVALS {
            return Err(GameError::SizeOverflow {
                what: "interval count",
                value: size as u64,
                limit: MAX_INTERVALS as u64,
            });
        }

        let mut colors = vec![0u8; size];
        let mut endpoints = vec![false; 2 * size];
        let mut left_barrier = 0usize;
        let mut right_barrier = 0usize;
        let mut shift = 0usize;
        let mut opened = 0usize;
        let mut closed = 0usize;

        for (i, &ch) in bytes.iter().enumerate() {
            match ch {
                b'[' if shift == 0 => {
                    left_barrier = i;
                    shift = 1;
                }
                b']' if shift == 1 => {
                    right_barrier = i - 1;
                    shift = 2;
                }
                b'A'..=b'Z' if shift < 2 && opened < size => {
                    endpoints[i - shift] = true;
                    colors[opened] = ch - b'A';
                    opened += 1;
                }
                b'a'..=b'z' if shift > 0 && closed < opened => {
                    endpoints[i - shift] = false;
                    if colors[closed] != ch - b'a' {
                        return Err(malformed(format!(
                            "right endpoint {:?} at position {i} does not match its left endpoint {:?}",
                            ch as char,
                            color_letter(colors[closed], true)
                        )));
                    }
                    closed += 1;
                }
                _ => {
                    return Err(malformed(format!(
                        "unexpected {:?} at position {i}",
                        ch as char
                    )))
                }
            }
        }

        if shift != 2 {
            return Err(malformed("missing barrier".to_string()));
        }
        if opened != size || closed != size {
            return Err(malformed(format!(
                "{opened} left and {closed} right endpoints for {size} intervals"
            )));
        }

        let mut state = State {
            colors,
            endpoints,
            left_barrier: left_barrier as u8,
            right_barrier: right_barrier as u8,
        };
        state.drop_intervals();
        state.normalize_colors();
        state.check().map_err(|e| malformed(e.to_string()))?;
        Ok(state)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.encode() {
            Ok(code) => write!(f, "<{code} ")?,
            Err(_) => write!(f, "<? ")?,
        }
        write!(
            f,
            "{} {}, ({}, {} #",
            self.dump(),
            self.interval_count(),
            self.left_barrier,
            self.right_barrier
        )?;
        for &e in &self.endpoints {
            write!(f, "{}", if e { 1 } else { 0 })?;
        }
        write!(f, "#)")?;
        if self.interval_count() > 0 {
            write!(f, ":")?;
        }
        for cint in self.colored_intervals() {
            write!(f, " {cint}")?;
        }
        write!(f, ">")
    }
}
