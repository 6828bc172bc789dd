//! Bijective packing of a [`State`] into a [`StateCode`].
//!
//! Encoding, most significant digit first:
//! - `interval_code`: the unfrozen endpoint slice as binary digits, then `left_barrier`
//!   (radix `right_barrier + 1`), then `right_barrier` (radix `2n + 1`), then `n` (radix 256).
//! - `color_code`: colors as a mixed-radix number, interval `i` having radix
//!   `1 + (distinct colors among intervals 0..i)`. Normalized colors always fit their radix.
//!
//! Every multiply-add is checked; a board too large for 64 bits is a
//! [`GameError::SizeOverflow`], never a silent wraparound.

use crate::core::code::StateCode;
use crate::error::GameError;
use crate::state::{State, MAX_INTERVALS};

#[inline]
fn push_digit(acc: u64, radix: u64, digit: u64, what: &'static str) -> Result<u64, GameError> {
    acc.checked_mul(radix)
        .and_then(|v| v.checked_add(digit))
        .ok_or(GameError::SizeOverflow {
            what,
            value: acc,
            limit: u64::MAX / radix.max(1),
        })
}

impl State {
    pub fn encode(&self) -> Result<StateCode, GameError> {
        let n = self.colors.len();
        if n > MAX_INTERVALS {
            return Err(GameError::SizeOverflow {
                what: "interval count",
                value: n as u64,
                limit: MAX_INTERVALS as u64,
            });
        }

        let mut radices = Vec::with_capacity(n);
        let mut next = 0u64;
        for &c in &self.colors {
            radices.push(next + 1);
            next = next.max(c as u64 + 1);
        }
        let mut color_code = 0u64;
        for (&c, &radix) in self.colors.iter().zip(&radices).rev() {
            color_code = push_digit(color_code, radix, c as u64, "color code")?;
        }

        let lb = self.left_barrier as u64;
        let rb = self.right_barrier as u64;
        let mut interval_code = 0u64;
        for &e in &self.endpoints[lb as usize..rb as usize] {
            interval_code = push_digit(interval_code, 2, e as u64, "interval code")?;
        }
        interval_code = push_digit(interval_code, rb + 1, lb, "interval code")?;
        interval_code = push_digit(interval_code, 2 * n as u64 + 1, rb, "interval code")?;
        interval_code = push_digit(interval_code, 256, n as u64, "interval code")?;

        Ok(StateCode::new(interval_code, color_code))
    }

    /// Inverse of [`State::encode`]. Codes that do not describe a valid board are rejected.
    pub fn decode(code: StateCode) -> Result<State, GameError> {
        let mut rest = code.interval_code;
        let n = (rest % 256) as usize;
        rest /= 256;
        if n > MAX_INTERVALS {
            return Err(GameError::SizeOverflow {
                what: "interval count",
                value: n as u64,
                limit: MAX_INTERVALS as u64,
            });
        }

        let len = 2 * n;
        let rb = (rest % (len as u64 + 1)) as usize;
        rest /= len as u64 + 1;
        let lb = (rest % (rb as u64 + 1)) as usize;
        rest /= rb as u64 + 1;

        let mut endpoints = vec![false; len];
        for e in endpoints[..lb].iter_mut() {
            *e = true;
        }
        for e in endpoints[lb..rb].iter_mut().rev() {
            *e = rest % 2 == 1;
            rest /= 2;
        }
        let interval_rest = rest;

        let mut rest = code.color_code;
        let mut colors = Vec::with_capacity(n);
        let mut next = 0u64;
        for _ in 0..n {
            let radix = next + 1;
            let c = rest % radix;
            rest /= radix;
            colors.push(c as u8);
            next = next.max(c + 1);
        }

        let state = State {
            colors,
            endpoints,
            left_barrier: lb as u8,
            right_barrier: rb as u8,
        };
        if interval_rest != 0 || rest != 0 {
            return Err(GameError::InvariantViolation {
                state: state.describe(),
                reason: "trailing code digits",
            });
        }
        state.check()?;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_encodes_to_zero() {
        let code = State::new().encode().unwrap();
        assert_eq!(code, StateCode::new(0, 0));
        assert_eq!(State::decode(code).unwrap(), State::new());
    }

    #[test]
    fn overflowing_codes_are_rejected() {
        // 3 intervals but a right barrier digit of 7 > 2n.
        let code = StateCode::new(7 * 256 + 3, 0);
        assert!(State::decode(code).is_err());
    }
}
