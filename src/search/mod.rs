//! Candidate enumeration and the search loop
//!
//! Candidates are odometer readings over a 36-symbol alphabet. Uniform mode
//! turns the whole buffer as one number; templated mode turns a suffix block
//! and carries into a prefix block around a fixed middle.

mod candidate;
mod counter;
mod driver;

pub use candidate::Candidate;
pub use counter::{increment, DigitWindow, Odometer, TemplatedCounter};
pub use driver::{SearchDriver, Step, STOP_POLL_MASK, TICK_MASK};

/// Symbols in successor order
pub const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// First symbol; a position that lands here has wrapped
pub const FIRST_SYMBOL: u8 = ALPHABET[0];

const NOT_IN_ALPHABET: u8 = u8::MAX;

/// Position of every byte in [`ALPHABET`], or `NOT_IN_ALPHABET`
const POSITIONS: [u8; 256] = {
    let mut table = [NOT_IN_ALPHABET; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Index of `symbol` in the alphabet
#[inline]
pub fn position(symbol: u8) -> Option<usize> {
    match POSITIONS[symbol as usize] {
        NOT_IN_ALPHABET => None,
        p => Some(p as usize),
    }
}

/// Next symbol in the alphabet, wrapping `z` to `0`.
///
/// Bytes outside the alphabet are returned unchanged.
#[inline]
pub fn successor(symbol: u8) -> u8 {
    position(symbol).map_or(symbol, |p| ALPHABET[(p + 1) % ALPHABET.len()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions() {
        assert_eq!(position(b'0'), Some(0));
        assert_eq!(position(b'9'), Some(9));
        assert_eq!(position(b'a'), Some(10));
        assert_eq!(position(b'z'), Some(35));
        assert_eq!(position(b'_'), None);
        assert_eq!(position(b'A'), None);
    }

    #[test]
    fn test_successor() {
        assert_eq!(successor(b'0'), b'1');
        assert_eq!(successor(b'9'), b'a');
        assert_eq!(successor(b'y'), b'z');
        assert_eq!(successor(b'z'), FIRST_SYMBOL);
    }

    #[test]
    fn test_successor_outside_alphabet() {
        assert_eq!(successor(b'_'), b'_');
        assert_eq!(successor(b'Z'), b'Z');
        assert_eq!(successor(0xff), 0xff);
    }

    #[test]
    fn test_successor_cycle() {
        let mut symbol = FIRST_SYMBOL;
        for expected in ALPHABET.iter().skip(1) {
            symbol = successor(symbol);
            assert_eq!(symbol, *expected);
        }
        assert_eq!(successor(symbol), FIRST_SYMBOL);
    }
}
