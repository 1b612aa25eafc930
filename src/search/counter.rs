//! Base-36 counters over windows of the candidate buffer

use super::{successor, FIRST_SYMBOL};
use crate::types::{Layout, SearchMode, BLOCK_WIDTH};

/// Advance `buffer[start..end]` by one in base 36, most significant digit at `start`.
///
/// Returns `true` when every position wrapped, i.e. the window rolled over to
/// all-`0`. An empty window always reports a rollover.
#[inline]
pub fn increment(buffer: &mut [u8], start: usize, end: usize) -> bool {
    for symbol in buffer[start..end].iter_mut().rev() {
        *symbol = successor(*symbol);
        if *symbol != FIRST_SYMBOL {
            return false;
        }
    }
    true
}

/// Fixed-width counter with carry-out, stored in place inside a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitWindow {
    start: usize,
    end: usize,
}

impl DigitWindow {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Add one; `true` means carry-out
    #[inline]
    pub fn advance(&self, buffer: &mut [u8]) -> bool {
        increment(buffer, self.start, self.end)
    }

    /// All digits read as the first symbol
    pub fn is_minimum(&self, buffer: &[u8]) -> bool {
        buffer[self.start..self.end]
            .iter()
            .all(|&symbol| symbol == FIRST_SYMBOL)
    }
}

/// Two windows where overflow of `low` bumps `high`.
///
/// Whatever lies between them is never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplatedCounter {
    high: DigitWindow,
    low: DigitWindow,
}

impl TemplatedCounter {
    pub fn new(high: DigitWindow, low: DigitWindow) -> Self {
        Self { high, low }
    }

    /// Prefix and suffix blocks of a `len`-byte templated name
    pub fn for_length(len: usize) -> Self {
        Self::new(
            DigitWindow::new(0, BLOCK_WIDTH),
            DigitWindow::new(len - BLOCK_WIDTH, len),
        )
    }

    pub fn high(&self) -> DigitWindow {
        self.high
    }

    pub fn low(&self) -> DigitWindow {
        self.low
    }

    /// Advance the low block, carrying into the high block on rollover.
    /// `true` when both blocks rolled over together.
    #[inline]
    pub fn advance(&self, buffer: &mut [u8]) -> bool {
        if self.low.advance(buffer) {
            self.high.advance(buffer)
        } else {
            false
        }
    }
}

/// The counter layout used by a search mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Odometer {
    Uniform(DigitWindow),
    Templated(TemplatedCounter),
}

impl Odometer {
    /// Counter layout for a candidate of `len` bytes in `mode`
    pub fn for_mode(mode: &SearchMode, len: usize) -> Self {
        match mode.layout() {
            Layout::Templated { .. } => Odometer::Templated(TemplatedCounter::for_length(len)),
            Layout::Uniform { .. } => Odometer::Uniform(DigitWindow::new(0, len)),
        }
    }

    /// Move to the next candidate; `true` when the whole enumeration wrapped
    #[inline]
    pub fn advance(&self, buffer: &mut [u8]) -> bool {
        match self {
            Odometer::Uniform(window) => window.advance(buffer),
            Odometer::Templated(counter) => counter.advance(buffer),
        }
    }
}
