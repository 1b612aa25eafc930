//! Fixed-capacity candidate buffer

use std::borrow::Cow;

use super::FIRST_SYMBOL;
use crate::types::{Layout, SearchMode, BLOCK_WIDTH, MAX_NAME_LENGTH};

const SEPARATOR: u8 = b'_';

/// The name currently being tested.
///
/// Capacity is [`MAX_NAME_LENGTH`] bytes; the length is fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    bytes: [u8; MAX_NAME_LENGTH],
    len: usize,
}

impl Candidate {
    /// Starting candidate for `mode`: `000_<middle>_000` or all `0`
    pub fn initial(mode: &SearchMode) -> Self {
        let mut bytes = [0u8; MAX_NAME_LENGTH];
        let len = mode.name_length();

        match mode.layout() {
            Layout::Templated { middle } => {
                let suffix_start = len - BLOCK_WIDTH;
                bytes[..BLOCK_WIDTH].fill(FIRST_SYMBOL);
                bytes[BLOCK_WIDTH] = SEPARATOR;
                bytes[BLOCK_WIDTH + 1..suffix_start - 1].copy_from_slice(middle.as_bytes());
                bytes[suffix_start - 1] = SEPARATOR;
                bytes[suffix_start..len].fill(FIRST_SYMBOL);
            }
            Layout::Uniform { .. } => {
                bytes[..len].fill(FIRST_SYMBOL);
            }
        }

        Self { bytes, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes[..self.len]
    }

    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}
