//! Core types and structures for hash-forge

use std::time::Duration;

use crate::config_error;
use crate::error::Result;

/// Capacity of the candidate buffer in bytes
pub const MAX_NAME_LENGTH: usize = 16;

/// Longest middle section accepted in templated mode
pub const MAX_MIDDLE_LENGTH: usize = 8;

/// Width of the moving prefix and suffix blocks in templated mode
pub const BLOCK_WIDTH: usize = 3;

/// Hashes strictly below this value are reported
pub const HASH_THRESHOLD: u32 = 5;

/// A progress line is printed every this many candidates
pub const PROGRESS_INTERVAL: u64 = 100_000_000;

/// Environment variable overriding [`HASH_THRESHOLD`]
pub const THRESHOLD_VAR: &str = "HASH_FORGE_THRESHOLD";
/// Environment variable overriding [`PROGRESS_INTERVAL`]
pub const PROGRESS_INTERVAL_VAR: &str = "HASH_FORGE_PROGRESS_INTERVAL";
/// Environment variable bounding the number of candidates
pub const LIMIT_VAR: &str = "HASH_FORGE_LIMIT";

/// How candidates are laid out and enumerated.
///
/// Only built through [`SearchMode::templated`] and [`SearchMode::uniform`],
/// so the layout always fits the candidate buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMode(Layout);

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Layout {
    /// `000_<middle>_000`, only the outer blocks move
    Templated { middle: String },
    /// `0` repeated `length` times, the whole buffer moves
    Uniform { length: usize },
}

impl SearchMode {
    /// Templated mode; the middle is cut to at most [`MAX_MIDDLE_LENGTH`] bytes
    /// without splitting a character.
    pub fn templated(middle: &str) -> Self {
        let mut keep = middle.len().min(MAX_MIDDLE_LENGTH);
        while !middle.is_char_boundary(keep) {
            keep -= 1;
        }
        Self(Layout::Templated {
            middle: middle[..keep].to_string(),
        })
    }

    /// Uniform mode; the length is clamped to `1..=MAX_NAME_LENGTH`.
    pub fn uniform(length: u64) -> Self {
        let length = length.clamp(1, MAX_NAME_LENGTH as u64) as usize;
        Self(Layout::Uniform { length })
    }

    pub(crate) fn layout(&self) -> &Layout {
        &self.0
    }

    /// The fixed middle in templated mode
    pub fn middle(&self) -> Option<&str> {
        match &self.0 {
            Layout::Templated { middle } => Some(middle.as_str()),
            Layout::Uniform { .. } => None,
        }
    }

    /// Length of every candidate produced by this mode
    pub fn name_length(&self) -> usize {
        match &self.0 {
            Layout::Templated { middle } => middle.len() + 2 * (BLOCK_WIDTH + 1),
            Layout::Uniform { length } => *length,
        }
    }

    /// Number of distinct candidates before the enumeration repeats
    pub fn cycle_length(&self) -> u128 {
        let moving = match &self.0 {
            Layout::Templated { .. } => 2 * BLOCK_WIDTH,
            Layout::Uniform { length } => *length,
        };
        36u128.pow(moving as u32)
    }
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Layout::Templated { middle } => write!(f, "templated (000_{}_000)", middle),
            Layout::Uniform { length } => write!(f, "uniform (length {})", length),
        }
    }
}

/// A candidate whose hash fell below the threshold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub hash: u32,
    pub name: String,
}

impl std::fmt::Display for Hit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:08x}: {}", self.hash, self.name)
    }
}

/// Tunables for a search run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Report hashes strictly below this value
    pub threshold: u32,
    /// Emit a progress event every N candidates (never zero)
    pub progress_interval: u64,
    /// Stop after this many candidates
    pub limit: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: HASH_THRESHOLD,
            progress_interval: PROGRESS_INTERVAL,
            limit: None,
        }
    }
}

impl SearchConfig {
    /// Load overrides from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load overrides through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(THRESHOLD_VAR) {
            config.threshold = parse_var(THRESHOLD_VAR, &raw)?;
        }

        if let Some(raw) = lookup(PROGRESS_INTERVAL_VAR) {
            let interval: u64 = parse_var(PROGRESS_INTERVAL_VAR, &raw)?;
            if interval == 0 {
                return Err(config_error!(
                    "{} must be greater than zero",
                    PROGRESS_INTERVAL_VAR
                ));
            }
            config.progress_interval = interval;
        }

        if let Some(raw) = lookup(LIMIT_VAR) {
            config.limit = Some(parse_var(LIMIT_VAR, &raw)?);
        }

        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| config_error!("{} has an invalid value: {:?}", key, raw))
}

/// Outcome of a finished (stopped or limited) run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub evaluated: u64,
    pub hits: u64,
    pub elapsed: Duration,
}

impl RunSummary {
    /// Candidates per second over the whole run
    pub fn rate(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.evaluated as f64 / secs
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_uniform_clamping() {
        assert_eq!(SearchMode::uniform(20), SearchMode::uniform(16));
        assert_eq!(SearchMode::uniform(20).name_length(), 16);
        assert_eq!(SearchMode::uniform(0).name_length(), 1);
        assert_eq!(SearchMode::uniform(5).name_length(), 5);
    }

    #[test]
    fn test_templated_truncation() {
        let mode = SearchMode::templated("abcdefghijkl");
        assert_eq!(mode.middle(), Some("abcdefgh"));
        assert_eq!(mode.name_length(), MAX_NAME_LENGTH);
        assert_eq!(SearchMode::templated("abc").name_length(), 11);
    }

    #[test]
    fn test_templated_truncation_keeps_whole_chars() {
        // 'é' is two bytes; the fifth one would straddle the 8-byte cut
        let mode = SearchMode::templated("aéééé");
        assert_eq!(mode.middle(), Some("aééé"));
        assert_eq!(mode.name_length(), 7 + 8);

        let exact = SearchMode::templated("éééé");
        assert_eq!(exact.middle(), Some("éééé"));
    }

    #[test]
    fn test_uniform_has_no_middle() {
        assert_eq!(SearchMode::uniform(4).middle(), None);
    }

    #[test]
    fn test_cycle_length() {
        assert_eq!(SearchMode::uniform(2).cycle_length(), 1296);
        assert_eq!(SearchMode::templated("abc").cycle_length(), 36u128.pow(6));
    }

    #[test]
    fn test_hit_display() {
        let hit = Hit {
            hash: 3,
            name: "00k_abc_x1z".to_string(),
        };
        assert_eq!(hit.to_string(), "0x00000003: 00k_abc_x1z");
    }

    #[test]
    fn test_config_defaults() {
        let config = SearchConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SearchConfig::default());
        assert_eq!(config.threshold, 5);
        assert_eq!(config.progress_interval, 100_000_000);
        assert_eq!(config.limit, None);
    }

    #[test]
    fn test_config_overrides() {
        let config = SearchConfig::from_lookup(lookup(&[
            (THRESHOLD_VAR, "1000"),
            (PROGRESS_INTERVAL_VAR, " 500 "),
            (LIMIT_VAR, "1296"),
        ]))
        .unwrap();
        assert_eq!(config.threshold, 1000);
        assert_eq!(config.progress_interval, 500);
        assert_eq!(config.limit, Some(1296));
    }

    #[test]
    fn test_config_errors() {
        let err = SearchConfig::from_lookup(lookup(&[(THRESHOLD_VAR, "lots")])).unwrap_err();
        assert!(matches!(err, crate::HashForgeError::Config { .. }));

        let err =
            SearchConfig::from_lookup(lookup(&[(PROGRESS_INTERVAL_VAR, "0")])).unwrap_err();
        assert!(err.to_string().contains("greater than zero"));

        assert!(SearchConfig::from_lookup(lookup(&[(LIMIT_VAR, "-1")])).is_err());
    }

    #[test]
    fn test_summary_rate() {
        let summary = RunSummary {
            evaluated: 1000,
            hits: 0,
            elapsed: Duration::from_secs(2),
        };
        assert_eq!(summary.rate(), 500.0);

        let instant = RunSummary {
            evaluated: 10,
            hits: 0,
            elapsed: Duration::ZERO,
        };
        assert_eq!(instant.rate(), 0.0);
    }
}
