//! The search loop: hash, compare, report, advance

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use super::candidate::Candidate;
use super::counter::Odometer;
use crate::error::Result;
use crate::hash::jenkins_one_at_a_time;
use crate::report::Reporter;
use crate::types::{Hit, RunSummary, SearchConfig, SearchMode};

/// The stop flag is checked when `evaluated & STOP_POLL_MASK == 0`
pub const STOP_POLL_MASK: u64 = (1 << 12) - 1;

/// Reporters get a `tick` when `evaluated & TICK_MASK == 0`
pub const TICK_MASK: u64 = (1 << 20) - 1;

/// Events produced by evaluating one candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub hit: Option<Hit>,
    /// Set when a progress interval completed; carries the running count
    pub progress: Option<u64>,
}

/// Owns the candidate buffer and walks it through the enumeration
pub struct SearchDriver {
    mode: SearchMode,
    candidate: Candidate,
    odometer: Odometer,
    threshold: u32,
    progress_interval: u64,
    limit: Option<u64>,
    evaluated: u64,
    hits: u64,
}

impl SearchDriver {
    /// Create a driver positioned at the first candidate of `mode`
    pub fn new(mode: SearchMode, config: &SearchConfig) -> Self {
        let candidate = Candidate::initial(&mode);
        let odometer = Odometer::for_mode(&mode, candidate.len());

        Self {
            mode,
            candidate,
            odometer,
            threshold: config.threshold,
            progress_interval: config.progress_interval.max(1),
            limit: config.limit,
            evaluated: 0,
            hits: 0,
        }
    }

    /// The candidate the next `step` will evaluate
    pub fn candidate(&self) -> &Candidate {
        &self.candidate
    }

    /// Candidates evaluated so far (wraps on overflow)
    pub fn evaluated(&self) -> u64 {
        self.evaluated
    }

    /// Evaluate the current candidate and advance to the next one
    #[inline]
    pub fn step(&mut self) -> Step {
        let hash = jenkins_one_at_a_time(self.candidate.as_bytes());
        let hit = if hash < self.threshold {
            self.hits += 1;
            Some(Hit {
                hash,
                name: self.candidate.to_string(),
            })
        } else {
            None
        };

        self.odometer.advance(self.candidate.as_bytes_mut());

        self.evaluated = self.evaluated.wrapping_add(1);
        let progress = if self.evaluated % self.progress_interval == 0 {
            Some(self.evaluated)
        } else {
            None
        };

        Step { hit, progress }
    }

    /// Run until `stop` is raised or the configured limit is reached.
    ///
    /// Without a limit this only returns once `stop` is set or the reporter
    /// fails to write.
    pub fn run<R: Reporter>(&mut self, reporter: &mut R, stop: &AtomicBool) -> Result<RunSummary> {
        let started = Instant::now();
        let start_count = self.evaluated;
        let start_hits = self.hits;

        tracing::info!(
            mode = %self.mode,
            cycle = %self.mode.cycle_length(),
            threshold = self.threshold,
            progress_interval = self.progress_interval,
            limit = ?self.limit,
            "search started"
        );

        loop {
            let done = self.evaluated.wrapping_sub(start_count);
            if self.limit.is_some_and(|limit| done >= limit) {
                tracing::info!(evaluated = done, "candidate limit reached");
                break;
            }
            if done & STOP_POLL_MASK == 0 && stop.load(Ordering::Relaxed) {
                tracing::info!(evaluated = done, "stop requested");
                break;
            }

            let step = self.step();
            if let Some(hit) = &step.hit {
                tracing::debug!(hash = hit.hash, name = %hit.name, "hit");
                reporter.hit(hit)?;
            }
            if let Some(count) = step.progress {
                reporter.progress(count)?;
            }
            if self.evaluated & TICK_MASK == 0 {
                reporter.tick(self.evaluated);
            }
        }

        let summary = RunSummary {
            evaluated: self.evaluated.wrapping_sub(start_count),
            hits: self.hits - start_hits,
            elapsed: started.elapsed(),
        };
        tracing::info!(
            evaluated = summary.evaluated,
            hits = summary.hits,
            rate = summary.rate(),
            "search stopped"
        );
        reporter.finish(&summary)?;
        Ok(summary)
    }
}
