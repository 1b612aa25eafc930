//! Console output for hits and progress

use std::io::Write;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::error::Result;
use crate::types::{Hit, RunSummary};

const BILLION: u64 = 1_000_000_000;
const MILLION: u64 = 1_000_000;

/// Render the periodic progress line for `count` evaluated candidates.
///
/// Below one billion the count is whole millions, from one billion on it is
/// billions with one decimal.
pub fn format_progress(count: u64) -> String {
    if count >= BILLION {
        format!("{:.1} billion names", count as f64 / BILLION as f64)
    } else {
        format!("{} million names", count / MILLION)
    }
}

/// Consumer of search events
pub trait Reporter {
    /// A candidate hashed below the threshold
    fn hit(&mut self, hit: &Hit) -> Result<()>;

    /// Another progress interval has passed
    fn progress(&mut self, evaluated: u64) -> Result<()>;

    /// Cheap heartbeat for live displays
    fn tick(&mut self, _evaluated: u64) {}

    /// The run stopped
    fn finish(&mut self, summary: &RunSummary) -> Result<()>;
}

/// Writes hit and progress lines, with an optional spinner on stderr
pub struct ConsoleReporter<W: Write> {
    out: W,
    spinner: Option<ProgressBar>,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, spinner: None }
    }

    /// Show a live spinner with throughput on stderr
    pub fn with_spinner(mut self) -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] {human_pos} names ({per_sec})",
            )
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.enable_steady_tick(Duration::from_millis(120));
        self.spinner = Some(spinner);
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        let out = &mut self.out;
        match &self.spinner {
            Some(spinner) => spinner.suspend(|| writeln!(out, "{}", line))?,
            None => writeln!(out, "{}", line)?,
        }
        Ok(())
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn hit(&mut self, hit: &Hit) -> Result<()> {
        self.write_line(&hit.to_string())?;
        self.out.flush()?;
        Ok(())
    }

    fn progress(&mut self, evaluated: u64) -> Result<()> {
        tracing::debug!(evaluated, "progress");
        self.write_line(&format_progress(evaluated))
    }

    fn tick(&mut self, evaluated: u64) {
        if let Some(spinner) = &self.spinner {
            spinner.set_position(evaluated);
        }
    }

    fn finish(&mut self, summary: &RunSummary) -> Result<()> {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
        writeln!(
            self.out,
            "\nStopped after {} names, {} hit(s) in {:.1}s",
            summary.evaluated,
            summary.hits,
            summary.elapsed.as_secs_f64()
        )?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_millions() {
        assert_eq!(format_progress(100_000_000), "100 million names");
        assert_eq!(format_progress(900_000_000), "900 million names");
        assert_eq!(format_progress(999_999_999), "999 million names");
        assert_eq!(format_progress(0), "0 million names");
    }

    #[test]
    fn test_progress_billions() {
        assert_eq!(format_progress(1_000_000_000), "1.0 billion names");
        assert_eq!(format_progress(1_500_000_000), "1.5 billion names");
        assert_eq!(format_progress(12_300_000_000), "12.3 billion names");
    }

    #[test]
    fn test_console_lines() {
        let mut reporter = ConsoleReporter::new(Vec::new());
        reporter
            .hit(&Hit {
                hash: 0x2a,
                name: "7r".to_string(),
            })
            .unwrap();
        reporter.progress(200_000_000).unwrap();
        reporter
            .finish(&RunSummary {
                evaluated: 200_000_000,
                hits: 1,
                elapsed: Duration::from_secs(4),
            })
            .unwrap();

        let text = String::from_utf8(reporter.into_inner()).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("0x0000002a: 7r"));
        assert_eq!(lines.next(), Some("200 million names"));
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some("Stopped after 200000000 names, 1 hit(s) in 4.0s"));
    }
}
