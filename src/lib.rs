//! Hash Forge - brute-force search for short names with tiny hashes
//!
//! Enumerates names over `0-9a-z`, hashes each with Jenkins one-at-a-time and
//! reports every name whose hash falls below a threshold.

pub mod error;
pub mod hash;
pub mod prompt;
pub mod report;
pub mod search;
pub mod types;

// Re-export commonly used types
pub use error::{HashForgeError, Result};
pub use hash::jenkins_one_at_a_time;
pub use report::{ConsoleReporter, Reporter};
pub use search::{Candidate, SearchDriver};
pub use types::{Hit, RunSummary, SearchConfig, SearchMode};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "hash_forge=warn";

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}

/// Install the stderr tracing subscriber
pub fn init_tracing() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| HashForgeError::internal(format!("failed to initialize tracing: {}", e)))
}
