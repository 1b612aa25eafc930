//! Hash Forge - brute-force search for short names with tiny hashes
//!
//! Asks for a name layout, then hashes every candidate until interrupted.

use std::io::{self, IsTerminal};
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use hash_forge::{
    prompt::{collect_mode, LinePrompter, TerminalPrompter},
    ConsoleReporter, HashForgeError, Result, RunSummary, SearchConfig, SearchDriver, SearchMode,
};

#[tokio::main]
async fn main() {
    // Initialize the library
    if let Err(e) = hash_forge::init().and_then(|_| hash_forge::init_tracing()) {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    if let Err(e) = run_hash_forge().await {
        match e {
            // Printed on stdout so it follows the prompt it answers
            HashForgeError::InvalidChoice { .. } => println!("{}", e.user_message()),
            _ => eprintln!("{}", e.user_message()),
        }
        process::exit(1);
    }
}

/// Main hash forge workflow
async fn run_hash_forge() -> Result<RunSummary> {
    tracing::info!(version = hash_forge::VERSION, "hash-forge starting");
    let config = SearchConfig::from_env()?;
    let mode = ask_for_mode()?;

    println!();
    println!("Checking hashes for names...");
    println!("Press Ctrl+C to stop the program.");
    println!();

    run_search(mode, config).await
}

/// Run the setup questions on whatever stdin is attached
fn ask_for_mode() -> Result<SearchMode> {
    if io::stdin().is_terminal() {
        collect_mode(&mut TerminalPrompter)
    } else {
        let stdin = io::stdin();
        collect_mode(&mut LinePrompter::new(stdin.lock(), io::stdout()))
    }
}

/// Drive the search on a blocking thread until it stops or Ctrl+C arrives
async fn run_search(mode: SearchMode, config: SearchConfig) -> Result<RunSummary> {
    let stop = Arc::new(AtomicBool::new(false));
    let worker_stop = Arc::clone(&stop);

    let mut worker = tokio::task::spawn_blocking(move || {
        let mut reporter = ConsoleReporter::new(io::stdout());
        if io::stderr().is_terminal() {
            reporter = reporter.with_spinner();
        }
        let mut driver = SearchDriver::new(mode, &config);
        driver.run(&mut reporter, &worker_stop)
    });

    tokio::select! {
        result = &mut worker => result?,
        signal = tokio::signal::ctrl_c() => {
            match signal {
                Ok(()) => {
                    tracing::info!("interrupt received, stopping search");
                    stop.store(true, Ordering::Relaxed);
                }
                Err(e) => tracing::warn!(error = %e, "failed to listen for Ctrl+C"),
            }
            worker.await?
        }
    }
}
