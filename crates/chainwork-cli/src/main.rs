//! chainwork - a developer team works through its tickets.
//!
//! Usage: `chainwork [TEAM_FILE]`. Without a file the built-in sample team
//! is used; `crates/chainwork-cli/team.example.json` shows the file format.
//! Each ticket prints one line per developer consulted (taken, busy, or not
//! experienced enough). Log level comes from `RUST_LOG` (default `info`).

mod config;
mod report;

use chainwork_core::ports::{SystemClock, UlidGenerator};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::TeamConfig;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => TeamConfig::load(&path).map_err(|e| {
            error!(path = %path, error = %e, "Failed to load team file");
            e
        })?,
        None => TeamConfig::sample(),
    };

    let id_gen = UlidGenerator::new(SystemClock);
    let chain = config.build_chain(&id_gen)?;
    let mut tickets = config.build_requests(&id_gen);
    info!(
        developers = chain.len(),
        tickets = tickets.len(),
        "Starting work"
    );

    for ticket in report::work_through(&chain, &mut tickets) {
        println!("\nStarting to work on ticket: {}", ticket.ticket);
        for line in &ticket.lines {
            println!("  {line}");
        }
    }

    println!("\n{}", serde_json::to_string_pretty(&chain.status())?);
    Ok(())
}
