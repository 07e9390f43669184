//! # Skilldelta
//!
//! Command-line renderer for matchmaking skill deltas.
//!
//! ## Usage
//!
//! ```bash
//! skilldelta team -f team.json
//! skilldelta member -f member.json --json-mode
//! skilldelta memento -f memento.json
//! skilldelta card -f group.json --action match-up --own-role owner --viewer-id 1
//! ```
//!
//! Logs go to stderr; `SKILLDELTA_LOG_FORMAT=json` switches them to JSON.

use clap::Parser;
use skilldelta::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    let cli = cli::Cli::parse();

    let log_format = std::env::var("SKILLDELTA_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let default_filter = if cli.verbose {
        "skilldelta=debug"
    } else {
        "skilldelta=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the startup banner to stderr.
fn print_banner() {
    eprintln!("skilldelta v{}  ·  pending ➜ provisional ➜ resolved", env!("CARGO_PKG_VERSION"));
}
