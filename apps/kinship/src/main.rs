//! # Kinship - Family Graph CLI
//!
//! The main binary for the Kinship deterministic relationship engine.
//!
//! This application provides:
//! - CLI interface for genealogical queries
//! - Flat JSON record store loading
//! - Optional TOML configuration
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                apps/kinship (THE BINARY)                │
//! │                                                         │
//! │  ┌─────────────┐   ┌──────────────┐   ┌─────────────┐  │
//! │  │   CLI       │   │ Record Store │   │   Config    │  │
//! │  │  (clap)     │   │   (JSON)     │   │   (TOML)    │  │
//! │  └──────┬──────┘   └──────┬───────┘   └──────┬──────┘  │
//! │         │                 │                  │         │
//! │         └─────────────────┼──────────────────┘         │
//! │                           ▼                            │
//! │                  ┌────────────────┐                    │
//! │                  │  kinship-core  │                    │
//! │                  │  (THE ENGINE)  │                    │
//! │                  └────────────────┘                    │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! kinship status -f family.json
//! kinship ancestors --person 30 --depth 2
//! kinship path --from 30 --to 10
//! kinship age --person 1 --on 2020-01-01
//! ```

use clap::Parser;
use kinship::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Initialize tracing — KINSHIP_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("KINSHIP_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "kinship=info".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Display startup banner
    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the Kinship startup banner.
fn print_banner() {
    println!(
        r#"
  ██╗  ██╗██╗███╗   ██╗███████╗██╗  ██╗██╗██████╗
  ██║ ██╔╝██║████╗  ██║██╔════╝██║  ██║██║██╔══██╗
  █████╔╝ ██║██╔██╗ ██║███████╗███████║██║██████╔╝
  ██╔═██╗ ██║██║╚██╗██║╚════██║██╔══██║██║██╔═══╝
  ██║  ██╗██║██║ ╚████║███████║██║  ██║██║██║
  ╚═╝  ╚═╝╚═╝╚═╝  ╚═══╝╚══════╝╚═╝  ╚═╝╚═╝╚═╝

  Family Graph Engine v{}

  Deterministic • Immutable • Bounded
"#,
        env!("CARGO_PKG_VERSION")
    );
}
