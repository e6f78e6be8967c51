//! # scoreshape - Score Document Reshaper
//!
//! The batch driver binary for the scoreshape transform.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────┐
//! │              apps/scoreshape (THE BINARY)         │
//! │                                                   │
//! │   ┌──────────┐          ┌─────────────────────┐   │
//! │   │   CLI    │          │  FileSource/FileSink│   │
//! │   │  (clap)  │          │  (filesystem I/O)   │   │
//! │   └────┬─────┘          └──────────┬──────────┘   │
//! │        │                           │              │
//! │        └────────────┬──────────────┘              │
//! │                     ▼                             │
//! │           ┌──────────────────┐                    │
//! │           │ scoreshape-core  │                    │
//! │           │ (THE TRANSFORM)  │                    │
//! │           └──────────────────┘                    │
//! └───────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Reshape a batch of score documents
//! scoreshape reshape scores/*.xml --out-dir reshaped/
//!
//! # Validate without writing
//! scoreshape check scores/teamwork.xml
//!
//! # Compare two collected score files
//! scoreshape diff --master a.xml --compare b.xml
//! ```

mod cli;
mod io;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Initialize tracing — SCORESHAPE_LOG_FORMAT=json enables
    // machine-parseable output.
    let log_format = std::env::var("SCORESHAPE_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "scoreshape=info".into());

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
    if !cli.quiet {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the scoreshape startup banner.
fn print_banner() {
    println!(
        "scoreshape v{} — flat-to-hierarchical score document reshaper",
        env!("CARGO_PKG_VERSION")
    );
    println!();
}
