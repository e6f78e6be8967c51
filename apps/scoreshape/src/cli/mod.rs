//! # Scoreshape CLI Module
//!
//! This module implements the CLI interface for scoreshape.
//!
//! ## Available Commands
//!
//! - `reshape` - Reshape score documents to the normalized form
//! - `check` - Parse and reshape without writing output
//! - `diff` - Compare two score documents

mod commands;

use clap::{Parser, Subcommand};
use scoreshape_core::ScoreError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// scoreshape - score document reshaper
///
/// Converts flat, per-category scoring documents into the normalized
/// scores/subjectiveCategory/score/subscore hierarchy.
#[derive(Parser, Debug)]
#[command(name = "scoreshape")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reshape score documents to the normalized form
    Reshape {
        /// Input document paths
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Directory for reshaped output (defaults to next to each input)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },

    /// Parse and reshape documents without writing output
    Check {
        /// Input document paths
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },

    /// Compare two score documents and report differences
    Diff {
        /// The reference document
        #[arg(short, long)]
        master: PathBuf,

        /// The document to compare against the reference
        #[arg(short, long)]
        compare: PathBuf,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), ScoreError> {
    let json = cli.json;

    match cli.command {
        Commands::Reshape { inputs, out_dir } => {
            cmd_reshape(&inputs, out_dir.as_deref(), json)
        }
        Commands::Check { inputs } => cmd_check(&inputs, json),
        Commands::Diff { master, compare } => cmd_diff(&master, &compare, json),
    }
}
