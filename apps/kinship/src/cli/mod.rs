//! # Kinship CLI Module
//!
//! This module implements the CLI interface for Kinship.
//!
//! ## Available Commands
//!
//! - `status` - Show snapshot metrics (the default command)
//! - `ancestors` - List all ancestors of a person
//! - `descendants` - List all descendants of a person
//! - `siblings` - List the siblings of a person
//! - `grandparents` - List the grandparents of a person
//! - `path` - Find the shortest labeled relationship path
//! - `tree` - Render a mini family tree around a focus person
//! - `age` - Compute completed calendar years
//! - `check` - Validate a proposed parent-child edge

mod commands;

use crate::config::{AppConfig, DEFAULT_RECORD_FILE, DEFAULT_TREE_LEVELS};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use kinship_core::KinshipError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Kinship - Family Graph CLI
///
/// A deterministic genealogical query engine over flat record files.
/// Every answer is derived from the records at query time, never stored.
#[derive(Parser, Debug)]
#[command(name = "kinship")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the family record file
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Path to the configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long = "json", global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show snapshot metrics
    Status,

    /// List all ancestors of a person
    Ancestors {
        /// Person ID to start from
        #[arg(short, long)]
        person: u64,

        /// Maximum generations upward
        #[arg(short, long)]
        depth: Option<usize>,
    },

    /// List all descendants of a person
    Descendants {
        /// Person ID to start from
        #[arg(short, long)]
        person: u64,

        /// Maximum generations downward
        #[arg(short, long)]
        depth: Option<usize>,
    },

    /// List the siblings of a person
    Siblings {
        /// Person ID to start from
        #[arg(short, long)]
        person: u64,
    },

    /// List the grandparents of a person
    Grandparents {
        /// Person ID to start from
        #[arg(short, long)]
        person: u64,
    },

    /// Find the shortest relationship path between two persons
    Path {
        /// Start person ID
        #[arg(long)]
        from: u64,

        /// End person ID
        #[arg(long)]
        to: u64,
    },

    /// Render a mini family tree around a focus person
    Tree {
        /// Focus person ID
        #[arg(long)]
        focus: u64,

        /// Generations upward from the focus
        #[arg(short, long)]
        up: Option<usize>,

        /// Generations downward from the focus
        #[arg(short, long)]
        down: Option<usize>,
    },

    /// Compute a person's completed calendar years
    Age {
        /// Person ID
        #[arg(short, long)]
        person: u64,

        /// Reference date instead of today
        #[arg(long, value_name = "YYYY-MM-DD")]
        on: Option<NaiveDate>,
    },

    /// Validate a proposed parent-child edge
    Check {
        /// Proposed parent ID
        #[arg(long)]
        parent: u64,

        /// Proposed child ID
        #[arg(long)]
        child: u64,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), KinshipError> {
    let config = AppConfig::load(cli.config.as_deref())?;

    if cli.verbose {
        tracing::debug!("Configuration: {:?}", config);
    }

    let records = cli
        .file
        .or_else(|| config.record_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_RECORD_FILE));
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Ancestors { person, depth }) => cmd_ancestors(
            &records,
            json_mode,
            person,
            depth.or(config.default_depth),
        ),
        Some(Commands::Descendants { person, depth }) => cmd_descendants(
            &records,
            json_mode,
            person,
            depth.or(config.default_depth),
        ),
        Some(Commands::Siblings { person }) => cmd_siblings(&records, json_mode, person),
        Some(Commands::Grandparents { person }) => cmd_grandparents(&records, json_mode, person),
        Some(Commands::Path { from, to }) => cmd_path(&records, json_mode, from, to),
        Some(Commands::Tree { focus, up, down }) => cmd_tree(
            &records,
            json_mode,
            focus,
            up.or(config.tree_up).unwrap_or(DEFAULT_TREE_LEVELS),
            down.or(config.tree_down).unwrap_or(DEFAULT_TREE_LEVELS),
        ),
        Some(Commands::Age { person, on }) => cmd_age(&records, json_mode, person, on),
        Some(Commands::Check { parent, child }) => cmd_check(&records, json_mode, parent, child),
        Some(Commands::Status) | None => cmd_status(&records, json_mode),
    }
}
