//! CLI module - Command-line interface for the incident admin service
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Incident Admin - status page incident API
#[derive(Parser)]
#[command(name = "incident-admin")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a config file; the default search locations are used otherwise
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API (default)
    #[command(alias = "daemon")]
    Serve,

    /// Create the incidents table if needed and exit
    Migrate,

    /// Print incidents with the given status
    #[command(alias = "ls")]
    List {
        /// Status to filter on
        #[arg(long, default_value = "active")]
        status: String,
    },

    /// Create default config file
    Init,
}

pub use commands::*;
