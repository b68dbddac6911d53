//! CLI argument definitions using clap
//!
//! Commands:
//! - aerodex serve [--config <path>] [--port <port>]
//! - aerodex check [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// aerodex - an in-memory airport directory served over HTTP
#[derive(Parser, Debug)]
#[command(name = "aerodex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to bind, overriding the configuration
        #[arg(long)]
        port: Option<u16>,
    },

    /// Validate the dataset and report its record count
    Check {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
