//! CLI argument definitions using clap
//!
//! Commands:
//! - prodstore init <DATA_DIR>
//! - prodstore serve <DATA_DIR> [--config <path>] [--host <host>] [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// prodstore - a file-backed product document store
#[derive(Parser, Debug)]
#[command(name = "prodstore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the data directory
    Init {
        /// Directory holding one JSON file per product
        data_dir: PathBuf,
    },

    /// Serve the product API over HTTP
    Serve {
        /// Directory holding one JSON file per product
        data_dir: PathBuf,

        /// Optional JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides the config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
