//! CLI module
//!
//! - init: create the data directory
//! - serve: run the HTTP API over a data directory

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, open_store, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
