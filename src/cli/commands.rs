//! CLI command implementations
//!
//! `init` prepares the data directory; `serve` builds the store from the
//! data directory and configuration, then runs the HTTP server on a tokio
//! runtime until the process is stopped.

use std::path::{Path, PathBuf};

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use crate::http_server::HttpServer;
use crate::observability::{Event, Logger};
use crate::store::FileStore;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { data_dir } => init(&data_dir),
        Command::Serve {
            data_dir,
            config,
            host,
            port,
        } => {
            let config = Config::load_or_default(config.as_deref())?.with_overrides(host, port);
            serve(data_dir, config)
        }
    }
}

/// Build the store described by `config` over `data_dir`
pub fn open_store(data_dir: impl Into<PathBuf>, config: &Config) -> FileStore {
    FileStore::new(config.store_config(data_dir), config.id_scheme.generator())
}

/// Create the data directory
pub fn init(data_dir: &Path) -> CliResult<()> {
    let store = open_store(data_dir, &Config::default());
    store.ensure_root()?;

    let root = data_dir.display().to_string();
    Logger::event(Event::StoreInitialized, &[("data_dir", root.as_str())]);
    Ok(())
}

/// Serve the product API
///
/// Any failure is logged as `STARTUP_FAILED` before it is returned.
pub fn serve(data_dir: PathBuf, config: Config) -> CliResult<()> {
    let result = run_server(data_dir, config);
    if let Err(e) = &result {
        Logger::event(
            Event::StartupFailed,
            &[("code", e.code().code()), ("error", e.message())],
        );
    }
    result
}

fn run_server(data_dir: PathBuf, config: Config) -> CliResult<()> {
    if data_dir.as_os_str().is_empty() {
        return Err(CliError::config_error(
            "data storage path must be specified",
        ));
    }

    let store = open_store(data_dir, &config);
    store.ensure_root()?;

    let server = HttpServer::with_config(config.http, store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_data_dir() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("products");

        init(&data_dir).unwrap();
        assert!(data_dir.is_dir());

        // idempotent
        init(&data_dir).unwrap();
    }

    #[test]
    fn test_serve_rejects_empty_data_dir() {
        let err = serve(PathBuf::new(), Config::default()).unwrap_err();
        assert!(err.message().contains("data storage path"));
    }

    #[test]
    fn test_open_store_applies_match_mode() {
        let config = Config {
            match_mode: crate::store::MatchMode::Substring,
            ..Default::default()
        };
        let store = open_store("/tmp/products", &config);
        assert_eq!(store.match_mode(), crate::store::MatchMode::Substring);
    }
}
