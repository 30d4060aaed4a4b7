//! Configuration file structure
//!
//! Every field is optional; command line flags override file values.
//!
//! ```json
//! {
//!     "host": "127.0.0.1",
//!     "port": 8080,
//!     "cors_origins": [],
//!     "id_scheme": "clock",
//!     "match_mode": "exact"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::http_server::HttpServerConfig;
use crate::product::IdScheme;
use crate::store::{MatchMode, StoreConfig};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(flatten)]
    pub http: HttpServerConfig,

    /// How missing identifiers are generated
    #[serde(default)]
    pub id_scheme: IdScheme,

    /// How ids passed to delete and the page cursor match stored files
    #[serde(default)]
    pub match_mode: MatchMode,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        path.map(Self::load).transpose().map(Option::unwrap_or_default)
    }

    /// Apply command line overrides
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.http.host = host;
        }
        if let Some(port) = port {
            self.http.port = port;
        }
        self
    }

    /// Store configuration rooted at `data_dir`
    pub fn store_config(&self, data_dir: impl Into<PathBuf>) -> StoreConfig {
        StoreConfig::new(data_dir).with_match_mode(self.match_mode)
    }
}
