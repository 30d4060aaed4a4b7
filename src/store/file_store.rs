//! # File-backed Product Store
//!
//! One pretty-printed JSON file per product at `<root>/<id>.json`.
//!
//! The directory itself is the index: listing walks the root and sorts
//! the matching paths by their full path string. Nothing is locked;
//! concurrent writers to the same id race with last-write-wins semantics.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use walkdir::WalkDir;

use super::errors::{StoreError, StoreResult};
use crate::product::{validate_batch, validate_id, IdGenerator, Product};

/// Default record file extension
pub const RECORD_EXTENSION: &str = "json";

/// Indentation of persisted record files
const RECORD_INDENT: &[u8] = b"    ";

/// How a caller-supplied id is matched against stored files
///
/// Used by bulk delete and by the pagination cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// File stem equals the id
    #[default]
    Exact,
    /// Full path contains the id anywhere. Ids sharing a substring
    /// (e.g. `"10"` and `"110"`) match each other.
    Substring,
}

impl MatchMode {
    /// Whether `path` is matched by `id` under this mode
    pub fn matches(self, path: &Path, id: &str) -> bool {
        match self {
            MatchMode::Exact => path
                .file_stem()
                .map(|stem| stem == id)
                .unwrap_or(false),
            MatchMode::Substring => path.to_string_lossy().contains(id),
        }
    }
}

/// Store configuration, injected at construction time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding the record files
    pub root: PathBuf,
    /// Record file extension, without the dot
    pub extension: String,
    pub match_mode: MatchMode,
}

impl StoreConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: RECORD_EXTENSION.to_string(),
            match_mode: MatchMode::default(),
        }
    }

    /// Builder: set the id match mode
    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }
}

/// Product store keyed by id, one file per product
pub struct FileStore {
    config: StoreConfig,
    ids: Box<dyn IdGenerator>,
}

impl std::fmt::Debug for FileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileStore")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl FileStore {
    /// Create a store over `config.root` using `ids` for missing identifiers
    pub fn new(config: StoreConfig, ids: Box<dyn IdGenerator>) -> Self {
        Self { config, ids }
    }

    pub fn root(&self) -> &Path {
        &self.config.root
    }

    pub fn match_mode(&self) -> MatchMode {
        self.config.match_mode
    }

    /// Create the root directory if it does not exist yet
    pub fn ensure_root(&self) -> StoreResult<()> {
        fs::create_dir_all(self.root()).map_err(|e| StoreError::io(self.root(), e))
    }

    fn record_path(&self, id: &str) -> PathBuf {
        self.config
            .root
            .join(format!("{}.{}", id, self.config.extension))
    }

    /// Validate, identify and write every product, in order.
    ///
    /// The whole batch is validated before anything is written. A write
    /// failure stops the batch; products written before it stay on disk.
    /// Returns the products with all generated ids filled in.
    pub fn put(&self, mut products: Vec<Product>) -> StoreResult<Vec<Product>> {
        validate_batch(&products)?;

        for product in products.iter_mut() {
            product.assign_ids(&*self.ids);
            validate_id(&product.id)?;

            let path = self.record_path(&product.id);
            let data = encode_record(product).map_err(|e| StoreError::codec(&path, e))?;
            fs::write(&path, data).map_err(|e| StoreError::io(&path, e))?;
        }

        Ok(products)
    }

    /// Read the products with the given ids, in the given order.
    ///
    /// Any id without a readable file fails the whole call. An empty id
    /// list yields an empty result.
    pub fn get(&self, ids: &[String]) -> StoreResult<Vec<Product>> {
        ids.iter()
            .map(|id| {
                validate_id(id)?;
                self.read_path(&self.record_path(id)).map_err(|e| match e {
                    StoreError::Io { .. } | StoreError::NotFound(_) => {
                        StoreError::NotFound(id.clone())
                    }
                    other => other,
                })
            })
            .collect()
    }

    /// Decode the product stored at `path`
    pub fn read_path(&self, path: &Path) -> StoreResult<Product> {
        let data = fs::read(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                StoreError::NotFound(path.display().to_string())
            } else {
                StoreError::io(path, e)
            }
        })?;

        serde_json::from_slice(&data).map_err(|e| StoreError::codec(path, e))
    }

    /// Remove every record file matched by any of `ids`.
    ///
    /// Returns the number of files removed. The first removal failure
    /// aborts the remaining deletions.
    pub fn delete(&self, ids: &[String]) -> StoreResult<usize> {
        if ids.is_empty() {
            return Ok(0);
        }

        let mode = self.match_mode();
        let matching: Vec<PathBuf> = self
            .list_all_paths()?
            .into_iter()
            .filter(|path| ids.iter().any(|id| mode.matches(path, id)))
            .collect();

        remove_files(&matching)
    }

    /// Remove every record file under the root
    pub fn clear(&self) -> StoreResult<usize> {
        remove_files(&self.list_all_paths()?)
    }

    /// All record files under the root, recursively, sorted by path string
    pub fn list_all_paths(&self) -> StoreResult<Vec<PathBuf>> {
        let suffix = format!(".{}", self.config.extension);
        let mut paths = Vec::new();

        for entry in WalkDir::new(self.root()) {
            let entry = entry.map_err(|e| StoreError::io(self.root(), e))?;
            if !entry.file_type().is_file() {
                continue;
            }
            if entry.file_name().to_string_lossy().ends_with(&suffix) {
                paths.push(entry.into_path());
            }
        }

        paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
        Ok(paths)
    }
}

/// Canonical encoding: pretty-printed JSON with four-space indentation
fn encode_record(product: &Product) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(RECORD_INDENT));
    product.serialize(&mut serializer)?;
    Ok(buf)
}

/// Remove `paths` in order, stopping at the first failure.
///
/// Files removed before the failure stay removed.
fn remove_files(paths: &[PathBuf]) -> StoreResult<usize> {
    for path in paths {
        fs::remove_file(path).map_err(|e| StoreError::io(path, e))?;
    }
    Ok(paths.len())
}
