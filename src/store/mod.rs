//! # Product Store Module
//!
//! File-backed persistence for products plus cursor pagination over the
//! stored records.
//!
//! ```text
//! <root>/
//! ├── 1700000000000000001.json
//! ├── 1700000000000000002.json
//! └── ...
//! ```

pub mod errors;
pub mod file_store;
pub mod paginator;

pub use errors::{StoreError, StoreResult};
pub use file_store::{FileStore, MatchMode, StoreConfig, RECORD_EXTENSION};
pub use paginator::{Page, Paginator, DEFAULT_PAGE_LIMIT, START_CURSOR};
