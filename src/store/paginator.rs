//! # Cursor Paginator
//!
//! Forward-only, stateless pagination over the sorted record listing.
//! The cursor for the next page is the id of the last product of the
//! current page; the paginator keeps no state between calls.

use serde::Serialize;

use super::errors::StoreResult;
use super::file_store::FileStore;
use crate::product::Product;

/// Cursor value meaning "start of list"
pub const START_CURSOR: &str = "0";

/// Number of products returned when the caller gives no limit
pub const DEFAULT_PAGE_LIMIT: usize = 10;

/// One page of products in listing order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Page {
    pub products: Vec<Product>,
    /// Id of the last product when the page is full, `None` otherwise
    pub next_cursor: Option<String>,
}

impl Page {
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }
}

/// Computes bounded pages from a [`FileStore`] listing
#[derive(Debug, Clone, Copy)]
pub struct Paginator<'a> {
    store: &'a FileStore,
}

impl<'a> Paginator<'a> {
    pub fn new(store: &'a FileStore) -> Self {
        Self { store }
    }

    /// Return up to `limit` products following `cursor`.
    ///
    /// An absent, empty or `"0"` cursor starts at the beginning. A cursor
    /// that matches no stored record also restarts at the beginning rather
    /// than failing.
    pub fn page(&self, cursor: Option<&str>, limit: usize) -> StoreResult<Page> {
        if limit == 0 {
            return Ok(Page::default());
        }

        let paths = self.store.list_all_paths()?;
        let offset = match normalize_cursor(cursor) {
            Some(cursor) => {
                let mode = self.store.match_mode();
                paths
                    .iter()
                    .position(|path| mode.matches(path, cursor))
                    .map(|i| i + 1)
                    .unwrap_or(0)
            }
            None => 0,
        };

        let products = paths
            .iter()
            .skip(offset)
            .take(limit)
            .map(|path| self.store.read_path(path))
            .collect::<StoreResult<Vec<_>>>()?;

        let next_cursor = if products.len() == limit {
            products.last().map(|p| p.id.clone())
        } else {
            None
        };

        Ok(Page {
            products,
            next_cursor,
        })
    }
}

fn normalize_cursor(cursor: Option<&str>) -> Option<&str> {
    cursor.filter(|c| !c.is_empty() && *c != START_CURSOR)
}
