//! prodstore - a minimal file-backed product document store
//!
//! Products are kept one pretty-printed JSON file per record under a
//! configured root directory and exposed over HTTP for bulk upsert, bulk
//! fetch, cursor pagination, bulk delete and clear.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod product;
pub mod store;
