//! # HTTP Server Module
//!
//! JSON-over-HTTP surface of the product store.
//!
//! # Endpoints
//!
//! - `POST /products` - bulk upsert, returns products with generated ids
//! - `GET /products` - bulk fetch by a JSON array of ids
//! - `GET /products/page?channel_product_code=<cursor>&limit=<n>` - paginated fetch
//! - `DELETE /products` - bulk delete by a JSON array of ids
//! - `DELETE /clean` - remove every product
//! - `GET /health` - health check with record count

pub mod config;
pub mod errors;
pub mod health_routes;
pub mod product_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use product_routes::{ProductState, NEXT_CURSOR_HEADER};
pub use server::HttpServer;
