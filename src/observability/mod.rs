//! Observability for the product store
//!
//! Structured, synchronous JSON logging of typed events.
//!
//! ```ignore
//! use prodstore::observability::{Event, Logger};
//!
//! Logger::event(Event::ProductsPut, &[("count", "2")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{format_line, Logger, Severity};
