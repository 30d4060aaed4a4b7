//! Observable events of the product store
//!
//! Every log line names exactly one of these.

use std::fmt;

use super::logger::Severity;

/// Events emitted by the server and CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Store root prepared by `init`
    StoreInitialized,
    /// Server is about to bind its listener
    ServerStarting,
    /// Bulk upsert committed
    ProductsPut,
    /// Bulk fetch by id answered
    ProductsGet,
    /// Paginated fetch answered
    ProductsPage,
    /// Bulk delete answered
    ProductsDelete,
    /// All records removed
    StoreCleared,
    /// A request was rejected with an error
    RequestFailed,
    /// The process cannot continue
    StartupFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::StoreInitialized => "STORE_INITIALIZED",
            Event::ServerStarting => "SERVER_STARTING",
            Event::ProductsPut => "PRODUCTS_PUT",
            Event::ProductsGet => "PRODUCTS_GET",
            Event::ProductsPage => "PRODUCTS_PAGE",
            Event::ProductsDelete => "PRODUCTS_DELETE",
            Event::StoreCleared => "STORE_CLEARED",
            Event::RequestFailed => "REQUEST_FAILED",
            Event::StartupFailed => "STARTUP_FAILED",
        }
    }

    /// Severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::RequestFailed => Severity::Warn,
            Event::StartupFailed => Severity::Fatal,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_screaming_snake_case() {
        let events = [
            Event::StoreInitialized,
            Event::ServerStarting,
            Event::ProductsPut,
            Event::ProductsGet,
            Event::ProductsPage,
            Event::ProductsDelete,
            Event::StoreCleared,
            Event::RequestFailed,
            Event::StartupFailed,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_ascii_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_event_severity() {
        assert_eq!(Event::ProductsPut.severity(), Severity::Info);
        assert_eq!(Event::RequestFailed.severity(), Severity::Warn);
        assert_eq!(Event::StartupFailed.severity(), Severity::Fatal);
    }
}
