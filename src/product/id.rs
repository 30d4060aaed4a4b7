//! Identifier generation
//!
//! The default generator renders the current wall clock in nanoseconds
//! since the Unix epoch as a decimal string. Two ids requested within the
//! same clock tick collide; callers that need strict uniqueness inject ids
//! themselves or select the UUID scheme.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Source of record and sub-entity identifiers
pub trait IdGenerator: Send + Sync {
    /// Produce the next identifier. Never fails.
    fn next_id(&self) -> String;
}

/// Clock-derived integer identifiers
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockIdGenerator;

impl IdGenerator for ClockIdGenerator {
    fn next_id(&self) -> String {
        let now = Utc::now();
        // timestamp_nanos_opt only overflows after the year 2262
        let nanos = now
            .timestamp_nanos_opt()
            .unwrap_or_else(|| now.timestamp_micros().saturating_mul(1_000));
        nanos.to_string()
    }
}

/// Random v4 UUID identifiers
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Configurable identifier scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdScheme {
    #[default]
    Clock,
    Uuid,
}

impl IdScheme {
    /// Build the generator for this scheme
    pub fn generator(self) -> Box<dyn IdGenerator> {
        match self {
            IdScheme::Clock => Box::new(ClockIdGenerator),
            IdScheme::Uuid => Box::new(UuidIdGenerator),
        }
    }
}
