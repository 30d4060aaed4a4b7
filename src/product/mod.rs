//! # Product Records
//!
//! The record model persisted by the store, its structural validation,
//! and the identifier generators used to fill in missing ids.
//!
//! A product is persistable only when it has a non-empty name and at
//! least one option. Every product, option and image carries a non-empty
//! id once it has been written.

pub mod id;
pub mod model;
pub mod validator;

pub use id::{ClockIdGenerator, IdGenerator, IdScheme, UuidIdGenerator};
pub use model::{Image, Product, ProductOption};
pub use validator::{validate, validate_batch, validate_id, ValidationError};
