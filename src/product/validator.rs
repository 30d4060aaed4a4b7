//! Structural validation of products before persistence
//!
//! Pure functions: no I/O, no mutation.

use thiserror::Error;

use super::model::Product;

/// Validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name required")]
    NameRequired,

    #[error("at least one option required")]
    OptionRequired,

    /// Identifier cannot be used as a file name
    #[error("invalid id: {0:?}")]
    InvalidId(String),

    /// Request payload could not be decoded
    #[error("invalid request body: {0}")]
    MalformedBody(String),

    #[error("invalid limit")]
    InvalidLimit,
}

/// Validate a single product
pub fn validate(product: &Product) -> Result<(), ValidationError> {
    if product.name.is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if product.options.is_empty() {
        return Err(ValidationError::OptionRequired);
    }
    Ok(())
}

/// Validate a batch, stopping at the first failing product
pub fn validate_batch(products: &[Product]) -> Result<(), ValidationError> {
    products.iter().try_for_each(validate)
}

/// Check that an id can serve as a file stem under the store root
pub fn validate_id(id: &str) -> Result<(), ValidationError> {
    let unsafe_id = id.is_empty()
        || id == "."
        || id == ".."
        || id.contains(['/', '\\', '\0']);
    if unsafe_id {
        return Err(ValidationError::InvalidId(id.to_string()));
    }
    Ok(())
}
