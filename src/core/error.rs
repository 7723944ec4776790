//! Typed error surface for the merchant registry
//!
//! Not-found is deliberately not represented here: reads surface an absent
//! result (`Option`) and writes a boolean outcome, so callers branch without
//! error handling. Errors are reserved for invalid input and storage
//! failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    /// A write model failed validation; `field` names the offending field.
    #[error("validation failed for `{field}`: {message}")]
    Validation { field: String, message: String },

    /// The backing store failed. Storage errors propagate unchanged; the
    /// registry neither retries nor suppresses them.
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl RegistryError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}
