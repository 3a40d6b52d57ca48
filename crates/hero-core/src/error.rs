//! Error types for the particle field.

use thiserror::Error;

/// Errors produced while building a [`crate::Field`].
///
/// The per-frame path has no error surface; these only fire at construction.
#[derive(Debug, Error, PartialEq)]
pub enum FieldError {
    /// A tuning parameter was outside its usable range.
    #[error("invalid field params: {0}")]
    InvalidParams(String),

    /// An explicit population was supplied with no particles in it.
    #[error("a field needs at least one particle")]
    EmptyPopulation,
}
