//! Cross-cutting error types for Lore.
//!
//! Store-specific failures (`DatabaseError`) live in `lore-db`; the CLI
//! converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Lore crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (required fields, format).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
