//! Unified error type for the stock intake crate.
//!
//! Persisted-data corruption and bad numeric input are deliberately absent here:
//! both degrade silently (empty history, zero counts) instead of failing.

use thiserror::Error;

/// Errors surfaced by configuration loading, drafting and log persistence.
#[derive(Debug, Error)]
pub enum Error {
    /// The roster configuration could not be read or is invalid.
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// No supplier with this id exists in the roster.
    #[error("Supplier not found: {id}")]
    SupplierNotFound {
        /// The unknown supplier id
        id: String,
    },

    /// The product id does not belong to the active supplier.
    #[error("Product not found: {id}")]
    ProductNotFound {
        /// The unknown product id
        id: String,
    },

    /// Submissions or reports could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A destructive reset was requested without operator confirmation.
    #[error("Reset not confirmed; history left untouched")]
    ResetNotConfirmed,

    /// Underlying filesystem or terminal failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
