//! Error types for Refbook.

use refbook_core::{CoreError, OutOfRange, ValidationError};
use refbook_store::StoreError;
use thiserror::Error;

/// Errors that can occur during record manager operations.
#[derive(Debug, Error)]
pub enum RefbookError {
    /// The draft failed validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// An index did not name an existing record.
    #[error("{0}")]
    OutOfRange(#[from] OutOfRange),

    /// The durable store rejected a read or write.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// The collection could not be encoded.
    #[error("codec error: {0}")]
    Codec(#[from] CoreError),
}

impl RefbookError {
    /// Whether the caller can recover by re-prompting the user.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, RefbookError::Validation(_))
    }
}

/// Errors from a clipboard collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// No clipboard is available in this environment.
    #[error("clipboard unavailable")]
    Unavailable,

    /// The clipboard refused the write.
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Result type for Refbook operations.
pub type Result<T> = std::result::Result<T, RefbookError>;
