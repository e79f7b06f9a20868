//! Domain error model.

use thiserror::Error;

/// Result type used across the domain and application layers.
pub type DomainResult<T> = Result<T, DomainError>;

/// A field value broke an entity invariant.
///
/// The display strings are part of the public contract: HTTP clients receive
/// them verbatim and may match on them.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid id")]
    InvalidId,

    #[error("name cannot be empty")]
    EmptyName,

    #[error("name cannot be longer than {max} characters")]
    NameTooLong { max: usize },

    #[error("description cannot be longer than {max} characters")]
    DescriptionTooLong { max: usize },

    #[error("status must be enabled or disabled")]
    InvalidStatus,

    #[error("price must be greater or equal zero")]
    NegativePrice,
}

/// Domain-level error.
///
/// Three kinds only: bad input, missing record, and opaque storage failure.
/// Callers map the kind to a transport response; nothing here is retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (never retried, surfaced as a client error).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The requested record does not exist in storage.
    #[error("not found")]
    NotFound,

    /// Driver/transport failure, not classified further.
    #[error("storage failure: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
