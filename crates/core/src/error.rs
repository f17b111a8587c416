//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, lookups). Storage failures belong to the infrastructure layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. blank).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested product is not in the catalog.
    ///
    /// Always recoverable: callers render a "not found" state.
    #[error("not found")]
    NotFound,

    /// A random pick was requested from a catalog with no products.
    #[error("catalog is empty")]
    EmptyCatalog,

    /// A persisted entry exists but does not have the expected shape.
    #[error("malformed persisted data: {0}")]
    MalformedPersistedData(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedPersistedData(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// Whether the presentation layer can show an empty state and carry on.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NotFound | Self::EmptyCatalog | Self::MalformedPersistedData(_)
        )
    }
}
