//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Category of a [`DomainError`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Generic business failure.
    Failure,
    /// A value failed validation (e.g. malformed input).
    Validation,
    /// A domain invariant was violated.
    InvariantViolation,
    /// An identifier was invalid or missing.
    InvalidId,
    /// A requested resource was not found (domain-level).
    NotFound,
    /// A conflict occurred (e.g. duplicate, stale state).
    Conflict,
    /// Authorization failure at the domain boundary.
    Unauthorized,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            ErrorKind::Failure => "failure",
            ErrorKind::Validation => "validation failed",
            ErrorKind::InvariantViolation => "invariant violated",
            ErrorKind::InvalidId => "invalid identifier",
            ErrorKind::NotFound => "not found",
            ErrorKind::Conflict => "conflict",
            ErrorKind::Unauthorized => "unauthorized",
        };
        f.write_str(s)
    }
}

/// Structured domain-level error.
///
/// Carries a machine-readable `code` (e.g. `"order.name_required"`) chosen by
/// the rule author, plus a human-readable message. Keep this focused on
/// deterministic, business/domain failures. Infrastructure concerns belong
/// elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
#[error("{kind} [{code}]: {message}")]
pub struct DomainError {
    kind: ErrorKind,
    code: String,
    message: String,
}

impl DomainError {
    pub fn new(kind: ErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn failure(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Failure, code, message)
    }

    pub fn validation(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, code, message)
    }

    pub fn invariant(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvariantViolation, code, message)
    }

    pub fn invalid_id(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidId, code, message)
    }

    pub fn not_found(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, code, message)
    }

    pub fn conflict(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, code, message)
    }

    pub fn unauthorized(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, code, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
