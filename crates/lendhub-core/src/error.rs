//! Unified application error types for LendHub.
//!
//! All crates map their internal errors into [`LendError`] for consistent
//! propagation through the ? operator.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested resource or loan was not found.
    NotFound,
    /// The resource is currently allocated and cannot be removed.
    ResourceBusy,
    /// No free resource of the requested kind exists in the pool.
    NoResourceAvailable,
    /// The resource is already free; release did nothing.
    AlreadyFree,
    /// The holder has reached its open-loan ceiling.
    LimitExceeded,
    /// The resource was not allocated before a loan was opened on it.
    ResourceNotAllocated,
    /// No open loan exists for the given holder/resource pair.
    NoOpenLoan,
    /// The loan is already closed; closed is a terminal state.
    AlreadyClosed,
    /// The resource kind has no entry in the rate table.
    UnknownResourceKind,
    /// Input validation failed.
    Validation,
    /// A configuration error occurred.
    Configuration,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::ResourceBusy => write!(f, "RESOURCE_BUSY"),
            Self::NoResourceAvailable => write!(f, "NO_RESOURCE_AVAILABLE"),
            Self::AlreadyFree => write!(f, "ALREADY_FREE"),
            Self::LimitExceeded => write!(f, "LIMIT_EXCEEDED"),
            Self::ResourceNotAllocated => write!(f, "RESOURCE_NOT_ALLOCATED"),
            Self::NoOpenLoan => write!(f, "NO_OPEN_LOAN"),
            Self::AlreadyClosed => write!(f, "ALREADY_CLOSED"),
            Self::UnknownResourceKind => write!(f, "UNKNOWN_RESOURCE_KIND"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Configuration => write!(f, "CONFIGURATION"),
        }
    }
}

/// The unified application error used throughout LendHub.
///
/// Every failure is a recoverable result value returned to the caller;
/// none of the engine operations panic or abort the process.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct LendError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl LendError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a resource-busy error.
    pub fn resource_busy(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ResourceBusy, message)
    }

    /// Create a no-resource-available error.
    pub fn no_resource_available(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoResourceAvailable, message)
    }

    /// Create an already-free error.
    pub fn already_free(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlreadyFree, message)
    }

    /// Create a limit-exceeded error.
    pub fn limit_exceeded(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::LimitExceeded, message)
    }

    /// Create a resource-not-allocated error.
    pub fn resource_not_allocated(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ResourceNotAllocated, message)
    }

    /// Create a no-open-loan error.
    pub fn no_open_loan(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoOpenLoan, message)
    }

    /// Create an already-closed error.
    pub fn already_closed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlreadyClosed, message)
    }

    /// Create an unknown-resource-kind error.
    pub fn unknown_resource_kind(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownResourceKind, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }
}

impl Clone for LendError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<config::ConfigError> for LendError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
