//! Convenience result type alias for LendHub.

use crate::error::LendError;

/// A specialized `Result` type for LendHub operations.
///
/// This is defined as a convenience so that every crate does not need to
/// write `Result<T, LendError>` explicitly.
pub type LendResult<T> = Result<T, LendError>;
