//! # lendhub-core
//!
//! Shared foundation for the LendHub workspace: the unified error type,
//! result alias, typed entity identifiers, and configuration schemas.

pub mod config;
pub mod error;
pub mod result;
pub mod types;
