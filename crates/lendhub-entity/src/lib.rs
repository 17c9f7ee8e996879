//! # lendhub-entity
//!
//! Domain entity models for LendHub. Every struct in this crate is an
//! immutable value record; all mutation is routed through the pool and
//! ledger operations in `lendhub-engine`. All entities derive `Debug`,
//! `Clone`, `Serialize`, and `Deserialize`.

pub mod holder;
pub mod loan;
pub mod resource;

pub use holder::{Holder, HolderKind};
pub use loan::Loan;
pub use resource::{Resource, ResourceKind};
