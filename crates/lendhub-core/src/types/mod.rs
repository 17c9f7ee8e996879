//! Shared value types used across the workspace.

pub mod id;
pub mod loan_limit;

pub use id::{HolderId, LoanId, ResourceId};
pub use loan_limit::LoanLimit;
