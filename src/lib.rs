//! # LendHub
//!
//! A resource lending engine: a pool of typed, exclusive resources, a
//! loan ledger with per-holder limits, and a pluggable rate policy that
//! prices each return. One engine serves both deployment shapes the
//! workspace ships demo configs for: a library (fixed 14-day term, flat
//! overdue fine) and a parking lot (open-ended, metered hourly fee).
//!
//! This facade re-exports the public surface of the workspace crates.

pub use lendhub_core::config::{self, AppConfig};
pub use lendhub_core::error::{ErrorKind, LendError};
pub use lendhub_core::result::LendResult;
pub use lendhub_core::types::{HolderId, LoanId, LoanLimit, ResourceId};

pub use lendhub_entity::holder::{Holder, HolderKind};
pub use lendhub_entity::loan::Loan;
pub use lendhub_entity::resource::{Resource, ResourceKind};

pub use lendhub_engine::{
    ChargeModel, LendingEngine, LoanLedger, LoanTerms, PoolStatus, RatePolicy, ResourcePool,
};
