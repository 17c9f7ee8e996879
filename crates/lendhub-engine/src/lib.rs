//! # lendhub-engine
//!
//! The resource lending engine: an exclusive, typed resource pool, a loan
//! ledger enforcing per-holder limits, and a rate policy computing the
//! charge on return. The three collaborators are decoupled; the
//! [`LendingEngine`] facade wires them into the checkout/checkin flow.
//!
//! The engine is single-threaded and synchronous. All mutation goes
//! through `&mut self`; a multi-client adaptation must serialize pool and
//! ledger mutations behind one mutual-exclusion boundary.

pub mod engine;
pub mod ledger;
pub mod pool;
pub mod rate;

pub use engine::LendingEngine;
pub use ledger::{LoanLedger, LoanTerms};
pub use pool::{PoolStatus, ResourcePool};
pub use rate::{ChargeModel, RatePolicy};
