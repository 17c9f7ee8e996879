//! Open-loan limit resolution types.

use serde::{Deserialize, Serialize};

/// Resolved open-loan ceiling for a holder.
///
/// Limits are resolved in priority order:
/// 1. Holder kind (privileged holders are unlimited)
/// 2. The configured `ledger.max_open_loans` ceiling
/// 3. Default (unlimited, bounded only by pool capacity)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanLimit {
    /// A fixed maximum number of concurrently open loans.
    Fixed(u32),
    /// No per-holder limit; bounded only by the resource pool itself.
    Unlimited,
}

impl LoanLimit {
    /// Check whether a given open-loan count exceeds this limit.
    pub fn is_exceeded_by(&self, open_count: u32) -> bool {
        match self {
            Self::Fixed(max) => open_count >= *max,
            Self::Unlimited => false,
        }
    }

    /// Return the numeric limit, or `None` for unlimited.
    pub fn as_max(&self) -> Option<u32> {
        match self {
            Self::Fixed(max) => Some(*max),
            Self::Unlimited => None,
        }
    }
}

impl From<u32> for LoanLimit {
    /// Convert a `u32` to a `LoanLimit`. `0` means unlimited.
    fn from(value: u32) -> Self {
        if value == 0 {
            Self::Unlimited
        } else {
            Self::Fixed(value)
        }
    }
}
