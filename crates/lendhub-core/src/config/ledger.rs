//! Loan ledger configuration.

use serde::{Deserialize, Serialize};

use crate::types::LoanLimit;

/// Loan ledger limits and term settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Maximum concurrently open loans per holder. `0` means unlimited.
    #[serde(default)]
    pub max_open_loans: u32,
    /// Fixed loan term in whole days. Absent for open-ended loans
    /// (the metered variant has no due date).
    #[serde(default)]
    pub term_days: Option<i64>,
}

impl LedgerConfig {
    /// The configured ceiling as a [`LoanLimit`].
    pub fn loan_limit(&self) -> LoanLimit {
        LoanLimit::from(self.max_open_loans)
    }

    /// The fixed term as a [`chrono::Duration`], if configured.
    pub fn term(&self) -> Option<chrono::Duration> {
        self.term_days.map(chrono::Duration::days)
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            max_open_loans: 0,
            term_days: None,
        }
    }
}
