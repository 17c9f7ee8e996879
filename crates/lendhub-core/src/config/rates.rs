//! Rate table configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::LendError;

/// Which charge model the rate policy applies on loan close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeModelConfig {
    /// Zero charge up to the due date, then a per-day rate for each
    /// whole day late.
    FlatOverdue,
    /// A per-started-hour rate for the whole loan duration.
    Metered,
}

/// Rate table and charge model selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateConfig {
    /// Which charge model applies.
    pub model: ChargeModelConfig,
    /// Rate per resource kind, in cents. Per day for `flat_overdue`,
    /// per started hour for `metered`.
    pub table: HashMap<String, i64>,
}

impl RateConfig {
    /// Validate the table: rates must be non-negative.
    pub fn validate(&self) -> Result<(), LendError> {
        for (kind, rate) in &self.table {
            if *rate < 0 {
                return Err(LendError::configuration(format!(
                    "Rate for kind '{kind}' is negative: {rate}"
                )));
            }
        }
        Ok(())
    }
}
