//! Rate policy: pure charge computation from resource kind and timing.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use lendhub_core::config::rates::{ChargeModelConfig, RateConfig};
use lendhub_core::error::LendError;
use lendhub_core::result::LendResult;
use lendhub_entity::resource::ResourceKind;

/// How a charge is derived from a loan's timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeModel {
    /// Zero up to the due date, then the per-day rate for each whole day
    /// late. Partial days below a full day count as zero extra days, so
    /// a return before the exact due instant is never fined.
    FlatOverdue,
    /// The per-hour rate for every started hour of the loan. Never zero
    /// unless the duration is zero.
    Metered,
}

impl From<ChargeModelConfig> for ChargeModel {
    fn from(config: ChargeModelConfig) -> Self {
        match config {
            ChargeModelConfig::FlatOverdue => Self::FlatOverdue,
            ChargeModelConfig::Metered => Self::Metered,
        }
    }
}

/// Static rate table plus the selected charge model.
///
/// The table is explicit construction-time configuration; there is no
/// process-wide mutable rate state.
#[derive(Debug, Clone)]
pub struct RatePolicy {
    /// The charge model applied on close.
    model: ChargeModel,
    /// Rate per resource kind, in cents.
    table: HashMap<ResourceKind, i64>,
}

impl RatePolicy {
    /// Create a policy from a model and a kind → rate-in-cents table.
    pub fn new(model: ChargeModel, table: HashMap<ResourceKind, i64>) -> Self {
        Self { model, table }
    }

    /// Build a policy from configuration, validating the table.
    pub fn from_config(config: &RateConfig) -> LendResult<Self> {
        config.validate()?;
        let table = config
            .table
            .iter()
            .map(|(kind, rate)| (ResourceKind::from(kind.as_str()), *rate))
            .collect();
        Ok(Self::new(config.model.into(), table))
    }

    /// The charge model this policy applies.
    pub fn model(&self) -> ChargeModel {
        self.model
    }

    /// Look up the configured rate for a kind, in cents.
    pub fn rate_for(&self, kind: &ResourceKind) -> LendResult<i64> {
        self.table.get(kind).copied().ok_or_else(|| {
            LendError::unknown_resource_kind(format!("No rate configured for kind '{kind}'"))
        })
    }

    /// Compute the charge for a loan closed at `closed_at`, in cents.
    ///
    /// The result is always >= 0. `due_at` only participates in the
    /// flat-overdue model; the metered model bills the whole open
    /// duration.
    pub fn charge(
        &self,
        kind: &ResourceKind,
        opened_at: DateTime<Utc>,
        due_at: Option<DateTime<Utc>>,
        closed_at: DateTime<Utc>,
    ) -> LendResult<i64> {
        let rate = self.rate_for(kind)?;

        let amount = match self.model {
            ChargeModel::FlatOverdue => {
                let days_late = due_at
                    .map(|due| (closed_at - due).num_days().max(0))
                    .unwrap_or(0);
                days_late * rate
            }
            ChargeModel::Metered => {
                // Millisecond granularity so any nonzero stay starts an hour.
                let elapsed_ms = (closed_at - opened_at).num_milliseconds().max(0);
                let billable_hours = (elapsed_ms as u64).div_ceil(3_600_000) as i64;
                billable_hours * rate
            }
        };

        Ok(amount)
    }
}
