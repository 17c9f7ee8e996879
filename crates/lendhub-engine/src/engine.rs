//! Lending engine facade wiring pool, ledger, and rate policy together.

use chrono::{DateTime, Utc};
use tracing::warn;

use lendhub_core::config::AppConfig;
use lendhub_core::error::LendError;
use lendhub_core::result::LendResult;
use lendhub_core::types::{HolderId, ResourceId};
use lendhub_entity::holder::Holder;
use lendhub_entity::loan::Loan;
use lendhub_entity::resource::{Resource, ResourceKind};

use crate::ledger::{LoanLedger, LoanTerms};
use crate::pool::{PoolStatus, ResourcePool};
use crate::rate::RatePolicy;

/// The full lending engine: pool, ledger, and rate policy behind one
/// checkout/checkin surface.
///
/// Pool and ledger stay decoupled; the engine is the only place that
/// sequences allocate-then-open and close-then-release.
#[derive(Debug, Clone)]
pub struct LendingEngine {
    /// The resource pool.
    pool: ResourcePool,
    /// The loan ledger.
    ledger: LoanLedger,
    /// The rate policy applied on checkin.
    policy: RatePolicy,
}

impl LendingEngine {
    /// Create an engine from already-built collaborators.
    pub fn new(pool: ResourcePool, ledger: LoanLedger, policy: RatePolicy) -> Self {
        Self {
            pool,
            ledger,
            policy,
        }
    }

    /// Build an engine from application configuration.
    pub fn from_config(config: &AppConfig) -> LendResult<Self> {
        let policy = RatePolicy::from_config(&config.rates)?;
        let pool = ResourcePool::from_config(&config.pool);
        let ledger = LoanLedger::new(LoanTerms::from(&config.ledger));
        Ok(Self::new(pool, ledger, policy))
    }

    /// Allocate the first free resource of `kind` to `holder` and open a
    /// loan on it.
    ///
    /// When the ledger refuses the loan (ceiling reached), the freshly
    /// allocated resource is released again so the pool stays exactly as
    /// it was before the call.
    pub fn check_out(
        &mut self,
        holder: &Holder,
        kind: &ResourceKind,
        now: DateTime<Utc>,
    ) -> LendResult<Loan> {
        let resource = self.pool.allocate(kind)?;

        match self.ledger.open(holder, &resource, now) {
            Ok(loan) => Ok(loan),
            Err(err) => {
                if let Err(release_err) = self.pool.release(resource.id) {
                    warn!(
                        resource_id = %resource.id,
                        error = %release_err,
                        "Failed to roll back allocation after open failure"
                    );
                }
                Err(err)
            }
        }
    }

    /// Close the holder's open loan on `resource_id`, release the
    /// resource, and return the computed charge in cents.
    pub fn check_in(
        &mut self,
        holder_id: HolderId,
        resource_id: ResourceId,
        now: DateTime<Utc>,
    ) -> LendResult<i64> {
        let resource = self
            .pool
            .get(resource_id)
            .cloned()
            .ok_or_else(|| LendError::not_found(format!("Resource {resource_id} not found")))?;

        let charge = self.ledger.close(holder_id, &resource, now, &self.policy)?;
        self.pool.release(resource_id)?;
        Ok(charge)
    }

    /// Add a resource to the pool (administrative).
    pub fn add_resource(&mut self, kind: ResourceKind, label: impl Into<String>) -> ResourceId {
        self.pool.add(kind, label)
    }

    /// Remove an unoccupied resource from the pool (administrative).
    pub fn remove_resource(&mut self, id: ResourceId) -> LendResult<Resource> {
        self.pool.remove(id)
    }

    /// Look up a resource by ID.
    pub fn resource(&self, id: ResourceId) -> Option<&Resource> {
        self.pool.get(id)
    }

    /// Current pool occupancy snapshot.
    pub fn pool_status(&self) -> PoolStatus {
        self.pool.status()
    }

    /// Number of currently open loans held by `holder_id`.
    pub fn open_loan_count_for(&self, holder_id: HolderId) -> u32 {
        self.ledger.open_loan_count_for(holder_id)
    }

    /// All loans ever opened by `holder_id`, in open order.
    pub fn history_for(&self, holder_id: HolderId) -> Vec<&Loan> {
        self.ledger.history_for(holder_id)
    }

    /// Open term loans past their due date at `now`.
    pub fn overdue_loans(&self, now: DateTime<Utc>) -> Vec<&Loan> {
        self.ledger.overdue_loans(now)
    }

    /// The underlying pool, read-only.
    pub fn pool(&self) -> &ResourcePool {
        &self.pool
    }

    /// The underlying ledger, read-only.
    pub fn ledger(&self) -> &LoanLedger {
        &self.ledger
    }
}
