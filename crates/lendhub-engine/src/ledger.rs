//! Loan ledger: open/close lifecycle, per-holder limits, and history.

use chrono::{DateTime, Duration, Utc};
use tracing::{info, warn};

use lendhub_core::config::ledger::LedgerConfig;
use lendhub_core::error::LendError;
use lendhub_core::result::LendResult;
use lendhub_core::types::{HolderId, LoanId, LoanLimit, ResourceId};
use lendhub_entity::holder::Holder;
use lendhub_entity::loan::Loan;
use lendhub_entity::resource::Resource;

use crate::rate::RatePolicy;

/// Construction-time ledger parameters: the open-loan ceiling and the
/// optional fixed term that sets each loan's due date.
#[derive(Debug, Clone, Copy)]
pub struct LoanTerms {
    /// Maximum concurrently open loans per ordinary holder.
    pub max_open_loans: LoanLimit,
    /// Fixed loan term. `None` for open-ended (metered) loans.
    pub term: Option<Duration>,
}

impl LoanTerms {
    /// Terms with no ceiling and no due date.
    pub fn unbounded() -> Self {
        Self {
            max_open_loans: LoanLimit::Unlimited,
            term: None,
        }
    }
}

impl From<&LedgerConfig> for LoanTerms {
    fn from(config: &LedgerConfig) -> Self {
        Self {
            max_open_loans: config.loan_limit(),
            term: config.term(),
        }
    }
}

/// The set of active and historical loans.
///
/// The ledger enforces the per-holder open-loan ceiling and the
/// one-open-loan-per-resource invariant, and computes the charge through
/// the rate policy on close. It never calls the pool: the caller
/// allocates before opening and releases after closing.
#[derive(Debug, Clone)]
pub struct LoanLedger {
    /// Ceiling and term applied to every open.
    terms: LoanTerms,
    /// Full loan history in open order. Loans are never deleted.
    loans: Vec<Loan>,
}

impl LoanLedger {
    /// Create an empty ledger with the given terms.
    pub fn new(terms: LoanTerms) -> Self {
        Self {
            terms,
            loans: Vec::new(),
        }
    }

    /// The terms this ledger was constructed with.
    pub fn terms(&self) -> &LoanTerms {
        &self.terms
    }

    /// Open a loan for `holder` on an already-allocated `resource`.
    ///
    /// Fails with `ResourceNotAllocated` when the resource is not marked
    /// occupied, with `ResourceBusy` when another open loan already
    /// references it, and with `LimitExceeded` when the holder's
    /// effective ceiling is reached. Privileged holders have no ceiling.
    pub fn open(
        &mut self,
        holder: &Holder,
        resource: &Resource,
        now: DateTime<Utc>,
    ) -> LendResult<Loan> {
        if !resource.is_occupied() {
            return Err(LendError::resource_not_allocated(format!(
                "Resource {} must be allocated before a loan is opened on it",
                resource.id
            )));
        }

        if self.open_loan_for_resource(resource.id).is_some() {
            return Err(LendError::resource_busy(format!(
                "Resource {} already has an open loan",
                resource.id
            )));
        }

        let limit = holder.effective_limit(self.terms.max_open_loans);
        let open_count = self.open_loan_count_for(holder.id);
        if limit.is_exceeded_by(open_count) {
            warn!(
                holder_id = %holder.id,
                open_count,
                limit = ?limit.as_max(),
                "Open-loan ceiling reached"
            );
            return Err(LendError::limit_exceeded(format!(
                "Holder {} already has {} open loans",
                holder.id, open_count
            )));
        }

        let due_at = self.terms.term.map(|term| now + term);
        let loan = Loan::open(resource.id, holder.id, now, due_at);

        info!(
            loan_id = %loan.id,
            holder_id = %holder.id,
            resource_id = %resource.id,
            due_at = ?due_at,
            "Loan opened"
        );

        self.loans.push(loan.clone());
        Ok(loan)
    }

    /// Close the unique open loan for the (holder, resource) pair.
    ///
    /// Sets `closed_at`, computes the charge through `policy`, and
    /// returns it in cents. Fails with `AlreadyClosed` when the pair's
    /// loans are all closed already and with `NoOpenLoan` when the pair
    /// never had one. The caller releases the resource afterwards.
    pub fn close(
        &mut self,
        holder_id: HolderId,
        resource: &Resource,
        now: DateTime<Utc>,
        policy: &RatePolicy,
    ) -> LendResult<i64> {
        let index = match self
            .loans
            .iter()
            .position(|l| l.is_open() && l.holder_id == holder_id && l.resource_id == resource.id)
        {
            Some(index) => index,
            None => {
                // Closed is terminal: re-closing a settled pair is a
                // distinct failure from never having borrowed at all.
                let had_loan = self
                    .loans
                    .iter()
                    .any(|l| l.holder_id == holder_id && l.resource_id == resource.id);
                return Err(if had_loan {
                    LendError::already_closed(format!(
                        "Loan for holder {holder_id} on resource {} is already closed",
                        resource.id
                    ))
                } else {
                    LendError::no_open_loan(format!(
                        "No open loan for holder {holder_id} on resource {}",
                        resource.id
                    ))
                });
            }
        };

        if now < self.loans[index].opened_at {
            return Err(LendError::validation(format!(
                "Close time {now} precedes the loan's open time"
            )));
        }

        let (opened_at, due_at) = (self.loans[index].opened_at, self.loans[index].due_at);
        let charge = policy.charge(&resource.kind, opened_at, due_at, now)?;

        let loan = &mut self.loans[index];
        loan.closed_at = Some(now);
        loan.charge_cents = Some(charge);

        info!(
            loan_id = %loan.id,
            holder_id = %holder_id,
            resource_id = %resource.id,
            charge_cents = charge,
            "Loan closed"
        );

        Ok(charge)
    }

    /// Look up a loan by ID.
    pub fn loan(&self, id: LoanId) -> Option<&Loan> {
        self.loans.iter().find(|l| l.id == id)
    }

    /// Number of currently open loans held by `holder_id`. Read-only.
    pub fn open_loan_count_for(&self, holder_id: HolderId) -> u32 {
        self.loans
            .iter()
            .filter(|l| l.is_open() && l.holder_id == holder_id)
            .count() as u32
    }

    /// All loans ever opened by `holder_id`, in open order. Read-only.
    pub fn history_for(&self, holder_id: HolderId) -> Vec<&Loan> {
        self.loans
            .iter()
            .filter(|l| l.holder_id == holder_id)
            .collect()
    }

    /// Open term loans past their due date at `now`. Read-only.
    pub fn overdue_loans(&self, now: DateTime<Utc>) -> Vec<&Loan> {
        self.loans.iter().filter(|l| l.is_overdue(now)).collect()
    }

    /// Total number of loans ever recorded.
    pub fn len(&self) -> usize {
        self.loans.len()
    }

    /// Whether the ledger has recorded no loans at all.
    pub fn is_empty(&self) -> bool {
        self.loans.is_empty()
    }

    fn open_loan_for_resource(&self, resource_id: ResourceId) -> Option<&Loan> {
        self.loans
            .iter()
            .find(|l| l.is_open() && l.resource_id == resource_id)
    }
}
