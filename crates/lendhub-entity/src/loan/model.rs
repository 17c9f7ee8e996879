//! Loan entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lendhub_core::types::{HolderId, LoanId, ResourceId};

/// A record spanning the allocation-to-release lifetime of one resource
/// held by one holder.
///
/// Loans are never deleted; closed loans are retained as history.
/// A loan is open until `closed_at` is set, and closed is terminal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    /// Unique loan identifier.
    pub id: LoanId,
    /// The resource this loan holds.
    pub resource_id: ResourceId,
    /// The holder that opened the loan.
    pub holder_id: HolderId,
    /// When the loan was opened.
    pub opened_at: DateTime<Utc>,
    /// When the loan falls due (None for open-ended, metered loans).
    pub due_at: Option<DateTime<Utc>>,
    /// When the loan was closed (None = still open).
    pub closed_at: Option<DateTime<Utc>>,
    /// Charge computed at close time, in cents. Defined iff closed.
    pub charge_cents: Option<i64>,
}

impl Loan {
    /// Create a new open loan.
    pub fn open(
        resource_id: ResourceId,
        holder_id: HolderId,
        opened_at: DateTime<Utc>,
        due_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: LoanId::new(),
            resource_id,
            holder_id,
            opened_at,
            due_at,
            closed_at: None,
            charge_cents: None,
        }
    }

    /// Whether this loan is still open.
    pub fn is_open(&self) -> bool {
        self.closed_at.is_none()
    }

    /// Whether this loan is open and past its due date.
    ///
    /// Always false for loans without a due date and for closed loans.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        match self.due_at {
            Some(due_at) => self.is_open() && now > due_at,
            None => false,
        }
    }
}
