//! Holder entity model.

use serde::{Deserialize, Serialize};

use lendhub_core::types::{HolderId, LoanLimit};

/// The kind of holder, replacing the privileged/ordinary class split with
/// a tagged variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolderKind {
    /// A regular holder, subject to the configured open-loan ceiling.
    Ordinary,
    /// A privileged holder (staff), exempt from the open-loan ceiling.
    Privileged,
}

/// The entity borrowing or occupying a resource (a library member,
/// a vehicle).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holder {
    /// Unique holder identifier.
    pub id: HolderId,
    /// Display name or registration, e.g. `"Bob"` or `"ABC123"`.
    pub name: String,
    /// Privilege level of this holder.
    pub kind: HolderKind,
}

impl Holder {
    /// Create a new ordinary holder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: HolderId::new(),
            name: name.into(),
            kind: HolderKind::Ordinary,
        }
    }

    /// Create a new privileged holder.
    pub fn privileged(name: impl Into<String>) -> Self {
        Self {
            id: HolderId::new(),
            name: name.into(),
            kind: HolderKind::Privileged,
        }
    }

    /// Resolve the open-loan limit that applies to this holder.
    ///
    /// Privileged holders are unlimited regardless of the configured
    /// ceiling.
    pub fn effective_limit(&self, configured: LoanLimit) -> LoanLimit {
        match self.kind {
            HolderKind::Ordinary => configured,
            HolderKind::Privileged => LoanLimit::Unlimited,
        }
    }
}
