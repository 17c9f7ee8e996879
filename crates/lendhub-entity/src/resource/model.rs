//! Resource entity model.

use serde::{Deserialize, Serialize};

use lendhub_core::types::ResourceId;

use super::kind::ResourceKind;

/// An exclusively allocatable unit in the resource pool (a book copy,
/// a parking spot).
///
/// Owned by the pool; callers only ever see shared references or clones,
/// so the `occupied` flag can change only through pool operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// Unique resource identifier.
    pub id: ResourceId,
    /// The resource's type tag. Allocation matches on this exactly.
    pub kind: ResourceKind,
    /// Human-readable label, e.g. `"car-2"` or a book title.
    pub label: String,
    occupied: bool,
}

impl Resource {
    /// Create a new, unoccupied resource.
    pub fn new(kind: ResourceKind, label: impl Into<String>) -> Self {
        Self {
            id: ResourceId::new(),
            kind,
            label: label.into(),
            occupied: false,
        }
    }

    /// Whether an open loan currently references this resource.
    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    /// Flip the occupancy flag. Reserved for pool allocation bookkeeping.
    #[doc(hidden)]
    pub fn set_occupied(&mut self, occupied: bool) {
        self.occupied = occupied;
    }
}
