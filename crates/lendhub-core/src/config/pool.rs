//! Resource pool configuration.

use serde::{Deserialize, Serialize};

/// Initial composition of the resource pool.
///
/// The list order is meaningful: resources are created slot-group by
/// slot-group in list order, which fixes the insertion order the pool's
/// first-fit allocation honors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Ordered (kind, count) pairs making up the pool.
    pub composition: Vec<PoolSlotConfig>,
}

/// One group of identical slots in the pool composition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolSlotConfig {
    /// Resource kind, e.g. `"book"` or `"car"`.
    pub kind: String,
    /// Number of resources of this kind to create.
    pub count: u32,
}

impl PoolConfig {
    /// Total number of resources the composition describes.
    pub fn total_slots(&self) -> u32 {
        self.composition.iter().map(|s| s.count).sum()
    }
}
