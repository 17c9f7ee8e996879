//! Exclusive resource pool with first-fit, insertion-order allocation.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use lendhub_core::config::pool::PoolConfig;
use lendhub_core::error::LendError;
use lendhub_core::result::LendResult;
use lendhub_core::types::ResourceId;
use lendhub_entity::resource::{Resource, ResourceKind};

/// A resource plus its position in the pool's insertion order.
#[derive(Debug, Clone)]
struct PoolEntry {
    /// The owned resource.
    resource: Resource,
    /// Monotonically increasing insertion sequence number. Allocation
    /// always picks the free entry with the lowest sequence.
    seq: u64,
}

/// Snapshot of the pool's occupancy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolStatus {
    /// Total resources in the pool.
    pub total: u32,
    /// Resources currently allocated.
    pub occupied: u32,
    /// Resources available for allocation.
    pub available: u32,
    /// Usage as a percentage.
    pub usage_percent: f64,
}

/// A pool of typed, exclusively allocatable resources.
///
/// Allocation is first-fit over insertion order: the earliest-added free
/// resource of the requested kind wins. Free resources are indexed per
/// kind by their insertion sequence, so allocation does not scan the
/// whole pool yet observes exactly the order resources were added in,
/// and a released resource returns to its original position.
#[derive(Debug, Clone, Default)]
pub struct ResourcePool {
    /// All resources, keyed by ID.
    entries: HashMap<ResourceId, PoolEntry>,
    /// Free resources per kind, ordered by insertion sequence.
    free: HashMap<ResourceKind, BTreeMap<u64, ResourceId>>,
    /// Next insertion sequence number.
    next_seq: u64,
}

impl ResourcePool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pool from a composition config, creating resources
    /// group by group in list order with labels `"{kind}-{n}"`.
    pub fn from_config(config: &PoolConfig) -> Self {
        let mut pool = Self::new();
        for slot in &config.composition {
            let kind = ResourceKind::from(slot.kind.as_str());
            for n in 0..slot.count {
                pool.add(kind.clone(), format!("{}-{}", slot.kind, n + 1));
            }
        }
        info!(total = pool.len(), "Resource pool built from config");
        pool
    }

    /// Add a new, unoccupied resource to the pool.
    pub fn add(&mut self, kind: ResourceKind, label: impl Into<String>) -> ResourceId {
        let resource = Resource::new(kind.clone(), label);
        let id = resource.id;
        let seq = self.next_seq;
        self.next_seq += 1;

        self.free.entry(kind).or_default().insert(seq, id);
        self.entries.insert(id, PoolEntry { resource, seq });
        id
    }

    /// Remove a resource from the pool.
    ///
    /// Fails with `ResourceBusy` while the resource is allocated and with
    /// `NotFound` for unknown IDs.
    pub fn remove(&mut self, id: ResourceId) -> LendResult<Resource> {
        let occupied = self
            .entries
            .get(&id)
            .map(|e| e.resource.is_occupied())
            .ok_or_else(|| LendError::not_found(format!("Resource {id} not found")))?;

        if occupied {
            return Err(LendError::resource_busy(format!(
                "Resource {id} is currently allocated and cannot be removed"
            )));
        }

        let Some(entry) = self.entries.remove(&id) else {
            return Err(LendError::not_found(format!("Resource {id} not found")));
        };
        if let Some(slots) = self.free.get_mut(&entry.resource.kind) {
            slots.remove(&entry.seq);
        }

        info!(resource_id = %id, kind = %entry.resource.kind, "Resource removed from pool");
        Ok(entry.resource)
    }

    /// Allocate the first free resource of the given kind, in insertion
    /// order, marking it occupied.
    ///
    /// Fails with `NoResourceAvailable` when no free resource of the kind
    /// exists.
    pub fn allocate(&mut self, kind: &ResourceKind) -> LendResult<Resource> {
        let id = self
            .free
            .get_mut(kind)
            .and_then(|slots| slots.pop_first())
            .map(|(_, id)| id)
            .ok_or_else(|| {
                LendError::no_resource_available(format!(
                    "No free resource of kind '{kind}' available"
                ))
            })?;

        let Some(entry) = self.entries.get_mut(&id) else {
            return Err(LendError::not_found(format!(
                "Resource {id} missing from pool index"
            )));
        };
        entry.resource.set_occupied(true);

        info!(
            resource_id = %id,
            kind = %kind,
            label = %entry.resource.label,
            "Resource allocated"
        );
        Ok(entry.resource.clone())
    }

    /// Mark a resource free again, re-indexing it at its original
    /// insertion position.
    ///
    /// Fails with `NotFound` for unknown IDs and with `AlreadyFree` when
    /// the resource is not occupied.
    pub fn release(&mut self, id: ResourceId) -> LendResult<()> {
        let entry = self
            .entries
            .get_mut(&id)
            .ok_or_else(|| LendError::not_found(format!("Resource {id} not found")))?;

        if !entry.resource.is_occupied() {
            warn!(resource_id = %id, "Attempted to release a resource that was already free");
            return Err(LendError::already_free(format!(
                "Resource {id} is already free"
            )));
        }

        entry.resource.set_occupied(false);
        self.free
            .entry(entry.resource.kind.clone())
            .or_default()
            .insert(entry.seq, id);

        info!(resource_id = %id, kind = %entry.resource.kind, "Resource released");
        Ok(())
    }

    /// Look up a resource by ID.
    pub fn get(&self, id: ResourceId) -> Option<&Resource> {
        self.entries.get(&id).map(|e| &e.resource)
    }

    /// Total number of resources in the pool.
    pub fn len(&self) -> u32 {
        self.entries.len() as u32
    }

    /// Whether the pool holds no resources at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of free resources of the given kind.
    pub fn free_count(&self, kind: &ResourceKind) -> u32 {
        self.free.get(kind).map_or(0, |slots| slots.len() as u32)
    }

    /// Current occupancy snapshot.
    pub fn status(&self) -> PoolStatus {
        let total = self.len();
        let occupied = self
            .entries
            .values()
            .filter(|e| e.resource.is_occupied())
            .count() as u32;

        PoolStatus {
            total,
            occupied,
            available: total - occupied,
            usage_percent: if total == 0 {
                0.0
            } else {
                (occupied as f64 / total as f64) * 100.0
            },
        }
    }
}
