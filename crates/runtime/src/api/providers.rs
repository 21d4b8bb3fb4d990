//! Snapshot provider abstraction.
//!
//! The world projection that feeds the decision core lives outside this
//! crate. The runtime only asks it for one read-only snapshot per region per
//! tick.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use npc_core::{RegionId, WorldSnapshot};

/// Source of per-region world snapshots.
pub trait SnapshotProvider: Send + Sync {
    /// Returns the state of `region` as of tick start, or `None` if the
    /// region is not currently simulated.
    fn snapshot(&self, region: RegionId) -> Option<WorldSnapshot>;
}

/// Snapshot provider holding the latest published snapshot of each region.
///
/// The simulation publishes a fresh snapshot before every tick; the runtime
/// reads whatever was published last.
#[derive(Debug, Default)]
pub struct InMemorySnapshotProvider {
    regions: RwLock<BTreeMap<RegionId, WorldSnapshot>>,
}

impl InMemorySnapshotProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stored snapshot for the snapshot's region.
    pub fn publish(&self, snapshot: WorldSnapshot) {
        let mut regions = self.regions.write().unwrap_or_else(PoisonError::into_inner);
        regions.insert(snapshot.region, snapshot);
    }

    /// Stops serving `region`.
    pub fn clear(&self, region: RegionId) {
        let mut regions = self.regions.write().unwrap_or_else(PoisonError::into_inner);
        regions.remove(&region);
    }
}

impl SnapshotProvider for InMemorySnapshotProvider {
    fn snapshot(&self, region: RegionId) -> Option<WorldSnapshot> {
        let regions = self.regions.read().unwrap_or_else(PoisonError::into_inner);
        regions.get(&region).cloned()
    }
}
