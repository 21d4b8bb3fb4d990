//! Read-only per-region world state for one tick.
//!
//! Snapshots are produced outside the decision core and shared by every
//! agent in the region. Nothing in a decision pass mutates them, so agents
//! only ever observe last tick's committed state.
mod spatial;

pub use spatial::{CellCoord, SpatialIndex};

use std::collections::{BTreeMap, BTreeSet};

use crate::state::{EntityId, FactionSet, Position, RegionId};

/// Positions, velocities and factions of every entity in a region.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldSnapshot {
    pub region: RegionId,
    pub positions: BTreeMap<EntityId, Position>,
    pub velocities: BTreeMap<EntityId, Position>,
    pub factions: BTreeMap<EntityId, FactionSet>,
    pub buckets: SpatialIndex,
}

impl WorldSnapshot {
    pub fn builder(region: RegionId) -> WorldSnapshotBuilder {
        WorldSnapshotBuilder::new(region)
    }

    #[inline]
    pub fn position(&self, entity: EntityId) -> Option<Position> {
        self.positions.get(&entity).copied()
    }

    /// Current velocity; entities without one are stationary.
    #[inline]
    pub fn velocity(&self, entity: EntityId) -> Position {
        self.velocities.get(&entity).copied().unwrap_or_default()
    }

    #[inline]
    pub fn factions(&self, entity: EntityId) -> Option<FactionSet> {
        self.factions.get(&entity).copied()
    }

    /// Candidate entities near `center`, read from the bucket index.
    pub fn candidates(&self, center: Position, radius: f32) -> BTreeSet<EntityId> {
        self.buckets.entities_near(center, radius)
    }
}

/// Assembles a [`WorldSnapshot`], bucketing each entity as it is added.
#[derive(Clone, Debug)]
pub struct WorldSnapshotBuilder {
    snapshot: WorldSnapshot,
}

impl WorldSnapshotBuilder {
    pub fn new(region: RegionId) -> Self {
        Self {
            snapshot: WorldSnapshot {
                region,
                positions: BTreeMap::new(),
                velocities: BTreeMap::new(),
                factions: BTreeMap::new(),
                buckets: SpatialIndex::default(),
            },
        }
    }

    /// Sets the bucket size. Must be called before any entity is added.
    pub fn cell_size(mut self, cell_size: f32) -> Self {
        self.snapshot.buckets = SpatialIndex::new(cell_size);
        self
    }

    /// Adds a stationary entity.
    pub fn entity(self, id: EntityId, position: Position, factions: FactionSet) -> Self {
        self.moving_entity(id, position, Position::ORIGIN, factions)
    }

    pub fn moving_entity(
        mut self,
        id: EntityId,
        position: Position,
        velocity: Position,
        factions: FactionSet,
    ) -> Self {
        self.snapshot.positions.insert(id, position);
        self.snapshot.velocities.insert(id, velocity);
        self.snapshot.factions.insert(id, factions);
        self.snapshot.buckets.insert(id, position);
        self
    }

    pub fn build(self) -> WorldSnapshot {
        self.snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_indexes_entities() {
        let snapshot = WorldSnapshot::builder(RegionId(1))
            .cell_size(16.0)
            .entity(EntityId(1), Position::new(1.0, 1.0), FactionSet::ENEMY)
            .moving_entity(
                EntityId(2),
                Position::new(40.0, 1.0),
                Position::new(1.0, 0.0),
                FactionSet::PLAYER,
            )
            .build();

        assert_eq!(snapshot.position(EntityId(2)), Some(Position::new(40.0, 1.0)));
        assert_eq!(snapshot.velocity(EntityId(1)), Position::ORIGIN);
        assert_eq!(snapshot.velocity(EntityId(9)), Position::ORIGIN);
        assert_eq!(snapshot.factions(EntityId(2)), Some(FactionSet::PLAYER));
        assert!(snapshot.candidates(Position::new(0.0, 0.0), 10.0).contains(&EntityId(1)));
        assert!(!snapshot.candidates(Position::new(0.0, 0.0), 10.0).contains(&EntityId(2)));
    }
}
