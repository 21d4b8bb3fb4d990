use std::collections::BTreeMap;

use super::common::{EntityId, Position, Timestamp};

/// What an agent remembers about one hostile entity.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemoryEntry {
    pub entity: EntityId,
    pub last_seen: Timestamp,
    pub last_position: Position,
    /// Current confidence in `[0, 1]`. Never increases between sightings.
    pub confidence: f32,
    /// Confidence assigned at the last sighting; the starting point for decay.
    pub sighted_confidence: f32,
}

impl MemoryEntry {
    /// Creates an entry for a fresh sighting.
    pub fn sighted(
        entity: EntityId,
        position: Position,
        confidence: f32,
        now: Timestamp,
    ) -> Self {
        Self {
            entity,
            last_seen: now,
            last_position: position,
            confidence,
            sighted_confidence: confidence,
        }
    }

    /// Milliseconds since this entity was last seen.
    #[inline]
    pub fn age(&self, now: Timestamp) -> u64 {
        now.since(self.last_seen)
    }
}

/// Per-agent memory keyed by remembered entity.
///
/// Ordered so that iteration, and therefore emitted memory cues, is stable.
pub type MemoryMap = BTreeMap<EntityId, MemoryEntry>;
