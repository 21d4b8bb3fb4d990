//! Perception: what an agent sees now and what it still remembers.
//!
//! [`perceive`] is pure. It returns the cue list and the updated memory map;
//! the caller decides whether to commit the memory.
mod cue;
pub mod memory;

pub use cue::{CuePriority, CueResponse, CueStrength, CueType, PerceptionCue};

use tracing::trace;

use crate::env::PerceptionConfig;
use crate::snapshot::WorldSnapshot;
use crate::state::{EntityId, FactionSet, MemoryMap, Position, Timestamp};

/// Everything about the observing agent that perception reads.
#[derive(Clone, Copy, Debug)]
pub struct PerceptionInput<'a> {
    pub entity: EntityId,
    pub position: Position,
    /// Facing direction; the agent's current velocity.
    pub facing: Position,
    pub factions: FactionSet,
    pub spawn: Position,
    pub config: &'a PerceptionConfig,
    pub memory: &'a MemoryMap,
    pub now: Timestamp,
}

/// Result of one perception pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Perception {
    /// Visual cues first (ascending entity id), then one memory cue per remembered entity.
    pub cues: Vec<PerceptionCue>,
    pub memory: MemoryMap,
}

impl Perception {
    pub fn visual(&self) -> impl Iterator<Item = &PerceptionCue> {
        self.cues.iter().filter(|cue| cue.kind == CueType::Visual)
    }
}

/// Gathers cues for one agent from `snapshot` and ages its memory.
pub fn perceive(input: &PerceptionInput<'_>, snapshot: &WorldSnapshot) -> Perception {
    let range = input.config.visual_range;
    let mut cues: Vec<PerceptionCue> = Vec::new();

    for id in snapshot.candidates(input.position, range) {
        if id == input.entity {
            continue;
        }
        let (Some(position), Some(factions)) = (snapshot.position(id), snapshot.factions(id))
        else {
            continue;
        };
        let distance = input.position.distance(position);
        if distance > range
            || !in_field_of_view(input, position)
            || !input.factions.is_hostile_to(factions)
        {
            continue;
        }

        let fraction = if range > 0.0 { distance / range } else { 0.0 };
        let cue = PerceptionCue {
            kind: CueType::Visual,
            strength: CueStrength::from_range_fraction(fraction),
            source: Some(id),
            position,
            timestamp: input.now,
        };
        trace!(agent = %input.entity, source = %id, strength = %cue.strength, distance, "visual cue");
        cues.push(cue);
    }

    let effective = memory::effective_duration(input.config, input.position, input.spawn);
    let decayed = memory::decay(input.memory, input.now, effective);
    let memory = memory::refresh(decayed, &cues, input.now);

    cues.extend(memory.values().map(|entry| PerceptionCue {
        kind: CueType::Memory,
        strength: CueStrength::from_confidence(entry.confidence),
        source: Some(entry.entity),
        position: entry.last_position,
        timestamp: entry.last_seen,
    }));

    Perception { cues, memory }
}

fn in_field_of_view(input: &PerceptionInput<'_>, target: Position) -> bool {
    if input.config.is_omnidirectional() {
        return true;
    }
    let Some(facing) = input.facing.normalized() else {
        return true;
    };
    let Some(toward) = (target - input.position).normalized() else {
        return true;
    };
    let angle = facing.dot(toward).clamp(-1.0, 1.0).acos().to_degrees();
    angle <= input.config.fov_degrees / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MemoryEntry;

    const AGENT: EntityId = EntityId(1);

    fn config(fov: f32) -> PerceptionConfig {
        PerceptionConfig {
            visual_range: 100.0,
            fov_degrees: fov,
            memory_duration_ms: 5_000,
            leash_distance: 300.0,
        }
    }

    fn input<'a>(config: &'a PerceptionConfig, memory: &'a MemoryMap, facing: Position) -> PerceptionInput<'a> {
        PerceptionInput {
            entity: AGENT,
            position: Position::ORIGIN,
            facing,
            factions: FactionSet::ENEMY,
            spawn: Position::ORIGIN,
            config,
            memory,
            now: Timestamp(1_000),
        }
    }

    fn world() -> WorldSnapshot {
        WorldSnapshot::builder(Default::default())
            .cell_size(32.0)
            .entity(AGENT, Position::ORIGIN, FactionSet::ENEMY)
            .entity(EntityId(2), Position::new(10.0, 0.0), FactionSet::PLAYER)
            .entity(EntityId(3), Position::new(-50.0, 0.0), FactionSet::ALLY)
            .entity(EntityId(4), Position::new(20.0, 0.0), FactionSet::ENEMY)
            .entity(EntityId(5), Position::new(150.0, 0.0), FactionSet::PLAYER)
            .build()
    }

    #[test]
    fn sees_hostiles_in_range_with_tiered_strength() {
        let config = config(360.0);
        let memory = MemoryMap::new();
        let result = perceive(&input(&config, &memory, Position::ORIGIN), &world());

        let visual: Vec<_> = result.visual().collect();
        assert_eq!(visual.len(), 2);
        assert_eq!(visual[0].source, Some(EntityId(2)));
        assert_eq!(visual[0].strength, CueStrength::Overwhelming);
        assert_eq!(visual[1].source, Some(EntityId(3)));
        assert_eq!(visual[1].strength, CueStrength::Strong);
    }

    #[test]
    fn memory_cues_follow_visual_cues() {
        let config = config(360.0);
        let memory = MemoryMap::new();
        let result = perceive(&input(&config, &memory, Position::ORIGIN), &world());

        let kinds: Vec<_> = result.cues.iter().map(|cue| cue.kind).collect();
        assert_eq!(
            kinds,
            vec![CueType::Visual, CueType::Visual, CueType::Memory, CueType::Memory]
        );
        assert_eq!(result.memory[&EntityId(2)].confidence, 1.0);
        assert_eq!(result.memory[&EntityId(3)].confidence, 0.75);
    }

    #[test]
    fn narrow_fov_excludes_targets_behind() {
        let config = config(90.0);
        let memory = MemoryMap::new();
        let result = perceive(&input(&config, &memory, Position::new(1.0, 0.0)), &world());

        let sources: Vec<_> = result.visual().map(|cue| cue.source).collect();
        assert_eq!(sources, vec![Some(EntityId(2))]);
    }

    #[test]
    fn stationary_agent_is_omnidirectional() {
        let config = config(90.0);
        let memory = MemoryMap::new();
        let result = perceive(&input(&config, &memory, Position::new(0.0001, 0.0)), &world());
        assert_eq!(result.visual().count(), 2);
    }

    #[test]
    fn unseen_memory_decays_and_is_reported() {
        let config = config(360.0);
        let remembered = MemoryEntry::sighted(EntityId(7), Position::new(60.0, 60.0), 1.0, Timestamp(0));
        let memory = MemoryMap::from([(EntityId(7), remembered)]);
        let result = perceive(&input(&config, &memory, Position::ORIGIN), &world());

        let entry = result.memory[&EntityId(7)];
        assert!((entry.confidence - 0.8).abs() < 1e-6);
        let last = result.cues.last().unwrap();
        assert_eq!(last.kind, CueType::Memory);
        assert_eq!(last.source, Some(EntityId(7)));
        assert_eq!(last.strength, CueStrength::Strong);
        assert_eq!(last.position, Position::new(60.0, 60.0));
    }

    #[test]
    fn input_memory_is_untouched() {
        let config = config(360.0);
        let memory = MemoryMap::new();
        let _ = perceive(&input(&config, &memory, Position::ORIGIN), &world());
        assert!(memory.is_empty());
    }
}
