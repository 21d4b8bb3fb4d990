//! Memory decay and refresh.
//!
//! Each entry fades linearly from the confidence it was sighted with toward
//! zero over the effective memory duration. Entries are forgotten once they
//! outlive that duration or fade to [`AiConfig::MIN_CONFIDENCE`].

use crate::config::AiConfig;
use crate::env::PerceptionConfig;
use crate::state::{MemoryEntry, MemoryMap, Position, Timestamp};

use super::cue::{CueType, PerceptionCue};

/// Memory duration in effect for an agent standing at `position`.
///
/// Quartered while the agent is farther than its leash distance from spawn.
pub fn effective_duration(config: &PerceptionConfig, position: Position, spawn: Position) -> u64 {
    if position.distance(spawn) > config.leash_distance {
        config.memory_duration_ms / AiConfig::LEASH_MEMORY_DIVISOR
    } else {
        config.memory_duration_ms
    }
}

/// Returns `memory` aged to `now`, without entries that should be forgotten.
///
/// Confidence never rises during decay, even if the effective duration grew
/// since the previous pass.
pub fn decay(memory: &MemoryMap, now: Timestamp, effective_ms: u64) -> MemoryMap {
    if effective_ms == 0 {
        return MemoryMap::new();
    }

    memory
        .iter()
        .filter_map(|(&id, entry)| {
            let age = entry.age(now);
            if age > effective_ms {
                return None;
            }
            let remaining = 1.0 - (age as f32 / effective_ms as f32);
            let confidence = (entry.sighted_confidence * remaining).min(entry.confidence);
            if confidence <= AiConfig::MIN_CONFIDENCE {
                return None;
            }
            Some((
                id,
                MemoryEntry {
                    confidence,
                    ..*entry
                },
            ))
        })
        .collect()
}

/// Inserts or overwrites an entry for every visual cue with a source.
pub fn refresh(mut memory: MemoryMap, cues: &[PerceptionCue], now: Timestamp) -> MemoryMap {
    for cue in cues.iter().filter(|cue| cue.kind == CueType::Visual) {
        if let Some(source) = cue.source {
            memory.insert(
                source,
                MemoryEntry::sighted(source, cue.position, cue.strength.confidence(), now),
            );
        }
    }
    memory
}
