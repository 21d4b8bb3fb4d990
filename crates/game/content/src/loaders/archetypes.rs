//! Archetype catalog loader.
//!
//! ```text
//! {
//!     "goblin_scout": (
//!         behavior: Patrol,
//!         perception: (visual_range: 160.0, fov_degrees: 120.0, memory_duration_ms: 4000, leash_distance: 250.0),
//!         cue_priorities: [(cue_type: Visual, min_strength: Weak, priority: 10, response: Engage)],
//!         decision_interval_ms: 400,
//!     ),
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use npc_core::Archetype;

use crate::loaders::{LoadResult, parse_ron};

/// Loader for archetypes keyed by id.
pub struct ArchetypeLoader;

impl ArchetypeLoader {
    pub fn load(path: &Path) -> LoadResult<BTreeMap<String, Archetype>> {
        let archetypes: BTreeMap<String, Archetype> = parse_ron(path, "archetype")?;
        tracing::debug!(count = archetypes.len(), path = %path.display(), "loaded archetypes");
        Ok(archetypes)
    }
}
