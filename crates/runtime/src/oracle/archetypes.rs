//! Archetype oracle implementing [`npc_core::ArchetypeOracle`].

use std::collections::HashMap;

use npc_core::{Archetype, ArchetypeOracle};

/// Oracle providing archetypes by id.
pub struct ArchetypeOracleImpl {
    archetypes: HashMap<String, Archetype>,
}

impl ArchetypeOracleImpl {
    /// Create an empty oracle.
    pub fn new() -> Self {
        Self {
            archetypes: HashMap::new(),
        }
    }

    /// Add an archetype under `id` (e.g., "goblin_scout", "sentry").
    pub fn add(&mut self, id: impl Into<String>, archetype: Archetype) {
        self.archetypes.insert(id.into(), archetype);
    }

    /// Check if an archetype exists.
    pub fn contains(&self, id: &str) -> bool {
        self.archetypes.contains_key(id)
    }

    /// Get all archetype IDs.
    pub fn archetype_ids(&self) -> impl Iterator<Item = &String> {
        self.archetypes.keys()
    }

    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }
}

impl Default for ArchetypeOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<(String, Archetype)> for ArchetypeOracleImpl {
    fn from_iter<I: IntoIterator<Item = (String, Archetype)>>(iter: I) -> Self {
        Self {
            archetypes: iter.into_iter().collect(),
        }
    }
}

impl ArchetypeOracle for ArchetypeOracleImpl {
    fn archetype(&self, id: &str) -> Option<&Archetype> {
        self.archetypes.get(id)
    }
}
