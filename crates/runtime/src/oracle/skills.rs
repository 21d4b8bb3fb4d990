//! Skill oracle implementing [`npc_core::SkillOracle`].

use std::collections::HashMap;

use npc_core::{SkillDefinition, SkillOracle};

/// Oracle providing skill definitions by id.
pub struct SkillOracleImpl {
    skills: HashMap<String, SkillDefinition>,
}

impl SkillOracleImpl {
    /// Create an empty oracle.
    pub fn new() -> Self {
        Self {
            skills: HashMap::new(),
        }
    }

    /// Add a skill, keyed by its own id. Replaces any skill with the same id.
    pub fn add(&mut self, skill: SkillDefinition) {
        self.skills.insert(skill.id.clone(), skill);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.skills.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

impl Default for SkillOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<SkillDefinition> for SkillOracleImpl {
    fn from_iter<I: IntoIterator<Item = SkillDefinition>>(iter: I) -> Self {
        let mut oracle = Self::new();
        for skill in iter {
            oracle.add(skill);
        }
        oracle
    }
}

impl SkillOracle for SkillOracleImpl {
    fn skill(&self, id: &str) -> Option<&SkillDefinition> {
        self.skills.get(id)
    }
}
