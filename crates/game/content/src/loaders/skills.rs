//! Skill catalog loader.

use std::path::Path;

use npc_core::SkillDefinition;

use crate::loaders::{LoadResult, parse_ron};

/// Loader for skill definitions from a RON list.
pub struct SkillLoader;

impl SkillLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<SkillDefinition>> {
        let skills: Vec<SkillDefinition> = parse_ron(path, "skill")?;

        let mut seen = std::collections::BTreeSet::new();
        for skill in &skills {
            if !seen.insert(skill.id.as_str()) {
                anyhow::bail!("Duplicate skill id '{}' in {}", skill.id, path.display());
            }
        }
        tracing::debug!(count = skills.len(), path = %path.display(), "loaded skills");
        Ok(skills)
    }
}
