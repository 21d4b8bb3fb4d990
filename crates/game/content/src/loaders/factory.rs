//! Content factory for loading every data file from one directory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use behavior_tree::DecisionTree;
use npc_core::{AiConfig, Archetype, SkillDefinition};

use crate::bundle::{AgentSpec, ContentBundle};
use crate::loaders::{
    AgentLoader, ArchetypeLoader, ConfigLoader, LoadResult, SkillLoader, TreeLoader,
};

/// Content factory that loads all decision content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml      (optional)
/// ├── archetypes.ron
/// ├── skills.ron
/// ├── trees.ron
/// └── agents.ron       (optional)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load decision tunables from `config.toml`, or defaults if the file is absent.
    pub fn load_config(&self) -> LoadResult<AiConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(AiConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load archetypes from `archetypes.ron`.
    pub fn load_archetypes(&self) -> LoadResult<BTreeMap<String, Archetype>> {
        ArchetypeLoader::load(&self.data_dir.join("archetypes.ron"))
    }

    /// Load skill definitions from `skills.ron`.
    pub fn load_skills(&self) -> LoadResult<Vec<SkillDefinition>> {
        SkillLoader::load(&self.data_dir.join("skills.ron"))
    }

    /// Load behavior trees from `trees.ron`.
    pub fn load_trees(&self) -> LoadResult<BTreeMap<String, DecisionTree>> {
        TreeLoader::load(&self.data_dir.join("trees.ron"))
    }

    /// Load the agent roster from `agents.ron`, or an empty roster if absent.
    pub fn load_agents(&self) -> LoadResult<Vec<AgentSpec>> {
        let path = self.data_dir.join("agents.ron");
        if !path.exists() {
            return Ok(Vec::new());
        }
        AgentLoader::load(&path)
    }

    /// Load every file and check cross references.
    pub fn load_all(&self) -> LoadResult<ContentBundle> {
        let bundle = ContentBundle {
            config: self.load_config()?,
            archetypes: self.load_archetypes()?,
            skills: self.load_skills()?,
            trees: self.load_trees()?,
            agents: self.load_agents()?,
        };
        bundle.validate().map_err(|e| {
            anyhow::anyhow!("Invalid content in {}: {}", self.data_dir.display(), e)
        })?;
        Ok(bundle)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
