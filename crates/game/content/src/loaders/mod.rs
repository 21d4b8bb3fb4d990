//! Content loaders for reading decision data from files.
//!
//! Each loader converts one RON/TOML file into `npc-core` or `behavior-tree`
//! types. [`ContentFactory`] ties them to a data directory.

pub mod agents;
pub mod archetypes;
pub mod config;
pub mod factory;
pub mod skills;
pub mod trees;

pub use agents::AgentLoader;
pub use archetypes::ArchetypeLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use skills::SkillLoader;
pub use trees::TreeLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Parses a RON document, naming `what` and the file in the error.
pub(crate) fn parse_ron<T: serde::de::DeserializeOwned>(
    path: &Path,
    what: &str,
) -> LoadResult<T> {
    let content = read_file(path)?;
    ron::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse {} RON {}: {}", what, path.display(), e))
}
