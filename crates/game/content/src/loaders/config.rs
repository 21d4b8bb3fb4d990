//! Decision tunables loader.

use std::path::Path;

use npc_core::AiConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`AiConfig`] from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys that are absent keep their defaults.
    pub fn load(path: &Path) -> LoadResult<AiConfig> {
        let content = read_file(path)?;
        let config: AiConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
