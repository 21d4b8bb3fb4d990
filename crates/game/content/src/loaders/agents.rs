//! Agent roster loader.

use std::path::Path;

use crate::bundle::AgentSpec;
use crate::loaders::{LoadResult, parse_ron};

/// Loader for agent spawn specifications from a RON list.
pub struct AgentLoader;

impl AgentLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<AgentSpec>> {
        parse_ron(path, "agent roster")
    }
}
