//! Behavior tree loader.
//!
//! Trees are externally tagged node variants keyed by tree id:
//!
//! ```text
//! {
//!     "brute": (root: Selector([
//!         Sequence([Condition(name: "has-target"), Action(name: "attack-melee")]),
//!         Action(name: "patrol"),
//!     ])),
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use behavior_tree::DecisionTree;

use crate::loaders::{LoadResult, parse_ron};

/// Loader for decision trees keyed by id.
pub struct TreeLoader;

impl TreeLoader {
    pub fn load(path: &Path) -> LoadResult<BTreeMap<String, DecisionTree>> {
        let trees: BTreeMap<String, DecisionTree> = parse_ron(path, "behavior tree")?;
        tracing::debug!(count = trees.len(), path = %path.display(), "loaded behavior trees");
        Ok(trees)
    }
}
