//! Decision tree oracle implementing [`npc_core::DecisionTreeOracle`].

use std::collections::HashMap;

use behavior_tree::DecisionTree;
use npc_core::DecisionTreeOracle;

/// Oracle providing shared decision trees by id.
pub struct TreeOracleImpl {
    trees: HashMap<String, DecisionTree>,
}

impl TreeOracleImpl {
    /// Create an empty oracle.
    pub fn new() -> Self {
        Self {
            trees: HashMap::new(),
        }
    }

    pub fn add(&mut self, id: impl Into<String>, tree: DecisionTree) {
        self.trees.insert(id.into(), tree);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.trees.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
}

impl Default for TreeOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<(String, DecisionTree)> for TreeOracleImpl {
    fn from_iter<I: IntoIterator<Item = (String, DecisionTree)>>(iter: I) -> Self {
        Self {
            trees: iter.into_iter().collect(),
        }
    }
}

impl DecisionTreeOracle for TreeOracleImpl {
    fn tree(&self, id: &str) -> Option<&DecisionTree> {
        self.trees.get(id)
    }
}
