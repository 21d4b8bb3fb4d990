use behavior_tree::DecisionTree;

/// Oracle providing decision trees by id.
///
/// Trees are immutable and shared by every agent that names them.
pub trait DecisionTreeOracle: Send + Sync {
    fn tree(&self, id: &str) -> Option<&DecisionTree>;
}
