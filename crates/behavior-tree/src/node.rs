//! Tree model.
//!
//! A tree is immutable once built. Composite nodes own their children, and
//! leaves carry a name plus a string parameter map whose meaning belongs to
//! the [`LeafEvaluator`](crate::LeafEvaluator).

use std::collections::BTreeMap;

/// String-keyed parameters attached to a leaf.
///
/// A `BTreeMap` keeps iteration (and serialized output) in a stable order.
pub type Params = BTreeMap<String, String>;

/// A node in a behavior tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BehaviorNode {
    /// Tries children left to right until one does not fail (logical OR).
    Selector(Vec<BehaviorNode>),

    /// Runs children left to right until one does not succeed (logical AND).
    Sequence(Vec<BehaviorNode>),

    /// Swaps Success and Failure of its child.
    Inverter(Box<BehaviorNode>),

    /// A named boolean check.
    Condition {
        name: String,
        #[cfg_attr(feature = "serde", serde(default))]
        params: Params,
    },

    /// A named action producing a decision.
    Action {
        name: String,
        #[cfg_attr(feature = "serde", serde(default))]
        params: Params,
    },
}

impl BehaviorNode {
    /// Returns `true` for Condition and Action nodes.
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            BehaviorNode::Condition { .. } | BehaviorNode::Action { .. }
        )
    }

    /// Counts every node in the subtree rooted here.
    ///
    /// Walks with an explicit work list, so arbitrarily deep trees are safe.
    pub fn node_count(&self) -> usize {
        let mut pending = vec![self];
        let mut count = 0;
        while let Some(node) = pending.pop() {
            count += 1;
            match node {
                BehaviorNode::Selector(children) | BehaviorNode::Sequence(children) => {
                    pending.extend(children.iter());
                }
                BehaviorNode::Inverter(child) => pending.push(child),
                BehaviorNode::Condition { .. } | BehaviorNode::Action { .. } => {}
            }
        }
        count
    }
}

/// A complete behavior tree, shared read-only by every agent using it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecisionTree {
    pub root: BehaviorNode,
}

impl DecisionTree {
    pub fn new(root: BehaviorNode) -> Self {
        Self { root }
    }
}

impl From<BehaviorNode> for DecisionTree {
    fn from(root: BehaviorNode) -> Self {
        Self::new(root)
    }
}
