//! Builder utilities for ergonomic behavior tree construction.
//!
//! Instead of spelling out `BehaviorNode::Action { name: "...".into(), params: ... }`
//! you can write `action("chase-target")` or
//! `action_with("retreat", [("distance", "64")])`.

use crate::{BehaviorNode, Params};

/// Creates a sequence node.
#[inline]
pub fn sequence(children: Vec<BehaviorNode>) -> BehaviorNode {
    BehaviorNode::Sequence(children)
}

/// Creates a selector node.
#[inline]
pub fn selector(children: Vec<BehaviorNode>) -> BehaviorNode {
    BehaviorNode::Selector(children)
}

/// Creates an inverter node.
#[inline]
pub fn inverter(child: BehaviorNode) -> BehaviorNode {
    BehaviorNode::Inverter(Box::new(child))
}

/// Creates a condition leaf without parameters.
#[inline]
pub fn condition(name: &str) -> BehaviorNode {
    condition_with(name, [])
}

/// Creates a condition leaf with parameters.
pub fn condition_with<'a>(
    name: &str,
    params: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> BehaviorNode {
    BehaviorNode::Condition {
        name: name.to_owned(),
        params: to_params(params),
    }
}

/// Creates an action leaf without parameters.
#[inline]
pub fn action(name: &str) -> BehaviorNode {
    action_with(name, [])
}

/// Creates an action leaf with parameters.
pub fn action_with<'a>(
    name: &str,
    params: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> BehaviorNode {
    BehaviorNode::Action {
        name: name.to_owned(),
        params: to_params(params),
    }
}

fn to_params<'a>(params: impl IntoIterator<Item = (&'a str, &'a str)>) -> Params {
    params
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect()
}
