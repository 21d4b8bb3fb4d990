//! Explicit-stack tree evaluation.
//!
//! [`evaluate`] never recurses. It alternates between two steps:
//!
//! - **Descend**: enter a node. Composites push a control frame and descend into
//!   their first child; leaves are handed to the [`LeafEvaluator`].
//! - **Propagate**: pop the top frame and let it decide whether to descend
//!   into the next child or pass a result further up.
//!
//! The loop ends when a result is propagated with an empty stack.
//!
//! # Semantics
//!
//! | Node     | Stops on            | Exhausted result | Empty result |
//! |----------|---------------------|------------------|--------------|
//! | Selector | Success, Running    | Failure          | Failure      |
//! | Sequence | Failure, Running    | Success          | Success      |
//! | Inverter | -                   | child, inverted  | -            |

use crate::{BehaviorNode, Params, Status};

/// Game-side handler for leaf nodes.
///
/// Implementors are the "blackboard" of a single evaluation pass. Unknown
/// leaf names should fail closed by returning [`Status::Failure`].
pub trait LeafEvaluator {
    /// Payload produced by actions (e.g., a movement decision).
    type Decision;

    /// Evaluates a named boolean check.
    fn condition(&mut self, name: &str, params: &Params) -> Status;

    /// Executes a named action.
    fn action(&mut self, name: &str, params: &Params) -> Outcome<Self::Decision>;
}

/// A status together with the decision that produced it, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<D> {
    pub status: Status,
    pub decision: Option<D>,
}

impl<D> Outcome<D> {
    /// An outcome with no decision attached.
    pub fn bare(status: Status) -> Self {
        Self {
            status,
            decision: None,
        }
    }

    /// A failed outcome with no decision.
    pub fn failure() -> Self {
        Self::bare(Status::Failure)
    }

    /// An outcome carrying a decision.
    pub fn with(status: Status, decision: D) -> Self {
        Self {
            status,
            decision: Some(decision),
        }
    }

    fn inverted(self) -> Self {
        Self {
            status: self.status.invert(),
            decision: self.decision,
        }
    }
}

/// Control frame for a composite node that is waiting on a child.
enum Frame<'t, D> {
    Selector {
        children: &'t [BehaviorNode],
        index: usize,
    },
    Sequence {
        children: &'t [BehaviorNode],
        index: usize,
        /// Latest decision from a child that succeeded.
        carried: Option<D>,
    },
    Inverter,
}

enum Step<'t, D> {
    Descend(&'t BehaviorNode),
    Propagate(Outcome<D>),
}

/// Evaluates a tree rooted at `root` against `leaves`.
///
/// Returns the root's status and the decision that determined it. See the
/// module docs for how decisions travel through composites.
pub fn evaluate<E: LeafEvaluator>(root: &BehaviorNode, leaves: &mut E) -> Outcome<E::Decision> {
    let mut stack: Vec<Frame<'_, E::Decision>> = Vec::new();
    let mut step = Step::Descend(root);

    loop {
        step = match step {
            Step::Descend(node) => descend(node, &mut stack, leaves),
            Step::Propagate(outcome) => match stack.pop() {
                None => return outcome,
                Some(frame) => propagate(frame, outcome, &mut stack),
            },
        };
    }
}

fn descend<'t, E: LeafEvaluator>(
    node: &'t BehaviorNode,
    stack: &mut Vec<Frame<'t, E::Decision>>,
    leaves: &mut E,
) -> Step<'t, E::Decision> {
    match node {
        BehaviorNode::Selector(children) => match children.first() {
            None => Step::Propagate(Outcome::failure()),
            Some(first) => {
                stack.push(Frame::Selector { children, index: 0 });
                Step::Descend(first)
            }
        },
        BehaviorNode::Sequence(children) => match children.first() {
            None => Step::Propagate(Outcome::bare(Status::Success)),
            Some(first) => {
                stack.push(Frame::Sequence {
                    children,
                    index: 0,
                    carried: None,
                });
                Step::Descend(first)
            }
        },
        BehaviorNode::Inverter(child) => {
            stack.push(Frame::Inverter);
            Step::Descend(child)
        }
        BehaviorNode::Condition { name, params } => {
            Step::Propagate(Outcome::bare(leaves.condition(name, params)))
        }
        BehaviorNode::Action { name, params } => Step::Propagate(leaves.action(name, params)),
    }
}

fn propagate<'t, D>(
    frame: Frame<'t, D>,
    outcome: Outcome<D>,
    stack: &mut Vec<Frame<'t, D>>,
) -> Step<'t, D> {
    match frame {
        Frame::Inverter => Step::Propagate(outcome.inverted()),

        Frame::Selector { children, index } => {
            if !outcome.status.is_failure() {
                return Step::Propagate(outcome);
            }
            let next = index + 1;
            match children.get(next) {
                Some(child) => {
                    stack.push(Frame::Selector {
                        children,
                        index: next,
                    });
                    Step::Descend(child)
                }
                None => Step::Propagate(Outcome::failure()),
            }
        }

        Frame::Sequence {
            children,
            index,
            carried,
        } => {
            if !outcome.status.is_success() {
                return Step::Propagate(outcome);
            }
            let carried = outcome.decision.or(carried);
            let next = index + 1;
            match children.get(next) {
                Some(child) => {
                    stack.push(Frame::Sequence {
                        children,
                        index: next,
                        carried,
                    });
                    Step::Descend(child)
                }
                None => Step::Propagate(Outcome {
                    status: Status::Success,
                    decision: carried,
                }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::*;

    /// Leaves named after their result; actions record their name as the decision.
    #[derive(Default)]
    struct Scripted {
        visited: Vec<String>,
    }

    impl Scripted {
        fn status_of(name: &str) -> Status {
            match name {
                "ok" => Status::Success,
                "busy" => Status::Running,
                _ => Status::Failure,
            }
        }
    }

    impl LeafEvaluator for Scripted {
        type Decision = String;

        fn condition(&mut self, name: &str, _params: &Params) -> Status {
            self.visited.push(name.to_owned());
            Self::status_of(name)
        }

        fn action(&mut self, name: &str, _params: &Params) -> Outcome<String> {
            self.visited.push(name.to_owned());
            match Self::status_of(name) {
                Status::Failure => Outcome::failure(),
                status => Outcome::with(status, name.to_owned()),
            }
        }
    }

    fn run(node: &BehaviorNode) -> (Outcome<String>, Vec<String>) {
        let mut leaves = Scripted::default();
        let outcome = evaluate(node, &mut leaves);
        (outcome, leaves.visited)
    }

    #[test]
    fn empty_selector_fails() {
        let (outcome, _) = run(&selector(vec![]));
        assert_eq!(outcome.status, Status::Failure);
    }

    #[test]
    fn empty_sequence_succeeds() {
        let (outcome, _) = run(&sequence(vec![]));
        assert_eq!(outcome.status, Status::Success);
        assert!(outcome.decision.is_none());
    }

    #[test]
    fn selector_stops_on_first_success() {
        let tree = selector(vec![condition("no"), action("ok"), action("never")]);
        let (outcome, visited) = run(&tree);
        assert_eq!(outcome.status, Status::Success);
        assert_eq!(outcome.decision.as_deref(), Some("ok"));
        assert_eq!(visited, vec!["no", "ok"]);
    }

    #[test]
    fn selector_stops_on_running() {
        let tree = selector(vec![action("busy"), action("ok")]);
        let (outcome, visited) = run(&tree);
        assert_eq!(outcome.status, Status::Running);
        assert_eq!(outcome.decision.as_deref(), Some("busy"));
        assert_eq!(visited, vec!["busy"]);
    }

    #[test]
    fn selector_fails_when_all_fail() {
        let (outcome, visited) = run(&selector(vec![condition("no"), action("no")]));
        assert_eq!(outcome.status, Status::Failure);
        assert!(outcome.decision.is_none());
        assert_eq!(visited.len(), 2);
    }

    #[test]
    fn sequence_fails_on_first_failure() {
        let tree = sequence(vec![condition("ok"), condition("no"), action("ok")]);
        let (outcome, visited) = run(&tree);
        assert_eq!(outcome.status, Status::Failure);
        assert_eq!(visited, vec!["ok", "no"]);
    }

    #[test]
    fn sequence_stops_on_running() {
        let tree = sequence(vec![condition("ok"), action("busy"), action("ok")]);
        let (outcome, visited) = run(&tree);
        assert_eq!(outcome.status, Status::Running);
        assert_eq!(outcome.decision.as_deref(), Some("busy"));
        assert_eq!(visited, vec!["ok", "busy"]);
    }

    #[test]
    fn sequence_carries_decision_past_trailing_conditions() {
        let tree = sequence(vec![action("ok"), condition("ok")]);
        let (outcome, _) = run(&tree);
        assert_eq!(outcome.status, Status::Success);
        assert_eq!(outcome.decision.as_deref(), Some("ok"));
    }

    #[test]
    fn inverter_swaps_condition_result() {
        let (outcome, _) = run(&inverter(condition("ok")));
        assert_eq!(outcome.status, Status::Failure);

        let (outcome, _) = run(&inverter(condition("no")));
        assert_eq!(outcome.status, Status::Success);
    }

    #[test]
    fn inverter_passes_running_through() {
        let (outcome, _) = run(&inverter(action("busy")));
        assert_eq!(outcome.status, Status::Running);
        assert_eq!(outcome.decision.as_deref(), Some("busy"));
    }

    #[test]
    fn nested_composites_resume_parent_scan() {
        // Sequence fails inside the selector, so the selector moves on.
        let tree = selector(vec![
            sequence(vec![condition("no"), action("never")]),
            sequence(vec![condition("ok"), action("busy")]),
        ]);
        let (outcome, visited) = run(&tree);
        assert_eq!(outcome.status, Status::Running);
        assert_eq!(outcome.decision.as_deref(), Some("busy"));
        assert_eq!(visited, vec!["no", "ok", "busy"]);
    }

    #[test]
    fn deep_tree_does_not_grow_native_stack() {
        let mut node = action("ok");
        for _ in 0..2_000 {
            node = sequence(vec![inverter(inverter(node))]);
        }
        let (outcome, visited) = run(&node);
        assert_eq!(outcome.status, Status::Success);
        assert_eq!(visited, vec!["ok"]);
        assert_eq!(node.node_count(), 1 + 3 * 2_000);
    }

    #[test]
    fn wide_selector_visits_every_child_once() {
        let mut children: Vec<_> = (0..10_000).map(|_| condition("no")).collect();
        children.push(action("ok"));
        let (outcome, visited) = run(&selector(children));
        assert_eq!(outcome.status, Status::Success);
        assert_eq!(visited.len(), 10_001);
    }
}
