//! Decision-making for NPC agents.
//!
//! Each agent gets one pass per tick:
//!
//! 1. **Perception**: cues and memory from the current world snapshot
//! 2. **Gate**: full decisions run at most once per archetype interval
//! 3. **Tree**: the agent's data-driven behavior tree, when it resolves
//! 4. **Cue engine**: otherwise, the winning cue picks a canned response
//!
//! # Core Components
//!
//! - [`DecisionProvider`]: runs a pass and returns an [`AgentUpdate`]
//! - [`DecisionContext`]: per-pass blackboard; implements the tree leaf seam
//! - [`nodes`]: condition and action registries for tree leaves
//! - [`cue`]: cue ranking and the fallback engine

pub mod context;
pub mod cue;
pub mod nodes;
pub mod provider;

#[cfg(test)]
pub(crate) mod testing;

pub use context::{DecisionContext, Target};
pub use cue::{RankedCue, decide_from_cues, rank_cues};
pub use nodes::{ActionKind, ConditionKind};
pub use provider::{AgentUpdate, DecisionPath, DecisionProvider};
