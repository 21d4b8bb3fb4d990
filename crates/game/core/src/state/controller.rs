//! Per-agent controller record.
//!
//! A controller is never edited in place by the decision pass. The pass
//! returns a new value and the owner replaces its slot, so a half-applied
//! decision can never be observed.

use super::common::{EntityId, Position, Timestamp};
use super::memory::MemoryMap;

/// High-level activity an agent is engaged in.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AgentState {
    #[default]
    Idle,
    Patrolling,
    Chasing,
    Attacking,
    Investigating,
    Fleeing,
}

/// AI state for one controlled entity.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentController {
    pub entity: EntityId,
    pub archetype: String,
    pub state: AgentState,
    /// Stored index into `waypoints`; always reduced modulo the current length before use.
    pub waypoint_index: usize,
    /// `None` until the first decision pass runs.
    pub last_decision: Option<Timestamp>,
    pub memory: MemoryMap,
    pub skills: Vec<String>,
    pub spawn: Position,
    pub waypoints: Option<Vec<Position>>,
    pub behavior_tree: Option<String>,
}

impl AgentController {
    /// Creates an idle controller with empty memory.
    pub fn new(entity: EntityId, archetype: impl Into<String>, spawn: Position) -> Self {
        Self {
            entity,
            archetype: archetype.into(),
            state: AgentState::Idle,
            waypoint_index: 0,
            last_decision: None,
            memory: MemoryMap::new(),
            skills: Vec::new(),
            spawn,
            waypoints: None,
            behavior_tree: None,
        }
    }

    pub fn with_skills<S: Into<String>>(mut self, skills: impl IntoIterator<Item = S>) -> Self {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_waypoints(mut self, waypoints: Vec<Position>) -> Self {
        self.waypoints = Some(waypoints);
        self
    }

    pub fn with_behavior_tree(mut self, tree: impl Into<String>) -> Self {
        self.behavior_tree = Some(tree.into());
        self
    }

    pub fn with_state(mut self, state: AgentState) -> Self {
        self.state = state;
        self
    }

    pub fn with_waypoint_index(mut self, index: usize) -> Self {
        self.waypoint_index = index;
        self
    }

    pub fn with_memory(mut self, memory: MemoryMap) -> Self {
        self.memory = memory;
        self
    }

    pub fn with_last_decision(mut self, at: Timestamp) -> Self {
        self.last_decision = Some(at);
        self
    }

    /// Configured waypoints, or an empty slice.
    pub fn waypoints(&self) -> &[Position] {
        self.waypoints.as_deref().unwrap_or(&[])
    }

    /// Returns `true` if a full decision may run at `now`.
    ///
    /// The gate opens once `interval_ms` has elapsed since the last decision,
    /// and is always open for a controller that has never decided.
    pub fn decision_due(&self, now: Timestamp, interval_ms: u64) -> bool {
        match self.last_decision {
            None => true,
            Some(last) => now.since(last) >= interval_ms,
        }
    }
}
