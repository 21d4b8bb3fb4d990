//! Commands and state changes produced by a decision pass.

use crate::state::{AgentState, EntityId, Position};

/// Move `entity` toward `target`. Pathing is left to the movement system.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovementCommand {
    pub entity: EntityId,
    pub target: Position,
}

/// Target of an ability cast.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityTarget {
    SelfTarget,
    Entity(EntityId),
    Position(Position),
    /// Unit vector from caster toward the target.
    Direction(Position),
}

/// Request to cast a skill. Resolution and cooldowns belong to the combat system.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityIntent {
    pub caster: EntityId,
    pub skill_id: String,
    pub target: AbilityTarget,
}

/// Outcome of one decision: optional commands, the next state, and an
/// optional new waypoint index.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decision {
    pub movement: Option<MovementCommand>,
    pub ability: Option<AbilityIntent>,
    pub state: AgentState,
    pub waypoint_index: Option<usize>,
}

impl Decision {
    /// No command; the agent settles into `state`.
    pub fn hold(state: AgentState) -> Self {
        Self {
            movement: None,
            ability: None,
            state,
            waypoint_index: None,
        }
    }

    pub fn idle() -> Self {
        Self::hold(AgentState::Idle)
    }

    /// Move `entity` to `target` and enter `state`.
    pub fn move_to(entity: EntityId, target: Position, state: AgentState) -> Self {
        Self {
            movement: Some(MovementCommand { entity, target }),
            ..Self::hold(state)
        }
    }

    /// Cast without moving and enter [`AgentState::Attacking`].
    pub fn cast(intent: AbilityIntent) -> Self {
        Self {
            ability: Some(intent),
            ..Self::hold(AgentState::Attacking)
        }
    }

    pub fn with_waypoint_index(mut self, index: usize) -> Self {
        self.waypoint_index = Some(index);
        self
    }

    /// Returns `true` if this decision emits neither a movement nor an ability.
    pub fn is_inert(&self) -> bool {
        self.movement.is_none() && self.ability.is_none()
    }
}
