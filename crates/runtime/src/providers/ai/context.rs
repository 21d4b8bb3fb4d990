//! Per-pass decision context.
//!
//! [`DecisionContext`] is the blackboard handed to the tree interpreter. It
//! holds everything a leaf may look at for one agent on one pass and
//! implements [`LeafEvaluator`] by dispatching leaf names to the condition and
//! action registries in [`super::nodes`].

use behavior_tree::{LeafEvaluator, Outcome, Params, Status};
use npc_core::{
    AbilityIntent, AgentController, AgentState, AiConfig, AiEnv, Archetype, CueType, Decision,
    EntityId, MemoryMap, PerceptionCue, Position, SkillCooldowns, SkillDefinition, Timestamp,
    WorldSnapshot, build_cast_intent, next_waypoint, select_skill_where,
};
use tracing::trace;

use super::cue::RankedCue;
use super::nodes::{ActionKind, ConditionKind};

/// The entity (or remembered spot) an agent is currently reacting to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Target {
    /// `None` when only a position is known.
    pub entity: Option<EntityId>,
    pub position: Position,
    /// Distance from the agent at the start of the pass.
    pub distance: f32,
}

impl Target {
    /// Builds a target from a cue, measured from `from`.
    pub fn from_cue(cue: &PerceptionCue, from: Position) -> Self {
        Self {
            entity: cue.source,
            position: cue.position,
            distance: from.distance(cue.position),
        }
    }

    /// Picks the target for a pass.
    ///
    /// The nearest visual cue wins. Without one, the remembered entity with
    /// the highest confidence is used (nearest on ties). A live snapshot
    /// position replaces the cue position when the source is still present.
    pub fn resolve(
        cues: &[PerceptionCue],
        memory: &MemoryMap,
        snapshot: &WorldSnapshot,
        from: Position,
    ) -> Option<Self> {
        let visual = cues
            .iter()
            .filter(|cue| cue.kind == CueType::Visual)
            .fold(None::<&PerceptionCue>, |best, cue| match best {
                Some(b) if from.distance(b.position) <= from.distance(cue.position) => Some(b),
                _ => Some(cue),
            });

        let chosen = visual.or_else(|| {
            let confidence = |cue: &PerceptionCue| {
                cue.source
                    .and_then(|id| memory.get(&id))
                    .map_or(cue.strength.confidence(), |entry| entry.confidence)
            };
            cues.iter()
                .filter(|cue| cue.kind == CueType::Memory)
                .fold(None::<&PerceptionCue>, |best, cue| match best {
                    Some(b) => {
                        let (held, offered) = (confidence(b), confidence(cue));
                        let closer = from.distance(cue.position) < from.distance(b.position);
                        if offered > held || (offered == held && closer) {
                            Some(cue)
                        } else {
                            Some(b)
                        }
                    }
                    None => Some(cue),
                })
        })?;

        let mut target = Self::from_cue(chosen, from);
        if let Some(live) = chosen.source.and_then(|id| snapshot.position(id)) {
            target.position = live;
            target.distance = from.distance(live);
        }
        Some(target)
    }
}

/// Read-only view of one agent for one decision pass.
pub struct DecisionContext<'a> {
    pub env: AiEnv<'a>,
    pub config: &'a AiConfig,
    pub controller: &'a AgentController,
    pub archetype: &'a Archetype,
    pub position: Position,
    pub cues: &'a [PerceptionCue],
    pub target: Option<Target>,
    pub best_cue: Option<RankedCue>,
    pub cooldowns: Option<&'a SkillCooldowns>,
    pub now: Timestamp,
}

impl<'a> DecisionContext<'a> {
    pub fn entity(&self) -> EntityId {
        self.controller.entity
    }

    pub fn distance_to_spawn(&self) -> f32 {
        self.position.distance(self.controller.spawn)
    }

    /// Movement toward `target` in the Chasing state.
    pub fn chase(&self, target: &Target) -> Decision {
        Decision::move_to(self.entity(), target.position, AgentState::Chasing)
    }

    /// First usable listed skill accepted by `filter`, as a cast intent.
    pub fn cast_at(
        &self,
        target: &Target,
        filter: impl Fn(&SkillDefinition) -> bool,
    ) -> Option<AbilityIntent> {
        let skill = select_skill_where(
            &self.controller.skills,
            self.env.skills(),
            self.cooldowns,
            self.now,
            self.position,
            target.position,
            filter,
        )?;
        Some(build_cast_intent(
            skill,
            self.entity(),
            self.position,
            target.entity,
            target.position,
        ))
    }

    /// Walks back to spawn, or idles once within reach of it.
    pub fn return_to_spawn(&self) -> Decision {
        if self.distance_to_spawn() > self.config.waypoint_reach_distance {
            Decision::move_to(self.entity(), self.controller.spawn, AgentState::Patrolling)
        } else {
            Decision::idle()
        }
    }

    /// What an agent does with nothing to react to.
    ///
    /// Agents with waypoints follow their behavior's waypoint policy and
    /// report the resulting index; the rest drift back to spawn.
    pub fn roam(&self) -> Decision {
        let waypoints = self.controller.waypoints();
        if waypoints.is_empty() {
            return self.return_to_spawn();
        }

        let Some(next) = next_waypoint(
            self.archetype.behavior,
            self.controller,
            self.position,
            waypoints,
            self.env.rng(),
            self.config,
            self.now,
        ) else {
            return self.return_to_spawn();
        };

        let decision = if self.position.distance(next.position) <= self.config.waypoint_reach_distance
        {
            Decision::idle()
        } else {
            Decision::move_to(self.entity(), next.position, AgentState::Patrolling)
        };
        decision.with_waypoint_index(next.index)
    }
}

impl LeafEvaluator for DecisionContext<'_> {
    type Decision = Decision;

    fn condition(&mut self, name: &str, params: &Params) -> Status {
        let Ok(kind) = name.parse::<ConditionKind>() else {
            trace!(agent = %self.entity(), condition = name, "unknown condition");
            return Status::Failure;
        };
        let status = kind.evaluate(self, params);
        trace!(agent = %self.entity(), condition = %kind, ?status);
        status
    }

    fn action(&mut self, name: &str, params: &Params) -> Outcome<Decision> {
        let Ok(kind) = name.parse::<ActionKind>() else {
            trace!(agent = %self.entity(), action = name, "unknown action");
            return Outcome::failure();
        };
        let outcome = kind.execute(self, params);
        trace!(agent = %self.entity(), action = %kind, status = ?outcome.status);
        outcome
    }
}
