//! Shared fixtures for leaf and cue-engine unit tests.

use npc_core::{
    AgentController, AiConfig, Archetype, CuePriority, CueResponse, CueStrength, CueType,
    DeliveryMode, EntityId, PerceptionCue, Position, RegionId, SkillCooldowns, SkillDefinition,
    TargetingMode, Timestamp, WorldSnapshot,
};

use super::context::{DecisionContext, Target};
use super::cue::rank_cues;
use crate::oracle::{ArchetypeOracleImpl, OracleManager, SkillOracleImpl, TreeOracleImpl};

use std::sync::Arc;

pub(crate) const HOSTILE: EntityId = EntityId(2);

pub(crate) fn skill(
    id: &str,
    range: f32,
    targeting: TargetingMode,
    delivery: DeliveryMode,
) -> SkillDefinition {
    SkillDefinition {
        id: id.to_owned(),
        range: Some(range),
        cooldown_ms: 1_000,
        targeting,
        delivery,
    }
}

/// One agent at the origin plus whatever cues a test adds.
pub(crate) struct Fixture {
    pub oracles: OracleManager,
    pub config: AiConfig,
    pub controller: AgentController,
    pub archetype: Archetype,
    pub position: Position,
    pub cues: Vec<PerceptionCue>,
    pub cooldowns: SkillCooldowns,
    pub now: Timestamp,
}

impl Fixture {
    /// Aggressive melee/ranged agent `#1` spawned at the origin.
    pub fn grunt() -> Self {
        let archetype = Archetype::fallback().clone();
        let skills: SkillOracleImpl = [
            skill("slash", 32.0, TargetingMode::Entity, DeliveryMode::Melee),
            skill("crossbow", 200.0, TargetingMode::Position, DeliveryMode::Projectile),
            skill("firebomb", 120.0, TargetingMode::Position, DeliveryMode::Area),
        ]
        .into_iter()
        .collect();
        let archetypes: ArchetypeOracleImpl = [("grunt".to_owned(), archetype.clone())]
            .into_iter()
            .collect();

        Self {
            oracles: OracleManager::new(
                Arc::new(archetypes),
                Arc::new(skills),
                Arc::new(TreeOracleImpl::new()),
            ),
            config: AiConfig::default(),
            controller: AgentController::new(EntityId(1), "grunt", Position::ORIGIN)
                .with_skills(["slash", "crossbow"]),
            archetype,
            position: Position::ORIGIN,
            cues: Vec::new(),
            cooldowns: SkillCooldowns::new(),
            now: Timestamp(1_000),
        }
    }

    /// Adds a visual cue for [`HOSTILE`] at `position`.
    pub fn with_hostile_at(mut self, position: Position) -> Self {
        let fraction = self.position.distance(position) / self.archetype.perception.visual_range;
        self.cues.push(PerceptionCue {
            kind: CueType::Visual,
            strength: CueStrength::from_range_fraction(fraction),
            source: Some(HOSTILE),
            position,
            timestamp: self.now,
        });
        self
    }

    /// Replaces the cue priority table.
    pub fn with_priorities(mut self, rows: &[(CueType, CueResponse)]) -> Self {
        self.archetype.cue_priorities = rows
            .iter()
            .enumerate()
            .map(|(i, &(kind, response))| {
                CuePriority::new(kind, CueStrength::Weak, i as i32, response)
            })
            .collect();
        self
    }

    pub fn context(&self) -> DecisionContext<'_> {
        let snapshot = WorldSnapshot::builder(RegionId(0)).build();
        DecisionContext {
            env: self.oracles.as_ai_env(),
            config: &self.config,
            controller: &self.controller,
            archetype: &self.archetype,
            position: self.position,
            cues: &self.cues,
            target: Target::resolve(&self.cues, &self.controller.memory, &snapshot, self.position),
            best_cue: rank_cues(&self.cues, &self.archetype.cue_priorities),
            cooldowns: Some(&self.cooldowns),
            now: self.now,
        }
    }
}
