//! One decision pass for one agent.

use behavior_tree::evaluate;
use npc_core::{
    AgentController, AiConfig, AiEnv, Decision, PerceptionInput, SkillCooldowns, Timestamp,
    WorldSnapshot, perceive,
};
use tracing::{debug, trace, warn};

use super::context::{DecisionContext, Target};
use super::cue::{decide_from_cues, rank_cues};

/// Which part of the pass produced the update.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum DecisionPath {
    /// Perception ran, but the decision interval had not elapsed.
    Gated,
    /// The agent's behavior tree decided.
    Tree,
    /// No usable tree; the cue engine decided.
    Cues,
}

/// Result of a pass: the next controller and what, if anything, was decided.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentUpdate {
    pub controller: AgentController,
    /// `None` for gated passes.
    pub decision: Option<Decision>,
    pub path: DecisionPath,
}

/// Runs perception and decision-making for single agents.
///
/// # Design
///
/// A pass:
/// 1. Perceives the snapshot and decays/refreshes memory
/// 2. Stops there if the archetype's decision interval has not elapsed
/// 3. Evaluates the agent's tree if it resolves, else the cue engine
/// 4. Applies state, waypoint index and decision time to a copy of the controller
///
/// Passes are pure: the same controller, snapshot and time always yield the
/// same update.
#[derive(Clone, Copy, Debug)]
pub struct DecisionProvider<'a> {
    env: AiEnv<'a>,
    config: &'a AiConfig,
}

impl<'a> DecisionProvider<'a> {
    pub fn new(env: AiEnv<'a>, config: &'a AiConfig) -> Self {
        Self { env, config }
    }

    /// Runs one pass. `None` when the agent has no position or faction in
    /// `snapshot`.
    pub fn decide(
        &self,
        controller: &AgentController,
        snapshot: &WorldSnapshot,
        cooldowns: Option<&SkillCooldowns>,
        now: Timestamp,
    ) -> Option<AgentUpdate> {
        let entity = controller.entity;
        let (Some(position), Some(factions)) =
            (snapshot.position(entity), snapshot.factions(entity))
        else {
            trace!(agent = %entity, "agent missing from snapshot");
            return None;
        };

        let archetype = self.env.archetype(&controller.archetype);
        let perception = perceive(
            &PerceptionInput {
                entity,
                position,
                facing: snapshot.velocity(entity),
                factions,
                spawn: controller.spawn,
                config: &archetype.perception,
                memory: &controller.memory,
                now,
            },
            snapshot,
        );

        let mut next = controller.clone();
        if !controller.decision_due(now, archetype.decision_interval_ms) {
            next.memory = perception.memory;
            return Some(AgentUpdate {
                controller: next,
                decision: None,
                path: DecisionPath::Gated,
            });
        }

        let mut ctx = DecisionContext {
            env: self.env,
            config: self.config,
            controller,
            archetype,
            position,
            cues: &perception.cues,
            target: Target::resolve(&perception.cues, &perception.memory, snapshot, position),
            best_cue: rank_cues(&perception.cues, &archetype.cue_priorities),
            cooldowns,
            now,
        };

        let tree = controller.behavior_tree.as_deref().and_then(|id| {
            let tree = self.env.tree(id);
            if tree.is_none() {
                warn!(agent = %entity, tree = id, "unknown behavior tree, using cue engine");
            }
            tree
        });

        let (decision, path) = match tree {
            Some(tree) => {
                let outcome = evaluate(&tree.root, &mut ctx);
                (outcome.decision.unwrap_or_else(Decision::idle), DecisionPath::Tree)
            }
            None => (decide_from_cues(&ctx), DecisionPath::Cues),
        };

        next.memory = perception.memory;
        next.state = decision.state;
        if let Some(index) = decision.waypoint_index {
            next.waypoint_index = index;
        }
        next.last_decision = Some(now);

        debug!(
            agent = %entity,
            %path,
            state = %decision.state,
            cues = perception.cues.len(),
            moving = decision.movement.is_some(),
            casting = decision.ability.as_ref().map(|a| a.skill_id.as_str()),
            "decision pass"
        );

        Some(AgentUpdate {
            controller: next,
            decision: Some(decision),
            path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::ai::testing::{Fixture, HOSTILE};
    use behavior_tree::DecisionTree;
    use behavior_tree::builder::{action, condition, selector, sequence};
    use npc_core::{AgentState, EntityId, FactionSet, Position, RegionId};
    use std::sync::Arc;

    use crate::oracle::{OracleManager, TreeOracleImpl};

    fn snapshot(hostile: Option<Position>) -> WorldSnapshot {
        let mut builder = WorldSnapshot::builder(RegionId(0)).entity(
            EntityId(1),
            Position::ORIGIN,
            FactionSet::ENEMY,
        );
        if let Some(position) = hostile {
            builder = builder.entity(HOSTILE, position, FactionSet::PLAYER);
        }
        builder.build()
    }

    fn with_brute_tree(fixture: &mut Fixture) {
        let tree = DecisionTree::new(selector(vec![
            sequence(vec![condition("target-in-melee-range"), action("attack-melee")]),
            sequence(vec![condition("has-target"), action("chase-target")]),
            action("idle"),
        ]));
        let trees: TreeOracleImpl = [("brute".to_owned(), tree)].into_iter().collect();
        fixture.oracles = OracleManager::new(
            fixture.oracles.archetypes.clone(),
            fixture.oracles.skills.clone(),
            Arc::new(trees),
        );
        fixture.controller.behavior_tree = Some("brute".to_owned());
    }

    #[test]
    fn agent_missing_from_snapshot_is_skipped() {
        let fixture = Fixture::grunt();
        let provider = DecisionProvider::new(fixture.oracles.as_ai_env(), &fixture.config);
        let empty = WorldSnapshot::builder(RegionId(0)).build();
        assert!(provider.decide(&fixture.controller, &empty, None, fixture.now).is_none());
    }

    #[test]
    fn gated_pass_still_updates_memory() {
        let mut fixture = Fixture::grunt();
        fixture.controller.last_decision = Some(Timestamp(900));
        let provider = DecisionProvider::new(fixture.oracles.as_ai_env(), &fixture.config);

        let update = provider
            .decide(&fixture.controller, &snapshot(Some(Position::new(10.0, 0.0))), None, fixture.now)
            .unwrap();

        assert_eq!(update.path, DecisionPath::Gated);
        assert!(update.decision.is_none());
        assert!(update.controller.memory.contains_key(&HOSTILE));
        assert_eq!(update.controller.last_decision, Some(Timestamp(900)));
        assert_eq!(update.controller.state, AgentState::Idle);
    }

    #[test]
    fn tree_decides_when_it_resolves() {
        let mut fixture = Fixture::grunt();
        with_brute_tree(&mut fixture);
        let provider = DecisionProvider::new(fixture.oracles.as_ai_env(), &fixture.config);

        let update = provider
            .decide(&fixture.controller, &snapshot(Some(Position::new(20.0, 0.0))), None, fixture.now)
            .unwrap();

        assert_eq!(update.path, DecisionPath::Tree);
        let decision = update.decision.unwrap();
        assert_eq!(decision.ability.unwrap().skill_id, "slash");
        assert_eq!(update.controller.state, AgentState::Attacking);
        assert_eq!(update.controller.last_decision, Some(fixture.now));
    }

    #[test]
    fn unknown_tree_falls_back_to_cues() {
        let mut fixture = Fixture::grunt();
        fixture.controller.behavior_tree = Some("missing".to_owned());
        let provider = DecisionProvider::new(fixture.oracles.as_ai_env(), &fixture.config);

        let update = provider
            .decide(&fixture.controller, &snapshot(Some(Position::new(100.0, 0.0))), None, fixture.now)
            .unwrap();

        assert_eq!(update.path, DecisionPath::Cues);
        assert_eq!(update.controller.state, AgentState::Attacking);
    }

    #[test]
    fn passes_are_repeatable() {
        let mut fixture = Fixture::grunt();
        with_brute_tree(&mut fixture);
        let provider = DecisionProvider::new(fixture.oracles.as_ai_env(), &fixture.config);
        let world = snapshot(Some(Position::new(90.0, 30.0)));

        let first = provider.decide(&fixture.controller, &world, None, fixture.now);
        let second = provider.decide(&fixture.controller, &world, None, fixture.now);
        assert_eq!(first, second);
    }
}
