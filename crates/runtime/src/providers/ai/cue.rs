//! Cue-driven fallback decisions for agents without a usable tree.
//!
//! Every perceived cue is matched against the archetype's priority table
//! (first matching row per cue). The cue whose row has the lowest priority
//! number wins, and its response picks one canned decision.

use npc_core::{AgentState, CuePriority, CueResponse, Decision, PerceptionCue};

use super::context::{DecisionContext, Target};

/// A cue together with the priority row that claimed it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RankedCue {
    pub cue: PerceptionCue,
    pub response: CueResponse,
    pub priority: i32,
}

/// Returns the winning cue, or `None` if no cue matches any row.
///
/// Ties keep the earlier cue, so visual cues beat memory cues of equal rank.
pub fn rank_cues(cues: &[PerceptionCue], priorities: &[CuePriority]) -> Option<RankedCue> {
    let mut best: Option<RankedCue> = None;
    for cue in cues {
        let Some(row) = priorities.iter().find(|row| row.matches(cue)) else {
            continue;
        };
        if best.is_none_or(|held| row.priority < held.priority) {
            best = Some(RankedCue {
                cue: *cue,
                response: row.response,
                priority: row.priority,
            });
        }
    }
    best
}

/// Decides from the winning cue, or roams when there is none.
pub fn decide_from_cues(ctx: &DecisionContext<'_>) -> Decision {
    let Some(ranked) = ctx.best_cue else {
        return ctx.roam();
    };
    let entity = ctx.entity();
    let cue = ranked.cue;

    match ranked.response {
        CueResponse::Ignore => Decision::idle(),
        CueResponse::Investigate => {
            Decision::move_to(entity, cue.position, AgentState::Investigating)
        }
        CueResponse::Engage => {
            let target = Target::from_cue(&cue, ctx.position);
            let mut decision = ctx.chase(&target);
            if let Some(intent) = ctx.cast_at(&target, |_| true) {
                decision.ability = Some(intent);
                decision.state = AgentState::Attacking;
            }
            decision
        }
        CueResponse::Evade => {
            Decision::move_to(entity, ctx.controller.spawn, AgentState::Fleeing)
        }
        // Nothing to run from: the agent is marked Fleeing but stays put.
        CueResponse::Flee => match cue.source {
            Some(_) => Decision::move_to(entity, ctx.controller.spawn, AgentState::Fleeing),
            None => Decision::hold(AgentState::Fleeing),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::ai::testing::{Fixture, HOSTILE};
    use npc_core::{AbilityTarget, CueStrength, CueType, Position, Timestamp};

    fn memory_cue(x: f32) -> PerceptionCue {
        PerceptionCue {
            kind: CueType::Memory,
            strength: CueStrength::Strong,
            source: Some(HOSTILE),
            position: Position::new(x, 0.0),
            timestamp: Timestamp::ZERO,
        }
    }

    #[test]
    fn lowest_priority_number_wins() {
        let fixture = Fixture::grunt()
            .with_hostile_at(Position::new(50.0, 0.0))
            .with_priorities(&[
                (CueType::Memory, CueResponse::Investigate),
                (CueType::Visual, CueResponse::Engage),
            ]);
        let mut cues = fixture.cues.clone();
        cues.push(memory_cue(80.0));

        let ranked = rank_cues(&cues, &fixture.archetype.cue_priorities).unwrap();
        assert_eq!(ranked.response, CueResponse::Investigate);
        assert_eq!(ranked.priority, 0);
    }

    #[test]
    fn unmatched_cues_are_ignored() {
        let rows = [CuePriority::new(
            CueType::Visual,
            CueStrength::Overwhelming,
            1,
            CueResponse::Engage,
        )];
        assert!(rank_cues(&[memory_cue(10.0)], &rows).is_none());
        assert!(rank_cues(&[], &rows).is_none());
    }

    #[test]
    fn engage_moves_and_casts_when_in_range() {
        let fixture = Fixture::grunt().with_hostile_at(Position::new(10.0, 0.0));
        let decision = decide_from_cues(&fixture.context());

        assert_eq!(decision.state, AgentState::Attacking);
        assert_eq!(decision.movement.unwrap().target, Position::new(10.0, 0.0));
        let intent = decision.ability.unwrap();
        assert_eq!(intent.skill_id, "slash");
        assert_eq!(intent.target, AbilityTarget::Entity(HOSTILE));
    }

    #[test]
    fn engage_chases_when_nothing_is_usable() {
        let mut fixture = Fixture::grunt().with_hostile_at(Position::new(140.0, 0.0));
        fixture.controller.skills = vec!["slash".to_owned()];
        let decision = decide_from_cues(&fixture.context());

        assert_eq!(decision.state, AgentState::Chasing);
        assert!(decision.ability.is_none());
    }

    #[test]
    fn investigate_and_evade() {
        let fixture = Fixture::grunt()
            .with_hostile_at(Position::new(60.0, 0.0))
            .with_priorities(&[(CueType::Visual, CueResponse::Investigate)]);
        let decision = decide_from_cues(&fixture.context());
        assert_eq!(decision.state, AgentState::Investigating);
        assert_eq!(decision.movement.unwrap().target, Position::new(60.0, 0.0));

        let mut fixture = Fixture::grunt()
            .with_hostile_at(Position::new(60.0, 0.0))
            .with_priorities(&[(CueType::Visual, CueResponse::Evade)]);
        fixture.position = Position::new(30.0, 0.0);
        let decision = decide_from_cues(&fixture.context());
        assert_eq!(decision.state, AgentState::Fleeing);
        assert_eq!(decision.movement.unwrap().target, Position::ORIGIN);
    }

    #[test]
    fn flee_without_a_source_holds_position() {
        let mut fixture = Fixture::grunt()
            .with_hostile_at(Position::new(60.0, 0.0))
            .with_priorities(&[(CueType::Visual, CueResponse::Flee)]);
        fixture.cues[0].source = None;
        let decision = decide_from_cues(&fixture.context());

        assert_eq!(decision.state, AgentState::Fleeing);
        assert!(decision.is_inert());
    }

    #[test]
    fn flee_from_a_known_source_runs_home() {
        let mut fixture = Fixture::grunt()
            .with_hostile_at(Position::new(60.0, 0.0))
            .with_priorities(&[(CueType::Visual, CueResponse::Flee)]);
        fixture.position = Position::new(30.0, 0.0);
        assert_eq!(fixture.cues[0].source, Some(HOSTILE));
        let decision = decide_from_cues(&fixture.context());

        assert_eq!(decision.state, AgentState::Fleeing);
        let movement = decision.movement.unwrap();
        assert_eq!(movement.entity, fixture.controller.entity);
        assert_eq!(movement.target, Position::ORIGIN);
        assert!(decision.ability.is_none());
    }

    #[test]
    fn ignore_idles_and_no_cue_roams_home() {
        let fixture = Fixture::grunt()
            .with_hostile_at(Position::new(60.0, 0.0))
            .with_priorities(&[(CueType::Visual, CueResponse::Ignore)]);
        assert_eq!(decide_from_cues(&fixture.context()), Decision::idle());

        let mut fixture = Fixture::grunt();
        fixture.position = Position::new(100.0, 0.0);
        let decision = decide_from_cues(&fixture.context());
        assert_eq!(decision.state, AgentState::Patrolling);
        assert_eq!(decision.movement.unwrap().target, Position::ORIGIN);
    }
}
