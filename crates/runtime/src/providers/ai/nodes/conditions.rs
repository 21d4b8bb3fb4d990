//! Condition leaves.
//!
//! Conditions only inspect the [`DecisionContext`]; they never produce a
//! decision. Each maps to `Success` or `Failure`.

use behavior_tree::{Params, Status};
use npc_core::{CueResponse, CueStrength, CueType};

use super::{param_opt, param_or};
use crate::providers::ai::DecisionContext;

/// Every condition a tree may name.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
pub enum ConditionKind {
    /// A target was resolved this pass.
    HasTarget,
    /// Target within `range` (default: visual range).
    TargetInRange,
    /// Target within `range` (default: configured melee range).
    TargetInMeleeRange,
    /// Target within `distance` (default: configured too-close distance).
    TargetTooClose,
    /// Agent is farther from spawn than its leash allows.
    BeyondLeashDistance,
    /// `skill` (or, without a param, any listed skill) resolves and is off cooldown.
    SkillReady,
    /// Some cue of `type` at or above `min-strength` was perceived.
    HasCue,
    /// The winning cue maps to `response`.
    CueResponseMatches,
    /// Health is not part of the snapshot; always fails.
    SelfHealthBelow,
    /// Health is not part of the snapshot; always fails.
    TargetHealthBelow,
}

impl ConditionKind {
    pub fn evaluate(self, ctx: &DecisionContext<'_>, params: &Params) -> Status {
        let passed = match self {
            ConditionKind::HasTarget => ctx.target.is_some(),
            ConditionKind::TargetInRange => {
                target_within(ctx, param_or(params, "range", ctx.archetype.perception.visual_range))
            }
            ConditionKind::TargetInMeleeRange => {
                target_within(ctx, param_or(params, "range", ctx.config.melee_range))
            }
            ConditionKind::TargetTooClose => {
                target_within(ctx, param_or(params, "distance", ctx.config.too_close_distance))
            }
            ConditionKind::BeyondLeashDistance => {
                ctx.distance_to_spawn() > ctx.archetype.perception.leash_distance
            }
            ConditionKind::SkillReady => skill_ready(ctx, params),
            ConditionKind::HasCue => has_cue(ctx, params),
            ConditionKind::CueResponseMatches => params
                .get("response")
                .and_then(|raw| raw.trim().parse::<CueResponse>().ok())
                .is_some_and(|expected| {
                    ctx.best_cue.is_some_and(|ranked| ranked.response == expected)
                }),
            ConditionKind::SelfHealthBelow | ConditionKind::TargetHealthBelow => false,
        };
        Status::from_bool(passed)
    }
}

fn target_within(ctx: &DecisionContext<'_>, limit: Option<f32>) -> bool {
    match (ctx.target, limit) {
        (Some(target), Some(limit)) => target.distance <= limit,
        _ => false,
    }
}

fn skill_ready(ctx: &DecisionContext<'_>, params: &Params) -> bool {
    let ready = |id: &str| {
        ctx.env.skill(id).is_some()
            && ctx
                .cooldowns
                .and_then(|tracked| tracked.get(id))
                .is_none_or(|&ready_at| ready_at <= ctx.now)
    };
    let listed = &ctx.controller.skills;

    match params.get("skill") {
        Some(id) => listed.iter().any(|s| s == id) && ready(id),
        None => listed.iter().any(|s| ready(s)),
    }
}

fn has_cue(ctx: &DecisionContext<'_>, params: &Params) -> bool {
    let Ok(kind) = param_opt::<CueType>(params, "type") else {
        return false;
    };
    let Some(min) = param_or(params, "min-strength", CueStrength::Weak) else {
        return false;
    };
    ctx.cues
        .iter()
        .any(|cue| kind.is_none_or(|k| cue.kind == k) && cue.strength >= min)
}
