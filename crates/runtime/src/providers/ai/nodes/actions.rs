//! Action leaves.
//!
//! Actions turn the [`DecisionContext`] into a [`Decision`]. Multi-pass
//! activities (chasing, walking somewhere) report `Running`; actions that
//! finish within the pass report `Success`; a missing precondition such as
//! an unresolved target is a `Failure` with no decision.

use behavior_tree::{Outcome, Params, Status};
use npc_core::{AgentState, Decision, DeliveryMode, SkillDefinition};

use super::param_or;
use crate::providers::ai::DecisionContext;

/// Every action a tree may name.
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
pub enum ActionKind {
    ChaseTarget,
    /// Cast any usable skill at the target, chasing when none is usable.
    AttackTarget,
    AttackMelee,
    AttackRanged,
    AttackArea,
    /// Cast the `skill` param at the target, chasing when it is not usable.
    UseSkill,
    Patrol,
    ReturnToSpawn,
    /// Back off `distance` (default: configured retreat distance) from the target.
    Retreat,
    Idle,
}

impl ActionKind {
    pub fn execute(self, ctx: &DecisionContext<'_>, params: &Params) -> Outcome<Decision> {
        match self {
            ActionKind::ChaseTarget => match ctx.target {
                Some(target) => Outcome::with(Status::Running, ctx.chase(&target)),
                None => Outcome::failure(),
            },
            ActionKind::AttackTarget => attack(ctx, |_| true),
            ActionKind::AttackMelee => attack(ctx, |s| s.delivery == DeliveryMode::Melee),
            ActionKind::AttackRanged => attack(ctx, |s| s.delivery == DeliveryMode::Projectile),
            ActionKind::AttackArea => attack(ctx, |s| s.delivery == DeliveryMode::Area),
            ActionKind::UseSkill => match params.get("skill") {
                Some(id) => attack(ctx, |s| s.id == *id),
                None => Outcome::failure(),
            },
            ActionKind::Patrol => settle(ctx.roam()),
            ActionKind::ReturnToSpawn => settle(ctx.return_to_spawn()),
            ActionKind::Retreat => retreat(ctx, params),
            ActionKind::Idle => Outcome::with(Status::Success, Decision::idle()),
        }
    }
}

/// Running while there is somewhere to go, Success once settled.
fn settle(decision: Decision) -> Outcome<Decision> {
    let status = if decision.movement.is_some() {
        Status::Running
    } else {
        Status::Success
    };
    Outcome::with(status, decision)
}

fn attack(
    ctx: &DecisionContext<'_>,
    filter: impl Fn(&SkillDefinition) -> bool,
) -> Outcome<Decision> {
    let Some(target) = ctx.target else {
        return Outcome::failure();
    };
    match ctx.cast_at(&target, filter) {
        Some(intent) => Outcome::with(Status::Success, Decision::cast(intent)),
        None => Outcome::with(Status::Running, ctx.chase(&target)),
    }
}

fn retreat(ctx: &DecisionContext<'_>, params: &Params) -> Outcome<Decision> {
    let Some(target) = ctx.target else {
        return Outcome::failure();
    };
    let Some(distance) = param_or(params, "distance", ctx.config.retreat_distance) else {
        return Outcome::failure();
    };

    // Standing on the target: fall back to the spawn direction.
    let away = (ctx.position - target.position)
        .normalized()
        .or_else(|| (ctx.controller.spawn - target.position).normalized());
    let Some(away) = away else {
        return Outcome::failure();
    };

    let destination = ctx.position + away * distance;
    Outcome::with(
        Status::Running,
        Decision::move_to(ctx.entity(), destination, AgentState::Fleeing),
    )
}
