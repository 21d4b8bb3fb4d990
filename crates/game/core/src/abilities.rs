//! First-fit skill selection and cast-intent construction.
//!
//! Skills are tried in the order the agent lists them. The first one that
//! resolves, reaches the target and is off cooldown wins; there is no scoring.

use crate::decision::{AbilityIntent, AbilityTarget};
use crate::env::{SkillDefinition, SkillOracle, TargetingMode};
use crate::state::{EntityId, Position, SkillCooldowns, Timestamp};

/// Picks the first listed skill usable against `target` at `now`.
///
/// A missing cooldown map means every skill is ready.
pub fn select_skill<'a>(
    skills: &[String],
    oracle: &'a dyn SkillOracle,
    cooldowns: Option<&SkillCooldowns>,
    now: Timestamp,
    caster: Position,
    target: Position,
) -> Option<&'a SkillDefinition> {
    select_skill_where(skills, oracle, cooldowns, now, caster, target, |_| true)
}

/// Like [`select_skill`], but only considers skills accepted by `filter`.
pub fn select_skill_where<'a>(
    skills: &[String],
    oracle: &'a dyn SkillOracle,
    cooldowns: Option<&SkillCooldowns>,
    now: Timestamp,
    caster: Position,
    target: Position,
    filter: impl Fn(&SkillDefinition) -> bool,
) -> Option<&'a SkillDefinition> {
    let distance = caster.distance(target);

    skills.iter().find_map(|id| {
        let skill = oracle.skill(id)?;
        if !filter(skill) || distance > skill.effective_range() {
            return None;
        }
        let ready = cooldowns
            .and_then(|tracked| tracked.get(id))
            .is_none_or(|&ready_at| ready_at <= now);
        ready.then_some(skill)
    })
}

/// Builds the cast intent for `skill` aimed at `target`.
///
/// Entity and direction targeting degrade to a position target when the
/// entity is unknown or the direction has no length.
pub fn build_cast_intent(
    skill: &SkillDefinition,
    caster: EntityId,
    caster_position: Position,
    target_entity: Option<EntityId>,
    target_position: Position,
) -> AbilityIntent {
    let target = match skill.targeting {
        TargetingMode::SelfTarget => AbilityTarget::SelfTarget,
        TargetingMode::Entity => match target_entity {
            Some(entity) => AbilityTarget::Entity(entity),
            None => AbilityTarget::Position(target_position),
        },
        TargetingMode::Position => AbilityTarget::Position(target_position),
        TargetingMode::Direction => match (target_position - caster_position).normalized() {
            Some(direction) => AbilityTarget::Direction(direction),
            None => AbilityTarget::Position(target_position),
        },
    };

    AbilityIntent {
        caster,
        skill_id: skill.id.clone(),
        target,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::env::DeliveryMode;

    struct Skills(BTreeMap<String, SkillDefinition>);

    impl SkillOracle for Skills {
        fn skill(&self, id: &str) -> Option<&SkillDefinition> {
            self.0.get(id)
        }
    }

    fn def(id: &str, range: Option<f32>, delivery: DeliveryMode, targeting: TargetingMode) -> SkillDefinition {
        SkillDefinition {
            id: id.into(),
            range,
            cooldown_ms: 1_000,
            targeting,
            delivery,
        }
    }

    fn oracle() -> Skills {
        Skills(
            [
                def("bite", Some(20.0), DeliveryMode::Melee, TargetingMode::Entity),
                def("spit", Some(120.0), DeliveryMode::Projectile, TargetingMode::Direction),
                def("aura", Some(500.0), DeliveryMode::Passive, TargetingMode::SelfTarget),
                def("slam", None, DeliveryMode::Area, TargetingMode::Position),
            ]
            .into_iter()
            .map(|skill| (skill.id.clone(), skill))
            .collect(),
        )
    }

    fn list(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    const CASTER: Position = Position::ORIGIN;

    #[test]
    fn first_listed_qualifying_skill_wins() {
        let skills = oracle();
        let picked = select_skill(&list(&["spit", "bite"]), &skills, None, Timestamp(0), CASTER, Position::new(10.0, 0.0));
        assert_eq!(picked.map(|s| s.id.as_str()), Some("spit"));
    }

    #[test]
    fn skips_unknown_and_out_of_range_skills() {
        let skills = oracle();
        let picked = select_skill(
            &list(&["missing", "bite", "slam"]),
            &skills,
            None,
            Timestamp(0),
            CASTER,
            Position::new(50.0, 0.0),
        );
        assert_eq!(picked.map(|s| s.id.as_str()), Some("slam"));

        let too_far = select_skill(&list(&["slam"]), &skills, None, Timestamp(0), CASTER, Position::new(65.0, 0.0));
        assert!(too_far.is_none());
    }

    #[test]
    fn passive_skills_only_reach_the_caster_position() {
        let skills = oracle();
        let ids = list(&["aura"]);

        let on_top = select_skill(&ids, &skills, None, Timestamp(0), CASTER, CASTER);
        assert_eq!(on_top.map(|s| s.id.as_str()), Some("aura"));

        let nudged = select_skill(&ids, &skills, None, Timestamp(0), CASTER, Position::new(0.01, 0.0));
        assert!(nudged.is_none());
    }

    #[test]
    fn respects_cooldowns() {
        let skills = oracle();
        let cooldowns = SkillCooldowns::from([("bite".to_string(), Timestamp(500))]);
        let ids = list(&["bite", "spit"]);
        let target = Position::new(10.0, 0.0);

        let early = select_skill(&ids, &skills, Some(&cooldowns), Timestamp(499), CASTER, target);
        assert_eq!(early.map(|s| s.id.as_str()), Some("spit"));

        let ready = select_skill(&ids, &skills, Some(&cooldowns), Timestamp(500), CASTER, target);
        assert_eq!(ready.map(|s| s.id.as_str()), Some("bite"));
    }

    #[test]
    fn selection_never_violates_range_or_cooldown() {
        let skills = oracle();
        let ids = list(&["bite", "spit", "aura", "slam"]);
        let cooldowns = SkillCooldowns::from([("spit".to_string(), Timestamp(300))]);
        for step in 0..40u64 {
            let now = Timestamp(step * 25);
            let target = Position::new(step as f32 * 4.0, 0.0);
            if let Some(skill) = select_skill(&ids, &skills, Some(&cooldowns), now, CASTER, target) {
                assert!(CASTER.distance(target) <= skill.effective_range());
                assert!(cooldowns.get(&skill.id).is_none_or(|&at| at <= now));
            }
        }
    }

    #[test]
    fn filter_restricts_candidates() {
        let skills = oracle();
        let picked = select_skill_where(
            &list(&["bite", "spit"]),
            &skills,
            None,
            Timestamp(0),
            CASTER,
            Position::new(10.0, 0.0),
            |skill| skill.delivery == DeliveryMode::Projectile,
        );
        assert_eq!(picked.map(|s| s.id.as_str()), Some("spit"));
    }

    #[test]
    fn intent_targets_follow_targeting_mode() {
        let skills = oracle();
        let target = Position::new(0.0, 30.0);

        let bite = build_cast_intent(skills.skill("bite").unwrap(), EntityId(1), CASTER, Some(EntityId(2)), target);
        assert_eq!(bite.target, AbilityTarget::Entity(EntityId(2)));

        let bite = build_cast_intent(skills.skill("bite").unwrap(), EntityId(1), CASTER, None, target);
        assert_eq!(bite.target, AbilityTarget::Position(target));

        let spit = build_cast_intent(skills.skill("spit").unwrap(), EntityId(1), CASTER, None, target);
        assert_eq!(spit.target, AbilityTarget::Direction(Position::new(0.0, 1.0)));

        let spit = build_cast_intent(skills.skill("spit").unwrap(), EntityId(1), CASTER, None, CASTER);
        assert_eq!(spit.target, AbilityTarget::Position(CASTER));

        let aura = build_cast_intent(skills.skill("aura").unwrap(), EntityId(1), CASTER, Some(EntityId(2)), target);
        assert_eq!(aura.target, AbilityTarget::SelfTarget);
        assert_eq!(aura.skill_id, "aura");
        assert_eq!(aura.caster, EntityId(1));
    }
}
