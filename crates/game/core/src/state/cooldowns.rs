use std::collections::BTreeMap;

use super::common::{EntityId, Timestamp};

/// Ready-at times for one caster, keyed by skill id.
pub type SkillCooldowns = BTreeMap<String, Timestamp>;

/// Externally computed cooldown state for every caster.
///
/// The decision core only reads it; the combat system owns updates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CooldownState {
    entries: BTreeMap<EntityId, SkillCooldowns>,
}

impl CooldownState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records when `skill` becomes usable again for `caster`.
    pub fn set_ready_at(&mut self, caster: EntityId, skill: impl Into<String>, at: Timestamp) {
        self.entries
            .entry(caster)
            .or_default()
            .insert(skill.into(), at);
    }

    /// Cooldowns tracked for `caster`, if any.
    pub fn for_entity(&self, caster: EntityId) -> Option<&SkillCooldowns> {
        self.entries.get(&caster)
    }
}
