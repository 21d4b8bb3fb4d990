//! Skill definitions and oracle interface.

use crate::config::AiConfig;

/// How a skill's target is expressed in a cast intent.
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
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TargetingMode {
    SelfTarget,
    Entity,
    Position,
    Direction,
}

/// How a skill reaches its target.
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
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DeliveryMode {
    Melee,
    Projectile,
    Area,
    Passive,
}

/// Read-only skill definition.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillDefinition {
    pub id: String,
    /// Maximum caster-to-target distance. Falls back to
    /// [`AiConfig::DEFAULT_SKILL_RANGE`] when absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub range: Option<f32>,
    pub cooldown_ms: u64,
    pub targeting: TargetingMode,
    pub delivery: DeliveryMode,
}

impl SkillDefinition {
    /// Range used for selection. Passive skills only reach the caster's own position.
    pub fn effective_range(&self) -> f32 {
        if self.delivery == DeliveryMode::Passive {
            return 0.0;
        }
        self.range.unwrap_or(AiConfig::DEFAULT_SKILL_RANGE)
    }
}

/// Oracle providing skill definitions by id.
pub trait SkillOracle: Send + Sync {
    fn skill(&self, id: &str) -> Option<&SkillDefinition>;
}
