//! Archetype definitions and oracle interface.
//!
//! An archetype is the shared configuration many agents point at by id
//! (e.g., "goblin_scout", "sentry_turret"). Lookups that miss resolve to
//! [`Archetype::fallback`].

use std::sync::LazyLock;

use crate::perception::{CuePriority, CueResponse, CueStrength, CueType};

/// How an agent moves around when it has nothing better to do.
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
pub enum BehaviorType {
    /// Walks its waypoints in order.
    Patrol,
    /// Roams between random waypoints.
    Aggressive,
    /// Holds the waypoint nearest its spawn.
    Defensive,
    /// Holds the waypoint nearest its spawn.
    Supporter,
    /// Waits at spawn until its waypoint index moves off zero.
    Ambusher,
    /// Never leaves spawn.
    Turret,
    /// Roams between random waypoints.
    Passive,
}

/// Sensory configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerceptionConfig {
    pub visual_range: f32,
    /// Full cone width in degrees; 360 or more sees in every direction.
    pub fov_degrees: f32,
    pub memory_duration_ms: u64,
    /// Beyond this distance from spawn memory fades faster.
    pub leash_distance: f32,
}

impl PerceptionConfig {
    /// Returns `true` if the field of view covers every direction.
    #[inline]
    pub fn is_omnidirectional(&self) -> bool {
        self.fov_degrees >= 360.0
    }
}

/// Combat stats carried for consumers of the archetype. Not read by decisions.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BaseStats {
    pub max_health: u32,
    pub move_speed: f32,
    pub attack_power: u32,
}

impl Default for BaseStats {
    fn default() -> Self {
        Self {
            max_health: 100,
            move_speed: 80.0,
            attack_power: 10,
        }
    }
}

/// Shared, read-only configuration for a family of agents.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Archetype {
    pub behavior: BehaviorType,
    pub perception: PerceptionConfig,
    /// Matched in cue order; lower priority numbers win.
    pub cue_priorities: Vec<CuePriority>,
    /// Minimum time between full decision passes.
    pub decision_interval_ms: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: BaseStats,
}

static FALLBACK: LazyLock<Archetype> = LazyLock::new(|| Archetype {
    behavior: BehaviorType::Aggressive,
    perception: PerceptionConfig {
        visual_range: 150.0,
        fov_degrees: 360.0,
        memory_duration_ms: 5_000,
        leash_distance: 300.0,
    },
    cue_priorities: vec![
        CuePriority::new(CueType::Visual, CueStrength::Weak, 10, CueResponse::Engage),
        CuePriority::new(CueType::Memory, CueStrength::Weak, 20, CueResponse::Investigate),
    ],
    decision_interval_ms: 500,
    stats: BaseStats::default(),
});

impl Archetype {
    /// Built-in archetype substituted for ids that do not resolve.
    pub fn fallback() -> &'static Archetype {
        &FALLBACK
    }
}

/// Oracle providing archetypes by id.
pub trait ArchetypeOracle: Send + Sync {
    /// Returns the archetype registered under `id`.
    fn archetype(&self, id: &str) -> Option<&Archetype>;
}
