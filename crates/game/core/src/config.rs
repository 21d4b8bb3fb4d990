/// Decision-core tunables and fixed constants.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AiConfig {
    /// Distance at which a waypoint or spawn target counts as reached.
    pub waypoint_reach_distance: f32,
    /// Default range for `target-in-melee-range`.
    pub melee_range: f32,
    /// Default distance for `target-too-close`.
    pub too_close_distance: f32,
    /// How far `retreat` moves away from the threat.
    pub retreat_distance: f32,
    /// Base seed for random waypoint selection.
    pub world_seed: u64,
}

impl AiConfig {
    // ===== fixed constants =====
    /// Range used for skills that do not configure one.
    pub const DEFAULT_SKILL_RANGE: f32 = 64.0;
    /// Memory entries at or below this confidence are forgotten.
    pub const MIN_CONFIDENCE: f32 = 0.1;
    /// Memory duration divisor applied while an agent is beyond its leash.
    pub const LEASH_MEMORY_DIVISOR: u64 = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_WAYPOINT_REACH_DISTANCE: f32 = 8.0;
    pub const DEFAULT_MELEE_RANGE: f32 = 32.0;
    pub const DEFAULT_TOO_CLOSE_DISTANCE: f32 = 16.0;
    pub const DEFAULT_RETREAT_DISTANCE: f32 = 96.0;

    pub fn new() -> Self {
        Self {
            waypoint_reach_distance: Self::DEFAULT_WAYPOINT_REACH_DISTANCE,
            melee_range: Self::DEFAULT_MELEE_RANGE,
            too_close_distance: Self::DEFAULT_TOO_CLOSE_DISTANCE,
            retreat_distance: Self::DEFAULT_RETREAT_DISTANCE,
            world_seed: 0,
        }
    }

    pub fn with_world_seed(mut self, world_seed: u64) -> Self {
        self.world_seed = world_seed;
        self
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::new()
    }
}
