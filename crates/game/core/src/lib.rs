//! Deterministic NPC decision rules and data types.
//!
//! `npc-core` holds everything an agent's decision pass needs that does not
//! depend on how the runtime schedules agents or delivers commands:
//!
//! - [`state`]: ids, geometry, time, factions, the per-agent controller and its memory
//! - [`env`]: read-only repositories (archetypes, skills, trees) and deterministic RNG
//! - [`snapshot`]: the per-region world snapshot and its spatial bucket index
//! - [`perception`]: cue gathering and memory decay
//! - [`abilities`]: first-fit skill selection and cast-intent construction
//! - [`navigation`]: per-archetype waypoint policies
//! - [`decision`]: the commands a decision pass emits
//!
//! Every function here is pure: inputs are borrowed, results are returned as
//! new values, and nothing is mutated in place.
pub mod abilities;
pub mod config;
pub mod decision;
pub mod env;
pub mod error;
pub mod navigation;
pub mod perception;
pub mod snapshot;
pub mod state;

pub use abilities::{build_cast_intent, select_skill, select_skill_where};
pub use config::AiConfig;
pub use decision::{AbilityIntent, AbilityTarget, Decision, MovementCommand};
pub use env::{
    AiEnv, Archetype, ArchetypeOracle, BaseStats, BehaviorType, DecisionTreeOracle, DeliveryMode,
    PcgRng, PerceptionConfig, RngOracle, SkillDefinition, SkillOracle, TargetingMode,
    compute_seed,
};
pub use error::OracleError;
pub use navigation::{WaypointTarget, next_waypoint};
pub use perception::{
    CuePriority, CueResponse, CueStrength, CueType, Perception, PerceptionCue, PerceptionInput,
    perceive,
};
pub use snapshot::{CellCoord, SpatialIndex, WorldSnapshot, WorldSnapshotBuilder};
pub use state::{
    AgentController, AgentState, CooldownState, EntityId, FactionSet, MemoryEntry, MemoryMap,
    Position, RegionId, SkillCooldowns, Timestamp,
};
