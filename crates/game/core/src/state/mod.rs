//! Agent-side state: identifiers, geometry, time, factions, controllers and memory.
mod common;
mod controller;
mod cooldowns;
mod faction;
mod memory;

pub use common::{EntityId, Position, RegionId, Timestamp};
pub use controller::{AgentController, AgentState};
pub use cooldowns::{CooldownState, SkillCooldowns};
pub use faction::FactionSet;
pub use memory::{MemoryEntry, MemoryMap};
