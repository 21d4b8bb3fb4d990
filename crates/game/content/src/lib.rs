//! Data-driven decision content and loaders.
//!
//! This crate turns data files into the read-only repositories the decision
//! core consults:
//! - Archetypes (RON)
//! - Skill definitions (RON)
//! - Behavior trees (RON)
//! - Agent rosters (RON)
//! - Decision tunables (TOML)
//!
//! Content is consumed by runtime oracles and never appears in controller state.

pub mod bundle;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use bundle::{AgentSpec, ContentBundle};

#[cfg(feature = "loaders")]
pub use loaders::{
    AgentLoader, ArchetypeLoader, ConfigLoader, ContentFactory, LoadResult, SkillLoader,
    TreeLoader,
};
