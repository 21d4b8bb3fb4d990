//! Runtime orchestration for NPC decision-making.
//!
//! This crate wires static content, per-region world snapshots and the
//! controller store into a tick-driven runtime. Consumers embed [`Runtime`],
//! register agents, publish snapshots through a [`SnapshotProvider`], and
//! receive movement commands, ability intents and controller changes on the
//! [`EventBus`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for decision output
//! - [`providers`] runs perception, behavior trees and the cue engine
//! - [`driver`] walks the controller store once per tick
//! - [`oracle`] adapts loaded content to `npc-core` oracle traits
pub mod api;
pub mod driver;
pub mod events;
pub mod oracle;
pub mod providers;
pub mod runtime;

pub use api::{InMemorySnapshotProvider, Result, RuntimeError, SnapshotProvider};
pub use driver::{ControllerStore, TickDriver, TickReport};
pub use events::{ControllerUpdated, Event, EventBus, Topic};
pub use oracle::{ArchetypeOracleImpl, OracleManager, SkillOracleImpl, TreeOracleImpl};
pub use providers::{AgentUpdate, DecisionPath, DecisionProvider};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
