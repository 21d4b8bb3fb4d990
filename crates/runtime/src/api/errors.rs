//! Unified error types surfaced by the runtime API.
//!
//! Decision passes never fail; these cover wiring the runtime together and
//! managing the agent roster.
use thiserror::Error;

use npc_core::EntityId;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("runtime requires oracles to be configured before building")]
    MissingOracles,

    #[error("runtime requires a snapshot provider to be configured before building")]
    MissingSnapshotProvider,

    #[error("agent {0} is already registered")]
    DuplicateAgent(EntityId),

    #[error("agent {0} is not registered")]
    UnknownAgent(EntityId),

    #[error("failed to load content")]
    Content(#[source] anyhow::Error),
}
