//! Event payloads for each topic.

use serde::{Deserialize, Serialize};

use npc_core::{AgentController, EntityId, RegionId};

/// A controller changed during a tick and replaced its slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControllerUpdated {
    pub region: RegionId,
    pub entity: EntityId,
    pub controller: AgentController,
}
