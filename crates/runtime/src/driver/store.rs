//! Controller store: the only mutable per-agent state.

use std::collections::BTreeMap;

use npc_core::{AgentController, EntityId, RegionId};

use crate::api::{Result, RuntimeError};

/// Controllers of every registered agent, keyed by entity.
///
/// Each agent belongs to exactly one region. Iteration order is ascending
/// entity id, which keeps ticks reproducible.
#[derive(Clone, Debug, Default)]
pub struct ControllerStore {
    agents: BTreeMap<EntityId, (RegionId, AgentController)>,
}

impl ControllerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `controller` in `region`.
    pub fn insert(&mut self, region: RegionId, controller: AgentController) -> Result<()> {
        let entity = controller.entity;
        if self.agents.contains_key(&entity) {
            return Err(RuntimeError::DuplicateAgent(entity));
        }
        self.agents.insert(entity, (region, controller));
        Ok(())
    }

    pub fn remove(&mut self, entity: EntityId) -> Option<(RegionId, AgentController)> {
        self.agents.remove(&entity)
    }

    pub fn get(&self, entity: EntityId) -> Option<&AgentController> {
        self.agents.get(&entity).map(|(_, controller)| controller)
    }

    pub fn region_of(&self, entity: EntityId) -> Option<RegionId> {
        self.agents.get(&entity).map(|(region, _)| *region)
    }

    /// Swaps in a new controller, returning the previous one.
    pub fn replace(
        &mut self,
        entity: EntityId,
        controller: AgentController,
    ) -> Result<AgentController> {
        let (_, slot) = self
            .agents
            .get_mut(&entity)
            .ok_or(RuntimeError::UnknownAgent(entity))?;
        Ok(std::mem::replace(slot, controller))
    }

    pub fn contains(&self, entity: EntityId) -> bool {
        self.agents.contains_key(&entity)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RegionId, &AgentController)> {
        self.agents
            .values()
            .map(|(region, controller)| (*region, controller))
    }

    /// Agent ids grouped by region, both in ascending order.
    pub fn by_region(&self) -> BTreeMap<RegionId, Vec<EntityId>> {
        let mut grouped: BTreeMap<RegionId, Vec<EntityId>> = BTreeMap::new();
        for (entity, (region, _)) in &self.agents {
            grouped.entry(*region).or_default().push(*entity);
        }
        grouped
    }
}
