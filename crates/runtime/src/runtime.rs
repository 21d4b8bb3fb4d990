//! High-level runtime orchestrator.
//!
//! The runtime owns the controller store and the event bus, and exposes a
//! builder-based API for hosts to register agents and drive ticks.

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::info;

use npc_content::{ContentBundle, ContentFactory};
use npc_core::{AgentController, AiConfig, CooldownState, EntityId, RegionId, Timestamp};

use crate::api::{Result, RuntimeError, SnapshotProvider};
use crate::driver::{ControllerStore, TickDriver, TickReport};
use crate::events::{Event, EventBus, Topic};
use crate::oracle::OracleManager;

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub ai: AiConfig,
    /// Capacity of each event topic channel.
    pub event_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            ai: AiConfig::default(),
            event_buffer_size: EventBus::DEFAULT_CAPACITY,
        }
    }
}

/// Main runtime that drives decision ticks.
///
/// Design: content is immutable after build; the controller store is the
/// only per-agent state and is changed only by [`Runtime::step`] and the
/// spawn/despawn calls.
pub struct Runtime {
    config: RuntimeConfig,
    oracles: OracleManager,
    snapshots: Arc<dyn SnapshotProvider>,
    store: ControllerStore,
    bus: EventBus,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    /// Registers an agent in `region`.
    pub fn spawn_agent(&mut self, region: RegionId, controller: AgentController) -> Result<()> {
        let entity = controller.entity;
        self.store.insert(region, controller)?;
        info!(agent = %entity, %region, "agent spawned");
        Ok(())
    }

    /// Removes an agent and returns its last controller.
    pub fn despawn_agent(&mut self, entity: EntityId) -> Result<AgentController> {
        let (region, controller) = self
            .store
            .remove(entity)
            .ok_or(RuntimeError::UnknownAgent(entity))?;
        info!(agent = %entity, %region, "agent despawned");
        Ok(controller)
    }

    pub fn controller(&self, entity: EntityId) -> Option<&AgentController> {
        self.store.get(entity)
    }

    pub fn agents(&self) -> &ControllerStore {
        &self.store
    }

    /// Subscribe to a specific event topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    pub fn subscribe_multiple(&self, topics: &[Topic]) -> Vec<(Topic, broadcast::Receiver<Event>)> {
        self.bus.subscribe_multiple(topics)
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.bus
    }

    /// Runs one tick at `now` against the latest snapshots.
    pub fn step(&mut self, now: Timestamp, cooldowns: &CooldownState) -> TickReport {
        let driver = TickDriver::new(
            self.oracles.as_ai_env(),
            &self.config.ai,
            self.snapshots.as_ref(),
            &self.bus,
        );
        driver.tick(&mut self.store, cooldowns, now)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    oracles: Option<OracleManager>,
    snapshots: Option<Arc<dyn SnapshotProvider>>,
    content_dir: Option<PathBuf>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            oracles: None,
            snapshots: None,
            content_dir: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set oracles directly
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Use already-loaded content for oracles and AI tuning.
    pub fn content(mut self, content: &ContentBundle) -> Self {
        self.oracles = Some(OracleManager::from_content(content));
        self.config.ai = content.config.clone();
        self
    }

    /// Load content from a data directory at build time.
    ///
    /// Takes precedence over [`RuntimeBuilder::content`] and
    /// [`RuntimeBuilder::oracles`].
    pub fn content_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.content_dir = Some(dir.into());
        self
    }

    /// Set the required snapshot provider
    pub fn snapshot_provider(mut self, provider: Arc<dyn SnapshotProvider>) -> Self {
        self.snapshots = Some(provider);
        self
    }

    /// Build the runtime
    pub fn build(mut self) -> Result<Runtime> {
        if let Some(dir) = self.content_dir.take() {
            let content = ContentFactory::new(dir)
                .load_all()
                .map_err(RuntimeError::Content)?;
            self = self.content(&content);
        }

        let oracles = self.oracles.ok_or(RuntimeError::MissingOracles)?;
        let snapshots = self
            .snapshots
            .ok_or(RuntimeError::MissingSnapshotProvider)?;

        info!(
            archetypes = oracles.archetypes().len(),
            skills = oracles.skills().len(),
            trees = oracles.trees().len(),
            world_seed = self.config.ai.world_seed,
            "runtime built"
        );

        Ok(Runtime {
            bus: EventBus::with_capacity(self.config.event_buffer_size),
            config: self.config,
            oracles,
            snapshots,
            store: ControllerStore::new(),
        })
    }
}
