//! Per-tick driver.
//!
//! A tick walks every registered agent, region by region, in ascending
//! entity order. Each region's snapshot is fetched once. Movement and
//! ability output is published every time it is produced; controller updates
//! are published only when the controller actually changed.

use npc_core::{AiConfig, AiEnv, CooldownState, Timestamp};
use serde::Serialize;
use tracing::{debug, warn};

use super::store::ControllerStore;
use crate::api::SnapshotProvider;
use crate::events::{ControllerUpdated, Event, EventBus};
use crate::providers::DecisionProvider;

/// Counters for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TickReport {
    /// Agents that ran a full decision.
    pub evaluated: usize,
    /// Agents that only perceived because their interval had not elapsed.
    pub gated: usize,
    /// Agents without a snapshot, or missing from theirs.
    pub skipped: usize,
    pub movements: usize,
    pub abilities: usize,
    pub controller_updates: usize,
}

/// Runs one decision pass for every agent in a [`ControllerStore`].
pub struct TickDriver<'a> {
    provider: DecisionProvider<'a>,
    snapshots: &'a dyn SnapshotProvider,
    bus: &'a EventBus,
}

impl<'a> TickDriver<'a> {
    pub fn new(
        env: AiEnv<'a>,
        config: &'a AiConfig,
        snapshots: &'a dyn SnapshotProvider,
        bus: &'a EventBus,
    ) -> Self {
        Self {
            provider: DecisionProvider::new(env, config),
            snapshots,
            bus,
        }
    }

    pub fn tick(
        &self,
        store: &mut ControllerStore,
        cooldowns: &CooldownState,
        now: Timestamp,
    ) -> TickReport {
        let mut report = TickReport::default();

        for (region, agents) in store.by_region() {
            let Some(snapshot) = self.snapshots.snapshot(region) else {
                warn!(%region, agents = agents.len(), "no snapshot for region, skipping");
                report.skipped += agents.len();
                continue;
            };

            for entity in agents {
                let Some(current) = store.get(entity) else {
                    continue;
                };
                let Some(update) =
                    self.provider
                        .decide(current, &snapshot, cooldowns.for_entity(entity), now)
                else {
                    report.skipped += 1;
                    continue;
                };

                match update.decision {
                    None => report.gated += 1,
                    Some(decision) => {
                        report.evaluated += 1;
                        if let Some(movement) = decision.movement {
                            report.movements += 1;
                            self.bus.publish(Event::Movement(movement));
                        }
                        if let Some(intent) = decision.ability {
                            report.abilities += 1;
                            self.bus.publish(Event::Ability(intent));
                        }
                    }
                }

                if update.controller == *current {
                    continue;
                }
                report.controller_updates += 1;
                self.bus.publish(Event::Controller(Box::new(ControllerUpdated {
                    region,
                    entity,
                    controller: update.controller.clone(),
                })));
                if let Err(err) = store.replace(entity, update.controller) {
                    warn!(agent = %entity, error = %err, "controller vanished mid-tick");
                }
            }
        }

        debug!(
            %now,
            evaluated = report.evaluated,
            gated = report.gated,
            skipped = report.skipped,
            movements = report.movements,
            abilities = report.abilities,
            updates = report.controller_updates,
            "tick complete"
        );
        report
    }
}
