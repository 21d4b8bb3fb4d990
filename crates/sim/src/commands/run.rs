//! Run the content roster against a scripted intruder.
//!
//! Every tick publishes a fresh snapshot, steps the runtime, feeds movement
//! commands back into the world and records ability cooldowns.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use tokio::sync::broadcast::{Receiver, error::TryRecvError};

use npc_content::{ContentBundle, ContentFactory};
use npc_core::{BaseStats, CooldownState, EntityId, Position, RegionId, SkillOracle, Timestamp};
use npc_runtime::{Event, InMemorySnapshotProvider, Runtime, TickReport, Topic};

use crate::world::ScriptedWorld;

/// First entity id handed to spawned agents.
const FIRST_AGENT: u32 = 100;

/// Vertical spacing between roster copies.
const COPY_SPACING: f32 = 400.0;

/// Run the roster against a scripted intruder
#[derive(Parser)]
pub struct Run {
    /// Content directory (defaults to the shipped sample content)
    #[arg(short, long, value_name = "DIR")]
    content: Option<PathBuf>,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 100)]
    ticks: u64,

    /// Simulated milliseconds per tick
    #[arg(long, default_value_t = 100)]
    tick_ms: u64,

    /// How many copies of the roster to spawn
    #[arg(long, default_value_t = 1)]
    copies: u32,

    /// Intruder walking speed in units per second
    #[arg(long, default_value_t = 120.0)]
    intruder_speed: f32,

    /// Override the world seed from the content config
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// One line per tick with counters
    Summary,
    /// One JSON object per emitted event
    Json,
}

impl Run {
    pub fn execute(self) -> Result<()> {
        let dir = self.content.clone().unwrap_or_else(super::default_content_dir);
        let mut content = ContentFactory::new(&dir)
            .load_all()
            .with_context(|| format!("Failed to load content from {}", dir.display()))?;
        if let Some(seed) = self.seed {
            content.config = content.config.with_world_seed(seed);
        }

        let region = RegionId(0);
        let snapshots = Arc::new(InMemorySnapshotProvider::new());
        let mut runtime = Runtime::builder()
            .content(&content)
            .snapshot_provider(snapshots.clone())
            .build()?;
        let mut world = ScriptedWorld::new(region, self.intruder_speed);
        let spawned = spawn_roster(&content, &mut runtime, &mut world, region, self.copies)?;

        tracing::info!(
            agents = spawned,
            ticks = self.ticks,
            tick_ms = self.tick_ms,
            content = %dir.display(),
            "simulation starting"
        );

        let mut receivers =
            runtime.subscribe_multiple(&[Topic::Movement, Topic::Ability, Topic::Controller]);
        let mut cooldowns = CooldownState::new();
        let mut totals = TickReport::default();

        for tick in 0..self.ticks {
            let now = Timestamp::from_millis(tick * self.tick_ms);
            snapshots.publish(world.snapshot());
            let report = runtime.step(now, &cooldowns);

            for (topic, rx) in receivers.iter_mut() {
                for event in drain(*topic, rx) {
                    self.handle_event(&runtime, &mut world, &mut cooldowns, tick, now, &event)?;
                }
            }

            if matches!(self.format, OutputFormat::Summary) {
                println!(
                    "tick {tick:>4} {:>7}ms  intruder {}  evaluated {:>3}  gated {:>3}  moves {:>3}  casts {:>3}  updates {:>3}",
                    now.as_millis(),
                    world.intruder_position(),
                    report.evaluated,
                    report.gated,
                    report.movements,
                    report.abilities,
                    report.controller_updates,
                );
            }
            accumulate(&mut totals, &report);
            world.advance(self.tick_ms);
        }

        tracing::info!(
            evaluated = totals.evaluated,
            gated = totals.gated,
            skipped = totals.skipped,
            movements = totals.movements,
            abilities = totals.abilities,
            updates = totals.controller_updates,
            "simulation finished"
        );
        Ok(())
    }

    fn handle_event(
        &self,
        runtime: &Runtime,
        world: &mut ScriptedWorld,
        cooldowns: &mut CooldownState,
        tick: u64,
        now: Timestamp,
        event: &Event,
    ) -> Result<()> {
        match event {
            Event::Movement(command) => world.apply(command),
            Event::Ability(intent) => {
                if let Some(skill) = runtime.oracles().skills().skill(&intent.skill_id) {
                    cooldowns.set_ready_at(
                        intent.caster,
                        intent.skill_id.clone(),
                        now + skill.cooldown_ms,
                    );
                }
            }
            Event::Controller(_) => {}
        }

        if matches!(self.format, OutputFormat::Json) {
            let line = json!({ "tick": tick, "time_ms": now.as_millis(), "event": event });
            println!("{}", serde_json::to_string(&line)?);
        }
        Ok(())
    }
}

fn spawn_roster(
    content: &ContentBundle,
    runtime: &mut Runtime,
    world: &mut ScriptedWorld,
    region: RegionId,
    copies: u32,
) -> Result<u32> {
    let mut next = FIRST_AGENT;
    for copy in 0..copies {
        let offset = Position::new(0.0, copy as f32 * COPY_SPACING);
        for spec in &content.agents {
            let entity = EntityId(next);
            next += 1;
            let controller = spec.controller(entity, offset);
            let speed = content
                .archetypes
                .get(&spec.archetype)
                .map_or(BaseStats::default().move_speed, |a| a.stats.move_speed);
            world.add_agent(entity, controller.spawn, speed);
            runtime.spawn_agent(region, controller)?;
        }
    }
    Ok(next - FIRST_AGENT)
}

/// Everything currently buffered on `rx`.
fn drain(topic: Topic, rx: &mut Receiver<Event>) -> Vec<Event> {
    let mut events = Vec::new();
    loop {
        match rx.try_recv() {
            Ok(event) => events.push(event),
            Err(TryRecvError::Lagged(missed)) => {
                tracing::warn!(%topic, missed, "event receiver lagged");
            }
            Err(TryRecvError::Empty | TryRecvError::Closed) => break,
        }
    }
    events
}

fn accumulate(totals: &mut TickReport, report: &TickReport) {
    totals.evaluated += report.evaluated;
    totals.gated += report.gated;
    totals.skipped += report.skipped;
    totals.movements += report.movements;
    totals.abilities += report.abilities;
    totals.controller_updates += report.controller_updates;
}
