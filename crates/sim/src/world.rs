//! Scripted world the simulator publishes snapshots from.
//!
//! An intruder walks back and forth along the x axis. Agents walk toward
//! whatever the last movement command told them, at their archetype speed.

use std::collections::BTreeMap;

use npc_core::{EntityId, FactionSet, MovementCommand, Position, RegionId, WorldSnapshot};

pub const INTRUDER: EntityId = EntityId(1);

/// Half-width of the intruder's lane.
const LANE_HALF_WIDTH: f32 = 300.0;

struct Walker {
    position: Position,
    velocity: Position,
    destination: Option<Position>,
    speed: f32,
}

impl Walker {
    fn advance(&mut self, dt_ms: u64) {
        let Some(destination) = self.destination else {
            return;
        };
        let step = self.speed * dt_ms as f32 / 1000.0;
        let remaining = destination - self.position;
        match remaining.normalized() {
            Some(direction) if remaining.length() > step => {
                self.position = self.position + direction * step;
                self.velocity = direction * self.speed;
            }
            _ => {
                self.position = destination;
                self.velocity = Position::ORIGIN;
                self.destination = None;
            }
        }
    }
}

pub struct ScriptedWorld {
    region: RegionId,
    intruder: Walker,
    agents: BTreeMap<EntityId, Walker>,
}

impl ScriptedWorld {
    /// Starts the intruder at the left end of its lane walking right at `intruder_speed`.
    pub fn new(region: RegionId, intruder_speed: f32) -> Self {
        let start = Position::new(-LANE_HALF_WIDTH, 0.0);
        Self {
            region,
            intruder: Walker {
                position: start,
                velocity: Position::new(intruder_speed, 0.0),
                destination: Some(Position::new(LANE_HALF_WIDTH, 0.0)),
                speed: intruder_speed,
            },
            agents: BTreeMap::new(),
        }
    }

    pub fn add_agent(&mut self, entity: EntityId, position: Position, speed: f32) {
        self.agents.insert(
            entity,
            Walker {
                position,
                velocity: Position::ORIGIN,
                destination: None,
                speed,
            },
        );
    }

    pub fn intruder_position(&self) -> Position {
        self.intruder.position
    }

    pub fn agent_position(&self, entity: EntityId) -> Option<Position> {
        self.agents.get(&entity).map(|walker| walker.position)
    }

    /// Redirects the commanded agent. Commands for unknown entities are ignored.
    pub fn apply(&mut self, command: &MovementCommand) {
        if let Some(walker) = self.agents.get_mut(&command.entity) {
            walker.destination = Some(command.target);
        }
    }

    /// Moves everything forward by `dt_ms`. The intruder turns around at
    /// either end of its lane.
    pub fn advance(&mut self, dt_ms: u64) {
        self.intruder.advance(dt_ms);
        if self.intruder.destination.is_none() {
            let turn = Position::new(-self.intruder.position.x.signum() * LANE_HALF_WIDTH, 0.0);
            self.intruder.destination = Some(turn);
        }
        for walker in self.agents.values_mut() {
            walker.advance(dt_ms);
        }
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        let mut builder = WorldSnapshot::builder(self.region).moving_entity(
            INTRUDER,
            self.intruder.position,
            self.intruder.velocity,
            FactionSet::PLAYER,
        );
        for (&entity, walker) in &self.agents {
            builder =
                builder.moving_entity(entity, walker.position, walker.velocity, FactionSet::ENEMY);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intruder_bounces_between_lane_ends() {
        let mut world = ScriptedWorld::new(RegionId(0), 100.0);
        world.advance(6_000);
        assert_eq!(world.intruder_position(), Position::new(LANE_HALF_WIDTH, 0.0));

        world.advance(1_000);
        assert_eq!(world.intruder_position(), Position::new(200.0, 0.0));
    }

    #[test]
    fn agents_walk_to_commanded_target_and_stop() {
        let mut world = ScriptedWorld::new(RegionId(0), 100.0);
        let agent = EntityId(10);
        world.add_agent(agent, Position::ORIGIN, 50.0);
        world.apply(&MovementCommand {
            entity: agent,
            target: Position::new(0.0, 80.0),
        });

        world.advance(1_000);
        assert_eq!(world.agent_position(agent), Some(Position::new(0.0, 50.0)));
        let snapshot = world.snapshot();
        assert_eq!(snapshot.velocity(agent), Position::new(0.0, 50.0));

        world.advance(1_000);
        assert_eq!(world.agent_position(agent), Some(Position::new(0.0, 80.0)));
        assert_eq!(world.snapshot().velocity(agent), Position::ORIGIN);
    }

    #[test]
    fn snapshot_flags_factions() {
        let mut world = ScriptedWorld::new(RegionId(4), 100.0);
        world.add_agent(EntityId(10), Position::new(5.0, 5.0), 50.0);
        let snapshot = world.snapshot();

        assert_eq!(snapshot.region, RegionId(4));
        assert_eq!(snapshot.factions(INTRUDER), Some(FactionSet::PLAYER));
        assert_eq!(snapshot.factions(EntityId(10)), Some(FactionSet::ENEMY));
    }
}
