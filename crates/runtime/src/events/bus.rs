//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast;

use npc_core::{AbilityIntent, MovementCommand};

use super::types::ControllerUpdated;

/// Topics for event routing
#[derive(
    Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum Topic {
    /// Movement commands for the movement system
    Movement,
    /// Ability-cast intents for the combat system
    Ability,
    /// Controller state changes
    Controller,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Movement(MovementCommand),
    Ability(AbilityIntent),
    Controller(Box<ControllerUpdated>),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Movement(_) => Topic::Movement,
            Event::Ability(_) => Topic::Ability,
            Event::Controller(_) => Topic::Controller,
        }
    }
}

struct Channels {
    movement: broadcast::Sender<Event>,
    ability: broadcast::Sender<Event>,
    controller: broadcast::Sender<Event>,
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Publishing is fire-and-forget.
pub struct EventBus {
    channels: Arc<Channels>,
}

impl EventBus {
    /// Default capacity of each topic channel.
    pub const DEFAULT_CAPACITY: usize = 256;

    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            channels: Arc::new(Channels {
                movement: broadcast::channel(capacity).0,
                ability: broadcast::channel(capacity).0,
                controller: broadcast::channel(capacity).0,
            }),
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Movement => &self.channels.movement,
            Topic::Ability => &self.channels.ability,
            Topic::Controller => &self.channels.controller,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    ///
    /// Returns receivers for each requested topic.
    pub fn subscribe_multiple(&self, topics: &[Topic]) -> Vec<(Topic, broadcast::Receiver<Event>)> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            channels: Arc::clone(&self.channels),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use npc_core::{EntityId, Position};
    use strum::IntoEnumIterator;

    use super::*;

    fn movement() -> Event {
        Event::Movement(MovementCommand {
            entity: EntityId(3),
            target: Position::new(1.0, 2.0),
        })
    }

    #[test]
    fn events_reach_only_their_topic() {
        let bus = EventBus::with_capacity(8);
        let mut moves = bus.subscribe(Topic::Movement);
        let mut abilities = bus.subscribe(Topic::Ability);

        bus.publish(movement());

        assert_eq!(moves.try_recv().unwrap(), movement());
        assert!(abilities.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let bus = EventBus::new();
        bus.publish(movement());
    }

    #[test]
    fn clones_share_channels() {
        let bus = EventBus::new();
        let mut rx = bus.clone().subscribe(Topic::Movement);
        bus.publish(movement());
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn subscribe_multiple_covers_every_topic() {
        let bus = EventBus::new();
        let topics: Vec<Topic> = Topic::iter().collect();
        let receivers = bus.subscribe_multiple(&topics);
        assert_eq!(receivers.len(), 3);
    }
}
