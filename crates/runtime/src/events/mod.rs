//! Topic-based event bus for decision output.
//!
//! Movement commands, ability intents and controller changes are published
//! to separate topics; consumers subscribe only to what they need.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::ControllerUpdated;
