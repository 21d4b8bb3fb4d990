//! Tick driving over the controller store.

mod store;
mod tick;

pub use store::ControllerStore;
pub use tick::{TickDriver, TickReport};
