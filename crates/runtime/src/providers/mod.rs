//! Decision providers for controlled agents.

pub mod ai;

pub use ai::{AgentUpdate, DecisionPath, DecisionProvider};
