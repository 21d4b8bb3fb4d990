//! Data-driven behavior tree interpreter.
//!
//! Trees are plain data ([`BehaviorNode`]) so they can be authored outside the
//! program, loaded once, and shared by every agent that uses them. Leaves are
//! named: the interpreter hands each `Condition`/`Action` name to a
//! caller-supplied [`LeafEvaluator`], which owns all game knowledge.
//!
//! - **Three-valued results**: [`Status`] is Success, Failure or Running
//! - **Bounded native stack**: [`evaluate`] walks the tree with an explicit,
//!   heap-allocated control stack, so depth is limited only by memory
//! - **Decision payloads**: actions may attach a payload that travels up the
//!   tree alongside the status (see [`Outcome`])
//!
//! # Architecture
//!
//! - [`BehaviorNode`] / [`DecisionTree`]: immutable tree model
//! - [`LeafEvaluator`]: the seam between tree control flow and game rules
//! - [`evaluate`]: the interpreter
//! - [`builder`]: shorthand constructors for trees built in code

pub mod builder;
pub mod interpreter;
pub mod node;
pub mod status;

// Re-export core types for ergonomic API
pub use interpreter::{LeafEvaluator, Outcome, evaluate};
pub use node::{BehaviorNode, DecisionTree, Params};
pub use status::Status;
