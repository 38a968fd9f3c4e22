//! Gorules Core - Shared types for the Gorules runner node
//!
//! This crate provides the types shared between the node and the engines it drives:
//! - Pipeline items as they flow through the host's execution batch
//! - Evaluation options passed to the decision engine
//! - The decision engine capability (`DecisionEngine` / `Decision`)
//! - Error types

pub mod engine;
pub mod error;
pub mod item;
pub mod options;

// Re-export commonly used types
pub use engine::{Decision, DecisionEngine, MockEngine};
pub use error::{EngineError, ErrorContext};
pub use item::{Item, ItemError, JsonObject, PairedItem};
pub use options::EvaluationOptions;
