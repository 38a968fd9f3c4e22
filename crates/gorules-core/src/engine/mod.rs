//! Decision engine capability
//!
//! The node never evaluates rules itself. It talks to an engine through two
//! operations: compiling a decision graph into a [`Decision`], and evaluating
//! payloads against that decision. Adapters for concrete engines implement
//! these traits; tests use [`MockEngine`].

mod mock;

pub use mock::{MockDecision, MockEngine};

use crate::error::Result;
use crate::item::JsonObject;
use crate::options::EvaluationOptions;
use async_trait::async_trait;
use serde_json::Value;

/// Factory for decisions
pub trait DecisionEngine: Send + Sync {
    /// Compile a decision graph definition.
    ///
    /// Fails with [`crate::EngineError::InvalidContent`] when the engine rejects
    /// the structure of the graph.
    fn create_decision(&self, content: &Value) -> Result<Box<dyn Decision>>;

    /// Engine name, for diagnostics
    fn name(&self) -> &str;
}

/// A compiled decision graph.
///
/// A decision is immutable once created; `evaluate` may be called any number
/// of times, one call after another.
#[async_trait]
pub trait Decision: Send + Sync {
    /// Evaluate a payload against the decision graph.
    ///
    /// The result is engine-defined. When `options.trace` is set it also
    /// carries the engine's trace structure.
    async fn evaluate(&self, input: &Value, options: &EvaluationOptions) -> Result<JsonObject>;
}
