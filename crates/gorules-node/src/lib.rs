//! Gorules runner node
//!
//! A workflow node that evaluates every item of a pipeline batch against a
//! business-rules decision graph. The decision engine and the host platform
//! are both external: the engine is reached through
//! [`gorules_core::DecisionEngine`], the host through [`ExecuteFunctions`].

pub mod config;
pub mod description;
pub mod error;
pub mod host;
pub mod logging;
pub mod memory;
pub mod node;
pub mod payload;

// Re-export main types
pub use config::{ExecutionConfig, LoggingConfig};
pub use description::{NodeDescription, NodeProperty, PropertyType};
pub use error::{ExecutionError, NodeError, NodeOperationError, Result};
pub use host::ExecuteFunctions;
pub use memory::MemoryExecution;
pub use node::{GorulesNode, NodeOutput, NodeType};
pub use payload::PayloadSource;

// Re-export commonly used types from gorules-core
pub use gorules_core::{
    Decision, DecisionEngine, EngineError, ErrorContext, EvaluationOptions, Item, ItemError,
    JsonObject, PairedItem,
};
