//! Node error types

use gorules_core::{EngineError, ErrorContext, ItemError};
use thiserror::Error;

/// Errors raised while running the node
#[derive(Error, Debug)]
pub enum NodeError {
    /// A required parameter has no value and no default
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// A parameter resolved to a value of the wrong type
    #[error("Parameter '{name}' must be a {expected}")]
    InvalidParameterType { name: String, expected: &'static str },

    /// The decision graph parameter is not valid JSON
    #[error("Invalid decision graph JSON: {0}")]
    InvalidDecisionGraph(#[source] serde_json::Error),

    /// The engine refused to build a decision from the graph
    #[error("Failed to create decision: {0}")]
    DecisionCreation(#[source] EngineError),

    /// The resolved payload of an item is not valid JSON
    #[error("Invalid payload JSON: {0}")]
    InvalidPayload(#[source] serde_json::Error),

    /// The engine failed to evaluate an item
    #[error("Decision evaluation failed: {0}")]
    Evaluation(#[source] EngineError),

    /// The host has no input item at this index
    #[error("Input item {0} is out of range")]
    ItemOutOfRange(usize),
}

impl NodeError {
    /// Whether this error belongs to a single item (and may be tolerated)
    /// rather than to the whole run
    pub fn is_item_level(&self) -> bool {
        matches!(self, NodeError::InvalidPayload(_) | NodeError::Evaluation(_))
    }

    /// Context record carried by the underlying engine error, if any
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            NodeError::Evaluation(e) => e.context(),
            _ => None,
        }
    }

    pub fn context_mut(&mut self) -> Option<&mut ErrorContext> {
        match self {
            NodeError::Evaluation(e) => e.context_mut(),
            _ => None,
        }
    }

    /// Build the error record stored on a tolerated failure
    pub fn to_item_error(&self, item_index: usize) -> ItemError {
        let mut context = self.context().cloned().unwrap_or_default();
        context.item_index = Some(item_index);

        let error = ItemError::new(self.to_string()).with_context(context);
        match self {
            NodeError::InvalidPayload(e) => error.with_description(e.to_string()),
            NodeError::Evaluation(e) => error.with_description(e.to_string()),
            _ => error,
        }
    }
}

/// A per-item error wrapped with the node name and the failing item index
#[derive(Error, Debug)]
#[error("Node '{node}' failed on item {item_index}: {source}")]
pub struct NodeOperationError {
    pub node: String,
    pub item_index: usize,
    pub source: NodeError,
}

/// Error returned to the host when a run aborts
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// Run-level failure before any item was processed
    #[error(transparent)]
    Setup(NodeError),

    /// Item failure whose own context record now carries the item index
    #[error(transparent)]
    Item(NodeError),

    /// Item failure wrapped with node and item index
    #[error(transparent)]
    Operation(#[from] NodeOperationError),
}

impl ExecutionError {
    /// Promote an item failure to a run failure.
    ///
    /// An error that already carries a context record only gets the index
    /// attached; any other error is wrapped in a [`NodeOperationError`].
    pub fn for_item(mut error: NodeError, node: &str, item_index: usize) -> Self {
        if let Some(context) = error.context_mut() {
            context.item_index = Some(item_index);
            return ExecutionError::Item(error);
        }

        ExecutionError::Operation(NodeOperationError {
            node: node.to_string(),
            item_index,
            source: error,
        })
    }

    /// Index of the item that caused the failure, if item-level
    pub fn item_index(&self) -> Option<usize> {
        match self {
            ExecutionError::Setup(_) => None,
            ExecutionError::Item(e) => e.context().and_then(|c| c.item_index),
            ExecutionError::Operation(e) => Some(e.item_index),
        }
    }

    /// The underlying node error
    pub fn node_error(&self) -> &NodeError {
        match self {
            ExecutionError::Setup(e) | ExecutionError::Item(e) => e,
            ExecutionError::Operation(e) => &e.source,
        }
    }
}

/// Result type for node operations
pub type Result<T> = std::result::Result<T, NodeError>;
