//! Error types for decision engines

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Diagnostic context attached to an error.
///
/// Engines may attach one to an evaluation error. The node fills in
/// `item_index` before handing the error back to the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorContext {
    /// Index of the pipeline item that failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_index: Option<usize>,

    /// Engine-defined diagnostic fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ErrorContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context pointing at an item
    pub fn for_item(item_index: usize) -> Self {
        Self {
            item_index: Some(item_index),
            extra: Map::new(),
        }
    }

    /// Add an engine-defined field
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// Errors raised by a decision engine
#[derive(Error, Debug)]
pub enum EngineError {
    /// The decision graph was rejected at construction time
    #[error("Invalid decision content: {0}")]
    InvalidContent(String),

    /// Evaluation of a payload failed
    #[error("Evaluation failed: {message}")]
    Evaluation {
        message: String,
        context: Option<ErrorContext>,
    },

    /// Engine-internal failure
    #[error("Engine error: {0}")]
    Internal(String),
}

impl EngineError {
    /// Evaluation error without context
    pub fn evaluation(message: impl Into<String>) -> Self {
        EngineError::Evaluation {
            message: message.into(),
            context: None,
        }
    }

    /// Evaluation error carrying a context record
    pub fn evaluation_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        EngineError::Evaluation {
            message: message.into(),
            context: Some(context),
        }
    }

    /// Context record, if the engine attached one
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            EngineError::Evaluation { context, .. } => context.as_ref(),
            _ => None,
        }
    }

    pub fn context_mut(&mut self) -> Option<&mut ErrorContext> {
        match self {
            EngineError::Evaluation { context, .. } => context.as_mut(),
            _ => None,
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
