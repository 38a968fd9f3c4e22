//! Options passed to a decision on every evaluation

use serde::{Deserialize, Serialize};

/// Evaluation options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationOptions {
    /// Ask the engine to include its execution trace in the result
    #[serde(default)]
    pub trace: bool,
}

impl EvaluationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable tracing
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}
