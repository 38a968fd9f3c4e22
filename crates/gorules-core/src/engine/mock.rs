//! Mock decision engine for testing

use crate::engine::{Decision, DecisionEngine};
use crate::error::{EngineError, Result};
use crate::item::JsonObject;
use crate::options::EvaluationOptions;
use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

type Handler = dyn Fn(&Value, &EvaluationOptions) -> Result<JsonObject> + Send + Sync;

/// Mock engine for testing
///
/// By default every decision answers `{"output": <input>}`, adding
/// `{"trace": {"input": <input>}}` when tracing is requested. Every evaluated
/// input is recorded so tests can check what the node sent.
#[derive(Clone)]
pub struct MockEngine {
    handler: Arc<Handler>,
    reject_content: Option<String>,
    decisions_created: Arc<AtomicUsize>,
    evaluations: Arc<Mutex<Vec<Value>>>,
}

impl MockEngine {
    /// Create a pass-through mock engine
    pub fn new() -> Self {
        Self {
            handler: Arc::new(pass_through),
            reject_content: None,
            decisions_created: Arc::new(AtomicUsize::new(0)),
            evaluations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create with a custom evaluation handler
    pub fn with_handler<F>(handler: F) -> Self
    where
        F: Fn(&Value, &EvaluationOptions) -> Result<JsonObject> + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
            ..Self::new()
        }
    }

    /// Pass-through engine that fails for inputs whose `field` equals `value`
    pub fn failing_on(field: &str, value: Value) -> Self {
        let field = field.to_string();
        Self::with_handler(move |input, options| {
            if input.get(&field) == Some(&value) {
                return Err(EngineError::evaluation(format!(
                    "rejected input with {} = {}",
                    field, value
                )));
            }
            pass_through(input, options)
        })
    }

    /// Make `create_decision` fail with the given message
    pub fn rejecting_content(mut self, message: impl Into<String>) -> Self {
        self.reject_content = Some(message.into());
        self
    }

    /// Number of decisions created so far
    pub fn decisions_created(&self) -> usize {
        self.decisions_created.load(Ordering::SeqCst)
    }

    /// Inputs evaluated so far, in call order
    pub fn evaluations(&self) -> Vec<Value> {
        self.evaluations
            .lock()
            .map(|inputs| inputs.clone())
            .unwrap_or_default()
    }
}

impl Default for MockEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionEngine for MockEngine {
    fn create_decision(&self, _content: &Value) -> Result<Box<dyn Decision>> {
        if let Some(message) = &self.reject_content {
            return Err(EngineError::InvalidContent(message.clone()));
        }

        self.decisions_created.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockDecision {
            handler: Arc::clone(&self.handler),
            evaluations: Arc::clone(&self.evaluations),
        }))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Decision created by [`MockEngine`]
pub struct MockDecision {
    handler: Arc<Handler>,
    evaluations: Arc<Mutex<Vec<Value>>>,
}

#[async_trait]
impl Decision for MockDecision {
    async fn evaluate(&self, input: &Value, options: &EvaluationOptions) -> Result<JsonObject> {
        self.evaluations
            .lock()
            .map_err(|e| EngineError::Internal(e.to_string()))?
            .push(input.clone());

        (self.handler)(input, options)
    }
}

fn pass_through(input: &Value, options: &EvaluationOptions) -> Result<JsonObject> {
    let mut result = Map::new();
    result.insert("output".to_string(), input.clone());
    if options.trace {
        result.insert("trace".to_string(), json!({ "input": input }));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_engine_pass_through() {
        let engine = MockEngine::new();
        let decision = engine.create_decision(&json!({ "nodes": [] })).unwrap();

        let result = decision
            .evaluate(&json!({ "a": 1 }), &EvaluationOptions::default())
            .await
            .unwrap();

        assert_eq!(Value::Object(result), json!({ "output": { "a": 1 } }));
        assert_eq!(engine.decisions_created(), 1);
        assert_eq!(engine.evaluations(), vec![json!({ "a": 1 })]);
    }

    #[tokio::test]
    async fn test_mock_engine_trace() {
        let engine = MockEngine::new();
        let decision = engine.create_decision(&json!({})).unwrap();

        let result = decision
            .evaluate(&json!({ "a": 1 }), &EvaluationOptions::new().with_trace(true))
            .await
            .unwrap();

        assert_eq!(result.get("trace"), Some(&json!({ "input": { "a": 1 } })));
    }

    #[tokio::test]
    async fn test_mock_engine_failing_on() {
        let engine = MockEngine::failing_on("a", json!(2));
        let decision = engine.create_decision(&json!({})).unwrap();
        let options = EvaluationOptions::default();

        assert!(decision.evaluate(&json!({ "a": 1 }), &options).await.is_ok());
        let err = decision.evaluate(&json!({ "a": 2 }), &options).await.unwrap_err();
        assert!(err.to_string().contains("rejected input"));
    }

    #[test]
    fn test_mock_engine_rejecting_content() {
        let engine = MockEngine::new().rejecting_content("no nodes");
        let err = engine.create_decision(&json!({})).err().unwrap();

        assert!(matches!(err, EngineError::InvalidContent(_)));
        assert_eq!(engine.decisions_created(), 0);
    }
}
