//! Tests for the decision engine capability using the mock engine

use gorules_core::{Decision, DecisionEngine, EngineError, EvaluationOptions, MockEngine};
use serde_json::{json, Map, Value};
use std::sync::Arc;

#[tokio::test]
async fn test_decision_reusable_across_sequential_calls() {
    let engine = MockEngine::new();
    let decision = engine.create_decision(&json!({ "nodes": [] })).unwrap();
    let options = EvaluationOptions::default();

    for i in 0..3 {
        let result = decision.evaluate(&json!({ "n": i }), &options).await.unwrap();
        assert_eq!(result.get("output"), Some(&json!({ "n": i })));
    }

    assert_eq!(engine.decisions_created(), 1);
    assert_eq!(engine.evaluations().len(), 3);
}

#[tokio::test]
async fn test_fresh_decisions_are_deterministic() {
    let engine = MockEngine::new();
    let graph = json!({ "nodes": [], "edges": [] });
    let input = json!({ "customer": { "age": 31 } });
    let options = EvaluationOptions::default();

    let first = engine.create_decision(&graph).unwrap();
    let second = engine.create_decision(&graph).unwrap();

    assert_eq!(
        first.evaluate(&input, &options).await.unwrap(),
        second.evaluate(&input, &options).await.unwrap()
    );
}

#[tokio::test]
async fn test_engine_behind_trait_object() {
    let engine: Arc<dyn DecisionEngine> = Arc::new(MockEngine::with_handler(|input, options| {
        let mut result = Map::new();
        result.insert("seen".to_string(), input.clone());
        result.insert("traced".to_string(), Value::Bool(options.trace));
        Ok(result)
    }));

    let decision: Box<dyn Decision> = engine.create_decision(&json!({})).unwrap();
    let result = decision
        .evaluate(&json!(5), &EvaluationOptions::new().with_trace(true))
        .await
        .unwrap();

    assert_eq!(engine.name(), "mock");
    assert_eq!(Value::Object(result), json!({ "seen": 5, "traced": true }));
}

#[tokio::test]
async fn test_evaluation_error_surfaces() {
    let engine = MockEngine::with_handler(|_, _| Err(EngineError::evaluation("no rule matched")));
    let decision = engine.create_decision(&json!({})).unwrap();

    let err = decision
        .evaluate(&json!({}), &EvaluationOptions::default())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Evaluation failed: no rule matched");
}
