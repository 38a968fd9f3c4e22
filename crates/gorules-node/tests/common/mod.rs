//! Common test utilities for node integration tests

#![allow(dead_code)]

use gorules_core::MockEngine;
use gorules_node::{ExecutionError, GorulesNode, Item, MemoryExecution, NodeOutput, NodeType};
use serde_json::Value;
use std::sync::Arc;

/// A minimal input -> output decision graph
pub const PASS_THROUGH_GRAPH: &str = r#"{
  "nodes": [
    { "id": "in", "type": "inputNode", "name": "Request" },
    { "id": "out", "type": "outputNode", "name": "Response" }
  ],
  "edges": [
    { "id": "e1", "sourceId": "in", "targetId": "out" }
  ]
}"#;

/// Build items from JSON objects
pub fn items(values: Vec<Value>) -> Vec<Item> {
    values.into_iter().map(Item::from_value).collect()
}

/// Context with the pass-through graph and the given batch
pub fn context(values: Vec<Value>) -> MemoryExecution {
    MemoryExecution::new()
        .with_parameter("jsonData", Value::String(PASS_THROUGH_GRAPH.to_string()))
        .with_items(items(values))
}

/// Run the node once against `engine`
pub async fn run(engine: &MockEngine, ctx: &MemoryExecution) -> Result<NodeOutput, ExecutionError> {
    let node = GorulesNode::new(Arc::new(engine.clone()));
    node.execute(ctx).await
}

/// Payloads of the single main output
pub fn payloads(output: &NodeOutput) -> Vec<Value> {
    output[0].iter().map(Item::json_value).collect()
}
