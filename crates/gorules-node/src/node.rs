//! Gorules runner node - evaluates a batch of items against one decision graph

use crate::description::{NodeDescription, PARAM_JSON_DATA, PARAM_PAYLOAD, PARAM_TRACE};
use crate::error::{ExecutionError, NodeError};
use crate::host::ExecuteFunctions;
use crate::payload::PayloadSource;
use async_trait::async_trait;
use gorules_core::{Decision, DecisionEngine, EvaluationOptions, Item, JsonObject};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Items per output connection
pub type NodeOutput = Vec<Vec<Item>>;

/// Contract between the host and a node implementation
#[async_trait]
pub trait NodeType: Send + Sync {
    /// Metadata declared to the host
    fn description(&self) -> &NodeDescription;

    /// Run the node over the host's current batch
    async fn execute(&self, ctx: &dyn ExecuteFunctions) -> Result<NodeOutput, ExecutionError>;
}

/// Node that evaluates each pipeline item against a decision graph
pub struct GorulesNode {
    engine: Arc<dyn DecisionEngine>,
    description: NodeDescription,
}

impl GorulesNode {
    /// Create a node backed by the given engine
    pub fn new(engine: Arc<dyn DecisionEngine>) -> Self {
        Self {
            engine,
            description: NodeDescription::gorules(),
        }
    }

    /// Parse the decision graph and compile it into a decision.
    ///
    /// Both steps are fatal for the run.
    fn create_decision(&self, ctx: &dyn ExecuteFunctions) -> Result<Box<dyn Decision>, NodeError> {
        let json_data = ctx.get_string_parameter(PARAM_JSON_DATA, 0, None)?;
        let graph: Value =
            serde_json::from_str(&json_data).map_err(NodeError::InvalidDecisionGraph)?;

        self.engine
            .create_decision(&graph)
            .map_err(NodeError::DecisionCreation)
    }

    /// Evaluate one item; returns the new payload
    async fn evaluate_item(
        &self,
        ctx: &dyn ExecuteFunctions,
        decision: &dyn Decision,
        options: &EvaluationOptions,
        item_index: usize,
        item: &Item,
    ) -> Result<JsonObject, NodeError> {
        let source =
            PayloadSource::from_parameter(ctx.get_node_parameter(PARAM_PAYLOAD, item_index));
        let input = source.resolve(item)?;

        debug!(
            item_index,
            own_json = source.is_empty(),
            "Evaluating item against decision"
        );

        decision
            .evaluate(&input, options)
            .await
            .map_err(NodeError::Evaluation)
    }
}

#[async_trait]
impl NodeType for GorulesNode {
    fn description(&self) -> &NodeDescription {
        &self.description
    }

    async fn execute(&self, ctx: &dyn ExecuteFunctions) -> Result<NodeOutput, ExecutionError> {
        let decision = self.create_decision(ctx).map_err(ExecutionError::Setup)?;
        let trace = ctx
            .get_bool_parameter(PARAM_TRACE, 0, false)
            .map_err(ExecutionError::Setup)?;
        let options = EvaluationOptions::new().with_trace(trace);

        let item_count = ctx.get_input_data().len();
        let continue_on_fail = ctx.continue_on_fail();
        info!(
            node = ctx.node_name(),
            engine = self.engine.name(),
            items = item_count,
            trace,
            continue_on_fail,
            "Running decision over batch"
        );

        let mut items = Vec::with_capacity(item_count);
        let mut error_records = Vec::new();

        for item_index in 0..item_count {
            let original = ctx.get_input_item(item_index).map_err(ExecutionError::Setup)?;

            match self
                .evaluate_item(ctx, decision.as_ref(), &options, item_index, original)
                .await
            {
                Ok(json) => items.push(Item {
                    json,
                    ..original.clone()
                }),
                Err(err) if continue_on_fail && err.is_item_level() => {
                    warn!(item_index, error = %err, "Item failed, continuing");
                    error_records.push(Item::error_record(
                        original.json.clone(),
                        err.to_item_error(item_index),
                        item_index,
                    ));
                    items.push(original.clone());
                }
                Err(err) => {
                    error!(item_index, error = %err, "Item failed, aborting run");
                    return Err(ExecutionError::for_item(err, ctx.node_name(), item_index));
                }
            }
        }

        info!(
            evaluated = items.len(),
            failed = error_records.len(),
            "Decision run complete"
        );

        items.extend(error_records);
        Ok(vec![items])
    }
}
