//! In-memory host
//!
//! A self-contained [`ExecuteFunctions`] implementation for embedding the node
//! outside a workflow host, and for tests. Parameter expressions are not
//! evaluated; per-item overrides stand in for resolved values.

use crate::config::ExecutionConfig;
use crate::host::ExecuteFunctions;
use gorules_core::Item;
use serde_json::Value;
use std::collections::HashMap;

/// In-memory execution context
#[derive(Debug, Clone)]
pub struct MemoryExecution {
    node_name: String,
    items: Vec<Item>,
    parameters: HashMap<String, Value>,
    item_parameters: HashMap<(String, usize), Value>,
    continue_on_fail: bool,
}

impl MemoryExecution {
    /// Create an empty context with default configuration
    pub fn new() -> Self {
        Self::from_config(&ExecutionConfig::default())
    }

    /// Create an empty context from configuration
    pub fn from_config(config: &ExecutionConfig) -> Self {
        Self {
            node_name: config.node_name.clone(),
            items: Vec::new(),
            parameters: HashMap::new(),
            item_parameters: HashMap::new(),
            continue_on_fail: config.continue_on_fail,
        }
    }

    /// Set the node name
    pub fn with_node_name(mut self, name: impl Into<String>) -> Self {
        self.node_name = name.into();
        self
    }

    /// Set the input batch
    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    /// Append an input item
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Set a parameter for every item
    pub fn with_parameter(mut self, name: impl Into<String>, value: Value) -> Self {
        self.parameters.insert(name.into(), value);
        self
    }

    /// Set a parameter for one item, overriding the node-wide value
    pub fn with_item_parameter(
        mut self,
        name: impl Into<String>,
        item_index: usize,
        value: Value,
    ) -> Self {
        self.item_parameters.insert((name.into(), item_index), value);
        self
    }

    /// Tolerate per-item failures
    pub fn with_continue_on_fail(mut self, enable: bool) -> Self {
        self.continue_on_fail = enable;
        self
    }
}

impl Default for MemoryExecution {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecuteFunctions for MemoryExecution {
    fn node_name(&self) -> &str {
        &self.node_name
    }

    fn get_node_parameter(&self, name: &str, item_index: usize) -> Option<Value> {
        self.item_parameters
            .get(&(name.to_string(), item_index))
            .or_else(|| self.parameters.get(name))
            .cloned()
    }

    fn get_input_data(&self) -> &[Item] {
        &self.items
    }

    fn continue_on_fail(&self) -> bool {
        self.continue_on_fail
    }
}
