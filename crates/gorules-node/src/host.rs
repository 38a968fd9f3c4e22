//! Host platform contract
//!
//! What the node needs from the workflow host: resolved parameters, the input
//! batch, and the continue-on-fail flag.

use crate::error::{NodeError, Result};
use gorules_core::Item;
use serde_json::Value;

/// Functions the host exposes to a node during execution
pub trait ExecuteFunctions: Send + Sync {
    /// Display name of the node being executed
    fn node_name(&self) -> &str;

    /// Parameter value resolved for the given item.
    ///
    /// Expressions are resolved by the host; `None` means the parameter is unset.
    fn get_node_parameter(&self, name: &str, item_index: usize) -> Option<Value>;

    /// The full input batch
    fn get_input_data(&self) -> &[Item];

    /// Whether per-item failures should be recorded instead of aborting the run
    fn continue_on_fail(&self) -> bool;

    /// A single input item
    fn get_input_item(&self, item_index: usize) -> Result<&Item> {
        self.get_input_data()
            .get(item_index)
            .ok_or(NodeError::ItemOutOfRange(item_index))
    }

    /// String parameter, falling back to `default` when unset
    fn get_string_parameter(
        &self,
        name: &str,
        item_index: usize,
        default: Option<&str>,
    ) -> Result<String> {
        match self.get_node_parameter(name, item_index) {
            Some(Value::String(value)) => Ok(value),
            None | Some(Value::Null) => default
                .map(str::to_string)
                .ok_or_else(|| NodeError::MissingParameter(name.to_string())),
            Some(_) => Err(NodeError::InvalidParameterType {
                name: name.to_string(),
                expected: "string",
            }),
        }
    }

    /// Boolean parameter, falling back to `default` when unset
    fn get_bool_parameter(&self, name: &str, item_index: usize, default: bool) -> Result<bool> {
        match self.get_node_parameter(name, item_index) {
            Some(Value::Bool(value)) => Ok(value),
            None | Some(Value::Null) => Ok(default),
            Some(_) => Err(NodeError::InvalidParameterType {
                name: name.to_string(),
                expected: "boolean",
            }),
        }
    }
}
