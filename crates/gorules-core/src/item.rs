//! Pipeline items
//!
//! An item is one unit of data in the host's execution batch. Field names on
//! the wire follow the host's conventions (`json`, `error`, `pairedItem`).

use crate::error::ErrorContext;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON object payload of an item
pub type JsonObject = Map<String, Value>;

/// Reference from an item back to the input item it was derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairedItem {
    pub item: usize,
}

impl From<usize> for PairedItem {
    fn from(item: usize) -> Self {
        Self { item }
    }
}

/// Error recorded on an item when a failure is tolerated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemError {
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub context: ErrorContext,
}

impl ItemError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            description: None,
            context: ErrorContext::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = context;
        self
    }
}

/// A pipeline item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// JSON payload
    #[serde(default)]
    pub json: JsonObject,

    /// Error recorded for this item, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ItemError>,

    /// Input item this one was derived from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paired_item: Option<PairedItem>,
}

impl Item {
    /// Create an item from a JSON object
    pub fn new(json: JsonObject) -> Self {
        Self {
            json,
            error: None,
            paired_item: None,
        }
    }

    /// Create an item from any JSON value.
    ///
    /// Convenience for building batches by hand (embedding and tests); the
    /// node never calls it. Objects are used as-is. Other values are wrapped
    /// under a `data` key, a local convention of this helper and not part of
    /// the host's item format.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(json) => Self::new(json),
            other => {
                let mut json = Map::new();
                json.insert("data".to_string(), other);
                Self::new(json)
            }
        }
    }

    /// Build the record appended to a batch when a failure is tolerated
    pub fn error_record(json: JsonObject, error: ItemError, paired_item: usize) -> Self {
        Self {
            json,
            error: Some(error),
            paired_item: Some(PairedItem::from(paired_item)),
        }
    }

    /// The payload as a JSON value
    pub fn json_value(&self) -> Value {
        Value::Object(self.json.clone())
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
