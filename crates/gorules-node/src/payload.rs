//! Per-item payload resolution
//!
//! The `payload` parameter is an expression the host resolves for each item.
//! An empty result means "evaluate the item's own JSON"; anything else must be
//! a JSON document.

use crate::error::{NodeError, Result};
use gorules_core::Item;
use serde_json::Value;

/// Resolved payload parameter of one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadSource {
    /// Nothing resolved; the item's own JSON is used
    Empty,
    /// Raw JSON text to be parsed
    Raw(String),
}

impl PayloadSource {
    /// Classify a resolved parameter value.
    ///
    /// Unset, null and the empty string are [`PayloadSource::Empty`]. Any other
    /// string is raw JSON, whitespace included. Values the host already
    /// resolved to structured JSON are serialised back to text.
    pub fn from_parameter(value: Option<Value>) -> Self {
        match value {
            None | Some(Value::Null) => PayloadSource::Empty,
            Some(Value::String(raw)) if raw.is_empty() => PayloadSource::Empty,
            Some(Value::String(raw)) => PayloadSource::Raw(raw),
            Some(other) => PayloadSource::Raw(other.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, PayloadSource::Empty)
    }

    /// The evaluation input for `item`
    pub fn resolve(&self, item: &Item) -> Result<Value> {
        match self {
            PayloadSource::Empty => Ok(item.json_value()),
            PayloadSource::Raw(raw) => {
                serde_json::from_str(raw).map_err(NodeError::InvalidPayload)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item() -> Item {
        Item::from_value(json!({ "a": 1, "nested": { "b": [1, 2] } }))
    }

    #[test]
    fn test_unset_and_null_are_empty() {
        assert_eq!(PayloadSource::from_parameter(None), PayloadSource::Empty);
        assert_eq!(PayloadSource::from_parameter(Some(Value::Null)), PayloadSource::Empty);
    }

    #[test]
    fn test_empty_string_is_empty() {
        assert!(PayloadSource::from_parameter(Some(json!(""))).is_empty());
    }

    #[test]
    fn test_whitespace_string_is_invalid_payload() {
        let source = PayloadSource::from_parameter(Some(json!("   ")));
        assert_eq!(source, PayloadSource::Raw("   ".to_string()));

        let err = source.resolve(&item()).unwrap_err();
        assert!(matches!(err, NodeError::InvalidPayload(_)));
    }

    #[test]
    fn test_empty_resolves_to_item_json_exactly() {
        let item = item();
        let input = PayloadSource::Empty.resolve(&item).unwrap();
        assert_eq!(input, item.json_value());
    }

    #[test]
    fn test_raw_string_is_parsed() {
        let source = PayloadSource::from_parameter(Some(json!(r#"{"amount": 10}"#)));
        assert_eq!(source.resolve(&item()).unwrap(), json!({ "amount": 10 }));
    }

    #[test]
    fn test_structured_value_is_reserialised() {
        let source = PayloadSource::from_parameter(Some(json!({ "amount": 10 })));
        assert_eq!(source, PayloadSource::Raw(r#"{"amount":10}"#.to_string()));
        assert_eq!(source.resolve(&item()).unwrap(), json!({ "amount": 10 }));
    }

    #[test]
    fn test_malformed_raw_is_invalid_payload() {
        let source = PayloadSource::Raw("{amount: ".to_string());
        let err = source.resolve(&item()).unwrap_err();
        assert!(matches!(err, NodeError::InvalidPayload(_)));
    }
}
