//! Node description metadata
//!
//! Declares how the node appears in the host's editor and which parameters it
//! accepts. Serialises to the host's camelCase description format.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Name of the decision graph parameter
pub const PARAM_JSON_DATA: &str = "jsonData";

/// Name of the per-item payload parameter
pub const PARAM_PAYLOAD: &str = "payload";

/// Name of the trace toggle
pub const PARAM_TRACE: &str = "trace";

/// Main connection type
pub const CONNECTION_MAIN: &str = "main";

/// Parameter type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    String,
    Boolean,
}

/// A parameter declared by the node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeProperty {
    pub display_name: String,
    pub name: String,

    #[serde(rename = "type")]
    pub property_type: PropertyType,

    pub default: Value,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_data_path: Option<String>,
}

impl NodeProperty {
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        property_type: PropertyType,
        default: Value,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            name: name.into(),
            property_type,
            default,
            required: false,
            description: None,
            placeholder: None,
            requires_data_path: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_requires_data_path(mut self, mode: impl Into<String>) -> Self {
        self.requires_data_path = Some(mode.into());
        self
    }
}

/// Default values applied when the node is added to a workflow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDefaults {
    pub name: String,
}

/// Node description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescription {
    pub display_name: String,
    pub name: String,
    pub icon: String,
    pub group: Vec<String>,
    pub version: u32,
    pub description: String,
    pub defaults: NodeDefaults,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    pub properties: Vec<NodeProperty>,
}

impl NodeDescription {
    /// Description of the Gorules runner node
    pub fn gorules() -> Self {
        Self {
            display_name: "Gorules".to_string(),
            name: "gorulesNode".to_string(),
            icon: "file:logo.svg".to_string(),
            group: vec!["transform".to_string()],
            version: 1,
            description: "Gorules Runner".to_string(),
            defaults: NodeDefaults {
                name: "Gorules Node".to_string(),
            },
            inputs: vec![CONNECTION_MAIN.to_string()],
            outputs: vec![CONNECTION_MAIN.to_string()],
            properties: vec![
                NodeProperty::new(
                    PARAM_JSON_DATA,
                    "Gorules JSON Data",
                    PropertyType::String,
                    json!("{}"),
                )
                .required()
                .with_description("Please enter the JSON data"),
                NodeProperty::new(
                    PARAM_PAYLOAD,
                    "Payload",
                    PropertyType::String,
                    json!("{{ $json }}"),
                )
                .with_requires_data_path("single")
                .with_placeholder("Payload Object"),
                NodeProperty::new(PARAM_TRACE, "Trace", PropertyType::Boolean, json!(false))
                    .with_placeholder("Trace"),
            ],
        }
    }

    /// Look up a declared parameter by name
    pub fn property(&self, name: &str) -> Option<&NodeProperty> {
        self.properties.iter().find(|p| p.name == name)
    }
}
