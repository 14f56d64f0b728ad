//! Declarative operation descriptors.
//!
//! Every tool is an [`OperationSpec`]: a tool name, the remote action it
//! maps to, and the list of parameters it accepts. The descriptor drives
//! both the JSON schema advertised to clients and the construction of the
//! parameter mapping sent to the adapter.

use std::sync::Arc;

use rmcp::model::{JsonObject, Tool, ToolAnnotations};
use serde_json::{Value, json};
use tracing::debug;

use super::ToolError;
use crate::domains::transit_router::Params;

/// Shape of a parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Integer,
    Boolean,
    StringList,
    IntegerList,
    /// List of `{"Key": ..., "Value": ...}` objects.
    TagList,
    /// List of `{"Key": ..., "Values": [...]}` objects.
    TagFilterList,
    /// List of free-form objects (e.g. attach points).
    ObjectList,
}

/// When a parameter appears in the mapping handed to the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inclusion {
    /// Always present; `null` when the caller omitted it.
    Always,
    /// Present only when the caller supplied a value, so the server-side
    /// default applies otherwise.
    WhenSet,
}

/// A single tool parameter.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    pub inclusion: Inclusion,
    pub description: &'static str,
}

impl ParamSpec {
    /// A parameter the caller must provide.
    pub const fn required(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: true,
            inclusion: Inclusion::Always,
            description,
        }
    }

    /// An optional parameter, forwarded as `null` when omitted.
    pub const fn optional(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: false,
            inclusion: Inclusion::Always,
            description,
        }
    }

    /// An optional flag, forwarded only when explicitly set.
    pub const fn when_set(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: false,
            inclusion: Inclusion::WhenSet,
            description,
        }
    }

    /// JSON schema fragment for this parameter.
    pub fn schema(&self) -> Value {
        let mut schema = match self.kind {
            ParamKind::String => json!({ "type": "string" }),
            ParamKind::Integer => json!({ "type": "integer" }),
            ParamKind::Boolean => json!({ "type": "boolean" }),
            ParamKind::StringList => json!({ "type": "array", "items": { "type": "string" } }),
            ParamKind::IntegerList => json!({ "type": "array", "items": { "type": "integer" } }),
            ParamKind::TagList => json!({
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "Key": { "type": "string" },
                        "Value": { "type": "string" }
                    },
                    "required": ["Key"]
                }
            }),
            ParamKind::TagFilterList => json!({
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "Key": { "type": "string" },
                        "Values": { "type": "array", "items": { "type": "string" } }
                    },
                    "required": ["Key"]
                }
            }),
            ParamKind::ObjectList => json!({ "type": "array", "items": { "type": "object" } }),
        };
        schema["description"] = Value::String(self.description.to_string());
        schema
    }

    /// Check the JSON shape of a supplied value.
    ///
    /// Only the shape is checked; whether an ID exists or a CIDR is valid
    /// is left to the remote API. Integers given as numeric strings, alone
    /// or inside an integer list, are converted.
    pub fn accept(&self, value: &Value) -> Result<Value, ToolError> {
        let ok = match (self.kind, value) {
            (ParamKind::String, Value::String(_)) => true,
            (ParamKind::Integer, Value::Number(n)) => n.is_i64() || n.is_u64(),
            (ParamKind::Integer, Value::String(s)) => {
                return s
                    .trim()
                    .parse::<i64>()
                    .map(Value::from)
                    .map_err(|_| self.mismatch("an integer"));
            }
            (ParamKind::Boolean, Value::Bool(_)) => true,
            (ParamKind::StringList, Value::Array(items)) => items.iter().all(Value::is_string),
            (ParamKind::IntegerList, Value::Array(items)) => {
                return items
                    .iter()
                    .map(|item| match item {
                        Value::Number(n) if n.is_i64() || n.is_u64() => Ok(item.clone()),
                        Value::String(s) => s.trim().parse::<i64>().map(Value::from).map_err(|_| ()),
                        _ => Err(()),
                    })
                    .collect::<Result<Vec<_>, ()>>()
                    .map(Value::Array)
                    .map_err(|_| self.mismatch(self.kind_label()));
            }
            (ParamKind::TagList | ParamKind::TagFilterList | ParamKind::ObjectList, Value::Array(items)) => {
                items.iter().all(Value::is_object)
            }
            _ => false,
        };

        if ok {
            Ok(value.clone())
        } else {
            Err(self.mismatch(self.kind_label()))
        }
    }

    fn kind_label(&self) -> &'static str {
        match self.kind {
            ParamKind::String => "a string",
            ParamKind::Integer => "an integer",
            ParamKind::Boolean => "a boolean",
            ParamKind::StringList => "a list of strings",
            ParamKind::IntegerList => "a list of integers",
            ParamKind::TagList => "a list of {Key, Value} objects",
            ParamKind::TagFilterList => "a list of {Key, Values} objects",
            ParamKind::ObjectList => "a list of objects",
        }
    }

    fn mismatch(&self, expected: &str) -> ToolError {
        ToolError::invalid_arguments(format!("'{}' must be {}", self.name, expected))
    }
}

/// A tool backed by one remote API action.
#[derive(Debug)]
pub struct OperationSpec {
    /// Tool name as registered in MCP.
    pub name: &'static str,
    /// Remote API action (e.g. `CreateTransitRouter`).
    pub action: &'static str,
    /// Tool description shown to clients.
    pub description: &'static str,
    pub params: &'static [ParamSpec],
}

impl OperationSpec {
    /// Look up a declared parameter by name.
    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Whether the remote action only reads state.
    pub fn is_read_only(&self) -> bool {
        self.action.starts_with("Describe")
    }

    /// Build the parameter mapping for one call.
    ///
    /// Every declared parameter becomes an entry (`null` when omitted),
    /// except [`Inclusion::WhenSet`] flags, which appear only when the
    /// caller supplied them. Unknown arguments are ignored.
    pub fn build_params(&self, arguments: &JsonObject) -> Result<Params, ToolError> {
        for name in arguments.keys() {
            if self.param(name).is_none() {
                debug!(tool = self.name, "Ignoring unknown argument '{}'", name);
            }
        }

        let mut params = Params::new();
        for spec in self.params {
            match arguments.get(spec.name).filter(|v| !v.is_null()) {
                Some(value) => {
                    params.insert(spec.name.to_string(), spec.accept(value)?);
                }
                None if spec.required => {
                    return Err(ToolError::invalid_arguments(format!(
                        "Missing required parameter '{}'",
                        spec.name
                    )));
                }
                None => {
                    if spec.inclusion == Inclusion::Always {
                        params.insert(spec.name.to_string(), Value::Null);
                    }
                }
            }
        }

        Ok(params)
    }

    /// JSON schema for the tool's input.
    pub fn input_schema(&self) -> JsonObject {
        let properties: JsonObject = self
            .params
            .iter()
            .map(|p| (p.name.to_string(), p.schema()))
            .collect();
        let required: Vec<&str> = self
            .params
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name)
            .collect();

        let mut schema = JsonObject::new();
        schema.insert("type".to_string(), json!("object"));
        schema.insert("properties".to_string(), Value::Object(properties));
        if !required.is_empty() {
            schema.insert("required".to_string(), json!(required));
        }
        schema
    }

    /// Create a Tool model for this operation (metadata).
    ///
    /// `Describe*` actions are annotated read-only. No action deletes
    /// anything, so none is marked destructive.
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.into()),
            input_schema: Arc::new(self.input_schema()),
            annotations: Some(
                ToolAnnotations::new()
                    .read_only(self.is_read_only())
                    .destructive(false),
            ),
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ECHO_PARAMS: &[ParamSpec] = &[
        ParamSpec::required("transit_router_id", ParamKind::String, "Transit router ID."),
        ParamSpec::optional("description", ParamKind::String, "Description."),
        ParamSpec::optional("asn", ParamKind::Integer, "ASN."),
        ParamSpec::when_set("ipv6_enabled", ParamKind::Boolean, "Enable IPv6."),
        ParamSpec::optional("tags", ParamKind::TagList, "Tags."),
    ];

    const ECHO: OperationSpec = OperationSpec {
        name: "create_echo",
        action: "CreateEcho",
        description: "Test operation.",
        params: ECHO_PARAMS,
    };

    fn args(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_build_params_fills_nulls() {
        let params = ECHO.build_params(&args(json!({ "transit_router_id": "tr-1" }))).unwrap();

        assert_eq!(params.len(), 4);
        assert_eq!(params["transit_router_id"], "tr-1");
        assert_eq!(params["description"], Value::Null);
        assert_eq!(params["asn"], Value::Null);
        assert_eq!(params["tags"], Value::Null);
        assert!(!params.contains_key("ipv6_enabled"));
    }

    #[test]
    fn test_build_params_when_set_false_is_kept() {
        let params = ECHO
            .build_params(&args(json!({ "transit_router_id": "tr-1", "ipv6_enabled": false })))
            .unwrap();
        assert_eq!(params["ipv6_enabled"], Value::Bool(false));
    }

    #[test]
    fn test_build_params_explicit_null_flag_is_omitted() {
        let params = ECHO
            .build_params(&args(json!({ "transit_router_id": "tr-1", "ipv6_enabled": null })))
            .unwrap();
        assert!(!params.contains_key("ipv6_enabled"));
    }

    #[test]
    fn test_build_params_missing_required() {
        let err = ECHO.build_params(&args(json!({ "description": "x" }))).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
        assert!(err.to_string().contains("transit_router_id"));
    }

    #[test]
    fn test_build_params_rejects_wrong_shape() {
        let err = ECHO
            .build_params(&args(json!({ "transit_router_id": 42 })))
            .unwrap_err();
        assert!(err.to_string().contains("'transit_router_id' must be a string"));

        let err = ECHO
            .build_params(&args(json!({ "transit_router_id": "tr-1", "tags": ["env"] })))
            .unwrap_err();
        assert!(err.to_string().contains("'tags'"));
    }

    #[test]
    fn test_build_params_integer_from_string() {
        let params = ECHO
            .build_params(&args(json!({ "transit_router_id": "tr-1", "asn": "64512" })))
            .unwrap();
        assert_eq!(params["asn"], json!(64512));
    }

    #[test]
    fn test_integer_list_accepts_numeric_strings() {
        let spec = ParamSpec::optional("apply_as_path_values", ParamKind::IntegerList, "AS numbers.");

        assert_eq!(spec.accept(&json!(["65001", 65002])).unwrap(), json!([65001, 65002]));
        assert_eq!(spec.accept(&json!([])).unwrap(), json!([]));

        let err = spec.accept(&json!(["65001", "as-path"])).unwrap_err();
        assert!(err.to_string().contains("'apply_as_path_values' must be a list of integers"));
        assert!(spec.accept(&json!([1.5])).is_err());
    }

    #[test]
    fn test_build_params_ignores_unknown_arguments() {
        let params = ECHO
            .build_params(&args(json!({ "transit_router_id": "tr-1", "region": "cn-beijing" })))
            .unwrap();
        assert!(!params.contains_key("region"));
    }

    #[test]
    fn test_input_schema() {
        let schema = ECHO.input_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["transit_router_id"]));
        assert_eq!(schema["properties"]["asn"]["type"], "integer");
        assert_eq!(schema["properties"]["tags"]["items"]["type"], "object");
        assert_eq!(schema["properties"]["ipv6_enabled"]["description"], "Enable IPv6.");
    }

    #[test]
    fn test_to_tool() {
        let tool = ECHO.to_tool();
        assert_eq!(tool.name, "create_echo");
        assert_eq!(tool.description.as_deref(), Some("Test operation."));

        let annotations = tool.annotations.unwrap();
        assert_eq!(annotations.read_only_hint, Some(false));
        assert_eq!(annotations.destructive_hint, Some(false));
    }

    #[test]
    fn test_describe_tool_is_annotated_read_only() {
        let op = OperationSpec {
            name: "describe_echoes",
            action: "DescribeEchoes",
            description: "List echoes.",
            params: &[],
        };

        let annotations = op.to_tool().annotations.unwrap();
        assert_eq!(annotations.read_only_hint, Some(true));
    }
}
