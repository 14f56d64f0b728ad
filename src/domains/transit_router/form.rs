//! Flattening of parameter mappings into API form fields.
//!
//! The API takes flat `Name=value` pairs. Lists are expanded with 1-based
//! indices and objects with their field names:
//!
//! ```text
//! transit_router_ids: ["tr-a", "tr-b"]  -> TransitRouterIds.1=tr-a, TransitRouterIds.2=tr-b
//! tags: [{"Key": "env", "Value": "prod"}] -> Tags.1.Key=env, Tags.1.Value=prod
//! ```

use serde_json::Value;

use super::{ApiError, ApiResult, Params, casing::to_pascal_case};

/// Flatten a parameter mapping into ordered form pairs.
///
/// `null` entries (parameters the caller left out) produce no pairs.
pub fn flatten_params(params: &Params) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (name, value) in params {
        flatten_into(&to_pascal_case(name), value, &mut pairs);
    }
    pairs
}

/// Encode form pairs as an `application/x-www-form-urlencoded` body.
pub fn encode_form(pairs: &[(String, String)]) -> ApiResult<String> {
    serde_urlencoded::to_string(pairs).map_err(|e| ApiError::Encode(e.to_string()))
}

fn flatten_into(prefix: &str, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => out.push((prefix.to_string(), b.to_string())),
        Value::Number(n) => out.push((prefix.to_string(), n.to_string())),
        Value::String(s) => out.push((prefix.to_string(), s.clone())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten_into(&format!("{}.{}", prefix, index + 1), item, out);
            }
        }
        Value::Object(fields) => {
            for (key, item) in fields {
                flatten_into(&format!("{}.{}", prefix, to_pascal_case(key)), item, out);
            }
        }
    }
}
