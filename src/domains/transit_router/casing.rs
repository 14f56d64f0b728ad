//! Field name conversion between tool parameters and API fields.
//!
//! Tool parameters and decoded responses use snake_case, the wire format
//! uses PascalCase (`transit_router_id` <-> `TransitRouterId`).

use serde_json::Value;

/// Convert a snake_case name to PascalCase.
///
/// Names that are already PascalCase pass through unchanged, so caller
/// supplied object keys like `SubnetId` and `subnet_id` both map to
/// `SubnetId`.
pub fn to_pascal_case(name: &str) -> String {
    name.split('_')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Convert a PascalCase (or camelCase) name to snake_case.
///
/// Acronym runs stay together (`VPCId` -> `vpc_id`, `IPv6CidrBlock` ->
/// `ipv6_cidr_block`) and a digit ends a word (`Ipv6Enabled` ->
/// `ipv6_enabled`). Names that are already snake_case pass through
/// unchanged.
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_uppercase() {
            out.push(c);
            continue;
        }

        if i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            // `IPv6`: one lowercase letter then a digit continues the acronym
            let versioned = next_is_lower && chars.get(i + 2).is_some_and(|n| n.is_ascii_digit());
            let boundary = prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower && !versioned);
            if boundary {
                out.push('_');
            }
        }
        out.push(c.to_ascii_lowercase());
    }

    out
}

/// Recursively rename every object key in `value` to snake_case.
///
/// Values are left untouched; nested objects and arrays of objects are
/// walked so the whole response tree uses the same naming.
pub fn snake_case_keys(value: Value) -> Value {
    match value {
        Value::Object(fields) => Value::Object(
            fields
                .into_iter()
                .map(|(key, value)| (to_snake_case(&key), snake_case_keys(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(snake_case_keys).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("transit_router_id"), "TransitRouterId");
        assert_eq!(to_pascal_case("asn"), "Asn");
        assert_eq!(to_pascal_case("ipv6_enabled"), "Ipv6Enabled");
        assert_eq!(to_pascal_case("SubnetId"), "SubnetId");
        assert_eq!(to_pascal_case("Key"), "Key");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("TransitRouterId"), "transit_router_id");
        assert_eq!(to_snake_case("Ipv6Enabled"), "ipv6_enabled");
        assert_eq!(to_snake_case("VPCId"), "vpc_id");
        assert_eq!(to_snake_case("Asn"), "asn");
        assert_eq!(to_snake_case("already_snake"), "already_snake");
    }

    #[test]
    fn test_to_snake_case_versioned_acronyms() {
        assert_eq!(to_snake_case("IPv6CidrBlock"), "ipv6_cidr_block");
        assert_eq!(to_snake_case("IPv4Address"), "ipv4_address");
        assert_eq!(to_snake_case("EnableIPv6"), "enable_ipv6");
        assert_eq!(to_snake_case("VPCIdList"), "vpc_id_list");
    }

    #[test]
    fn test_snake_case_keys_walks_nested_values() {
        let raw = json!({
            "TransitRouters": [
                {"TransitRouterId": "tr-1", "Tags": [{"Key": "env", "Value": "Prod"}]}
            ],
            "PageNumber": 1,
            "TotalCount": 1
        });

        let normalized = snake_case_keys(raw);

        assert_eq!(normalized["transit_routers"][0]["transit_router_id"], "tr-1");
        assert_eq!(normalized["transit_routers"][0]["tags"][0]["key"], "env");
        // values are never rewritten
        assert_eq!(normalized["transit_routers"][0]["tags"][0]["value"], "Prod");
        assert_eq!(normalized["total_count"], 1);
    }
}
