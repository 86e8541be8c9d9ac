//! Canonical serialization of payload data.
//!
//! The signature scheme does not sign the JSON text that goes over the
//! wire. It signs a flattened string projection of the payload in which
//! object properties are emitted in case-insensitive alphabetical order,
//! each property name immediately followed by its value, with no
//! separators anywhere. Two payloads with the same field values always
//! produce the same string regardless of construction order.
//!
//! # Null handling
//!
//! The API evolved through two null semantics, so both are supported:
//!
//! - [`NullMode::SuppressNullAttributes`] (the default): a `null` leaf
//!   whose property path starts at a top-level property named
//!   `attributes` (case-insensitive) is skipped entirely, because the
//!   attributes block treats an absent key and a `null` value as the
//!   same thing. Every other `null` property still emits its name with
//!   empty content, which is what the server signs for absent fields.
//! - [`NullMode::IncludeAll`]: every `null` property emits its name with
//!   empty content, including under `attributes`.

use std::cmp::Ordering;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{PaygridError, Result};

/// How `null` leaves are projected into the canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullMode {
    /// Emit every `null` property as its name with empty content.
    IncludeAll,
    /// Skip `null` properties under the top-level `attributes` block,
    /// emit all other `null` properties as name with empty content.
    SuppressNullAttributes,
}

/// Produces the canonical string form of payload data.
///
/// # Example
///
/// ```
/// use paygrid_client::serializer::Serializer;
/// use serde_json::json;
///
/// let serializer = Serializer::new();
/// let data = json!({ "Currency": "SEK", "Amount": "100.00" });
/// assert_eq!(serializer.serialize_data(&data).unwrap(), "Amount100.00CurrencySEK");
/// ```
#[derive(Debug, Clone)]
pub struct Serializer {
    null_mode: NullMode,
}

impl Serializer {
    /// Create a serializer with the default null handling,
    /// [`NullMode::SuppressNullAttributes`].
    pub fn new() -> Self {
        Self::with_null_mode(NullMode::SuppressNullAttributes)
    }

    /// Create a serializer with an explicit null handling mode.
    pub fn with_null_mode(null_mode: NullMode) -> Self {
        Self { null_mode }
    }

    /// Project `data` into its canonical string form.
    ///
    /// The payload is first converted into a generic JSON tree, so the
    /// output is independent of field declaration order and of the map
    /// implementation behind any extension fields.
    pub fn serialize_data<T: Serialize>(&self, data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let mut out = String::new();
        match &value {
            Value::Object(map) => self.write_object(map, true, false, &mut out),
            other => self.write_value(other, false, &mut out),
        }
        Ok(out)
    }

    fn write_object(
        &self,
        map: &Map<String, Value>,
        is_root: bool,
        under_attributes: bool,
        out: &mut String,
    ) {
        let mut properties: Vec<(&String, &Value)> = map.iter().collect();
        properties.sort_by(|a, b| compare_names(a.0, b.0));

        for (name, value) in properties {
            let in_attributes = if is_root {
                name.eq_ignore_ascii_case("attributes")
            } else {
                under_attributes
            };

            if value.is_null() {
                if self.null_mode == NullMode::SuppressNullAttributes && in_attributes {
                    continue;
                }
                out.push_str(name);
                continue;
            }

            out.push_str(name);
            self.write_value(value, in_attributes, out);
        }
    }

    fn write_value(&self, value: &Value, under_attributes: bool, out: &mut String) {
        match value {
            Value::Null => {}
            Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => out.push_str(&n.to_string()),
            Value::String(s) => out.push_str(s),
            Value::Array(items) => {
                for item in items {
                    self.write_value(item, under_attributes, out);
                }
            }
            Value::Object(map) => self.write_object(map, false, under_attributes, out),
        }
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-insensitive ordinal property ordering, with the original spelling
/// as a deterministic tie-breaker.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Serialize a value to its wire JSON form, with `null` values omitted.
///
/// This is the conventional structured serialization used for HTTP
/// bodies, not the canonical form that gets signed.
pub fn to_wire_json<T: Serialize>(value: &T) -> Result<String> {
    let value = strip_nulls(serde_json::to_value(value)?);
    serde_json::to_string(&value).map_err(PaygridError::from)
}

fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, strip_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(strip_nulls).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_properties_sorted_case_insensitively() {
        let serializer = Serializer::new();
        let a = json!({ "beta": "2", "Alpha": "1", "GAMMA": "3" });
        let b = json!({ "GAMMA": "3", "Alpha": "1", "beta": "2" });

        let expected = "Alpha1beta2GAMMA3";
        assert_eq!(serializer.serialize_data(&a).unwrap(), expected);
        assert_eq!(serializer.serialize_data(&b).unwrap(), expected);
    }

    #[test]
    fn test_arrays_keep_order_without_markers() {
        let serializer = Serializer::new();
        let data = json!({ "entries": [{ "b": "2", "a": "1" }, "x"] });
        assert_eq!(serializer.serialize_data(&data).unwrap(), "entriesa1b2x");
    }

    #[test]
    fn test_null_outside_attributes_emits_name_only() {
        let serializer = Serializer::new();
        let data = json!({ "orderid": "1", "notificationid": null });
        assert_eq!(
            serializer.serialize_data(&data).unwrap(),
            "notificationidorderid1"
        );
    }

    #[test]
    fn test_null_under_attributes_is_suppressed() {
        let serializer = Serializer::new();
        let explicit_null = json!({ "Attributes": { "Amount": "1.00", "IP": null } });
        let absent = json!({ "Attributes": { "Amount": "1.00" } });
        assert_eq!(
            serializer.serialize_data(&explicit_null).unwrap(),
            serializer.serialize_data(&absent).unwrap(),
        );

        let null_block = json!({ "Attributes": null, "MessageID": "5" });
        assert_eq!(
            serializer.serialize_data(&null_block).unwrap(),
            "MessageID5"
        );
    }

    #[test]
    fn test_include_all_mode_keeps_attribute_nulls() {
        let serializer = Serializer::with_null_mode(NullMode::IncludeAll);
        let data = json!({ "Attributes": { "IP": null }, "MessageID": "5" });
        assert_eq!(
            serializer.serialize_data(&data).unwrap(),
            "AttributesIPMessageID5"
        );
    }

    #[test]
    fn test_nested_attributes_field_is_not_special() {
        // Only a path whose first segment is `attributes` gets the
        // suppression; a deeper field that happens to share the name
        // behaves like any other property.
        let serializer = Serializer::new();
        let data = json!({ "Outer": { "attributes": null } });
        assert_eq!(serializer.serialize_data(&data).unwrap(), "Outerattributes");
    }

    #[test]
    fn test_numbers_in_minimal_form() {
        let serializer = Serializer::new();
        let data = json!({ "verified": 0, "count": 12, "ratio": 1.5 });
        assert_eq!(
            serializer.serialize_data(&data).unwrap(),
            "count12ratio1.5verified0"
        );
    }

    #[test]
    fn test_wire_json_omits_nulls() {
        let wire = to_wire_json(&json!({
            "MessageID": "5",
            "EndUserID": null,
            "Attributes": { "IP": null, "Currency": "SEK" }
        }))
        .unwrap();
        assert_eq!(wire, r#"{"Attributes":{"Currency":"SEK"},"MessageID":"5"}"#);
    }
}
