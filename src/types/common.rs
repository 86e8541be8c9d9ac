//! Payload building blocks shared across request and notification types.

use serde::{Deserialize, Serialize};

/// An attributes block with no declared fields, used by payloads whose
/// attributes are either absent or empty on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmptyAttributes {}

/// Information about the ultimate creditor or debtor of a payment.
/// Required by some merchants and partners.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipientOrSenderInformation {
    #[serde(rename = "Partytype", skip_serializing_if = "Option::is_none")]
    pub party_type: Option<String>,
    #[serde(rename = "Firstname", skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(rename = "Lastname", skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(rename = "CountryCode", skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(rename = "CustomerID", skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(rename = "Address", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "DateOfBirth", skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
}

/// Serde adapter for optional fields the API transports inconsistently
/// as strings, numbers or booleans. Everything lands as the string the
/// canonical form would use for the raw value.
pub mod lenient_string {
    use serde::de::Deserializer;
    use serde::{Deserialize, Serializer};
    use serde_json::Value;

    pub fn serialize<S: Serializer>(
        value: &Option<String>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(s) => serializer.serialize_str(s),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s),
            Some(Value::Number(n)) => Some(n.to_string()),
            Some(Value::Bool(b)) => Some(if b { "true" } else { "false" }.to_string()),
            Some(other) => {
                return Err(serde::de::Error::custom(format!(
                    "expected a scalar, got {}",
                    other
                )))
            }
        })
    }
}
