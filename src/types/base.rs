//! The JSON-RPC wire envelope.
//!
//! Outgoing requests carry `method`, `version` and a `params` block with
//! the signature, call UUID and typed payload. The protocol capitalizes
//! the params members on requests (`Signature`, `UUID`, `Data`) but uses
//! lowercase member names on responses and on server-initiated
//! notifications, so the request params accept both spellings on input.
//!
//! A response carries exactly one of `result` or `error`; both variants
//! embed the method, UUID and signature needed to verify the envelope.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Protocol version carried in envelopes. Requests send the number
/// `1.1`; the server answers with the string `"1.1"`, so both shapes
/// parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiVersion {
    Number(f64),
    Text(String),
}

impl Default for ApiVersion {
    fn default() -> Self {
        ApiVersion::Number(1.1)
    }
}

impl std::fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiVersion::Number(n) => write!(f, "{}", n),
            ApiVersion::Text(s) => write!(f, "{}", s),
        }
    }
}

/// An outgoing request envelope, or an inbound notification (which is
/// structurally a request initiated by the server).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest<D> {
    pub method: String,
    #[serde(default)]
    pub version: ApiVersion,
    pub params: RequestParams<D>,
}

impl<D> JsonRpcRequest<D> {
    /// Assemble an unsigned request envelope.
    pub fn new(method: impl Into<String>, uuid: impl Into<String>, data: D) -> Self {
        Self {
            method: method.into(),
            version: ApiVersion::default(),
            params: RequestParams {
                signature: None,
                uuid: uuid.into(),
                data,
            },
        }
    }
}

/// The `params` block of a request envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestParams<D> {
    #[serde(
        rename = "Signature",
        alias = "signature",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub signature: Option<String>,
    #[serde(rename = "UUID", alias = "uuid", default)]
    pub uuid: String,
    #[serde(rename = "Data", alias = "data")]
    pub data: D,
}

/// A response envelope. Exactly one of `result` and `error` is present
/// on a well-formed response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "D: serde::de::DeserializeOwned"))]
pub struct JsonRpcResponse<D> {
    #[serde(default)]
    pub version: ApiVersion,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<ResponseResult<D>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ResponseError>,
}

impl<D> JsonRpcResponse<D> {
    /// True when the envelope carries a result and no error.
    pub fn is_successful_result(&self) -> bool {
        self.result.is_some() && self.error.is_none()
    }

    /// The UUID echoed by the server, from whichever variant is present.
    pub fn uuid(&self) -> Option<&str> {
        match (&self.result, &self.error) {
            (Some(result), None) => Some(result.uuid.as_str()),
            (_, Some(error)) => error.error.as_ref().map(|e| e.uuid.as_str()),
            _ => None,
        }
    }

    /// The method name echoed by the server.
    pub fn method(&self) -> Option<&str> {
        match (&self.result, &self.error) {
            (Some(result), None) => Some(result.method.as_str()),
            (_, Some(error)) => error.error.as_ref().map(|e| e.method.as_str()),
            _ => None,
        }
    }

    /// The envelope signature, from whichever variant is present.
    pub fn signature(&self) -> Option<&str> {
        match (&self.result, &self.error) {
            (Some(result), None) => Some(result.signature.as_str()),
            (_, Some(error)) => error.error.as_ref().map(|e| e.signature.as_str()),
            _ => None,
        }
    }
}

/// The `result` member of a response envelope. The same shape is nested
/// inside error responses under `error.error`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseResult<D> {
    #[serde(default)]
    pub signature: String,
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub method: String,
    pub data: D,
}

/// The `error` member of a response envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseError {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// The signed context for the error, mirroring the `result` shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ResponseResult<ResponseErrorData>>,
}

/// The error payload the server signs over.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseErrorData {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extension: Map<String, Value>,
}

/// Capability contract for typed response payloads.
///
/// Payloads representing operations with an explicit accept/decline
/// outcome override [`rejection`](ResponseResultData::rejection); for
/// everything else the default of "never rejected" applies.
pub trait ResponseResultData: Serialize + DeserializeOwned {
    /// The rejection reason when this payload reports a declined
    /// operation, `None` when the operation was accepted.
    fn rejection(&self) -> Option<String> {
        None
    }
}

/// Serde adapter for boolean fields the API transports as the strings
/// `"1"` / `"0"`. Deserialization also tolerates native booleans and
/// numbers, which some endpoints emit.
pub mod string_bool {
    use serde::de::{self, Deserializer, Unexpected};
    use serde::Serializer;

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "1" } else { "0" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        struct Visitor;

        impl serde::de::Visitor<'_> for Visitor {
            type Value = bool;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("\"1\", \"0\", a boolean or a number")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
                match v {
                    "1" => Ok(true),
                    "0" => Ok(false),
                    other => Err(E::invalid_value(Unexpected::Str(other), &self)),
                }
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
                Ok(v)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<bool, E> {
                Ok(v != 0)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<bool, E> {
                Ok(v != 0)
            }
        }

        deserializer.deserialize_any(Visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_params_serialize_capitalized() {
        let request = JsonRpcRequest::new("Deposit", "abc-123", serde_json::json!({}));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["params"]["UUID"], "abc-123");
        assert!(json["params"].get("Data").is_some());
        assert_eq!(json["version"], 1.1);
    }

    #[test]
    fn test_request_params_accept_lowercase_members() {
        let body = r#"{
            "method": "debit",
            "version": "1.1",
            "params": { "signature": "c2ln", "uuid": "abc", "data": { "amount": "1.00" } }
        }"#;
        let request: JsonRpcRequest<serde_json::Value> = serde_json::from_str(body).unwrap();
        assert_eq!(request.params.uuid, "abc");
        assert_eq!(request.params.signature.as_deref(), Some("c2ln"));
        assert_eq!(request.version, ApiVersion::Text("1.1".to_string()));
    }

    #[test]
    fn test_response_accessors_cover_both_variants() {
        let success: JsonRpcResponse<serde_json::Value> = serde_json::from_str(
            r#"{"version":"1.1","result":{"signature":"s","uuid":"u","method":"m","data":{}}}"#,
        )
        .unwrap();
        assert!(success.is_successful_result());
        assert_eq!(success.uuid(), Some("u"));

        let error: JsonRpcResponse<serde_json::Value> = serde_json::from_str(
            r#"{"version":"1.1","error":{"code":616,"message":"ERROR_X","name":"JSONRPCError",
                "error":{"signature":"s2","uuid":"u2","method":"m2","data":{"code":616,"message":"ERROR_X"}}}}"#,
        )
        .unwrap();
        assert!(!error.is_successful_result());
        assert_eq!(error.uuid(), Some("u2"));
        assert_eq!(error.signature(), Some("s2"));
    }

    #[test]
    fn test_string_bool_round_trip() {
        #[derive(Serialize, Deserialize)]
        struct Flag {
            #[serde(with = "string_bool")]
            result: bool,
        }

        let flag: Flag = serde_json::from_str(r#"{"result":"1"}"#).unwrap();
        assert!(flag.result);
        assert_eq!(serde_json::to_string(&flag).unwrap(), r#"{"result":"1"}"#);

        let flag: Flag = serde_json::from_str(r#"{"result":0}"#).unwrap();
        assert!(!flag.result);
    }
}
