//! `DenyWithdrawal`: deny a withdrawal held for merchant review.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::base::{string_bool, ResponseResultData};
use crate::validation::ValidateFields;

#[derive(Debug, Clone, Default, Serialize)]
pub struct DenyWithdrawalRequestData {
    #[serde(rename = "Username", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "Password", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "OrderID", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DenyWithdrawalResponseData {
    #[serde(rename = "orderid", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,
    /// `"1"` if the withdrawal could be denied, `"0"` otherwise.
    #[serde(with = "string_bool", default)]
    pub result: bool,
    #[serde(flatten)]
    pub extension: Map<String, Value>,
}

impl ResponseResultData for DenyWithdrawalResponseData {}

impl ValidateFields for DenyWithdrawalRequestData {}
