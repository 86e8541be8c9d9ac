//! `Refund`: return funds from a previous deposit or charge.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::base::{string_bool, ResponseResultData};
use crate::validation::{ValidateFields, ValidationContext};

#[derive(Debug, Clone, Default, Serialize)]
pub struct RefundRequestData {
    #[serde(rename = "Username", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "Password", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// The OrderID of the order to refund.
    #[serde(rename = "OrderID", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// The amount to refund, at most the deposited amount.
    #[serde(rename = "Amount", skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(rename = "Currency", skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(rename = "Attributes", skip_serializing_if = "Option::is_none")]
    pub attributes: Option<RefundRequestDataAttributes>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RefundRequestDataAttributes {
    #[serde(rename = "ExternalReference", skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RefundResponseData {
    #[serde(rename = "orderid", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,
    /// `"1"` if the refund request was accepted, `"0"` otherwise.
    #[serde(with = "string_bool", default)]
    pub result: bool,
    #[serde(flatten)]
    pub extension: Map<String, Value>,
}

impl ResponseResultData for RefundResponseData {}

impl ValidateFields for RefundRequestData {
    fn validate_fields(&self, ctx: &mut ValidationContext) {
        ctx.require("OrderID", &self.order_id);
        ctx.require("Amount", &self.amount);
        ctx.require("Currency", &self.currency);
    }
}
