//! `Charge`: charge an account with an active direct debit mandate.
//! Carries an explicit accept/decline outcome.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::base::{string_bool, ResponseResultData};
use crate::validation::ValidateFields;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ChargeRequestData {
    #[serde(rename = "Username", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "Password", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// The AccountID from an `account` notification to charge.
    #[serde(rename = "AccountID", skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(rename = "NotificationURL", skip_serializing_if = "Option::is_none")]
    pub notification_url: Option<String>,
    #[serde(rename = "EndUserID", skip_serializing_if = "Option::is_none")]
    pub end_user_id: Option<String>,
    /// Your unique ID for the charge.
    #[serde(rename = "MessageID", skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(rename = "Amount", skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(rename = "Currency", skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(rename = "Attributes", skip_serializing_if = "Option::is_none")]
    pub attributes: Option<ChargeRequestDataAttributes>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ChargeRequestDataAttributes {
    #[serde(rename = "ShopperStatement", skip_serializing_if = "Option::is_none")]
    pub shopper_statement: Option<String>,
    #[serde(rename = "Email", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// The date the funds are pulled from the account, `YYYY-MM-DD`.
    #[serde(rename = "PaymentDate", skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<String>,
    #[serde(rename = "ExternalReference", skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChargeResponseData {
    /// `"1"` if the charge was accepted, `"0"` otherwise.
    #[serde(with = "string_bool", default)]
    pub result: bool,
    #[serde(rename = "orderid", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Rejection reason code when the charge was not accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected: Option<String>,
    #[serde(flatten)]
    pub extension: Map<String, Value>,
}

impl ResponseResultData for ChargeResponseData {
    fn rejection(&self) -> Option<String> {
        if self.result {
            None
        } else {
            Some(self.rejected.clone().unwrap_or_default())
        }
    }
}

impl ValidateFields for ChargeRequestData {}
