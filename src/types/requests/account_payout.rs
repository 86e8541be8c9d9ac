//! `AccountPayout`: send money to an account previously reported by an
//! `account` notification.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::base::{string_bool, ResponseResultData};
use crate::types::common::RecipientOrSenderInformation;
use crate::validation::ValidateFields;

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountPayoutRequestData {
    #[serde(rename = "Username", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "Password", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "NotificationURL", skip_serializing_if = "Option::is_none")]
    pub notification_url: Option<String>,
    /// The AccountID from an `account` notification to send the money to.
    #[serde(rename = "AccountID", skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(rename = "EndUserID", skip_serializing_if = "Option::is_none")]
    pub end_user_id: Option<String>,
    /// Your unique ID for the payout.
    #[serde(rename = "MessageID", skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    /// The amount to send with exactly two decimals, dot as decimal
    /// separator. Must already be deducted from any balance the end
    /// user holds in the merchant's system.
    #[serde(rename = "Amount", skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(rename = "Currency", skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(rename = "Attributes", skip_serializing_if = "Option::is_none")]
    pub attributes: Option<AccountPayoutRequestDataAttributes>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountPayoutRequestDataAttributes {
    #[serde(rename = "ShopperStatement", skip_serializing_if = "Option::is_none")]
    pub shopper_statement: Option<String>,
    /// Information about the payer (ultimate debtor).
    #[serde(rename = "SenderInformation", skip_serializing_if = "Option::is_none")]
    pub sender_information: Option<RecipientOrSenderInformation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountPayoutResponseData {
    #[serde(rename = "orderid", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,
    /// `"1"` if the payout could be accepted, `"0"` otherwise.
    #[serde(with = "string_bool", default)]
    pub result: bool,
    #[serde(flatten)]
    pub extension: Map<String, Value>,
}

impl ResponseResultData for AccountPayoutResponseData {}

impl ValidateFields for AccountPayoutRequestData {}
