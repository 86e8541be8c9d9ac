//! `GetWithdrawals`: the state of withdrawals for an order. Do not
//! poll this more than once every 15 minutes per payout.

use serde::{Deserialize, Serialize};

use crate::types::base::ResponseResultData;
use crate::validation::ValidateFields;

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetWithdrawalsRequestData {
    #[serde(rename = "Username", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "Password", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "OrderID", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

/// The response data is a bare JSON array of withdrawal rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GetWithdrawalsResponseData {
    pub entries: Vec<WithdrawalEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WithdrawalEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(rename = "modificationdate", skip_serializing_if = "Option::is_none")]
    pub modification_date: Option<String>,
    #[serde(rename = "orderid", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datestamp: Option<String>,
    /// EXECUTING, EXECUTED, etc.
    #[serde(rename = "transferstate", skip_serializing_if = "Option::is_none")]
    pub transfer_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(rename = "accountid", skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eta: Option<String>,
}

impl ResponseResultData for GetWithdrawalsResponseData {}

impl ValidateFields for GetWithdrawalsRequestData {}
