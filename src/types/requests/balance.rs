//! `Balance`: the merchant's balances, one entry per currency.

use serde::{Deserialize, Serialize};

use crate::types::base::ResponseResultData;
use crate::validation::ValidateFields;

#[derive(Debug, Clone, Default, Serialize)]
pub struct BalanceRequestData {
    #[serde(rename = "Username", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "Password", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// The response data is a bare JSON array of entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BalanceResponseData {
    pub entries: Vec<BalanceEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BalanceEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// The balance with two decimals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<String>,
}

impl ResponseResultData for BalanceResponseData {}

impl ValidateFields for BalanceRequestData {}
