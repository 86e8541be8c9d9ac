//! `AccountLedger`: all ledger rows that affected the merchant balance
//! in a date interval.

use serde::{Deserialize, Serialize};

use crate::types::base::ResponseResultData;
use crate::validation::ValidateFields;

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountLedgerRequestData {
    #[serde(rename = "Username", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "Password", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "FromDate", skip_serializing_if = "Option::is_none")]
    pub from_date: Option<String>,
    #[serde(rename = "ToDate", skip_serializing_if = "Option::is_none")]
    pub to_date: Option<String>,
    #[serde(rename = "Currency", skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// The response data is a bare JSON array of ledger rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountLedgerResponseData {
    pub entries: Vec<AccountLedgerEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountLedgerEntry {
    /// Your user ID in the Paygrid system.
    #[serde(rename = "userid", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// When this row affected the balance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datestamp: Option<String>,
    /// The globally unique OrderID that produced this row.
    #[serde(rename = "orderid", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// The bookkeeping account this row belongs to.
    #[serde(rename = "accountname", skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    /// The MessageID of the order that produced this row.
    #[serde(rename = "messageid", skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    /// Human-friendly description of the row.
    #[serde(rename = "transactiontype", skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// The balance delta. May carry many decimals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    /// Internal ID; meaning differs per payment method.
    #[serde(rename = "gluepayid", skip_serializing_if = "Option::is_none")]
    pub gluepay_id: Option<String>,
}

impl ResponseResultData for AccountLedgerResponseData {}

impl ValidateFields for AccountLedgerRequestData {}
