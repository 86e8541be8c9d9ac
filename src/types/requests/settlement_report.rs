//! `ViewAutomaticSettlementDetailsCSV`: fetch a settlement report. The
//! raw CSV comes back in the response data; the client parses it into
//! typed rows after the round trip.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::report::SettlementReportRow;
use crate::types::base::ResponseResultData;
use crate::validation::ValidateFields;

#[derive(Debug, Clone, Default, Serialize)]
pub struct SettlementReportRequestData {
    #[serde(rename = "Username", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "Password", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Limit the report to one settlement currency. Omitting it returns
    /// all currencies settled on the date.
    #[serde(rename = "Currency", skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// The date of the settlement, `YYYY-MM-DD`.
    #[serde(rename = "SettlementDate", skip_serializing_if = "Option::is_none")]
    pub settlement_date: Option<String>,
    #[serde(rename = "Attributes", skip_serializing_if = "Option::is_none")]
    pub attributes: Option<SettlementReportRequestDataAttributes>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SettlementReportRequestDataAttributes {
    /// The report layout version to request, e.g. `1.2`.
    #[serde(rename = "APIVersion", skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettlementReportResponseData {
    /// The raw CSV exactly as the API returned it.
    #[serde(rename = "view_automatic_settlement_details", skip_serializing_if = "Option::is_none")]
    pub csv_content: Option<String>,
    /// Parsed rows, filled in by the client after the response signature
    /// has been verified. Not part of the wire payload.
    #[serde(skip)]
    pub entries: Vec<SettlementReportRow>,
    #[serde(flatten)]
    pub extension: Map<String, Value>,
}

impl ResponseResultData for SettlementReportResponseData {}

impl ValidateFields for SettlementReportRequestData {}
