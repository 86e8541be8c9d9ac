//! `CancelCharge`: cancel a not-yet-executed charge. Carries an
//! explicit accept/decline outcome.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::base::{string_bool, ResponseResultData};
use crate::validation::{ValidateFields, ValidationContext};

#[derive(Debug, Clone, Default, Serialize)]
pub struct CancelChargeRequestData {
    #[serde(rename = "Username", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "Password", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// The OrderID of the charge to cancel.
    #[serde(rename = "OrderId", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CancelChargeResponseData {
    /// `"1"` if the charge could be cancelled, `"0"` otherwise.
    #[serde(with = "string_bool", default)]
    pub result: bool,
    /// Rejection reason code when the cancel was not accepted; absent
    /// on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected: Option<String>,
    #[serde(flatten)]
    pub extension: Map<String, Value>,
}

impl ResponseResultData for CancelChargeResponseData {
    fn rejection(&self) -> Option<String> {
        if self.result {
            None
        } else {
            Some(self.rejected.clone().unwrap_or_default())
        }
    }
}

impl ValidateFields for CancelChargeRequestData {
    fn validate_fields(&self, ctx: &mut ValidationContext) {
        ctx.require("OrderId", &self.order_id);
    }
}
