//! `SelectAccount`: let the end user select and verify a bank account.
//! The selected account arrives later as an `account` notification.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::base::ResponseResultData;
use crate::validation::{ValidateFields, ValidationContext};

#[derive(Debug, Clone, Default, Serialize)]
pub struct SelectAccountRequestData {
    #[serde(rename = "Username", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "Password", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "NotificationURL", skip_serializing_if = "Option::is_none")]
    pub notification_url: Option<String>,
    #[serde(rename = "EndUserID", skip_serializing_if = "Option::is_none")]
    pub end_user_id: Option<String>,
    #[serde(rename = "MessageID", skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(rename = "Attributes", skip_serializing_if = "Option::is_none")]
    pub attributes: Option<SelectAccountRequestDataAttributes>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SelectAccountRequestDataAttributes {
    #[serde(rename = "Firstname", skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(rename = "Lastname", skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(rename = "Country", skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(rename = "Locale", skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(rename = "ShopperStatement", skip_serializing_if = "Option::is_none")]
    pub shopper_statement: Option<String>,
    #[serde(rename = "Email", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "IP", skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(rename = "SuccessURL", skip_serializing_if = "Option::is_none")]
    pub success_url: Option<String>,
    #[serde(rename = "FailURL", skip_serializing_if = "Option::is_none")]
    pub fail_url: Option<String>,
    #[serde(rename = "TemplateURL", skip_serializing_if = "Option::is_none")]
    pub template_url: Option<String>,
    #[serde(rename = "URLTarget", skip_serializing_if = "Option::is_none")]
    pub url_target: Option<String>,
    #[serde(rename = "MobilePhone", skip_serializing_if = "Option::is_none")]
    pub mobile_phone: Option<String>,
    #[serde(rename = "NationalIdentificationNumber", skip_serializing_if = "Option::is_none")]
    pub national_identification_number: Option<String>,
    #[serde(rename = "UnchangeableNationalIdentificationNumber", skip_serializing_if = "Option::is_none")]
    pub unchangeable_national_identification_number: Option<String>,
    #[serde(rename = "URLScheme", skip_serializing_if = "Option::is_none")]
    pub url_scheme: Option<String>,
    /// "1" to also request a direct debit mandate for the selected
    /// account.
    #[serde(rename = "RequestDirectDebitMandate", skip_serializing_if = "Option::is_none")]
    pub request_direct_debit_mandate: Option<i32>,
    #[serde(rename = "DateOfBirth", skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(rename = "PSPMerchant", skip_serializing_if = "Option::is_none")]
    pub psp_merchant: Option<String>,
    #[serde(rename = "PSPMerchantURL", skip_serializing_if = "Option::is_none")]
    pub psp_merchant_url: Option<String>,
    #[serde(rename = "MerchantCategoryCode", skip_serializing_if = "Option::is_none")]
    pub merchant_category_code: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectAccountResponseData {
    #[serde(rename = "orderid", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// The URL to load in the end user's browser or iframe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extension: Map<String, Value>,
}

impl ResponseResultData for SelectAccountResponseData {}

impl ValidateFields for SelectAccountRequestData {
    fn validate_fields(&self, ctx: &mut ValidationContext) {
        ctx.require("NotificationURL", &self.notification_url);
        ctx.require("EndUserID", &self.end_user_id);
        ctx.require("MessageID", &self.message_id);
        ctx.nested("Attributes", &self.attributes);
    }
}

impl ValidateFields for SelectAccountRequestDataAttributes {
    fn validate_fields(&self, ctx: &mut ValidationContext) {
        ctx.require("Firstname", &self.firstname);
        ctx.require("Lastname", &self.lastname);
        ctx.require("Country", &self.country);
        ctx.require("Locale", &self.locale);
        ctx.require("ShopperStatement", &self.shopper_statement);
    }
}
