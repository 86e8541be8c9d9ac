//! `Withdraw`: initiate a withdrawal order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::base::ResponseResultData;
use crate::types::common::RecipientOrSenderInformation;
use crate::validation::{ValidateFields, ValidationContext};

#[derive(Debug, Clone, Default, Serialize)]
pub struct WithdrawRequestData {
    #[serde(rename = "Username", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "Password", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "NotificationURL", skip_serializing_if = "Option::is_none")]
    pub notification_url: Option<String>,
    #[serde(rename = "EndUserID", skip_serializing_if = "Option::is_none")]
    pub end_user_id: Option<String>,
    /// Your unique ID for the withdrawal.
    #[serde(rename = "MessageID", skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    /// The currency of the end user's account in the merchant's system.
    #[serde(rename = "Currency", skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(rename = "Attributes", skip_serializing_if = "Option::is_none")]
    pub attributes: Option<WithdrawRequestDataAttributes>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct WithdrawRequestDataAttributes {
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
    #[serde(rename = "SuggestedMinAmount", skip_serializing_if = "Option::is_none")]
    pub suggested_min_amount: Option<String>,
    #[serde(rename = "SuggestedMaxAmount", skip_serializing_if = "Option::is_none")]
    pub suggested_max_amount: Option<String>,
    /// Prefilled withdrawal amount, changeable by the end user.
    #[serde(rename = "SuggestedAmount", skip_serializing_if = "Option::is_none")]
    pub suggested_amount: Option<String>,
    #[serde(rename = "DateOfBirth", skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(rename = "AddressCountry", skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
    #[serde(rename = "AddressPostalCode", skip_serializing_if = "Option::is_none")]
    pub address_postal_code: Option<String>,
    #[serde(rename = "AddressCity", skip_serializing_if = "Option::is_none")]
    pub address_city: Option<String>,
    #[serde(rename = "AddressLine1", skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(rename = "AddressLine2", skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[serde(rename = "Address", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "SenderInformation", skip_serializing_if = "Option::is_none")]
    pub sender_information: Option<RecipientOrSenderInformation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WithdrawResponseData {
    /// The globally unique order ID assigned to the withdrawal.
    #[serde(rename = "orderid", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,
    /// The URL to load in the end user's browser or iframe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extension: Map<String, Value>,
}

impl ResponseResultData for WithdrawResponseData {}

impl ValidateFields for WithdrawRequestData {
    fn validate_fields(&self, ctx: &mut ValidationContext) {
        ctx.nested("Attributes", &self.attributes);
    }
}

impl ValidateFields for WithdrawRequestDataAttributes {
    fn validate_fields(&self, ctx: &mut ValidationContext) {
        ctx.require("Firstname", &self.firstname);
        ctx.require("Lastname", &self.lastname);
        ctx.require("Country", &self.country);
        ctx.require("Locale", &self.locale);
        ctx.require("ShopperStatement", &self.shopper_statement);
    }
}
