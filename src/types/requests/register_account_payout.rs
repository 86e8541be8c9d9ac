//! `RegisterAccountPayout`: register an account and pay out to it in
//! one call.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::base::{string_bool, ResponseResultData};
use crate::types::common::RecipientOrSenderInformation;
use crate::validation::{ValidateFields, ValidationContext};

#[derive(Debug, Clone, Default, Serialize)]
pub struct RegisterAccountPayoutRequestData {
    #[serde(rename = "Username", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "Password", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "EndUserID", skip_serializing_if = "Option::is_none")]
    pub end_user_id: Option<String>,
    #[serde(rename = "ClearingHouse", skip_serializing_if = "Option::is_none")]
    pub clearing_house: Option<String>,
    #[serde(rename = "BankNumber", skip_serializing_if = "Option::is_none")]
    pub bank_number: Option<String>,
    #[serde(rename = "AccountNumber", skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(rename = "Firstname", skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(rename = "Lastname", skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(rename = "NotificationURL", skip_serializing_if = "Option::is_none")]
    pub notification_url: Option<String>,
    #[serde(rename = "MessageID", skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(rename = "Amount", skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(rename = "Currency", skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(rename = "Attributes", skip_serializing_if = "Option::is_none")]
    pub attributes: Option<RegisterAccountPayoutRequestDataAttributes>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RegisterAccountPayoutRequestDataAttributes {
    #[serde(rename = "ShopperStatement", skip_serializing_if = "Option::is_none")]
    pub shopper_statement: Option<String>,
    #[serde(rename = "ExternalReference", skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    #[serde(rename = "PSPMerchant", skip_serializing_if = "Option::is_none")]
    pub psp_merchant: Option<String>,
    #[serde(rename = "PSPMerchantURL", skip_serializing_if = "Option::is_none")]
    pub psp_merchant_url: Option<String>,
    #[serde(rename = "MerchantCategoryCode", skip_serializing_if = "Option::is_none")]
    pub merchant_category_code: Option<String>,
    #[serde(rename = "SenderInformation", skip_serializing_if = "Option::is_none")]
    pub sender_information: Option<RecipientOrSenderInformation>,
    #[serde(rename = "DateOfBirth", skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(rename = "MobilePhone", skip_serializing_if = "Option::is_none")]
    pub mobile_phone: Option<String>,
    #[serde(rename = "NationalIdentificationNumber", skip_serializing_if = "Option::is_none")]
    pub national_identification_number: Option<String>,
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
    #[serde(rename = "Email", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterAccountPayoutResponseData {
    #[serde(rename = "orderid", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,
    /// `"1"` if the payout could be accepted, `"0"` otherwise.
    #[serde(with = "string_bool", default)]
    pub result: bool,
    #[serde(flatten)]
    pub extension: Map<String, Value>,
}

impl ResponseResultData for RegisterAccountPayoutResponseData {}

impl ValidateFields for RegisterAccountPayoutRequestData {
    fn validate_fields(&self, ctx: &mut ValidationContext) {
        ctx.require("NotificationURL", &self.notification_url);
        ctx.require("MessageID", &self.message_id);
        ctx.require("Amount", &self.amount);
        ctx.require("Currency", &self.currency);
        ctx.nested("Attributes", &self.attributes);
    }
}

impl ValidateFields for RegisterAccountPayoutRequestDataAttributes {
    fn validate_fields(&self, ctx: &mut ValidationContext) {
        ctx.require("ShopperStatement", &self.shopper_statement);
    }
}
