//! `CreateAccount`: register a bank account by its account number, for
//! use with `AccountPayout`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::base::ResponseResultData;
use crate::validation::{ValidateFields, ValidationContext};

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateAccountRequestData {
    #[serde(rename = "Username", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "Password", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "EndUserID", skip_serializing_if = "Option::is_none")]
    pub end_user_id: Option<String>,
    /// The clearinghouse of the account's country, e.g. `SWEDEN`.
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
    #[serde(rename = "Attributes", skip_serializing_if = "Option::is_none")]
    pub attributes: Option<CreateAccountRequestDataAttributes>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateAccountRequestDataAttributes {
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
pub struct CreateAccountResponseData {
    #[serde(rename = "accountid", skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clearinghouse: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
    /// Display-safe descriptor of the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<String>,
    #[serde(flatten)]
    pub extension: Map<String, Value>,
}

impl ResponseResultData for CreateAccountResponseData {}

impl ValidateFields for CreateAccountRequestData {
    fn validate_fields(&self, ctx: &mut ValidationContext) {
        ctx.require("EndUserID", &self.end_user_id);
        ctx.require("ClearingHouse", &self.clearing_house);
        ctx.require("BankNumber", &self.bank_number);
        ctx.require("AccountNumber", &self.account_number);
        ctx.require("Firstname", &self.firstname);
        ctx.require("Lastname", &self.lastname);
    }
}
