//! `Deposit`: initiate a deposit order and get the iframe URL for it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::base::ResponseResultData;
use crate::types::common::RecipientOrSenderInformation;
use crate::validation::{ValidateFields, ValidationContext};

#[derive(Debug, Clone, Default, Serialize)]
pub struct DepositRequestData {
    #[serde(rename = "Username", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "Password", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// The URL notifications for this order are sent to. Should be hard
    /// to guess and must not contain a `?`.
    #[serde(rename = "NotificationURL", skip_serializing_if = "Option::is_none")]
    pub notification_url: Option<String>,
    /// ID, username, hash or anything uniquely identifying the end user.
    #[serde(rename = "EndUserID", skip_serializing_if = "Option::is_none")]
    pub end_user_id: Option<String>,
    /// Your unique ID for the deposit.
    #[serde(rename = "MessageID", skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(rename = "Attributes", skip_serializing_if = "Option::is_none")]
    pub attributes: Option<DepositRequestDataAttributes>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DepositRequestDataAttributes {
    #[serde(rename = "Firstname", skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(rename = "Lastname", skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    /// ISO 3166-1-alpha-2 country code of the end user.
    #[serde(rename = "Country", skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(rename = "Locale", skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// The text shown on the end user's bank statement after Paygrid's
    /// own reference. Keep it short; banks truncate.
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
    /// Bank-specific sub-method, e.g. `deposit.bank.netherlands.ideal`.
    #[serde(rename = "Method", skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// The currency of the end user's account in the merchant's system.
    #[serde(rename = "Currency", skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// The amount to deposit with exactly two decimals, dot as decimal
    /// separator. Do not combine with the suggested min/max amounts.
    #[serde(rename = "Amount", skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(rename = "SuggestedMinAmount", skip_serializing_if = "Option::is_none")]
    pub suggested_min_amount: Option<String>,
    #[serde(rename = "SuggestedMaxAmount", skip_serializing_if = "Option::is_none")]
    pub suggested_max_amount: Option<String>,
    #[serde(rename = "ShippingAddressCountry", skip_serializing_if = "Option::is_none")]
    pub shipping_address_country: Option<String>,
    #[serde(rename = "ShippingAddressPostalCode", skip_serializing_if = "Option::is_none")]
    pub shipping_address_postal_code: Option<String>,
    #[serde(rename = "ShippingAddressCity", skip_serializing_if = "Option::is_none")]
    pub shipping_address_city: Option<String>,
    #[serde(rename = "ShippingAddressLine1", skip_serializing_if = "Option::is_none")]
    pub shipping_address_line1: Option<String>,
    #[serde(rename = "ShippingAddressLine2", skip_serializing_if = "Option::is_none")]
    pub shipping_address_line2: Option<String>,
    /// The entire shipping address; only when the separate fields above
    /// cannot be provided.
    #[serde(rename = "ShippingAddress", skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<String>,
    /// "1" to additionally request a direct debit mandate from the
    /// account used for the deposit.
    #[serde(rename = "RequestDirectDebitMandate", skip_serializing_if = "Option::is_none")]
    pub request_direct_debit_mandate: Option<String>,
    /// The AccountID from an `account` notification to charge in a
    /// direct debit deposit. Only together with `QuickDeposit: 1`.
    #[serde(rename = "ChargeAccountID", skip_serializing_if = "Option::is_none")]
    pub charge_account_id: Option<String>,
    #[serde(rename = "QuickDeposit", skip_serializing_if = "Option::is_none")]
    pub quick_deposit: Option<i32>,
    /// Merchant reference included in version 1.2 of the settlement
    /// report.
    #[serde(rename = "ExternalReference", skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    /// Human-readable identifier of the consumer-facing merchant.
    #[serde(rename = "PSPMerchant", skip_serializing_if = "Option::is_none")]
    pub psp_merchant: Option<String>,
    #[serde(rename = "PSPMerchantURL", skip_serializing_if = "Option::is_none")]
    pub psp_merchant_url: Option<String>,
    #[serde(rename = "MerchantCategoryCode", skip_serializing_if = "Option::is_none")]
    pub merchant_category_code: Option<String>,
    #[serde(rename = "RecipientInformation", skip_serializing_if = "Option::is_none")]
    pub recipient_information: Option<RecipientOrSenderInformation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DepositResponseData {
    /// The globally unique order ID assigned to the deposit.
    #[serde(rename = "orderid", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// The URL to load in the end user's browser or iframe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extension: Map<String, Value>,
}

impl ResponseResultData for DepositResponseData {}

impl ValidateFields for DepositRequestData {
    fn validate_fields(&self, ctx: &mut ValidationContext) {
        ctx.nested("Attributes", &self.attributes);
    }
}

impl ValidateFields for DepositRequestDataAttributes {
    fn validate_fields(&self, ctx: &mut ValidationContext) {
        ctx.require("Firstname", &self.firstname);
        ctx.require("Lastname", &self.lastname);
        ctx.require("Country", &self.country);
        ctx.require("Locale", &self.locale);
        ctx.require("ShopperStatement", &self.shopper_statement);
    }
}
