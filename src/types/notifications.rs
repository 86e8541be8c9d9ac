//! Payloads of server-initiated notifications.
//!
//! Notifications arrive at the merchant's HTTP endpoint shaped as
//! request envelopes with lowercase member names. Every typed payload
//! keeps an open extension map so fields added by the API later are
//! neither dropped nor fatal, and still contribute to the canonical
//! form the signature covers.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{lenient_string, EmptyAttributes};
use crate::validation::ValidateFields;

/// `account` notification: a verified bank account was selected or
/// registered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountNotificationData {
    #[serde(rename = "messageid", skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(rename = "orderid", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(rename = "notificationid", skip_serializing_if = "Option::is_none")]
    pub notification_id: Option<String>,
    #[serde(rename = "accountid", skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default, with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub verified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<AccountNotificationAttributes>,
    #[serde(flatten)]
    pub extension: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountNotificationAttributes {
    /// The clearinghouse for this account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clearinghouse: Option<String>,
    /// The bank for this account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
    /// A display-safe text identifying the account. Do not parse it;
    /// the format differs between accounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<String>,
    /// The last digits of the bank account number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastdigits: Option<String>,
    /// An ID uniquely identifying the account holder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// "1" if a direct debit mandate exists for this account.
    #[serde(default, with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub directdebitmandate: Option<String>,
    #[serde(flatten)]
    pub extension: Map<String, Value>,
}

/// `cancel` notification: the order was cancelled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CancelNotificationData {
    #[serde(rename = "messageid", skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(rename = "orderid", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(rename = "enduserid", skip_serializing_if = "Option::is_none")]
    pub end_user_id: Option<String>,
    #[serde(rename = "notificationid", skip_serializing_if = "Option::is_none")]
    pub notification_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<EmptyAttributes>,
    #[serde(flatten)]
    pub extension: Map<String, Value>,
}

macro_rules! payment_event_notification {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, Serialize, Deserialize)]
        pub struct $name {
            #[serde(skip_serializing_if = "Option::is_none")]
            pub amount: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub currency: Option<String>,
            #[serde(rename = "messageid", skip_serializing_if = "Option::is_none")]
            pub message_id: Option<String>,
            #[serde(rename = "orderid", skip_serializing_if = "Option::is_none")]
            pub order_id: Option<String>,
            #[serde(rename = "enduserid", skip_serializing_if = "Option::is_none")]
            pub end_user_id: Option<String>,
            #[serde(rename = "notificationid", skip_serializing_if = "Option::is_none")]
            pub notification_id: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub timestamp: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub attributes: Option<EmptyAttributes>,
            #[serde(flatten)]
            pub extension: Map<String, Value>,
        }

        impl ValidateFields for $name {}
    };
}

payment_event_notification! {
    /// `credit` notification: funds were credited to the order.
    CreditNotificationData
}

payment_event_notification! {
    /// `debit` notification: funds were debited from the order.
    DebitNotificationData
}

payment_event_notification! {
    /// `pending` notification: the end user initiated a deposit that has
    /// not settled yet.
    PendingNotificationData
}

payment_event_notification! {
    /// `payoutconfirmation` notification: a payout has been confirmed as
    /// sent. Delivery may lag the payout by a day or more, since it
    /// relies on bank statement files.
    PayoutConfirmationNotificationData
}

/// `kyc` notification: know-your-customer data for an entity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KycNotificationData {
    #[serde(rename = "orderid", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(rename = "messageid", skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(rename = "kycentityid", skip_serializing_if = "Option::is_none")]
    pub kyc_entity_id: Option<String>,
    #[serde(rename = "notificationid", skip_serializing_if = "Option::is_none")]
    pub notification_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<KycNotificationAttributes>,
    #[serde(flatten)]
    pub extension: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KycNotificationAttributes {
    /// The entity's personal number, where the market has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    /// Date of birth in `YYYY-MM-DD` format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub abort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abortmessage: Option<String>,
    #[serde(flatten)]
    pub extension: Map<String, Value>,
}

/// Payload handed to the catch-all listener for methods this crate has
/// no typed payload for. All fields arrive in the extension map with
/// their original wire spelling.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnknownNotificationData {
    #[serde(flatten)]
    pub extension: Map<String, Value>,
}

/// The payload of the merchant's signed answer to a notification. The
/// `status` is `OK`, `FAILED` or a custom status agreed with Paygrid;
/// an optional `message` travels in the extension map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationResponse {
    pub status: String,
    #[serde(flatten)]
    pub extension: Map<String, Value>,
}

impl ValidateFields for AccountNotificationData {}
impl ValidateFields for CancelNotificationData {}
impl ValidateFields for KycNotificationData {}
impl ValidateFields for UnknownNotificationData {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_notification_keeps_original_key_case() {
        let data: UnknownNotificationData =
            serde_json::from_str(r#"{"amount":"100.00","enduserid":"user@email.com"}"#).unwrap();
        assert_eq!(data.extension["amount"], "100.00");
        assert!(!data.extension.contains_key("Amount"));
        assert!(!data.extension.contains_key("EnduserID"));
    }

    #[test]
    fn test_typed_notification_preserves_extra_fields() {
        let data: DebitNotificationData = serde_json::from_str(
            r#"{"amount":"1.00","currency":"EUR","orderid":"1","futurefield":"x"}"#,
        )
        .unwrap();
        assert_eq!(data.extension["futurefield"], "x");

        let round_tripped = serde_json::to_value(&data).unwrap();
        assert_eq!(round_tripped["futurefield"], "x");
    }
}
