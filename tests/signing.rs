//! Signing fixtures and sign/verify properties across the two key roles.

mod common;

use common::{merchant_settings, provider_client};
use paygrid_client::types::notifications::NotificationResponse;
use paygrid_client::types::requests::{DepositRequestData, DepositRequestDataAttributes};
use paygrid_client::ApiClient;

const DEPOSIT_UUID: &str = "258a2184-2842-b485-25ca-293525152425";

/// Signature of the deposit fixture under `tests/keys/client_private.pem`.
/// PKCS#1 v1.5 is deterministic, so this never changes for the same key
/// and plaintext.
const DEPOSIT_SIGNATURE: &str = "GheRA18Id0jIk5T9LFHBSLPDPkZJBl/oQO4RN5k0I6Lz6X7+ww/TKVk5y+mlk58M4GVSKduxAJnbzyDE4oM+hemPBf6MFwyuriSzIb0EDuYCflO/go0xz9RE+RBFQ/YHbdpN13Vr3AmXaDnHKLWDh2rn9Zsqtsl8HgsKh9d9LBZ7EMKYTO7ZMxTNRgPvo9mNKooFC8ZI+o2W0dI6XPSO1Kp56zJLOnxmUcXuupHrZx5XL2PO6Hev401Lx/LuBiM8SKnFopkNYm2puKzmsUxqJ1014yRrkMAa9imwBplxuPgiTTR/Bowrtey3TkSaohRIw0Vm60whH3S7hRR7pB0Uhw==";

/// Signature of `accounte76ffbe5-e0f9-4402-8689-f868ed2021f8statusOK`
/// under the same key.
const STATUS_OK_SIGNATURE: &str = "Z4oq6IU6MkUAD6KENycdr4GaCfBUM6N6EUKxrYxJys0WiiKwcAcxphJc074oIsy1IxJlsypPz/AV4MR+zKz2WRTlinfym5snDg/vz7qWPTE5nSsQIEL9wsBMc8M+Y5AX79YsTsVUHnOh5Gj3vCEd+ek9GPAB/6+9KZgdEtnEBUMxQDLPGZqItdAhNUzvKMH5B89Zjl8gHbEYocBWHcy0WVVS4TkIZOkbBb2I7GeWUFz13ETA5TTieDIUfhcy3FmRxY9ej/w36FEMj52JSmmQBdSRbN8hyxcnkjBulGgpr1u+HWmlZnESw1osFZAxPZIqNm6kWXwK7rowBMhMSyte/A==";

fn deposit_fixture() -> DepositRequestData {
    DepositRequestData {
        username: Some("team_ceres".to_string()),
        password: Some("a6e404c9-7ca8-1204-863d-5642e27c2747".to_string()),
        notification_url: Some("localhost:1000".to_string()),
        end_user_id: Some("127.0.0.1".to_string()),
        message_id: Some("82bdbc09-7605-4265-b416-1e9549397edd".to_string()),
        attributes: Some(DepositRequestDataAttributes {
            amount: Some("100.00".to_string()),
            currency: Some("SEK".to_string()),
            country: Some("SE".to_string()),
            firstname: Some("John".to_string()),
            lastname: Some("Doe".to_string()),
            ..Default::default()
        }),
    }
}

#[test]
fn deposit_request_signature_fixture() {
    let client = ApiClient::new(merchant_settings()).unwrap();
    let request = client
        .create_request_package(deposit_fixture(), "Deposit", DEPOSIT_UUID)
        .unwrap();
    assert_eq!(request.params.signature.as_deref(), Some(DEPOSIT_SIGNATURE));
}

#[test]
fn notification_response_signature_fixture() {
    let client = ApiClient::new(merchant_settings()).unwrap();
    let response = client
        .create_notification_response(
            "account",
            "e76ffbe5-e0f9-4402-8689-f868ed2021f8",
            "OK",
            None,
        )
        .unwrap();

    let result = response.result.as_ref().unwrap();
    assert_eq!(result.signature, STATUS_OK_SIGNATURE);

    // The canonical form of the bare status payload.
    let serialized = paygrid_client::serializer::Serializer::new()
        .serialize_data(&result.data)
        .unwrap();
    assert_eq!(serialized, "statusOK");
}

#[test]
fn provider_verifies_what_merchant_signed() {
    // The provider-role client holds the merchant's public key, so a
    // response package signed by the merchant verifies over there.
    let merchant = ApiClient::new(merchant_settings()).unwrap();
    let provider = provider_client();

    let response = merchant
        .create_response_package(
            "account",
            "e76ffbe5-e0f9-4402-8689-f868ed2021f8",
            NotificationResponse {
                status: "OK".to_string(),
                ..Default::default()
            },
        )
        .unwrap();

    assert!(provider.signer().verify_response(&response).unwrap());
}

#[test]
fn merchant_verifies_provider_signed_notification() {
    let provider = provider_client();
    let merchant = ApiClient::new(merchant_settings()).unwrap();

    let notification = provider
        .create_request_package(
            serde_json::json!({ "amount": "100.00", "currency": "EUR" }),
            "debit",
            "8bedf931-7e09-4f0f-987d-820cbe10a2b8",
        )
        .unwrap();

    assert!(merchant.signer().verify_request(&notification).unwrap());

    // Any tampered byte in the payload must flip verification to false.
    let mut tampered = notification;
    tampered.params.data = serde_json::json!({ "amount": "999.00", "currency": "EUR" });
    assert!(!merchant.signer().verify_request(&tampered).unwrap());
}
