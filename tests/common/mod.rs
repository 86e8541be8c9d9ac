//! Shared fixtures for the integration tests.
//!
//! The fake provider keypair plays the Paygrid side: its public half is
//! the embedded test-environment key, so envelopes signed with
//! `provider_fake_private.pem` verify on a client built for the test
//! environment.

#![allow(dead_code)]

use std::sync::Arc;

use paygrid_client::{ApiClient, ApiClientSettings};

pub const CLIENT_PRIVATE_PEM: &str = include_str!("../keys/client_private.pem");
pub const CLIENT_PUBLIC_PEM: &str = include_str!("../keys/client_public.pem");
pub const PROVIDER_FAKE_PRIVATE_PEM: &str = include_str!("../keys/provider_fake_private.pem");

/// Settings for the merchant side of the conversation.
pub fn merchant_settings() -> ApiClientSettings {
    ApiClientSettings::for_test()
        .with_credentials("merchant_username", "merchant_password")
        .with_client_private_key_from_pem(CLIENT_PRIVATE_PEM)
        .unwrap()
        .build()
        .unwrap()
}

/// A client playing the Paygrid side: it signs with the fake provider
/// private key and verifies envelopes the merchant signed.
pub fn provider_client() -> Arc<ApiClient> {
    let settings = ApiClientSettings::for_test()
        .without_credentials()
        .with_client_private_key_from_pem(PROVIDER_FAKE_PRIVATE_PEM)
        .unwrap()
        .with_provider_key_from_pem(CLIENT_PUBLIC_PEM)
        .unwrap()
        .build()
        .unwrap();
    Arc::new(ApiClient::new(settings).unwrap())
}
