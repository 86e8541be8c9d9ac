//! Client configuration: environment, credentials and key material.
//!
//! Settings are built through [`ApiClientSettings::for_test`],
//! [`ApiClientSettings::for_production`] or
//! [`ApiClientSettings::for_custom`], then a fluent builder supplies
//! credentials and the merchant's private key. The Paygrid public key for
//! the chosen environment ships embedded with the crate and can be
//! overridden for local testing.
//!
//! # Example
//!
//! ```no_run
//! use paygrid_client::ApiClientSettings;
//!
//! let settings = ApiClientSettings::for_test()
//!     .with_credentials("merchant_username", "merchant_password")
//!     .with_client_private_key_from_file("merchant_private_key.pem")?
//!     .build()?;
//! # Ok::<(), paygrid_client::PaygridError>(())
//! ```

use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::keychain;
use crate::{PaygridError, Result};

pub(crate) const URL_TEST: &str = "https://test.paygrid.com/api/1";
pub(crate) const URL_PRODUCTION: &str = "https://api.paygrid.com/1";

const PROVIDER_TEST_KEY_PEM: &str = include_str!("keys/provider_test_key.pem");
const PROVIDER_LIVE_KEY_PEM: &str = include_str!("keys/provider_live_key.pem");

const ENV_USERNAME: &str = "PAYGRID_CLIENT_USERNAME";
const ENV_PASSWORD: &str = "PAYGRID_CLIENT_PASSWORD";

/// API username and password, stamped onto every outgoing request by the
/// request pipeline.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Immutable configuration for an [`ApiClient`](crate::ApiClient).
#[derive(Clone, Debug)]
pub struct ApiClientSettings {
    pub(crate) url: String,
    pub(crate) credentials: Option<Credentials>,
    pub(crate) client_private_key: RsaPrivateKey,
    pub(crate) provider_public_key: RsaPublicKey,
    pub(crate) include_error_details: bool,
}

impl ApiClientSettings {
    /// Settings builder targeting the test environment.
    pub fn for_test() -> ApiClientSettingsBuilder {
        ApiClientSettingsBuilder::new(URL_TEST, Some(PROVIDER_TEST_KEY_PEM))
    }

    /// Settings builder targeting the production environment.
    pub fn for_production() -> ApiClientSettingsBuilder {
        ApiClientSettingsBuilder::new(URL_PRODUCTION, Some(PROVIDER_LIVE_KEY_PEM))
    }

    /// Settings builder targeting a custom endpoint. The Paygrid public
    /// key must be supplied explicitly since no environment default
    /// applies.
    pub fn for_custom(url: impl Into<String>) -> ApiClientSettingsBuilder {
        let mut builder = ApiClientSettingsBuilder::new("", None);
        builder.url = url.into();
        builder
    }

    /// The endpoint URL requests are sent to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The configured API username, if credentials were supplied.
    pub fn username(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.username.as_str())
    }
}

/// Fluent builder for [`ApiClientSettings`].
pub struct ApiClientSettingsBuilder {
    url: String,
    credentials: Option<Credentials>,
    client_private_key: Option<RsaPrivateKey>,
    provider_public_key_pem: Option<&'static str>,
    provider_public_key: Option<RsaPublicKey>,
    include_error_details: bool,
}

impl ApiClientSettingsBuilder {
    fn new(url: &str, provider_public_key_pem: Option<&'static str>) -> Self {
        Self {
            url: url.to_string(),
            credentials: None,
            client_private_key: None,
            provider_public_key_pem,
            provider_public_key: None,
            include_error_details: false,
        }
    }

    /// Supply the API username and password directly.
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Some(Credentials {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    /// Explicitly build without credentials. Such a client can receive
    /// and answer notifications but cannot send outgoing requests.
    pub fn without_credentials(mut self) -> Self {
        self.credentials = None;
        self
    }

    /// Read credentials from the `PAYGRID_CLIENT_USERNAME` and
    /// `PAYGRID_CLIENT_PASSWORD` environment variables.
    pub fn with_credentials_from_env(self) -> Result<Self> {
        let username = std::env::var(ENV_USERNAME)
            .map_err(|_| PaygridError::Configuration(format!("{} is not set", ENV_USERNAME)))?;
        let password = std::env::var(ENV_PASSWORD)
            .map_err(|_| PaygridError::Configuration(format!("{} is not set", ENV_PASSWORD)))?;
        Ok(self.with_credentials(username, password))
    }

    /// Read credentials from one file each for the username and password.
    /// Surrounding whitespace is trimmed.
    pub fn with_credentials_from_files(
        self,
        username_path: impl AsRef<std::path::Path>,
        password_path: impl AsRef<std::path::Path>,
    ) -> Result<Self> {
        let username = read_trimmed(username_path.as_ref())?;
        let password = read_trimmed(password_path.as_ref())?;
        Ok(self.with_credentials(username, password))
    }

    /// Supply the merchant's RSA private key as PEM text.
    pub fn with_client_private_key_from_pem(mut self, pem: &str) -> Result<Self> {
        self.client_private_key = Some(keychain::private_key_from_pem(pem)?);
        Ok(self)
    }

    /// Load the merchant's RSA private key from a PEM file.
    pub fn with_client_private_key_from_file(
        mut self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self> {
        self.client_private_key = Some(keychain::private_key_from_file(path)?);
        Ok(self)
    }

    /// Override the Paygrid public key with PEM text. Mainly useful for
    /// local testing against a fake server.
    pub fn with_provider_key_from_pem(mut self, pem: &str) -> Result<Self> {
        self.provider_public_key = Some(keychain::public_key_from_pem(pem)?);
        Ok(self)
    }

    /// Override the Paygrid public key with a PEM file.
    pub fn with_provider_key_from_file(
        mut self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self> {
        self.provider_public_key = Some(keychain::public_key_from_file(path)?);
        Ok(self)
    }

    /// Whether listener error messages are included in FAILED
    /// notification responses. Defaults to `false`, which sends a
    /// generic message instead.
    pub fn include_error_details(mut self, include: bool) -> Self {
        self.include_error_details = include;
        self
    }

    /// Validate and assemble the settings.
    pub fn build(self) -> Result<ApiClientSettings> {
        let client_private_key = self.client_private_key.ok_or_else(|| {
            PaygridError::Configuration("a client private key is required".to_string())
        })?;

        let provider_public_key = match (self.provider_public_key, self.provider_public_key_pem) {
            (Some(key), _) => key,
            (None, Some(pem)) => keychain::public_key_from_pem(pem)?,
            (None, None) => {
                return Err(PaygridError::Configuration(
                    "a provider public key is required for custom endpoints".to_string(),
                ))
            }
        };

        Ok(ApiClientSettings {
            url: self.url,
            credentials: self.credentials,
            client_private_key,
            provider_public_key,
            include_error_details: self.include_error_details,
        })
    }
}

fn read_trimmed(path: &std::path::Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map(|s| s.trim().to_string())
        .map_err(|err| {
            PaygridError::Configuration(format!("cannot read {}: {}", path.display(), err))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLIENT_PRIVATE_PEM: &str = include_str!("../tests/keys/client_private.pem");

    #[test]
    fn test_environment_urls() {
        let settings = ApiClientSettings::for_test()
            .with_credentials("user", "pass")
            .with_client_private_key_from_pem(CLIENT_PRIVATE_PEM)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(settings.url(), URL_TEST);
        assert_eq!(settings.username(), Some("user"));

        let settings = ApiClientSettings::for_production()
            .with_credentials("user", "pass")
            .with_client_private_key_from_pem(CLIENT_PRIVATE_PEM)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(settings.url(), URL_PRODUCTION);
    }

    #[test]
    fn test_build_requires_private_key() {
        let err = ApiClientSettings::for_test()
            .with_credentials("user", "pass")
            .build()
            .unwrap_err();
        assert!(matches!(err, PaygridError::Configuration(_)));
    }

    #[test]
    fn test_custom_endpoint_requires_provider_key() {
        let err = ApiClientSettings::for_custom("https://localhost:8888/api/1")
            .with_client_private_key_from_pem(CLIENT_PRIVATE_PEM)
            .unwrap()
            .build()
            .unwrap_err();
        assert!(matches!(err, PaygridError::Configuration(_)));
    }

    #[test]
    fn test_credentials_debug_is_redacted() {
        let credentials = Credentials {
            username: "user".to_string(),
            password: "secret".to_string(),
        };
        let formatted = format!("{:?}", credentials);
        assert!(!formatted.contains("secret"));
    }
}
