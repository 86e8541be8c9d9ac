//! RSA key material loading.
//!
//! Keys arrive as PEM text from files, embedded resources, or any other
//! source the host application prefers. Both PKCS#8 (`BEGIN PRIVATE KEY`
//! / `BEGIN PUBLIC KEY`) and the older PKCS#1 (`BEGIN RSA PRIVATE KEY` /
//! `BEGIN RSA PUBLIC KEY`) encodings are accepted, since merchant keys
//! in the wild come in both.

use std::path::Path;

use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::{RsaPrivateKey, RsaPublicKey};

/// Error type for key loading.
#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    #[error("failed to parse private key PEM: {0}")]
    PrivateKey(String),
    #[error("failed to parse public key PEM: {0}")]
    PublicKey(String),
    #[error("failed to read key file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<KeyError> for crate::PaygridError {
    fn from(err: KeyError) -> Self {
        crate::PaygridError::Configuration(err.to_string())
    }
}

/// Parse an RSA private key from PEM text.
pub fn private_key_from_pem(pem: &str) -> Result<RsaPrivateKey, KeyError> {
    RsaPrivateKey::from_pkcs8_pem(pem)
        .or_else(|_| RsaPrivateKey::from_pkcs1_pem(pem))
        .map_err(|err| KeyError::PrivateKey(err.to_string()))
}

/// Parse an RSA public key from PEM text.
pub fn public_key_from_pem(pem: &str) -> Result<RsaPublicKey, KeyError> {
    RsaPublicKey::from_public_key_pem(pem)
        .or_else(|_| RsaPublicKey::from_pkcs1_pem(pem))
        .map_err(|err| KeyError::PublicKey(err.to_string()))
}

/// Load an RSA private key from a PEM file.
pub fn private_key_from_file(path: impl AsRef<Path>) -> Result<RsaPrivateKey, KeyError> {
    private_key_from_pem(&read_key_file(path.as_ref())?)
}

/// Load an RSA public key from a PEM file.
pub fn public_key_from_file(path: impl AsRef<Path>) -> Result<RsaPublicKey, KeyError> {
    public_key_from_pem(&read_key_file(path.as_ref())?)
}

fn read_key_file(path: &Path) -> Result<String, KeyError> {
    std::fs::read_to_string(path).map_err(|source| KeyError::Io {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_PRIVATE_PEM: &str = include_str!("../tests/keys/client_private.pem");
    const TEST_PUBLIC_PEM: &str = include_str!("../tests/keys/client_public.pem");

    #[test]
    fn test_parses_pem_keys() {
        let private = private_key_from_pem(TEST_PRIVATE_PEM).unwrap();
        let public = public_key_from_pem(TEST_PUBLIC_PEM).unwrap();
        assert_eq!(private.to_public_key(), public);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(private_key_from_pem("not a key").is_err());
        assert!(public_key_from_pem("not a key").is_err());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = private_key_from_file("/nonexistent/key.pem").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/key.pem"));
    }
}
