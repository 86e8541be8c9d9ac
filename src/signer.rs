//! Envelope signing and verification.
//!
//! The signed plaintext is the method name, the call UUID and the
//! canonical form of the payload concatenated with no delimiters:
//!
//! ```text
//! plaintext = method + uuid + canonical(data)
//! ```
//!
//! Signatures are RSA PKCS#1 v1.5 over a SHA-1 digest, transported as
//! base64. Verification recomputes the plaintext from the *typed*
//! payload rather than the raw wire bytes, so both sides project the
//! payload through the same canonical rules before comparing.
//!
//! Verification answers with `bool`; a `false` never comes back as an
//! error. Errors are reserved for unusable input: a signature that is
//! not valid base64 or key material that cannot sign at all.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use rsa::pkcs1v15::{Signature, SigningKey, VerifyingKey};
use rsa::signature::{SignatureEncoding, Signer, Verifier};
use serde::Serialize;
use sha1::Sha1;

use crate::serializer::Serializer;
use crate::settings::ApiClientSettings;
use crate::types::{JsonRpcRequest, JsonRpcResponse};
use crate::{PaygridError, Result};

/// Signs outgoing envelopes with the merchant key and verifies inbound
/// envelopes against the Paygrid key.
pub struct JsonRpcSigner {
    serializer: Serializer,
    signing_key: SigningKey<Sha1>,
    verifying_key: VerifyingKey<Sha1>,
}

impl JsonRpcSigner {
    pub fn new(serializer: Serializer, settings: &ApiClientSettings) -> Self {
        Self {
            serializer,
            signing_key: SigningKey::new(settings.client_private_key.clone()),
            verifying_key: VerifyingKey::new(settings.provider_public_key.clone()),
        }
    }

    /// Build the exact byte sequence that gets signed.
    pub fn create_plaintext(&self, serialized_data: &str, method: &str, uuid: &str) -> String {
        format!("{}{}{}", method, uuid, serialized_data)
    }

    /// Sign a request envelope, storing the base64 signature into
    /// `params.signature`.
    pub fn sign_request<D: Serialize>(&self, request: &mut JsonRpcRequest<D>) -> Result<()> {
        let serialized = self.serializer.serialize_data(&request.params.data)?;
        let plaintext =
            self.create_plaintext(&serialized, &request.method, &request.params.uuid);
        request.params.signature = Some(self.sign_plaintext(&plaintext)?);
        Ok(())
    }

    /// Sign a response envelope (used when answering notifications),
    /// storing the base64 signature into `result.signature`.
    pub fn sign_response<D: Serialize>(&self, response: &mut JsonRpcResponse<D>) -> Result<()> {
        let result = response.result.as_mut().ok_or_else(|| {
            PaygridError::signature("cannot sign a response envelope without a result")
        })?;
        let serialized = self.serializer.serialize_data(&result.data)?;
        let plaintext = self.create_plaintext(&serialized, &result.method, &result.uuid);
        result.signature = self.sign_plaintext(&plaintext)?;
        Ok(())
    }

    /// Verify an inbound notification envelope against the Paygrid
    /// public key.
    pub fn verify_request<D: Serialize>(&self, request: &JsonRpcRequest<D>) -> Result<bool> {
        let signature = request.params.signature.as_deref().unwrap_or_default();
        self.verify(
            &request.method,
            &request.params.uuid,
            signature,
            &request.params.data,
        )
    }

    /// Verify a response envelope against the Paygrid public key. Both
    /// the success and the error variant carry the signed context; an
    /// envelope with neither verifies as `false`.
    pub fn verify_response<D: Serialize>(&self, response: &JsonRpcResponse<D>) -> Result<bool> {
        if let Some(result) = &response.result {
            return self.verify(&result.method, &result.uuid, &result.signature, &result.data);
        }
        if let Some(inner) = response.error.as_ref().and_then(|e| e.error.as_ref()) {
            return self.verify(&inner.method, &inner.uuid, &inner.signature, &inner.data);
        }
        Ok(false)
    }

    /// Verify a signature over `method`, `uuid` and the canonical form
    /// of `data`.
    pub fn verify<D: Serialize>(
        &self,
        method: &str,
        uuid: &str,
        signature: &str,
        data: &D,
    ) -> Result<bool> {
        let serialized = self.serializer.serialize_data(data)?;
        let plaintext = self.create_plaintext(&serialized, method, uuid);

        let signature_bytes = BASE64.decode(signature).map_err(|err| {
            PaygridError::signature(format!("signature is not valid base64: {}", err))
        })?;
        let signature = match Signature::try_from(signature_bytes.as_slice()) {
            Ok(signature) => signature,
            // Wrong length for the key; tampered or truncated, not ours.
            Err(_) => return Ok(false),
        };

        Ok(self
            .verifying_key
            .verify(plaintext.as_bytes(), &signature)
            .is_ok())
    }

    fn sign_plaintext(&self, plaintext: &str) -> Result<String> {
        let signature = self
            .signing_key
            .try_sign(plaintext.as_bytes())
            .map_err(|err| PaygridError::signature(format!("signing failed: {}", err)))?;
        Ok(BASE64.encode(signature.to_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::ApiClientSettings;
    use serde_json::json;

    const CLIENT_PRIVATE_PEM: &str = include_str!("../tests/keys/client_private.pem");
    const CLIENT_PUBLIC_PEM: &str = include_str!("../tests/keys/client_public.pem");

    /// Settings whose "provider" key is the client's own public key, so
    /// the signer verifies what it signed.
    fn loopback_signer() -> JsonRpcSigner {
        let settings = ApiClientSettings::for_test()
            .with_credentials("user", "pass")
            .with_client_private_key_from_pem(CLIENT_PRIVATE_PEM)
            .unwrap()
            .with_provider_key_from_pem(CLIENT_PUBLIC_PEM)
            .unwrap()
            .build()
            .unwrap();
        JsonRpcSigner::new(Serializer::new(), &settings)
    }

    #[test]
    fn test_plaintext_is_plain_concatenation() {
        let signer = loopback_signer();
        assert_eq!(
            signer.create_plaintext("Amount1.00", "Deposit", "abc-123"),
            "Depositabc-123Amount1.00"
        );
        assert_eq!(signer.create_plaintext("", "", ""), "");
    }

    #[test]
    fn test_sign_verify_round_trip() {
        let signer = loopback_signer();
        let mut request =
            JsonRpcRequest::new("Deposit", "abc-123", json!({ "Amount": "100.00" }));
        signer.sign_request(&mut request).unwrap();
        assert!(request.params.signature.is_some());
        assert!(signer.verify_request(&request).unwrap());
    }

    #[test]
    fn test_tampered_data_fails_verification() {
        let signer = loopback_signer();
        let mut request =
            JsonRpcRequest::new("Deposit", "abc-123", json!({ "Amount": "100.00" }));
        signer.sign_request(&mut request).unwrap();

        request.params.data = json!({ "Amount": "999.00" });
        assert!(!signer.verify_request(&request).unwrap());
    }

    #[test]
    fn test_tampered_signature_is_false_not_error() {
        let signer = loopback_signer();
        let mut request =
            JsonRpcRequest::new("Deposit", "abc-123", json!({ "Amount": "100.00" }));
        signer.sign_request(&mut request).unwrap();

        // Valid base64, wrong bytes.
        request.params.signature = Some(BASE64.encode([0u8; 256]));
        assert!(!signer.verify_request(&request).unwrap());
    }

    #[test]
    fn test_malformed_base64_signature_is_fatal() {
        let signer = loopback_signer();
        let mut request =
            JsonRpcRequest::new("Deposit", "abc-123", json!({ "Amount": "100.00" }));
        signer.sign_request(&mut request).unwrap();

        request.params.signature = Some("%%not-base64%%".to_string());
        assert!(matches!(
            signer.verify_request(&request),
            Err(PaygridError::Signature(_))
        ));
    }
}
