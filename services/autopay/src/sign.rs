//! Signature engine for the Autopay API.
//!
//! Two signature kinds, per the SNAP scheme:
//!
//! - **Token signature**: RSA-SHA256 (PKCS#1 v1.5) over the token canonical
//!   string, base64 encoded. Sent as `X-SIGNATURE` on the access token
//!   request.
//! - **Service signature**: HMAC-SHA512 over the service canonical string,
//!   keyed by the client secret, base64 encoded. Sent as `X-SIGNATURE` on
//!   every service request.
//!
//! Both are deterministic: identical inputs always yield identical output,
//! which fixture tests and replay debugging rely on.

use crate::canonical;
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs1v15::SigningKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::signature::{SignatureEncoding, Signer};
use rsa::RsaPrivateKey;
use sha2::Sha256;
use snapsign_core::hash::{base64_encode, base64_hmac_sha512};
use snapsign_core::{Error, Result};

/// Compute the access-token request signature.
///
/// Fails with a `SigningFailed` error when `private_key_pem` is not a
/// parseable RSA private key.
pub fn sign_token(client_id: &str, private_key_pem: &str, timestamp: &str) -> Result<String> {
    let key = parse_private_key(private_key_pem)?;
    let signing_key = SigningKey::<Sha256>::new(key);

    let string_to_sign = canonical::token_string_to_sign(client_id, timestamp);
    let signature = signing_key
        .try_sign(string_to_sign.as_bytes())
        .map_err(|e| Error::signing_failed("failed to sign token request").with_source(e))?;

    Ok(base64_encode(&signature.to_bytes()))
}

/// Compute the service request signature.
///
/// `body_json` is the exact wire payload; see
/// [`canonical::service_string_to_sign`].
pub fn sign_service(
    method: &http::Method,
    versioned_path: &str,
    body_json: &str,
    access_token: &str,
    timestamp: &str,
    client_secret: &str,
) -> String {
    let string_to_sign = canonical::service_string_to_sign(
        method,
        versioned_path,
        body_json,
        access_token,
        timestamp,
    );
    base64_hmac_sha512(client_secret.as_bytes(), string_to_sign.as_bytes())
}

/// Accept both PKCS#8 (`BEGIN PRIVATE KEY`) and PKCS#1
/// (`BEGIN RSA PRIVATE KEY`) encodings; merchants get issued either.
fn parse_private_key(pem: &str) -> Result<RsaPrivateKey> {
    RsaPrivateKey::from_pkcs8_pem(pem)
        .or_else(|_| RsaPrivateKey::from_pkcs1_pem(pem))
        .map_err(|e| Error::signing_failed("failed to parse RSA private key").with_source(e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsa::pkcs1v15::VerifyingKey;
    use rsa::signature::Verifier;
    use snapsign_core::ErrorKind;

    const TEST_PRIVATE_KEY: &str = include_str!("../tests/data/test_rsa.pem");

    #[test]
    fn test_sign_token_is_deterministic_and_verifies() {
        let timestamp = "2024-01-01T00:00:00+07:00";
        let sig1 = sign_token("C1", TEST_PRIVATE_KEY, timestamp).unwrap();
        let sig2 = sign_token("C1", TEST_PRIVATE_KEY, timestamp).unwrap();
        assert_eq!(sig1, sig2);

        let key = RsaPrivateKey::from_pkcs8_pem(TEST_PRIVATE_KEY).unwrap();
        let verifying_key = VerifyingKey::<Sha256>::new(key.to_public_key());
        let raw = {
            use base64::prelude::*;
            BASE64_STANDARD.decode(&sig1).unwrap()
        };
        let signature = rsa::pkcs1v15::Signature::try_from(raw.as_slice()).unwrap();
        verifying_key
            .verify(b"C1|2024-01-01T00:00:00+07:00", &signature)
            .expect("signature must verify against the public key");
    }

    #[test]
    fn test_sign_token_rejects_malformed_key() {
        let err = sign_token("C1", "not a pem", "2024-01-01T00:00:00+07:00").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SigningFailed);
    }

    #[test]
    fn test_sign_service_fixture() {
        let got = sign_service(
            &http::Method::POST,
            "/v1.1/account-binding",
            r#"{"a":1}"#,
            "TKN",
            "2024-01-01T00:00:00+07:00",
            "S1",
        );
        assert_eq!(
            got,
            "a7y/S6gZMW70VI7gtFgYjVHhDYvvYPgY2E54ETAzb9Kne6brOk0ES80KvAxzeemvVppEL0QlYfSQQj+/SZMhhA=="
        );
    }

    #[test]
    fn test_sign_service_is_deterministic() {
        let sign = || {
            sign_service(
                &http::Method::POST,
                "/v1.1/debit",
                r#"{"merchantId":"M1"}"#,
                "TKN",
                "2024-01-01T00:00:00+07:00",
                "S1",
            )
        };
        assert_eq!(sign(), sign());
    }

    #[test]
    fn test_sign_service_differs_per_secret() {
        let sign = |secret| {
            sign_service(
                &http::Method::POST,
                "/v1.1/debit",
                r#"{"merchantId":"M1"}"#,
                "TKN",
                "2024-01-01T00:00:00+07:00",
                secret,
            )
        };
        assert_ne!(sign("S1"), sign("S2"));
    }
}
