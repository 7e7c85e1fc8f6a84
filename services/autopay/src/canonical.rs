//! Canonical strings-to-sign for the two Autopay signature types.
//!
//! The upstream API verifies two different signatures. Token acquisition is
//! signed asymmetrically over `clientId|timestamp`. Every service call after
//! that is signed symmetrically over a colon-joined string that embeds a
//! SHA-256 digest of the exact request body. Both strings are built here and
//! nowhere else; a single byte of drift produces a silent authentication
//! failure upstream.

use snapsign_core::hash::hex_sha256;

/// String-to-sign for the access token request: `{clientId}|{timestamp}`.
pub fn token_string_to_sign(client_id: &str, timestamp: &str) -> String {
    format!("{client_id}|{timestamp}")
}

/// String-to-sign for a service request:
/// `{METHOD}:{versionedPath}:{token}:{bodyHash}:{timestamp}`.
///
/// `body_json` must be the exact minified JSON payload that goes on the
/// wire, serialized once by the caller and reused for dispatch. The digest
/// is lowercase hex. Key order inside the payload is whatever order the
/// body was built in; it is not normalized here.
///
/// Endpoints that take no arguments still send an empty JSON object, so
/// `body_json` is `"{}"` in that case, never `""`.
pub fn service_string_to_sign(
    method: &http::Method,
    versioned_path: &str,
    body_json: &str,
    access_token: &str,
    timestamp: &str,
) -> String {
    let body_hash = hex_sha256(body_json.as_bytes());
    format!(
        "{}:{versioned_path}:{access_token}:{body_hash}:{timestamp}",
        method.as_str()
    )
}
