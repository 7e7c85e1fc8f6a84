use crate::constants::{DEVICE_ID, URL_ACCESS_TOKEN_B2B};
use crate::{sign, Credential};
use bytes::Bytes;
use http::header;
use log::{debug, warn};
use serde_json::Value;
use snapsign_core::time::{format_timestamp, now};
use snapsign_core::{Context, Error, Result};
use std::sync::Arc;
use tokio::sync::Mutex;

/// AccessTokenProvider acquires and caches the short-lived B2B access token.
///
/// The upstream token is good for roughly 900 seconds; within one process
/// the first fetch is reused for every subsequent call. No expiry is
/// tracked: the design trusts the call cadence to stay inside that window,
/// matching the upstream SDK behavior. A process restart is the only cache
/// invalidation.
///
/// The cache lock is held across the fetch, so concurrent callers hitting an
/// empty cache trigger exactly one token request.
#[derive(Debug, Clone)]
pub struct AccessTokenProvider {
    base_url: String,
    cache: Arc<Mutex<Option<String>>>,
}

impl AccessTokenProvider {
    /// Create a provider fetching from `{base_url}/access-token/b2b`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            cache: Arc::new(Mutex::new(None)),
        }
    }

    /// Return the cached access token, fetching it on first use.
    ///
    /// A token response without an `accessToken` field yields an empty
    /// string rather than an error; the next service call will then be
    /// rejected upstream as unauthenticated. The empty value is not treated
    /// as cached, so the call after that retries the fetch.
    pub async fn access_token(&self, ctx: &Context, cred: &Credential) -> Result<String> {
        let mut cache = self.cache.lock().await;
        if let Some(token) = cache.as_deref() {
            if !token.is_empty() {
                debug!("reusing cached access token");
                return Ok(token.to_string());
            }
        }

        let token = self.fetch(ctx, cred).await?;
        *cache = Some(token.clone());
        Ok(token)
    }

    async fn fetch(&self, ctx: &Context, cred: &Credential) -> Result<String> {
        let timestamp = format_timestamp(now());
        let signature = sign::sign_token(&cred.client_id, &cred.private_key, &timestamp)?;

        debug!("requesting access token for client {}", cred.client_id);

        let req = http::Request::builder()
            .method(http::Method::POST)
            .uri(format!("{}{}", self.base_url, URL_ACCESS_TOKEN_B2B))
            .header(header::CONTENT_TYPE, "application/json")
            .header("X-CLIENT-KEY", &cred.client_id)
            .header("X-TIMESTAMP", &timestamp)
            .header("X-SIGNATURE", &signature)
            .header("X-DEVICE-ID", DEVICE_ID)
            .body(Bytes::from_static(br#"{"grantType":"client_credentials"}"#))?;

        let resp = ctx.http_send(req).await?;
        if !resp.status().is_success() {
            return Err(Error::transport_failed(format!(
                "access token request failed: {}: {}",
                resp.status(),
                String::from_utf8_lossy(resp.body())
            )));
        }

        let value: Value = serde_json::from_slice(resp.body())
            .map_err(|e| Error::unexpected("failed to parse token response").with_source(e))?;
        let token = value
            .get("accessToken")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        if token.is_empty() {
            warn!(
                "token response carries no accessToken field; \
                 subsequent requests will be sent with an empty bearer token"
            );
        }

        Ok(token)
    }
}
