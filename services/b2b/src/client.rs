use crate::{Credential, Environment};
use bytes::Bytes;
use http::header;
use log::debug;
use serde_json::Value;
use snapsign_core::{Context, Error, Result, SigningCredential};

const URL_OAUTH_TOKEN: &str = "/api/oauth/token";

/// Client for the legacy B2B gateway's OAuth2 token endpoint.
///
/// ```no_run
/// use snapsign_b2b::{B2bClient, Credential, Environment};
/// use snapsign_core::Context;
///
/// # async fn doc() -> snapsign_core::Result<()> {
/// let client = B2bClient::new(
///     Context::default(),
///     Credential::new("C1", "S1"),
///     Environment::Sandbox,
/// );
/// let token = client.fetch_token().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct B2bClient {
    ctx: Context,
    credential: Credential,
    base_url: String,
}

impl B2bClient {
    /// Create a client for the given environment.
    pub fn new(ctx: Context, credential: Credential, env: Environment) -> Self {
        Self {
            ctx,
            credential,
            base_url: env.base_url().to_string(),
        }
    }

    /// Fetch a bearer token via the `client_credentials` grant.
    ///
    /// Unlike the Autopay token flow, this gateway takes HTTP Basic
    /// authentication over a form-encoded grant; no request signature is
    /// involved. Tokens are not cached here since each B2B product manages
    /// its own session lifetime.
    pub async fn fetch_token(&self) -> Result<String> {
        if !self.credential.is_valid() {
            return Err(Error::credential_invalid(
                "client id and client secret are both required",
            ));
        }

        let body: String = form_urlencoded::Serializer::new(String::new())
            .append_pair("grant_type", "client_credentials")
            .finish();

        debug!("requesting B2B token from {}", self.base_url);

        let req = http::Request::builder()
            .method(http::Method::POST)
            .uri(format!("{}{URL_OAUTH_TOKEN}", self.base_url))
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(header::AUTHORIZATION, self.credential.basic_auth())
            .body(Bytes::from(body))?;

        let resp = self.ctx.http_send(req).await?;
        if !resp.status().is_success() {
            return Err(Error::transport_failed(format!(
                "oauth token request failed: {}: {}",
                resp.status(),
                String::from_utf8_lossy(resp.body())
            )));
        }

        let value: Value = serde_json::from_slice(resp.body())
            .map_err(|e| Error::unexpected("failed to parse token response").with_source(e))?;
        value
            .get("access_token")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| Error::unexpected("token response carries no access_token field"))
    }
}
