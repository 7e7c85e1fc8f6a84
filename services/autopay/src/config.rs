use crate::constants::*;
use snapsign_core::Context;

/// Environment tag selecting the Autopay base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Shared development environment.
    #[default]
    Alpha,
    /// User acceptance testing.
    Beta,
    /// Production.
    Prod,
}

impl Environment {
    /// Base URL for this environment.
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Alpha => "https://api-alpha-autopay.bni-ecollection.com",
            Environment::Beta => "https://api-uat-autopay.bni-ecollection.com",
            Environment::Prod => "https://api-snap-autopay.bni-ecollection.com",
        }
    }
}

/// Config carries the merchant credential material for the Autopay client.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// `merchant_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AUTOPAY_MERCHANT_ID`]
    pub merchant_id: Option<String>,
    /// `client_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AUTOPAY_CLIENT_ID`]
    pub client_id: Option<String>,
    /// `client_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AUTOPAY_CLIENT_SECRET`]
    pub client_secret: Option<String>,
    /// `private_key` (PEM-encoded RSA private key) will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AUTOPAY_PRIVATE_KEY`]
    pub private_key: Option<String>,
}

impl Config {
    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(AUTOPAY_MERCHANT_ID) {
            self.merchant_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(AUTOPAY_CLIENT_ID) {
            self.client_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(AUTOPAY_CLIENT_SECRET) {
            self.client_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(AUTOPAY_PRIVATE_KEY) {
            self.private_key.get_or_insert(v);
        }

        self
    }
}
