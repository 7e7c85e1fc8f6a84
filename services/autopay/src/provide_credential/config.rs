use crate::{Config, Credential};
use async_trait::async_trait;
use snapsign_core::{Context, ProvideCredential, Result};

/// ConfigCredentialProvider resolves credentials from a [`Config`], filling
/// missing fields from the environment.
///
/// Yields a credential only when every field resolved; a partially
/// configured merchant returns `None` so a chain can fall through.
#[derive(Debug, Clone, Default)]
pub struct ConfigCredentialProvider {
    config: Config,
}

impl ConfigCredentialProvider {
    /// Create a new ConfigCredentialProvider.
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let config = self.config.clone().from_env(ctx);

        let (Some(merchant_id), Some(client_id), Some(client_secret), Some(private_key)) = (
            config.merchant_id,
            config.client_id,
            config.client_secret,
            config.private_key,
        ) else {
            return Ok(None);
        };

        Ok(Some(Credential {
            merchant_id,
            client_id,
            client_secret,
            private_key,
        }))
    }
}
