use crate::Credential;
use async_trait::async_trait;
use snapsign_core::{Context, ProvideCredential, Result};

/// StaticCredentialProvider provides fixed Autopay merchant credentials.
///
/// This provider is used when the merchant id, client id/secret and private
/// key are available directly and no dynamic loading is wanted.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    merchant_id: String,
    client_id: String,
    client_secret: String,
    private_key: String,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider from explicit credential material.
    pub fn new(merchant_id: &str, client_id: &str, client_secret: &str, private_key: &str) -> Self {
        Self {
            merchant_id: merchant_id.to_string(),
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            private_key: private_key.to_string(),
        }
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(Credential {
            merchant_id: self.merchant_id.clone(),
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            private_key: self.private_key.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_credential_provider() -> Result<()> {
        let ctx = Context::new();

        let provider = StaticCredentialProvider::new("M1", "C1", "S1", "PEM");
        let cred = provider.provide_credential(&ctx).await?.unwrap();
        assert_eq!(cred.merchant_id, "M1");
        assert_eq!(cred.client_id, "C1");
        assert_eq!(cred.client_secret, "S1");
        assert_eq!(cred.private_key, "PEM");

        Ok(())
    }
}
