use crate::{Context, Result};
use std::fmt::Debug;
use std::sync::Arc;

/// SigningCredential is implemented by credential types that a signer can
/// validate before use.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is still usable for signing.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// ProvideCredential is the trait used to load a credential from the
/// environment.
///
/// Services may require different credential material: the Autopay flow
/// needs a merchant id, a client id/secret pair and an RSA private key,
/// while the partner OAuth flow only needs a client id/secret pair.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + 'static {
    /// Credential returned by this provider.
    type Credential: SigningCredential;

    /// Load the credential from the current environment.
    ///
    /// Returns `Ok(None)` when this source has nothing to offer; callers
    /// may then fall through to the next provider in a chain.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// ProvideCredentialChain tries a sequence of providers in order and
/// returns the first credential found.
pub struct ProvideCredentialChain<K: SigningCredential> {
    providers: Vec<Arc<dyn ProvideCredential<Credential = K>>>,
}

impl<K: SigningCredential> Debug for ProvideCredentialChain<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProvideCredentialChain")
            .field("providers", &self.providers.len())
            .finish()
    }
}

impl<K: SigningCredential> Default for ProvideCredentialChain<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: SigningCredential> ProvideCredentialChain<K> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Append a provider to the end of the chain.
    pub fn push(mut self, provider: impl ProvideCredential<Credential = K> + 'static) -> Self {
        self.providers.push(Arc::new(provider));
        self
    }

    /// Insert a provider at the front of the chain.
    pub fn push_front(
        mut self,
        provider: impl ProvideCredential<Credential = K> + 'static,
    ) -> Self {
        self.providers.insert(0, Arc::new(provider));
        self
    }
}

#[async_trait::async_trait]
impl<K: SigningCredential> ProvideCredential for ProvideCredentialChain<K> {
    type Credential = K;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        for provider in &self.providers {
            if let Some(cred) = provider.provide_credential(ctx).await? {
                return Ok(Some(cred));
            }
        }

        Ok(None)
    }
}
