use base64::prelude::*;
use snapsign_core::utils::Redact;
use snapsign_core::SigningCredential;
use std::fmt::{Debug, Formatter};

/// OAuth2 client credential for the B2B gateway.
#[derive(Default, Clone)]
pub struct Credential {
    /// OAuth2 client identifier.
    pub client_id: String,
    /// OAuth2 client secret.
    pub client_secret: String,
}

impl Credential {
    /// Create a credential from a client id and secret pair.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// `Basic` authorization header value: `base64(client_id:client_secret)`.
    pub(crate) fn basic_auth(&self) -> String {
        let raw = format!("{}:{}", self.client_id, self.client_secret);
        format!("Basic {}", BASE64_STANDARD.encode(raw))
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("client_id", &Redact::from(&self.client_id))
            .field("client_secret", &Redact::from(&self.client_secret))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_auth_fixture() {
        let cred = Credential::new("C1", "S1");
        assert_eq!(cred.basic_auth(), "Basic QzE6UzE=");
    }

    #[test]
    fn test_validity() {
        assert!(Credential::new("C1", "S1").is_valid());
        assert!(!Credential::new("C1", "").is_valid());
        assert!(!Credential::default().is_valid());
    }

    #[test]
    fn test_debug_redacts() {
        let cred = Credential::new("client-id-123456", "super-secret-value");
        let out = format!("{cred:?}");
        assert!(!out.contains("super-secret-value"));
    }
}
