//! Run configuration for the authorization-code exchange.

use crate::auth::error::AuthError;

/// Native-client redirect URI registered for public desktop applications.
pub const REDIRECT_URI: &str = "https://login.microsoftonline.com/common/oauth2/nativeclient";

/// Scopes requested: sign-in, a refresh token, and SMTP submission.
pub const SCOPE: &str = "openid offline_access https://outlook.office.com/SMTP.Send";

/// Tenant routing segment for personal Microsoft accounts.
pub const DEFAULT_TENANT: &str = "consumers";

/// Base URL of the Microsoft identity platform.
pub const DEFAULT_AUTHORITY: &str = "https://login.microsoftonline.com";

/// Tenant, client id and authority for a single run.
///
/// Built once from the command line and passed by reference to every step.
///
/// # Example
/// ```
/// use outlook_tokens::config::OAuthConfig;
///
/// let config = OAuthConfig::new("consumers", "my-client-id")?;
/// assert_eq!(
///     config.token_url(),
///     "https://login.microsoftonline.com/consumers/oauth2/v2.0/token"
/// );
/// # Ok::<(), outlook_tokens::auth::AuthError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthConfig {
    tenant: String,
    client_id: String,
    authority: String,
}

impl OAuthConfig {
    /// Validates and builds a config. An empty client id is a usage error.
    pub fn new(tenant: impl Into<String>, client_id: impl Into<String>) -> Result<Self, AuthError> {
        let client_id = client_id.into();
        if client_id.is_empty() {
            return Err(AuthError::Usage("Please specify a client ID.".to_string()));
        }
        Ok(Self {
            tenant: tenant.into(),
            client_id,
            authority: DEFAULT_AUTHORITY.to_string(),
        })
    }

    /// Point both endpoints at a different host (e.g. a local stub server).
    pub fn with_authority(mut self, authority: impl Into<String>) -> Self {
        self.authority = authority.into().trim_end_matches('/').to_string();
        self
    }

    pub fn tenant(&self) -> &str {
        &self.tenant
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn authority(&self) -> &str {
        &self.authority
    }

    pub fn authorize_url(&self) -> String {
        format!("{}/{}/oauth2/v2.0/authorize", self.authority, self.tenant)
    }

    pub fn token_url(&self) -> String {
        format!("{}/{}/oauth2/v2.0/token", self.authority, self.tenant)
    }
}
