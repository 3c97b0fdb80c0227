//! Identity provider settings.

use serde::Deserialize;

/// Suffix appended to the tenant prefix to form the provider host.
pub const AUTH0_HOST_SUFFIX: &str = ".auth0.com";

/// Settings the login flow needs from the identity provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AuthConfig {
    /// Tenant prefix, e.g. "udacity-fsnd-iam.us".
    #[serde(default, rename = "url", alias = "domain_prefix")]
    pub domain_prefix: String,
    /// API identifier access tokens must be issued for.
    #[serde(default)]
    pub audience: String,
    /// Public client id of the registered application.
    #[serde(default, alias = "clientId")]
    pub client_id: String,
    /// Where the provider sends the browser back after login.
    #[serde(default, alias = "callbackURL")]
    pub callback_url: String,
}

impl AuthConfig {
    /// Full provider host, e.g. "udacity-fsnd-iam.us.auth0.com".
    pub fn domain(&self) -> String {
        format!("{}{}", self.domain_prefix, AUTH0_HOST_SUFFIX)
    }
}
