//! Built-in development settings.

use super::{AuthConfig, DeploymentSettings};

pub const DEV_API_SERVER_URL: &str = "http://127.0.0.1:5000";
pub const DEV_AUTH_DOMAIN_PREFIX: &str = "udacity-fsnd-iam.us";
pub const DEV_AUTH_AUDIENCE: &str = "coffeeShop";
pub const DEV_AUTH_CLIENT_ID: &str = "zBuUfx2gVIVENKViGb1OIAmcHQp9TGGp";
pub const DEV_AUTH_CALLBACK_URL: &str = "http://127.0.0.1:8100";

impl DeploymentSettings {
    /// Local backend on port 5000, client served on port 8100.
    pub fn development_defaults() -> Self {
        Self {
            production: false,
            api_server_url: DEV_API_SERVER_URL.to_string(),
            auth0: AuthConfig {
                domain_prefix: DEV_AUTH_DOMAIN_PREFIX.to_string(),
                audience: DEV_AUTH_AUDIENCE.to_string(),
                client_id: DEV_AUTH_CLIENT_ID.to_string(),
                callback_url: DEV_AUTH_CALLBACK_URL.to_string(),
            },
        }
    }
}
