//! Deployment settings loading and validation.
//!
//! Settings are read from one YAML file per deployment target, then
//! selected fields can be replaced from environment variables. The result
//! is validated as a whole and handed out read-only by [`SettingsProvider`].

mod auth;
mod defaults;
mod error;
mod provider;
mod target;

pub use auth::{AUTH0_HOST_SUFFIX, AuthConfig};
pub use defaults::{
    DEV_API_SERVER_URL, DEV_AUTH_AUDIENCE, DEV_AUTH_CALLBACK_URL, DEV_AUTH_CLIENT_ID,
    DEV_AUTH_DOMAIN_PREFIX,
};
pub use error::{ConfigError, Violations};
pub use provider::SettingsProvider;
pub use target::{CONFIG_DIR, DeploymentTarget};

use serde::Deserialize;
use std::{fs, path::Path};
use tracing::debug;
use url::Url;

pub const ENV_PRODUCTION: &str = "COFFEE_SHOP_PRODUCTION";
pub const ENV_API_SERVER_URL: &str = "COFFEE_SHOP_API_SERVER_URL";
pub const ENV_AUTH_DOMAIN_PREFIX: &str = "AUTH0_DOMAIN_PREFIX";
pub const ENV_AUTH_AUDIENCE: &str = "AUTH0_AUDIENCE";
pub const ENV_AUTH_CLIENT_ID: &str = "AUTH0_CLIENT_ID";
pub const ENV_AUTH_CALLBACK_URL: &str = "AUTH0_CALLBACK_URL";

/// Environment-specific settings for the client application.
///
/// Missing keys deserialize to empty values so that [`validate`](Self::validate)
/// can report all of them together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DeploymentSettings {
    /// Whether the app runs against a production backend.
    #[serde(default)]
    pub production: bool,
    /// Base address of the drinks API server.
    #[serde(default, alias = "apiServerUrl")]
    pub api_server_url: String,
    /// Identity provider settings.
    #[serde(default)]
    pub auth0: AuthConfig,
}

impl DeploymentSettings {
    /// Parse settings from a YAML document without validating them.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a YAML settings file without validating it.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Replace fields from variables returned by `lookup`.
    ///
    /// Unset or blank variables leave the field alone. Returns the problems
    /// found in the override values themselves.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Violations
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut violations = Violations::default();

        if let Some(value) = non_blank(&lookup, ENV_PRODUCTION) {
            match parse_flag(&value) {
                Some(flag) => {
                    debug!(var = ENV_PRODUCTION, value = flag, "settings override applied");
                    self.production = flag;
                }
                None => violations.push(format!(
                    "{}: expected true or false, got {:?}",
                    ENV_PRODUCTION, value
                )),
            }
        }

        override_field(&lookup, ENV_API_SERVER_URL, &mut self.api_server_url);
        override_field(&lookup, ENV_AUTH_DOMAIN_PREFIX, &mut self.auth0.domain_prefix);
        override_field(&lookup, ENV_AUTH_AUDIENCE, &mut self.auth0.audience);
        override_field(&lookup, ENV_AUTH_CLIENT_ID, &mut self.auth0.client_id);
        override_field(&lookup, ENV_AUTH_CALLBACK_URL, &mut self.auth0.callback_url);

        violations
    }

    /// Check that every field is present and both URL fields parse.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.violations().into_result()
    }

    pub(crate) fn violations(&self) -> Violations {
        let mut violations = Violations::default();

        check_url(&mut violations, "api_server_url", &self.api_server_url);
        check_present(&mut violations, "auth0.url", &self.auth0.domain_prefix);
        check_present(&mut violations, "auth0.audience", &self.auth0.audience);
        check_present(&mut violations, "auth0.client_id", &self.auth0.client_id);
        check_url(&mut violations, "auth0.callback_url", &self.auth0.callback_url);

        violations
    }
}

fn non_blank<F>(lookup: &F, var: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn override_field<F>(lookup: &F, var: &str, field: &mut String)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = non_blank(lookup, var) {
        debug!(var, "settings override applied");
        *field = value;
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

fn check_present(violations: &mut Violations, field: &str, value: &str) -> bool {
    if value.trim().is_empty() {
        violations.push(format!("{} is required", field));
        return false;
    }
    true
}

fn check_url(violations: &mut Violations, field: &str, value: &str) {
    if !check_present(violations, field, value) {
        return;
    }

    match Url::parse(value) {
        Ok(url) if !matches!(url.scheme(), "http" | "https") => violations.push(format!(
            "{}: unsupported scheme {:?} in {:?}",
            field,
            url.scheme(),
            value
        )),
        Ok(url) if url.host_str().is_none() => {
            violations.push(format!("{}: missing host in {:?}", field, value))
        }
        Ok(_) => {}
        Err(e) => violations.push(format!("{}: invalid url {:?}: {}", field, value, e)),
    }
}
