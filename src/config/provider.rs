//! Read-only access to the loaded settings.

use std::env;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::{CONFIG_DIR, ConfigError, DeploymentSettings, DeploymentTarget};

/// Holds the validated settings for one deployment target.
///
/// Clones share the same record, so every consumer reads the exact same value
/// for as long as the process runs.
#[derive(Debug, Clone)]
pub struct SettingsProvider {
    target: DeploymentTarget,
    settings: Arc<DeploymentSettings>,
}

impl SettingsProvider {
    /// Validate an already built record.
    pub fn new(target: DeploymentTarget, settings: DeploymentSettings) -> Result<Self, ConfigError> {
        Self::with_overrides(target, settings, |_| None)
    }

    /// Load settings from a YAML file at the given path.
    ///
    /// First loads environment variables from `.env` file (if exists), then
    /// reads the file and applies `COFFEE_SHOP_*` / `AUTH0_*` overrides.
    pub fn load(target: DeploymentTarget, path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load_with(target, path.as_ref(), |name| env::var(name).ok())
    }

    /// Load `configs/<target>.yaml`.
    ///
    /// The development target falls back to the built-in defaults when its
    /// file does not exist.
    pub fn for_target(target: DeploymentTarget) -> Result<Self, ConfigError> {
        Self::for_target_in(CONFIG_DIR, target)
    }

    /// Like [`for_target`](Self::for_target), reading `<dir>/<target>.yaml`.
    pub fn for_target_in(dir: impl AsRef<Path>, target: DeploymentTarget) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_dir(dir.as_ref(), target, |name| env::var(name).ok())
    }

    pub(crate) fn load_with<F>(
        target: DeploymentTarget,
        path: &Path,
        lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let settings = DeploymentSettings::from_file(path)?;
        debug!(deployment = %target, path = %path.display(), "settings file read");

        Self::with_overrides(target, settings, lookup)
    }

    pub(crate) fn from_dir<F>(dir: &Path, target: DeploymentTarget, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = dir.join(target.file_name());
        if target == DeploymentTarget::Development && !path.exists() {
            debug!(path = %path.display(), "no settings file, using development defaults");
            return Self::with_overrides(target, DeploymentSettings::development_defaults(), lookup);
        }

        Self::load_with(target, &path, lookup)
    }

    /// Apply overrides from `lookup`, validate, and freeze the record.
    pub fn with_overrides<F>(
        target: DeploymentTarget,
        mut settings: DeploymentSettings,
        lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut violations = settings.apply_overrides(lookup);
        violations.extend(settings.violations());
        violations.into_result()?;

        if target.is_production() != settings.production {
            warn!(
                deployment = %target,
                production = settings.production,
                "production flag does not match deployment target"
            );
        }

        info!(
            deployment = %target,
            api_server_url = %settings.api_server_url,
            auth_domain = %settings.auth0.domain(),
            production = settings.production,
            "settings loaded"
        );

        Ok(Self {
            target,
            settings: Arc::new(settings),
        })
    }

    pub fn target(&self) -> DeploymentTarget {
        self.target
    }

    pub fn settings(&self) -> &DeploymentSettings {
        &self.settings
    }

    /// Shared handle for consumers that outlive the provider.
    pub fn shared(&self) -> Arc<DeploymentSettings> {
        Arc::clone(&self.settings)
    }
}
