//! Deployment targets.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::ConfigError;

/// Directory holding one settings file per target.
pub const CONFIG_DIR: &str = "configs";

/// Named environment with its own settings file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DeploymentTarget {
    /// Local development against a backend on the loopback interface.
    #[default]
    Development,
    /// Production backend and identity tenant.
    Production,
}

impl DeploymentTarget {
    pub const ALL: [DeploymentTarget; 2] = [Self::Development, Self::Production];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// `<target>.yaml`.
    pub fn file_name(&self) -> String {
        format!("{}.yaml", self.name())
    }

    /// `configs/<target>.yaml`, relative to the working directory.
    pub fn default_config_path(&self) -> PathBuf {
        Path::new(CONFIG_DIR).join(self.file_name())
    }
}

impl fmt::Display for DeploymentTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DeploymentTarget {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" | "local" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(ConfigError::UnknownTarget(other.to_string())),
        }
    }
}
