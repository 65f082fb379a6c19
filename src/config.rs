use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Runtime configuration loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root directory that normalized directories are moved into.
    pub home_directory: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("config is missing required field `{0}`")]
    MissingField(&'static str),
}

/// On-disk shape; every field optional so a missing one can be reported by name.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    home_directory: Option<String>,
}

impl Config {
    /// Read and validate the YAML config at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text, path)?;
        tracing::debug!(config = %path.display(), home = %config.home_directory.display(), "loaded config");
        Ok(config)
    }

    /// Parse config text. An empty document counts as a config with no fields.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        Self::parse(text, Path::new("<inline>"))
    }

    fn parse(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        let raw: Option<RawConfig> =
            serde_yaml::from_str(text).map_err(|source| ConfigError::Parse {
                path: origin.to_path_buf(),
                source,
            })?;
        let home = raw
            .unwrap_or_default()
            .home_directory
            .filter(|h| !h.trim().is_empty())
            .ok_or(ConfigError::MissingField("home_directory"))?;
        Ok(Self {
            home_directory: PathBuf::from(home),
        })
    }
}
