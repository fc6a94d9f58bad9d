//! TOML configuration lookup for the CLI.

use std::{
    fs,
    io::{self, ErrorKind},
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use linkmap::{LinkMapError, config::AppConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Failed to read {}: {}", .0.display(), .1)]
    Read(PathBuf, #[source] io::Error),
}

impl From<ConfigError> for LinkMapError {
    fn from(err: ConfigError) -> Self {
        LinkMapError::Config(err.to_string())
    }
}

/// Relative location checked when no explicit path is given.
const LOCAL_CONFIG: &str = "linkmap/config.toml";

/// Where the configuration for a run comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ConfigSource {
    /// `--config`; must exist.
    Explicit(PathBuf),
    Local(PathBuf),
    System(PathBuf),
    Defaults,
}

impl ConfigSource {
    /// Picks the first available source: an explicit path, then
    /// [`LOCAL_CONFIG`], then `config.toml` in the platform config directory.
    fn locate(explicit_path: Option<&Path>) -> Self {
        if let Some(path) = explicit_path {
            return Self::Explicit(path.to_path_buf());
        }

        let local = Path::new(LOCAL_CONFIG);
        if local.is_file() {
            return Self::Local(local.to_path_buf());
        }

        let Some(dirs) = ProjectDirs::from("com", "linkmap", "linkmap") else {
            debug!("No platform config directory");
            return Self::Defaults;
        };

        let system = dirs.config_dir().join("config.toml");
        if system.is_file() {
            Self::System(system)
        } else {
            debug!(path:? = system; "No system configuration file");
            Self::Defaults
        }
    }

    fn read(&self) -> Result<AppConfig, ConfigError> {
        let path = match self {
            Self::Explicit(path) | Self::Local(path) | Self::System(path) => path,
            Self::Defaults => return Ok(AppConfig::default()),
        };

        let content = fs::read_to_string(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => ConfigError::MissingFile(path.clone()),
            _ => ConfigError::Read(path.clone(), err),
        })?;

        toml::from_str(&content).map_err(|err| ConfigError::Parse(err.to_string()))
    }
}

/// Loads and validates the configuration for a run.
///
/// An explicit path wins; otherwise `linkmap/config.toml` in the working
/// directory, then `config.toml` in the platform config directory, and
/// finally the built-in defaults.
///
/// # Errors
///
/// [`LinkMapError::Config`] when the explicit file is missing, a file cannot
/// be read or parsed, or a value is out of range.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, LinkMapError> {
    let source = ConfigSource::locate(explicit_path.as_ref().map(|path| path.as_ref()));
    info!(source:?; "Loading configuration");

    let config = source.read()?;
    config.validate()?;
    Ok(config)
}
