//! Configuration file discovery and loading.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-user data directory under the home directory.
pub const USER_DIR_NAME: &str = ".pathtools";

/// Name of the configuration file inside a data directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// A configuration file together with its parsed contents.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration files.
///
/// # Examples
///
/// ```no_run
/// use pathtools::config::ConfigLoader;
///
/// if let Some(source) = ConfigLoader::load_user_config(None).unwrap() {
///     println!("user config at {}", source.path.display());
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Location of the user configuration file, `~/.pathtools/config.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn user_config_path() -> Result<PathBuf> {
        let home = home::home_dir().ok_or_else(|| Error::Validation {
            field: "home".into(),
            message: "Cannot determine home directory".into(),
        })?;
        Ok(home.join(USER_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load the user configuration file if it exists.
    ///
    /// If `user_dir` is provided, loads `{user_dir}/config.yaml` instead of
    /// the file under the home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_user_config(user_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let path = match user_dir {
            Some(dir) => dir.join(CONFIG_FILE_NAME),
            None => Self::user_config_path()?,
        };

        if !crate::probe::file_exists(&path) {
            log::debug!("no user config at {}", path.display());
            return Ok(None);
        }

        let config = Self::load_file(&path)?;
        Ok(Some(ConfigSource { path, config }))
    }

    /// Load and parse a single configuration file.
    ///
    /// An empty file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid YAML.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::from_io(path, e))?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        let config = serde_yaml::from_str(&contents)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}
