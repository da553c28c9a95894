//! Configuration system for pathtools.
//!
//! Settings control how path lists are split (delimiter), what is
//! substituted for a blank list (fallback), and how CLI reports are
//! printed.
//!
//! # Configuration Precedence
//!
//! Sources are merged from lowest to highest precedence:
//!
//! 1. Built-in defaults
//! 2. User config (`~/.pathtools/config.yaml`)
//! 3. Explicit config files (via `ConfigBuilder::with_file`), in order
//! 4. Environment variables (`PATHTOOLS_*`)
//! 5. Programmatic overrides (via `ConfigBuilder::with_config`)
//!
//! # Examples
//!
//! ```
//! use pathtools::config::{Config, ConfigBuilder};
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         delimiter: Some(":".to_string()),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.path_list().clean("/a:/b"), vec!["/a", "/b"]);
//! ```

pub mod environment;
pub mod loader;
pub mod schema;
pub mod validator;

pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use schema::{Config, OutputFormat};
pub use validator::ConfigValidator;

use std::path::PathBuf;

use crate::error::Result;

/// Assembles a [`Config`] from files, the environment, and overrides.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    skip_files: bool,
    skip_env: bool,
    user_dir: Option<PathBuf>,
    files: Vec<PathBuf>,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Do not read any configuration file, including explicit ones.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `PATHTOOLS_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Read the user config from `dir/config.yaml` instead of the home
    /// directory.
    #[must_use]
    pub fn with_user_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.user_dir = Some(dir.into());
        self
    }

    /// Layer an explicit configuration file above the user config.
    ///
    /// Unlike the user config, an explicit file must exist.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }

    /// Apply `config` on top of every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Load, merge, and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// variable is invalid, or the merged result fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            for source in self.load_files()? {
                ConfigValidator::validate(&source.config)?;
                config.merge_from(&source.config);
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            config.merge_from(overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    fn load_files(&self) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        let user = match self.user_dir {
            Some(ref dir) => ConfigLoader::load_user_config(Some(dir.as_path()))?,
            None if home::home_dir().is_none() => {
                log::debug!("no home directory; skipping user config");
                None
            }
            None => ConfigLoader::load_user_config(None)?,
        };
        sources.extend(user);

        for path in &self.files {
            let config = ConfigLoader::load_file(path)?;
            sources.push(ConfigSource {
                path: path.clone(),
                config,
            });
        }

        Ok(sources)
    }
}
