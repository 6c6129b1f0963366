use std::{fs, io::ErrorKind, path::Path};

use tracing::{debug, instrument};

use super::{Config, ConfigError, ConfigPaths};

impl Config {
    /// Loads the configuration from the default location.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    /// Returns error if the config directory cannot be located, the file
    /// cannot be read, or its contents are not valid TOML for [`Config`]
    pub fn load() -> Result<Config, ConfigError> {
        let path = ConfigPaths::main_config()?;
        Self::load_from(&path)
    }

    /// Loads the configuration from `path`.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or does not parse
    #[instrument]
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No config file, using defaults");
                return Ok(Config::default());
            }
            Err(e) => return Err(ConfigError::io(&e, path)),
        };

        toml::from_str(&content).map_err(|e| ConfigError::toml_parse(e, Some(path)))
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}
