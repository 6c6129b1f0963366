//! Configuration for the command-line front end.
//!
//! Loaded from `config.toml` in the XDG config directory. Every section and
//! field has a default, so an absent or empty file is valid.

mod bus;
mod error;
mod general;
mod loading;
mod media;
mod paths;

#[cfg(test)]
mod tests;

pub use bus::{BusConfig, BusKind};
pub use error::ConfigError;
pub use general::{GeneralConfig, LogLevel};
pub use media::MediaConfig;
pub use paths::ConfigPaths;

use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Bus connection settings.
    #[serde(default)]
    pub bus: BusConfig,

    /// Player selection settings.
    #[serde(default)]
    pub media: MediaConfig,
}

impl Config {
    /// JSON schema describing the configuration file.
    pub fn json_schema() -> serde_json::Value {
        serde_json::to_value(schema_for!(Config)).unwrap_or_default()
    }
}
