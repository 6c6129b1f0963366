use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which message bus to connect to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BusKind {
    /// Per-login session bus, where desktop players register.
    #[default]
    Session,

    /// System-wide bus, used by headless players such as mpd bridges.
    System,
}

/// Bus connection settings
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(default)]
pub struct BusConfig {
    /// Bus to connect to when no explicit address is given.
    pub kind: BusKind,

    /// Explicit D-Bus address, e.g. `unix:path=/run/user/1000/bus`.
    pub address: Option<String>,
}
