use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Player selection for commands that act on a single player
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(default)]
pub struct MediaConfig {
    /// Player used when a command names none. Accepts an identifier or a
    /// partial name; falls back to the first player on the bus.
    pub default_player: Option<String>,

    /// Player identifiers hidden from listing and selection.
    pub ignored_players: Vec<String>,
}

impl MediaConfig {
    /// Whether `id` is listed in `ignored_players`.
    pub fn is_ignored(&self, id: &str) -> bool {
        self.ignored_players.iter().any(|ignored| ignored == id)
    }
}
