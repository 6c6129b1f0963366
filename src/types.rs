use std::fmt;

use crate::interfaces::BUS_NAME_PREFIX;

/// Identifier of one MPRIS2 player on the bus.
///
/// This is the part of the bus name after `org.mpris.MediaPlayer2.`, for
/// example `vlc` or `firefox.instance_1_42`. It stays valid only while the
/// owning process keeps the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(String);

impl PlayerId {
    /// Wraps an identifier (the suffix, not the full bus name).
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Extracts the identifier from a full MPRIS2 bus name.
    ///
    /// Returns `None` for names outside the MPRIS2 namespace.
    pub fn from_bus_name(bus_name: &str) -> Option<Self> {
        bus_name
            .strip_prefix(BUS_NAME_PREFIX)
            .map(|suffix| Self(suffix.to_string()))
    }

    /// Full bus name of the service, `org.mpris.MediaPlayer2.<id>`.
    pub fn bus_name(&self) -> String {
        format!("{BUS_NAME_PREFIX}{}", self.0)
    }

    /// The identifier itself.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Playback state reported by the `PlaybackStatus` property.
///
/// Strings outside the published vocabulary are kept in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlaybackStatus {
    /// A track is currently playing
    Playing,

    /// A track is loaded but paused
    Paused,

    /// Nothing is playing
    Stopped,

    /// Value not defined by MPRIS2
    Other(String),
}

impl PlaybackStatus {
    /// Wire representation of the status.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Playing => "Playing",
            Self::Paused => "Paused",
            Self::Stopped => "Stopped",
            Self::Other(raw) => raw,
        }
    }
}

impl From<&str> for PlaybackStatus {
    fn from(status: &str) -> Self {
        match status {
            "Playing" => Self::Playing,
            "Paused" => Self::Paused,
            "Stopped" => Self::Stopped,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for PlaybackStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "Playing" => Self::Playing,
            "Paused" => Self::Paused,
            "Stopped" => Self::Stopped,
            _ => Self::Other(status),
        }
    }
}

impl fmt::Display for PlaybackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Repeat behaviour reported by the `LoopStatus` property.
///
/// Strings outside the published vocabulary are kept in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LoopStatus {
    /// Playback stops at the end of the playlist
    None,

    /// The current track repeats
    Track,

    /// The playlist repeats
    Playlist,

    /// Value not defined by MPRIS2
    Other(String),
}

impl LoopStatus {
    /// Wire representation of the status.
    pub fn as_str(&self) -> &str {
        match self {
            Self::None => "None",
            Self::Track => "Track",
            Self::Playlist => "Playlist",
            Self::Other(raw) => raw,
        }
    }
}

impl From<&str> for LoopStatus {
    fn from(status: &str) -> Self {
        match status {
            "None" => Self::None,
            "Track" => Self::Track,
            "Playlist" => Self::Playlist,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for LoopStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "None" => Self::None,
            "Track" => Self::Track,
            "Playlist" => Self::Playlist,
            _ => Self::Other(status),
        }
    }
}

impl fmt::Display for LoopStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_id_bus_name_round_trip() {
        let id = PlayerId::from("vlc");

        assert_eq!(id.bus_name(), "org.mpris.MediaPlayer2.vlc");
        assert_eq!(PlayerId::from_bus_name(&id.bus_name()), Some(id));
    }

    #[test]
    fn player_id_rejects_foreign_names() {
        assert_eq!(PlayerId::from_bus_name("com.example.Other"), None);
        assert_eq!(PlayerId::from_bus_name("org.mpris.MediaPlayer2"), None);
    }

    #[test]
    fn player_id_keeps_instance_suffix() {
        let id = PlayerId::from_bus_name("org.mpris.MediaPlayer2.firefox.instance_1_42");

        assert_eq!(id.map(|id| id.to_string()).as_deref(), Some("firefox.instance_1_42"));
    }

    #[test]
    fn playback_status_known_values() {
        assert_eq!(PlaybackStatus::from("Playing"), PlaybackStatus::Playing);
        assert_eq!(PlaybackStatus::from("Paused"), PlaybackStatus::Paused);
        assert_eq!(PlaybackStatus::from("Stopped"), PlaybackStatus::Stopped);
    }

    #[test]
    fn playback_status_passes_unknown_values_through() {
        let status = PlaybackStatus::from("Buffering".to_string());

        assert_eq!(status, PlaybackStatus::Other("Buffering".to_string()));
        assert_eq!(status.as_str(), "Buffering");
    }

    #[test]
    fn playback_status_match_is_case_sensitive() {
        assert_eq!(
            PlaybackStatus::from("playing"),
            PlaybackStatus::Other("playing".to_string())
        );
    }

    #[test]
    fn loop_status_known_values() {
        assert_eq!(LoopStatus::from("None"), LoopStatus::None);
        assert_eq!(LoopStatus::from("Track"), LoopStatus::Track);
        assert_eq!(LoopStatus::from("Playlist".to_string()), LoopStatus::Playlist);
    }

    #[test]
    fn loop_status_display_matches_wire_string() {
        assert_eq!(LoopStatus::Playlist.to_string(), "Playlist");
        assert_eq!(LoopStatus::Other("Shuffle".to_string()).to_string(), "Shuffle");
    }
}
