//! Fixed names of the MPRIS2 protocol surface.

/// Object path every MPRIS2 player exports its interfaces on.
pub const OBJECT_PATH: &str = "/org/mpris/MediaPlayer2";

/// Base interface: identity, raise and quit.
pub const BASE_INTERFACE: &str = "org.mpris.MediaPlayer2";

/// Playback control interface.
pub const PLAYER_INTERFACE: &str = "org.mpris.MediaPlayer2.Player";

/// Track list interface. Declared for completeness, not bound.
pub const TRACK_LIST_INTERFACE: &str = "org.mpris.MediaPlayer2.TrackList";

/// Playlists interface. Declared for completeness, not bound.
pub const PLAYLISTS_INTERFACE: &str = "org.mpris.MediaPlayer2.Playlists";

/// Prefix shared by the bus names of all MPRIS2 players.
pub const BUS_NAME_PREFIX: &str = "org.mpris.MediaPlayer2.";

/// Bus daemon interface answering `ListNames`.
pub const DBUS_INTERFACE: &str = "org.freedesktop.DBus";

/// Member name of the bus daemon's name listing method.
pub const LIST_NAMES_METHOD: &str = "ListNames";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_is_base_interface_with_separator() {
        assert_eq!(BUS_NAME_PREFIX, format!("{BASE_INTERFACE}."));
    }

    #[test]
    fn sub_interfaces_live_under_base() {
        for interface in [PLAYER_INTERFACE, TRACK_LIST_INTERFACE, PLAYLISTS_INTERFACE] {
            assert!(interface.starts_with(BUS_NAME_PREFIX));
        }
    }
}
