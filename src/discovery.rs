use tracing::{debug, instrument, warn};

use crate::{
    bus::MessageBus,
    error::{MprisError, Result},
    interfaces::{DBUS_INTERFACE, LIST_NAMES_METHOD},
    types::PlayerId,
};

/// Lists the players currently registered on the bus.
///
/// Names outside the `org.mpris.MediaPlayer2.` namespace are skipped and the
/// prefix is stripped from the rest. Order follows the bus reply. An empty
/// result means no player is running and is not an error.
///
/// # Errors
/// Returns error if the `ListNames` call itself fails
#[instrument(skip(bus))]
pub async fn list_players<B: MessageBus + ?Sized>(bus: &B) -> Result<Vec<PlayerId>> {
    let names = bus.list_names().await.map_err(|e| {
        warn!(error = %e, "Failed to list bus names");
        MprisError::from_call(DBUS_INTERFACE, LIST_NAMES_METHOD, e)
    })?;

    let players = player_ids(&names);
    debug!(total = names.len(), players = players.len(), "Discovered MPRIS players");

    Ok(players)
}

/// Filters bus names down to MPRIS2 player identifiers, keeping their order.
pub fn player_ids<S: AsRef<str>>(names: &[S]) -> Vec<PlayerId> {
    names
        .iter()
        .filter_map(|name| PlayerId::from_bus_name(name.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_prefixed_names_in_order() {
        let names = [
            "org.freedesktop.DBus",
            "org.mpris.MediaPlayer2.spotify",
            ":1.42",
            "com.example.Other",
            "org.mpris.MediaPlayer2.vlc",
        ];

        let ids = player_ids(&names);

        assert_eq!(ids, vec![PlayerId::from("spotify"), PlayerId::from("vlc")]);
    }

    #[test]
    fn no_players_is_empty() {
        let names = ["org.freedesktop.DBus", "org.freedesktop.Notifications"];

        assert!(player_ids(&names).is_empty());
    }

    #[test]
    fn base_name_without_separator_is_not_a_player() {
        let names = ["org.mpris.MediaPlayer2", "org.mpris.MediaPlayer2Extra"];

        assert!(player_ids(&names).is_empty());
    }

    #[test]
    fn does_not_sort_or_deduplicate() {
        let names = vec![
            "org.mpris.MediaPlayer2.zeta".to_string(),
            "org.mpris.MediaPlayer2.alpha".to_string(),
        ];

        let ids: Vec<String> = player_ids(&names).iter().map(ToString::to_string).collect();

        assert_eq!(ids, vec!["zeta", "alpha"]);
    }
}
