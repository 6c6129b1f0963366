use tracing::debug;

use crate::{
    bus::MessageBus,
    cli::{ArgType, CliError, CommandArg},
    config::MediaConfig,
    discovery::list_players,
    types::PlayerId,
};

/// Argument spec shared by every command acting on one player.
pub fn player_arg() -> CommandArg {
    CommandArg {
        name: "player-id".to_string(),
        description: "Player identifier - a number from 'media list' (1, 2, ...) or a partial name (e.g. 'spotify', 'fire'). Uses the default player if not specified.".to_string(),
        required: false,
        value_type: ArgType::String,
    }
}

/// Players on the bus, minus the ones the configuration hides.
///
/// # Errors
/// Returns CliError if the bus cannot be queried
pub async fn visible_players<B: MessageBus + ?Sized>(
    bus: &B,
    media: &MediaConfig,
) -> Result<Vec<PlayerId>, CliError> {
    let players = list_players(bus).await?;

    Ok(players
        .into_iter()
        .filter(|id| !media.is_ignored(id.as_str()))
        .collect())
}

/// Picks the player a command should act on.
///
/// An explicit identifier wins, then the configured default player, then the
/// first player the bus reports.
///
/// # Errors
/// Returns CliError if no player is running or no player matches
pub async fn resolve_player<B: MessageBus + ?Sized>(
    bus: &B,
    identifier: Option<&str>,
    media: &MediaConfig,
) -> Result<PlayerId, CliError> {
    let players = visible_players(bus, media).await?;

    if players.is_empty() {
        return Err(CliError::InvalidArgument {
            arg: "player-id".to_string(),
            reason: "No media players found".to_string(),
        });
    }

    let selected = match identifier.or(media.default_player.as_deref()) {
        Some(identifier) => find_player(&players, identifier)?,
        None => players[0].clone(),
    };

    debug!(player = %selected, "Resolved player");
    Ok(selected)
}

/// Finds a player by identifier (index or partial name match)
///
/// Supports:
/// - Numeric indices (1-based): "1", "2", etc.
/// - Exact identifiers: "vlc"
/// - Case-insensitive partial matching: "fire" (matches firefox.instance_1_42)
///
/// # Errors
///
/// Returns CliError if no matching player is found or multiple matches exist
pub fn find_player(players: &[PlayerId], identifier: &str) -> Result<PlayerId, CliError> {
    if let Ok(index) = identifier.parse::<usize>() {
        if index > 0 && index <= players.len() {
            return Ok(players[index - 1].clone());
        }

        return Err(CliError::InvalidArgument {
            arg: "player-id".to_string(),
            reason: format!("Invalid player index. Valid range: 1-{}", players.len()),
        });
    }

    if let Some(exact) = players.iter().find(|id| id.as_str() == identifier) {
        return Ok(exact.clone());
    }

    let identifier_lower = identifier.to_lowercase();
    let matches: Vec<&PlayerId> = players
        .iter()
        .filter(|id| id.as_str().to_lowercase().contains(&identifier_lower))
        .collect();

    match matches.as_slice() {
        [] => Err(CliError::InvalidArgument {
            arg: "player-id".to_string(),
            reason: format!("No player found matching '{identifier}'"),
        }),
        [single] => Ok((*single).clone()),
        _ => {
            let names: Vec<&str> = matches.iter().map(|id| id.as_str()).collect();
            Err(CliError::InvalidArgument {
                arg: "player-id".to_string(),
                reason: format!(
                    "Multiple players match '{}': {}. Please be more specific.",
                    identifier,
                    names.join(", ")
                ),
            })
        }
    }
}

/// Parses a relative seek offset in seconds into microseconds.
///
/// Accepts signed decimals: `10`, `+10`, `-2.5`.
///
/// # Errors
/// Returns CliError if the value is not a finite number or does not fit
/// in a 64-bit microsecond count
pub fn parse_offset(value: &str) -> Result<i64, CliError> {
    let invalid = || CliError::InvalidArgument {
        arg: "offset".to_string(),
        reason: format!("'{value}' is not a number of seconds"),
    };

    let seconds: f64 = value.parse().map_err(|_| invalid())?;

    seconds_to_micros(seconds).ok_or_else(|| CliError::InvalidArgument {
        arg: "offset".to_string(),
        reason: format!("'{value}' is out of range"),
    })
}

/// Parses an absolute position (`90`, `1:30`, `1:02:05`) into microseconds.
///
/// Hours and minutes are whole numbers; only the last component may carry a
/// fraction. Every component after the first must be below 60.
///
/// # Errors
/// Returns CliError if the value is malformed, negative or out of range
pub fn parse_position(value: &str) -> Result<i64, CliError> {
    let invalid = || CliError::InvalidArgument {
        arg: "position".to_string(),
        reason: format!("'{value}' is not a position (use seconds, m:ss or h:mm:ss)"),
    };

    let parts: Vec<&str> = value.split(':').collect();
    let Some((last, leading)) = parts.split_last() else {
        return Err(invalid());
    };
    if leading.len() > 2 {
        return Err(invalid());
    }

    let mut seconds = 0.0;
    for (index, part) in leading.iter().enumerate() {
        let component: u32 = part.parse().map_err(|_| invalid())?;
        if index > 0 && component >= 60 {
            return Err(invalid());
        }
        seconds = seconds * 60.0 + f64::from(component);
    }

    let last: f64 = last.parse().map_err(|_| invalid())?;
    if !last.is_finite() || last < 0.0 || (!leading.is_empty() && last >= 60.0) {
        return Err(invalid());
    }
    seconds = seconds * 60.0 + last;

    seconds_to_micros(seconds).ok_or_else(|| CliError::InvalidArgument {
        arg: "position".to_string(),
        reason: format!("'{value}' is out of range"),
    })
}

/// Parses an on/off style switch.
///
/// # Errors
/// Returns CliError for anything other than on/off/true/false/yes/no/1/0
pub fn parse_switch(arg: &str, value: &str) -> Result<bool, CliError> {
    match value.to_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(CliError::InvalidArgument {
            arg: arg.to_string(),
            reason: format!("'{value}' is not on or off"),
        }),
    }
}

/// `None` when the result would not fit in an `i64`.
#[allow(clippy::cast_possible_truncation)]
fn seconds_to_micros(seconds: f64) -> Option<i64> {
    let micros = (seconds * 1_000_000.0).round();

    // i64::MIN is exactly -2^63; i64::MAX rounds up to 2^63 as f64.
    if micros.is_finite() && micros >= i64::MIN as f64 && micros < i64::MAX as f64 {
        Some(micros as i64)
    } else {
        None
    }
}
