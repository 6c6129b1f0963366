//! Unit tests for CLI module
//!
//! Tests command registry, formatting, player selection and argument
//! parsing. Nothing here talks to a real bus.

#![allow(clippy::unwrap_used)]

use async_trait::async_trait;
use zbus::zvariant::{ObjectPath, OwnedValue, Value};

use crate::{
    bus::{MessageBus, MethodCall, PropertyKey},
    cli::{
        CliError, CliService,
        commands::media::utils::{
            find_player, parse_offset, parse_position, parse_switch, resolve_player,
        },
        formatting::{format_micros, format_value},
    },
    config::{Config, MediaConfig},
    types::PlayerId,
};

struct NamesOnly(Vec<&'static str>);

#[async_trait]
impl MessageBus for NamesOnly {
    async fn list_names(&self) -> zbus::Result<Vec<String>> {
        Ok(self.0.iter().map(|name| name.to_string()).collect())
    }

    async fn call_method(&self, _call: &MethodCall) -> zbus::Result<()> {
        Err(zbus::Error::Unsupported)
    }

    async fn get_property(&self, _key: &PropertyKey) -> zbus::Result<OwnedValue> {
        Err(zbus::Error::Unsupported)
    }

    async fn set_property(&self, _key: &PropertyKey, _value: Value<'_>) -> zbus::Result<()> {
        Err(zbus::Error::Unsupported)
    }
}

fn ids(names: &[&str]) -> Vec<PlayerId> {
    names.iter().map(|name| PlayerId::from(*name)).collect()
}

#[test]
fn find_player_by_index() {
    let players = ids(&["spotify", "vlc"]);

    assert_eq!(find_player(&players, "2").unwrap(), PlayerId::from("vlc"));
}

#[test]
fn find_player_rejects_out_of_range_index() {
    let players = ids(&["spotify"]);

    assert!(matches!(
        find_player(&players, "0"),
        Err(CliError::InvalidArgument { .. })
    ));
    assert!(find_player(&players, "2").is_err());
}

#[test]
fn find_player_partial_case_insensitive() {
    let players = ids(&["spotify", "firefox.instance_1_42"]);

    assert_eq!(
        find_player(&players, "FIRE").unwrap(),
        PlayerId::from("firefox.instance_1_42")
    );
}

#[test]
fn find_player_prefers_exact_match() {
    let players = ids(&["vlc2", "vlc"]);

    assert_eq!(find_player(&players, "vlc").unwrap(), PlayerId::from("vlc"));
}

#[test]
fn find_player_reports_ambiguity() {
    let players = ids(&["chromium.instance1", "chromium.instance2"]);

    let error = find_player(&players, "chrom").unwrap_err();

    assert!(error.to_string().contains("Multiple players match"));
}

#[tokio::test]
async fn resolve_player_defaults_to_first() {
    let bus = NamesOnly(vec![
        "org.freedesktop.DBus",
        "org.mpris.MediaPlayer2.mpv",
        "org.mpris.MediaPlayer2.vlc",
    ]);

    let id = resolve_player(&bus, None, &MediaConfig::default())
        .await
        .unwrap();

    assert_eq!(id, PlayerId::from("mpv"));
}

#[tokio::test]
async fn resolve_player_uses_configured_default() {
    let bus = NamesOnly(vec!["org.mpris.MediaPlayer2.mpv", "org.mpris.MediaPlayer2.vlc"]);
    let media = MediaConfig {
        default_player: Some("vlc".to_string()),
        ..MediaConfig::default()
    };

    let id = resolve_player(&bus, None, &media).await.unwrap();

    assert_eq!(id, PlayerId::from("vlc"));
}

#[tokio::test]
async fn resolve_player_explicit_beats_default() {
    let bus = NamesOnly(vec!["org.mpris.MediaPlayer2.mpv", "org.mpris.MediaPlayer2.vlc"]);
    let media = MediaConfig {
        default_player: Some("vlc".to_string()),
        ..MediaConfig::default()
    };

    let id = resolve_player(&bus, Some("mpv"), &media).await.unwrap();

    assert_eq!(id, PlayerId::from("mpv"));
}

#[tokio::test]
async fn resolve_player_skips_ignored() {
    let bus = NamesOnly(vec![
        "org.mpris.MediaPlayer2.kdeconnect.mpris_000001",
        "org.mpris.MediaPlayer2.vlc",
    ]);
    let media = MediaConfig {
        ignored_players: vec!["kdeconnect.mpris_000001".to_string()],
        ..MediaConfig::default()
    };

    let id = resolve_player(&bus, None, &media).await.unwrap();

    assert_eq!(id, PlayerId::from("vlc"));
}

#[tokio::test]
async fn resolve_player_without_players_fails() {
    let bus = NamesOnly(vec!["org.freedesktop.DBus"]);

    let error = resolve_player(&bus, None, &MediaConfig::default())
        .await
        .unwrap_err();

    assert!(error.to_string().contains("No media players found"));
}

#[test]
fn parse_offset_accepts_signed_seconds() {
    assert_eq!(parse_offset("10").unwrap(), 10_000_000);
    assert_eq!(parse_offset("+10").unwrap(), 10_000_000);
    assert_eq!(parse_offset("-2.5").unwrap(), -2_500_000);
    assert!(parse_offset("ten").is_err());
    assert!(parse_offset("inf").is_err());
}

#[test]
fn parse_position_accepts_clock_formats() {
    assert_eq!(parse_position("90").unwrap(), 90_000_000);
    assert_eq!(parse_position("1:30").unwrap(), 90_000_000);
    assert_eq!(parse_position("1:02:05").unwrap(), 3_725_000_000);
    assert!(parse_position("-5").is_err());
    assert!(parse_position("1:2:3:4").is_err());
    assert!(parse_position("1:").is_err());
}

#[test]
fn parse_offset_rejects_values_beyond_i64_micros() {
    assert!(matches!(
        parse_offset("-1e20"),
        Err(CliError::InvalidArgument { .. })
    ));
    assert!(parse_offset("1e20").is_err());
    assert!(parse_offset("NaN").is_err());
    assert_eq!(parse_offset("-9000000000000").unwrap(), -9_000_000_000_000_000_000);
}

#[test]
fn parse_position_limits_components() {
    assert!(parse_position("1:90").is_err());
    assert!(parse_position("1:60").is_err());
    assert!(parse_position("1.5:00").is_err());
    assert!(parse_position("1:02.5:00").is_err());
    assert!(parse_position("1:61:00").is_err());
    assert!(parse_position("1e20").is_err());
    assert_eq!(parse_position("0:59.5").unwrap(), 59_500_000);
    assert_eq!(parse_position("120:00").unwrap(), 7_200_000_000);
}

#[test]
fn format_micros_handles_extremes() {
    assert!(format_micros(i64::MIN).starts_with('-'));
    assert!(!format_micros(i64::MAX).starts_with('-'));
}

#[test]
fn parse_switch_values() {
    assert!(parse_switch("state", "ON").unwrap());
    assert!(!parse_switch("state", "off").unwrap());
    assert!(parse_switch("state", "maybe").is_err());
}

#[test]
fn format_micros_values() {
    assert_eq!(format_micros(0), "0:00");
    assert_eq!(format_micros(59_999_999), "0:59");
    assert_eq!(format_micros(-15_000_000), "-0:15");
    assert_eq!(format_micros(3_600_000_000), "1:00:00");
}

#[test]
fn format_value_renders_common_types() {
    let artists = Value::from(vec!["Boards of Canada", "Aphex Twin"]);
    let path = Value::from(ObjectPath::try_from("/org/example/track/1").unwrap());

    assert_eq!(format_value(&Value::from("Roygbiv")), "Roygbiv");
    assert_eq!(format_value(&Value::from(42_i64)), "42");
    assert_eq!(format_value(&artists), "Boards of Canada, Aphex Twin");
    assert_eq!(format_value(&path), "/org/example/track/1");
    assert_eq!(format_value(&Value::Value(Box::new(Value::from(true)))), "true");
}

#[test]
fn registry_lists_categories_sorted() {
    let service = CliService::new(Config::default());

    let commands = service.list_all();
    let categories: Vec<&str> = commands.iter().map(|(name, _)| name.as_str()).collect();

    assert_eq!(categories, vec!["config", "media"]);

    let media = &commands[1].1;
    for expected in [
        "list", "identity", "play", "pause", "play-pause", "stop", "next", "previous", "seek",
        "position", "open", "volume", "set-volume", "volume-up", "volume-down", "loop",
        "shuffle", "status", "info", "raise", "quit",
    ] {
        assert!(media.iter().any(|name| name == expected), "missing {expected}");
    }

    let mut sorted = media.clone();
    sorted.sort();
    assert_eq!(&sorted, media);
}

#[tokio::test]
async fn unknown_category_is_not_found() {
    let service = CliService::new(Config::default());

    let result = service.execute_command("audio", "mute", &[]).await;

    assert!(matches!(result, Err(CliError::CommandNotFound(_))));
}

#[tokio::test]
async fn unknown_command_is_not_found() {
    let service = CliService::new(Config::default());

    let result = service.execute_command("media", "rewind", &[]).await;

    assert!(matches!(result, Err(CliError::CommandNotFound(_))));
}

#[tokio::test]
async fn missing_required_argument_is_rejected_before_execution() {
    let service = CliService::new(Config::default());

    let result = service.execute_command("media", "seek", &[]).await;

    assert!(matches!(result, Err(CliError::InvalidArguments(_))));
}

#[tokio::test]
async fn extra_arguments_are_rejected() {
    let service = CliService::new(Config::default());
    let args = vec!["1".to_string(), "2".to_string()];

    let result = service.execute_command("media", "play", &args).await;

    assert!(matches!(result, Err(CliError::InvalidArguments(_))));
}

#[tokio::test]
async fn config_show_prints_toml() {
    let mut config = Config::default();
    config.media.default_player = Some("spotify".to_string());
    let service = CliService::new(config);

    let output = service.execute_command("config", "show", &[]).await.unwrap();

    assert!(output.contains("[media]"));
    assert!(output.contains("default_player = \"spotify\""));
}

#[tokio::test]
async fn help_mentions_every_category() {
    let service = CliService::new(Config::default());

    let output = service.execute_command("help", "", &[]).await.unwrap();

    assert!(output.contains("media"));
    assert!(output.contains("config"));
    assert!(output.contains("play-pause"));
}

#[tokio::test]
async fn category_help_lists_arguments() {
    let service = CliService::new(Config::default());

    let output = service.execute_command("media", "", &[]).await.unwrap();

    assert!(output.contains("<offset>"));
    assert!(output.contains("[player-id]"));
}
