//! Unit tests for config module
//!
//! Tests configuration defaults, TOML parsing and file loading.

#![allow(clippy::panic, clippy::unwrap_used)]

use std::fs;

use tempfile::TempDir;

use crate::config::{BusKind, Config, ConfigError, LogLevel};

#[test]
fn config_default() {
    let config = Config::default();

    assert_eq!(config.general.log_level, LogLevel::Info);
    assert_eq!(config.bus.kind, BusKind::Session);
    assert_eq!(config.bus.address, None);
    assert_eq!(config.media.default_player, None);
    assert!(config.media.ignored_players.is_empty());
}

#[test]
fn config_empty_toml() {
    let config: Config = toml::from_str("").unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn config_deserialize_toml() {
    let toml_str = r#"
        [general]
        log_level = "debug"

        [bus]
        kind = "system"
        address = "unix:path=/run/dbus/system_bus_socket"

        [media]
        default_player = "spotify"
        ignored_players = ["kdeconnect.mpris_000001"]
    "#;

    let config: Config = toml::from_str(toml_str).unwrap();

    assert_eq!(config.general.log_level, LogLevel::Debug);
    assert_eq!(config.bus.kind, BusKind::System);
    assert_eq!(
        config.bus.address.as_deref(),
        Some("unix:path=/run/dbus/system_bus_socket")
    );
    assert_eq!(config.media.default_player.as_deref(), Some("spotify"));
    assert!(config.media.is_ignored("kdeconnect.mpris_000001"));
    assert!(!config.media.is_ignored("spotify"));
}

#[test]
fn config_partial_section_keeps_defaults() {
    let toml_str = r#"
        [media]
        default_player = "vlc"
    "#;

    let config: Config = toml::from_str(toml_str).unwrap();

    assert_eq!(config.bus.kind, BusKind::Session);
    assert!(config.media.ignored_players.is_empty());
}

#[test]
fn config_rejects_unknown_bus_kind() {
    let result: Result<Config, toml::de::Error> = toml::from_str("[bus]\nkind = \"starter\"\n");

    assert!(result.is_err());
}

#[test]
fn config_invalid_toml() {
    let invalid_toml = r#"
        [general
        invalid syntax here
    "#;

    let result: Result<Config, toml::de::Error> = toml::from_str(invalid_toml);

    assert!(result.is_err());
}

#[test]
fn config_serialize_roundtrip() {
    let mut original = Config::default();
    original.general.log_level = LogLevel::Trace;
    original.media.default_player = Some("mpv".to_string());

    let toml_str = original.to_toml().unwrap();
    let deserialized: Config = toml::from_str(&toml_str).unwrap();

    assert_eq!(original, deserialized);
}

#[test]
fn load_from_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();

    let config = Config::load_from(&dir.path().join("config.toml")).unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn load_from_reads_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[general]\nlog_level = \"warn\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.general.log_level, LogLevel::Warn);
}

#[test]
fn load_from_reports_parse_location() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[general]\nlog_level = \"loud\"\n").unwrap();

    let error = Config::load_from(&path).unwrap_err();

    match error {
        ConfigError::TomlParseError { location, .. } => {
            assert!(location.ends_with("config.toml"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn json_schema_lists_sections() {
    let schema = Config::json_schema();
    let properties = &schema["properties"];

    assert!(properties.get("general").is_some());
    assert!(properties.get("bus").is_some());
    assert!(properties.get("media").is_some());
}
