//! Typed decoding of property values.
//!
//! Property values arrive as variants. Each decoder accepts exactly one
//! wire type and fails with [`MprisError::Decode`] on anything else; no
//! value is coerced.

use std::collections::HashMap;

use zbus::zvariant::{self, OwnedValue};

use crate::{
    bus::PropertyKey,
    error::{MprisError, Result},
    metadata::Metadata,
    types::{LoopStatus, PlaybackStatus},
};

fn decode<T>(key: &PropertyKey, expected: &'static str, value: OwnedValue) -> Result<T>
where
    T: TryFrom<OwnedValue>,
    T::Error: Into<zvariant::Error>,
{
    T::try_from(value).map_err(|source| MprisError::Decode {
        interface: key.interface,
        property: key.name,
        expected,
        source: source.into(),
    })
}

/// `s` properties such as `Identity` and `DesktopEntry`.
pub fn string(key: &PropertyKey, value: OwnedValue) -> Result<String> {
    decode(key, "a string", value)
}

/// `as` properties such as `SupportedUriSchemes`.
pub fn string_list(key: &PropertyKey, value: OwnedValue) -> Result<Vec<String>> {
    decode(key, "a string array", value)
}

/// `b` properties such as `Shuffle` and the capability flags.
pub fn boolean(key: &PropertyKey, value: OwnedValue) -> Result<bool> {
    decode(key, "a boolean", value)
}

/// `d` properties such as `Volume` and `Rate`.
pub fn double(key: &PropertyKey, value: OwnedValue) -> Result<f64> {
    decode(key, "a double", value)
}

/// `x` properties, i.e. `Position` in microseconds.
pub fn int64(key: &PropertyKey, value: OwnedValue) -> Result<i64> {
    decode(key, "a 64-bit integer", value)
}

/// `PlaybackStatus`, matched against the fixed vocabulary.
pub fn playback_status(key: &PropertyKey, value: OwnedValue) -> Result<PlaybackStatus> {
    decode::<String>(key, "a playback status string", value).map(PlaybackStatus::from)
}

/// `LoopStatus`, matched against the fixed vocabulary.
pub fn loop_status(key: &PropertyKey, value: OwnedValue) -> Result<LoopStatus> {
    decode::<String>(key, "a loop status string", value).map(LoopStatus::from)
}

/// `Metadata`, an `a{sv}` map passed through untouched.
pub fn metadata(key: &PropertyKey, value: OwnedValue) -> Result<Metadata> {
    decode::<HashMap<String, OwnedValue>>(key, "a metadata map", value).map(Metadata::from)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use zbus::zvariant::Value;

    use super::*;
    use crate::interfaces::{OBJECT_PATH, PLAYER_INTERFACE};

    fn key(name: &'static str) -> PropertyKey {
        PropertyKey {
            destination: "org.mpris.MediaPlayer2.test".to_string(),
            path: OBJECT_PATH,
            interface: PLAYER_INTERFACE,
            name,
        }
    }

    fn owned(value: Value<'_>) -> OwnedValue {
        value.try_to_owned().unwrap()
    }

    #[test]
    fn double_accepts_double() {
        let volume = double(&key("Volume"), owned(Value::from(0.25))).unwrap();

        assert_eq!(volume, 0.25);
    }

    #[test]
    fn double_rejects_integer() {
        let error = double(&key("Volume"), owned(Value::from(1_i32))).unwrap_err();

        assert!(error.is_decode());
        assert!(error.to_string().contains("org.mpris.MediaPlayer2.Player.Volume"));
    }

    #[test]
    fn int64_rejects_unsigned() {
        let error = int64(&key("Position"), owned(Value::from(5_u64))).unwrap_err();

        assert!(matches!(
            error,
            MprisError::Decode {
                property: "Position",
                ..
            }
        ));
    }

    #[test]
    fn playback_status_rejects_non_string() {
        let error = playback_status(&key("PlaybackStatus"), owned(Value::from(true))).unwrap_err();

        assert!(error.is_decode());
    }

    #[test]
    fn loop_status_keeps_unknown_string() {
        let status = loop_status(&key("LoopStatus"), owned(Value::from("Shuffle"))).unwrap();

        assert_eq!(status, LoopStatus::Other("Shuffle".to_string()));
    }

    #[test]
    fn string_list_decodes_array() {
        let schemes = vec!["file", "http"];

        let decoded = string_list(&key("SupportedUriSchemes"), owned(Value::from(schemes))).unwrap();

        assert_eq!(decoded, vec!["file".to_string(), "http".to_string()]);
    }
}
