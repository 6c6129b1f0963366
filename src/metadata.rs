use std::{collections::HashMap, time::Duration};

use zbus::zvariant::{OwnedValue, Value};

/// Track metadata as published in the `Metadata` property.
///
/// The map is kept exactly as received. The accessors below only read the
/// well-known `mpris:` and `xesam:` keys and never alter the entries.
#[derive(Debug, Default)]
pub struct Metadata(HashMap<String, OwnedValue>);

impl Metadata {
    /// Raw value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&OwnedValue> {
        self.0.get(key)
    }

    /// All keys present in the map.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterates over every entry.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OwnedValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the player published no metadata at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gives back the underlying map.
    pub fn into_inner(self) -> HashMap<String, OwnedValue> {
        self.0
    }

    /// `mpris:trackid`, the object path identifying the current track.
    pub fn track_id(&self) -> Option<&str> {
        match self.value("mpris:trackid")? {
            Value::ObjectPath(path) => Some(path.as_str()),
            Value::Str(path) => Some(path.as_str()),
            _ => None,
        }
    }

    /// `mpris:length`, the track duration.
    pub fn length(&self) -> Option<Duration> {
        let micros = match self.value("mpris:length")? {
            Value::I64(value) => u64::try_from(*value).ok()?,
            Value::U64(value) => *value,
            Value::I32(value) => u64::try_from(*value).ok()?,
            Value::U32(value) => u64::from(*value),
            _ => return None,
        };

        Some(Duration::from_micros(micros))
    }

    /// `mpris:artUrl`
    pub fn art_url(&self) -> Option<&str> {
        self.string("mpris:artUrl")
    }

    /// `xesam:title`
    pub fn title(&self) -> Option<&str> {
        self.string("xesam:title")
    }

    /// `xesam:album`
    pub fn album(&self) -> Option<&str> {
        self.string("xesam:album")
    }

    /// `xesam:url`
    pub fn url(&self) -> Option<&str> {
        self.string("xesam:url")
    }

    /// `xesam:artist`. A plain string is accepted as a single artist.
    pub fn artists(&self) -> Vec<String> {
        self.string_list("xesam:artist")
    }

    /// `xesam:albumArtist`. A plain string is accepted as a single artist.
    pub fn album_artists(&self) -> Vec<String> {
        self.string_list("xesam:albumArtist")
    }

    fn value(&self, key: &str) -> Option<&Value<'static>> {
        self.0.get(key).map(|value| unwrap_variant(value))
    }

    fn string(&self, key: &str) -> Option<&str> {
        match self.value(key)? {
            Value::Str(value) => Some(value.as_str()),
            _ => None,
        }
    }

    fn string_list(&self, key: &str) -> Vec<String> {
        match self.value(key) {
            Some(Value::Array(array)) => array
                .iter()
                .filter_map(|item| match unwrap_variant(item) {
                    Value::Str(value) => Some(value.to_string()),
                    _ => None,
                })
                .collect(),
            Some(Value::Str(value)) => vec![value.to_string()],
            _ => Vec::new(),
        }
    }
}

// Some players wrap entries in an extra variant layer.
fn unwrap_variant<'a, 'v>(value: &'a Value<'v>) -> &'a Value<'v> {
    match value {
        Value::Value(inner) => unwrap_variant(inner),
        other => other,
    }
}

impl From<HashMap<String, OwnedValue>> for Metadata {
    fn from(map: HashMap<String, OwnedValue>) -> Self {
        Self(map)
    }
}
