use tracing::instrument;
use zbus::zvariant::Value;

use super::Player;
use crate::{bus::MessageBus, decode, error::Result, interfaces::BASE_INTERFACE};

impl<B: MessageBus> Player<B> {
    /// Brings the player's user interface to the front.
    ///
    /// # Errors
    /// Returns error if the player is unreachable or does not support raising
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn raise(&self) -> Result<()> {
        self.call(BASE_INTERFACE, "Raise", Vec::new()).await
    }

    /// Asks the player to exit.
    ///
    /// # Errors
    /// Returns error if the player is unreachable or refuses to quit
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn quit(&self) -> Result<()> {
        self.call(BASE_INTERFACE, "Quit", Vec::new()).await
    }

    /// Human-readable name of the player, e.g. "VLC media player".
    ///
    /// # Errors
    /// Returns error if the property cannot be read or is not a string
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn identity(&self) -> Result<String> {
        let (key, value) = self.get(BASE_INTERFACE, "Identity").await?;
        decode::string(&key, value)
    }

    /// Whether `quit` is expected to do anything.
    ///
    /// # Errors
    /// Returns error if the property cannot be read or is not a boolean
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn can_quit(&self) -> Result<bool> {
        let (key, value) = self.get(BASE_INTERFACE, "CanQuit").await?;
        decode::boolean(&key, value)
    }

    /// Whether `raise` is expected to do anything.
    ///
    /// # Errors
    /// Returns error if the property cannot be read or is not a boolean
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn can_raise(&self) -> Result<bool> {
        let (key, value) = self.get(BASE_INTERFACE, "CanRaise").await?;
        decode::boolean(&key, value)
    }

    /// Whether the player window is fullscreen.
    ///
    /// # Errors
    /// Returns error if the property cannot be read or is not a boolean
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn fullscreen(&self) -> Result<bool> {
        let (key, value) = self.get(BASE_INTERFACE, "Fullscreen").await?;
        decode::boolean(&key, value)
    }

    /// Requests fullscreen on or off.
    ///
    /// # Errors
    /// Returns error if the player rejects the write
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn set_fullscreen(&self, fullscreen: bool) -> Result<()> {
        self.set(BASE_INTERFACE, "Fullscreen", Value::from(fullscreen))
            .await
    }

    /// Whether `set_fullscreen` is honoured.
    ///
    /// # Errors
    /// Returns error if the property cannot be read or is not a boolean
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn can_set_fullscreen(&self) -> Result<bool> {
        let (key, value) = self.get(BASE_INTERFACE, "CanSetFullscreen").await?;
        decode::boolean(&key, value)
    }

    /// Whether the player also exports the track list interface.
    ///
    /// # Errors
    /// Returns error if the property cannot be read or is not a boolean
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn has_track_list(&self) -> Result<bool> {
        let (key, value) = self.get(BASE_INTERFACE, "HasTrackList").await?;
        decode::boolean(&key, value)
    }

    /// Basename of the player's desktop file.
    ///
    /// # Errors
    /// Returns error if the property cannot be read or is not a string
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn desktop_entry(&self) -> Result<String> {
        let (key, value) = self.get(BASE_INTERFACE, "DesktopEntry").await?;
        decode::string(&key, value)
    }

    /// URI schemes accepted by `open_uri`.
    ///
    /// # Errors
    /// Returns error if the property cannot be read or is not a string array
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn supported_uri_schemes(&self) -> Result<Vec<String>> {
        let (key, value) = self.get(BASE_INTERFACE, "SupportedUriSchemes").await?;
        decode::string_list(&key, value)
    }

    /// MIME types accepted by `open_uri`.
    ///
    /// # Errors
    /// Returns error if the property cannot be read or is not a string array
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn supported_mime_types(&self) -> Result<Vec<String>> {
        let (key, value) = self.get(BASE_INTERFACE, "SupportedMimeTypes").await?;
        decode::string_list(&key, value)
    }
}
