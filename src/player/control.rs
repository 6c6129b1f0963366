use tracing::instrument;
use zbus::zvariant::ObjectPath;

use super::Player;
use crate::{
    bus::{MessageBus, MethodArg},
    error::Result,
    interfaces::PLAYER_INTERFACE,
};

impl<B: MessageBus> Player<B> {
    /// Starts or resumes playback.
    ///
    /// # Errors
    /// Returns error if the player is unreachable or rejects the call
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn play(&self) -> Result<()> {
        self.call(PLAYER_INTERFACE, "Play", Vec::new()).await
    }

    /// Pauses playback.
    ///
    /// # Errors
    /// Returns error if the player is unreachable or rejects the call
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn pause(&self) -> Result<()> {
        self.call(PLAYER_INTERFACE, "Pause", Vec::new()).await
    }

    /// Toggles between playing and paused.
    ///
    /// # Errors
    /// Returns error if the player is unreachable or rejects the call
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn play_pause(&self) -> Result<()> {
        self.call(PLAYER_INTERFACE, "PlayPause", Vec::new()).await
    }

    /// Stops playback.
    ///
    /// # Errors
    /// Returns error if the player is unreachable or rejects the call
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn stop(&self) -> Result<()> {
        self.call(PLAYER_INTERFACE, "Stop", Vec::new()).await
    }

    /// Skips to the next track.
    ///
    /// # Errors
    /// Returns error if the player is unreachable or rejects the call
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn next(&self) -> Result<()> {
        self.call(PLAYER_INTERFACE, "Next", Vec::new()).await
    }

    /// Skips to the previous track.
    ///
    /// # Errors
    /// Returns error if the player is unreachable or rejects the call
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn previous(&self) -> Result<()> {
        self.call(PLAYER_INTERFACE, "Previous", Vec::new()).await
    }

    /// Moves the playback position by `offset` microseconds.
    ///
    /// Negative offsets seek backwards.
    ///
    /// # Errors
    /// Returns error if the player is unreachable or rejects the call
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn seek(&self, offset: i64) -> Result<()> {
        self.call(PLAYER_INTERFACE, "Seek", vec![MethodArg::Int64(offset)])
            .await
    }

    /// Jumps to `position` microseconds into the track identified by `track_id`.
    ///
    /// Players ignore the call when `track_id` is not the current track.
    ///
    /// # Errors
    /// Returns error if the player is unreachable or rejects the call
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn set_position(&self, track_id: &ObjectPath<'_>, position: i64) -> Result<()> {
        let args = vec![
            MethodArg::ObjectPath(track_id.clone().into()),
            MethodArg::Int64(position),
        ];

        self.call(PLAYER_INTERFACE, "SetPosition", args).await
    }

    /// Opens and plays `uri`.
    ///
    /// # Errors
    /// Returns error if the player is unreachable or rejects the URI
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn open_uri(&self, uri: &str) -> Result<()> {
        self.call(PLAYER_INTERFACE, "OpenUri", vec![MethodArg::Str(uri.to_string())])
            .await
    }

    /// Raises the volume by the player's own step.
    ///
    /// Not part of the published interface; only some players implement it.
    ///
    /// # Errors
    /// Returns error if the player is unreachable or lacks the method
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn volume_up(&self) -> Result<()> {
        self.call(PLAYER_INTERFACE, "VolumeUp", Vec::new()).await
    }

    /// Lowers the volume by the player's own step.
    ///
    /// Not part of the published interface; only some players implement it.
    ///
    /// # Errors
    /// Returns error if the player is unreachable or lacks the method
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn volume_down(&self) -> Result<()> {
        self.call(PLAYER_INTERFACE, "VolumeDown", Vec::new()).await
    }
}
