use tracing::instrument;
use zbus::zvariant::Value;

use super::Player;
use crate::{
    bus::MessageBus,
    decode,
    error::Result,
    interfaces::PLAYER_INTERFACE,
    metadata::Metadata,
    types::{LoopStatus, PlaybackStatus},
};

impl<B: MessageBus> Player<B> {
    /// Current playback state.
    ///
    /// # Errors
    /// Returns error if the property cannot be read or is not a string
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn playback_status(&self) -> Result<PlaybackStatus> {
        let (key, value) = self.get(PLAYER_INTERFACE, "PlaybackStatus").await?;
        decode::playback_status(&key, value)
    }

    /// Current repeat mode.
    ///
    /// # Errors
    /// Returns error if the property cannot be read or is not a string
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn loop_status(&self) -> Result<LoopStatus> {
        let (key, value) = self.get(PLAYER_INTERFACE, "LoopStatus").await?;
        decode::loop_status(&key, value)
    }

    /// Changes the repeat mode.
    ///
    /// # Errors
    /// Returns error if the player rejects the write
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn set_loop_status(&self, status: &LoopStatus) -> Result<()> {
        self.set(PLAYER_INTERFACE, "LoopStatus", Value::from(status.as_str()))
            .await
    }

    /// Playback speed, 1.0 being normal.
    ///
    /// # Errors
    /// Returns error if the property cannot be read or is not a double
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn rate(&self) -> Result<f64> {
        let (key, value) = self.get(PLAYER_INTERFACE, "Rate").await?;
        decode::double(&key, value)
    }

    /// Changes the playback speed.
    ///
    /// # Errors
    /// Returns error if the player rejects the write
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn set_rate(&self, rate: f64) -> Result<()> {
        self.set(PLAYER_INTERFACE, "Rate", Value::from(rate)).await
    }

    /// Lowest rate accepted by `set_rate`.
    ///
    /// # Errors
    /// Returns error if the property cannot be read or is not a double
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn minimum_rate(&self) -> Result<f64> {
        let (key, value) = self.get(PLAYER_INTERFACE, "MinimumRate").await?;
        decode::double(&key, value)
    }

    /// Highest rate accepted by `set_rate`.
    ///
    /// # Errors
    /// Returns error if the property cannot be read or is not a double
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn maximum_rate(&self) -> Result<f64> {
        let (key, value) = self.get(PLAYER_INTERFACE, "MaximumRate").await?;
        decode::double(&key, value)
    }

    /// Whether tracks are played in random order.
    ///
    /// # Errors
    /// Returns error if the property cannot be read or is not a boolean
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn shuffle(&self) -> Result<bool> {
        let (key, value) = self.get(PLAYER_INTERFACE, "Shuffle").await?;
        decode::boolean(&key, value)
    }

    /// Turns shuffle on or off.
    ///
    /// # Errors
    /// Returns error if the player rejects the write
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn set_shuffle(&self, shuffle: bool) -> Result<()> {
        self.set(PLAYER_INTERFACE, "Shuffle", Value::from(shuffle))
            .await
    }

    /// Metadata of the current track, passed through as published.
    ///
    /// # Errors
    /// Returns error if the property cannot be read or is not an `a{sv}` map
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn metadata(&self) -> Result<Metadata> {
        let (key, value) = self.get(PLAYER_INTERFACE, "Metadata").await?;
        decode::metadata(&key, value)
    }

    /// Volume, 1.0 being the player's nominal maximum.
    ///
    /// # Errors
    /// Returns error if the property cannot be read or is not a double
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn volume(&self) -> Result<f64> {
        let (key, value) = self.get(PLAYER_INTERFACE, "Volume").await?;
        decode::double(&key, value)
    }

    /// Changes the volume. The value is sent as-is.
    ///
    /// # Errors
    /// Returns error if the player rejects the write
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn set_volume(&self, volume: f64) -> Result<()> {
        self.set(PLAYER_INTERFACE, "Volume", Value::from(volume))
            .await
    }

    /// Playback position in microseconds.
    ///
    /// # Errors
    /// Returns error if the property cannot be read or is not a 64-bit integer
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn position(&self) -> Result<i64> {
        let (key, value) = self.get(PLAYER_INTERFACE, "Position").await?;
        decode::int64(&key, value)
    }

    /// Whether `next` is expected to do anything.
    ///
    /// # Errors
    /// Returns error if the property cannot be read or is not a boolean
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn can_go_next(&self) -> Result<bool> {
        let (key, value) = self.get(PLAYER_INTERFACE, "CanGoNext").await?;
        decode::boolean(&key, value)
    }

    /// Whether `previous` is expected to do anything.
    ///
    /// # Errors
    /// Returns error if the property cannot be read or is not a boolean
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn can_go_previous(&self) -> Result<bool> {
        let (key, value) = self.get(PLAYER_INTERFACE, "CanGoPrevious").await?;
        decode::boolean(&key, value)
    }

    /// Whether `play` is expected to do anything.
    ///
    /// # Errors
    /// Returns error if the property cannot be read or is not a boolean
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn can_play(&self) -> Result<bool> {
        let (key, value) = self.get(PLAYER_INTERFACE, "CanPlay").await?;
        decode::boolean(&key, value)
    }

    /// Whether `pause` is expected to do anything.
    ///
    /// # Errors
    /// Returns error if the property cannot be read or is not a boolean
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn can_pause(&self) -> Result<bool> {
        let (key, value) = self.get(PLAYER_INTERFACE, "CanPause").await?;
        decode::boolean(&key, value)
    }

    /// Whether `seek` and `set_position` are honoured.
    ///
    /// # Errors
    /// Returns error if the property cannot be read or is not a boolean
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn can_seek(&self) -> Result<bool> {
        let (key, value) = self.get(PLAYER_INTERFACE, "CanSeek").await?;
        decode::boolean(&key, value)
    }

    /// Whether the player accepts control at all.
    ///
    /// # Errors
    /// Returns error if the property cannot be read or is not a boolean
    #[instrument(skip(self), fields(player = %self.id))]
    pub async fn can_control(&self) -> Result<bool> {
        let (key, value) = self.get(PLAYER_INTERFACE, "CanControl").await?;
        decode::boolean(&key, value)
    }
}
