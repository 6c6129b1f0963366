use std::sync::Arc;

use async_trait::async_trait;

use super::utils::player_arg;
use crate::cli::{CliContext, Command, CommandMetadata, CommandResult};

/// Argument-less player operations exposed as commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportAction {
    /// `Play`
    Play,
    /// `Pause`
    Pause,
    /// `PlayPause`
    PlayPause,
    /// `Stop`
    Stop,
    /// `Next`
    Next,
    /// `Previous`
    Previous,
    /// `VolumeUp`
    VolumeUp,
    /// `VolumeDown`
    VolumeDown,
    /// `Raise` on the base interface
    Raise,
    /// `Quit` on the base interface
    Quit,
}

impl TransportAction {
    /// Every action, in registration order.
    pub const ALL: [TransportAction; 10] = [
        Self::Play,
        Self::Pause,
        Self::PlayPause,
        Self::Stop,
        Self::Next,
        Self::Previous,
        Self::VolumeUp,
        Self::VolumeDown,
        Self::Raise,
        Self::Quit,
    ];

    fn command_name(self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Pause => "pause",
            Self::PlayPause => "play-pause",
            Self::Stop => "stop",
            Self::Next => "next",
            Self::Previous => "previous",
            Self::VolumeUp => "volume-up",
            Self::VolumeDown => "volume-down",
            Self::Raise => "raise",
            Self::Quit => "quit",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::Play => "Start or resume playback",
            Self::Pause => "Pause playback",
            Self::PlayPause => "Toggle play/pause state of a media player",
            Self::Stop => "Stop playback",
            Self::Next => "Skip to the next track",
            Self::Previous => "Go back to the previous track",
            Self::VolumeUp => "Raise the volume by the player's step (not supported by every player)",
            Self::VolumeDown => "Lower the volume by the player's step (not supported by every player)",
            Self::Raise => "Bring the player window to the front",
            Self::Quit => "Ask the player to exit",
        }
    }

    fn done(self) -> &'static str {
        match self {
            Self::Play => "Started playback on",
            Self::Pause => "Paused",
            Self::PlayPause => "Toggled playback for",
            Self::Stop => "Stopped",
            Self::Next => "Skipped to next track on",
            Self::Previous => "Went to previous track on",
            Self::VolumeUp => "Raised volume on",
            Self::VolumeDown => "Lowered volume on",
            Self::Raise => "Raised",
            Self::Quit => "Asked to quit:",
        }
    }
}

/// Command running one [`TransportAction`] against a player.
pub struct TransportCommand {
    context: Arc<CliContext>,
    action: TransportAction,
}

impl TransportCommand {
    /// Creates the command for `action`.
    pub fn new(context: Arc<CliContext>, action: TransportAction) -> Self {
        Self { context, action }
    }
}

#[async_trait]
impl Command for TransportCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let player = self.context.player(args.first()).await?;

        match self.action {
            TransportAction::Play => player.play().await?,
            TransportAction::Pause => player.pause().await?,
            TransportAction::PlayPause => player.play_pause().await?,
            TransportAction::Stop => player.stop().await?,
            TransportAction::Next => player.next().await?,
            TransportAction::Previous => player.previous().await?,
            TransportAction::VolumeUp => player.volume_up().await?,
            TransportAction::VolumeDown => player.volume_down().await?,
            TransportAction::Raise => player.raise().await?,
            TransportAction::Quit => player.quit().await?,
        }

        Ok(format!("{} {}", self.action.done(), player.id()))
    }

    fn metadata(&self) -> CommandMetadata {
        let name = self.action.command_name();

        CommandMetadata {
            name: name.to_string(),
            description: self.action.description().to_string(),
            category: "media".to_string(),
            args: vec![player_arg()],
            examples: vec![
                format!("wayle-mpris media {name}"),
                format!("wayle-mpris media {name} 2"),
                format!("wayle-mpris media {name} spotify"),
            ],
        }
    }
}
