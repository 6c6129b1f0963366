use std::sync::Arc;

use async_trait::async_trait;

use super::utils::player_arg;
use crate::cli::{
    ArgType, CliContext, CliError, Command, CommandArg, CommandMetadata, CommandResult,
};

/// Command printing a player's volume
pub struct VolumeCommand {
    context: Arc<CliContext>,
}

impl VolumeCommand {
    /// Creates a new VolumeCommand
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for VolumeCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let player = self.context.player(args.first()).await?;

        Ok(format!("{:.2}", player.volume().await?))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "volume".to_string(),
            description: "Print the player's volume (1.0 is the nominal maximum)".to_string(),
            category: "media".to_string(),
            args: vec![player_arg()],
            examples: vec![
                "wayle-mpris media volume".to_string(),
                "wayle-mpris media volume mpv".to_string(),
            ],
        }
    }
}

/// Command writing a player's volume
pub struct SetVolumeCommand {
    context: Arc<CliContext>,
}

impl SetVolumeCommand {
    /// Creates a new SetVolumeCommand
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for SetVolumeCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let volume: f64 = args[0]
            .parse()
            .ok()
            .filter(|volume: &f64| volume.is_finite() && *volume >= 0.0)
            .ok_or_else(|| CliError::InvalidArgument {
                arg: "volume".to_string(),
                reason: format!("'{}' is not a non-negative number", args[0]),
            })?;
        let player = self.context.player(args.get(1)).await?;

        player.set_volume(volume).await?;

        Ok(format!("Set volume to {volume:.2} on: {}", player.id()))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "set-volume".to_string(),
            description: "Change the player's volume".to_string(),
            category: "media".to_string(),
            args: vec![
                CommandArg {
                    name: "volume".to_string(),
                    description: "New volume, 0.0 to 1.0 (some players accept more)".to_string(),
                    required: true,
                    value_type: ArgType::Number,
                },
                player_arg(),
            ],
            examples: vec![
                "wayle-mpris media set-volume 0.5".to_string(),
                "wayle-mpris media set-volume 1 spotify".to_string(),
            ],
        }
    }
}
