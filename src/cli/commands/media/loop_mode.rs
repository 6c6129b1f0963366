use std::sync::Arc;

use async_trait::async_trait;

use super::utils::player_arg;
use crate::{
    cli::{ArgType, CliContext, CliError, Command, CommandArg, CommandMetadata, CommandResult},
    types::LoopStatus,
};

/// Command to set the repeat mode of a media player
pub struct LoopCommand {
    context: Arc<CliContext>,
}

impl LoopCommand {
    /// Creates a new LoopCommand
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for LoopCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let status = match args[0].to_lowercase().as_str() {
            "none" | "off" => LoopStatus::None,
            "track" => LoopStatus::Track,
            "playlist" => LoopStatus::Playlist,
            _ => {
                return Err(CliError::InvalidArgument {
                    arg: "mode".to_string(),
                    reason: format!("'{}' is not one of none, track, playlist", args[0]),
                });
            }
        };
        let player = self.context.player(args.get(1)).await?;

        player.set_loop_status(&status).await?;

        Ok(format!("Set loop mode to {status} on: {}", player.id()))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "loop".to_string(),
            description: "Set the repeat mode".to_string(),
            category: "media".to_string(),
            args: vec![
                CommandArg {
                    name: "mode".to_string(),
                    description: "none, track or playlist".to_string(),
                    required: true,
                    value_type: ArgType::String,
                },
                player_arg(),
            ],
            examples: vec![
                "wayle-mpris media loop track".to_string(),
                "wayle-mpris media loop none spotify".to_string(),
            ],
        }
    }
}
