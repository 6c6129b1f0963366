use std::sync::Arc;

use async_trait::async_trait;
use zbus::zvariant::ObjectPath;

use super::utils::{parse_position, player_arg};
use crate::cli::{
    ArgType, CliContext, CliError, Command, CommandArg, CommandMetadata, CommandResult,
    formatting::format_micros,
};

/// Command to jump to an absolute position in the current track
///
/// Reads the current track id from the metadata, then calls `SetPosition`.
pub struct PositionCommand {
    context: Arc<CliContext>,
}

impl PositionCommand {
    /// Creates a new PositionCommand
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for PositionCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let position = parse_position(&args[0])?;
        let player = self.context.player(args.get(1)).await?;

        let metadata = player.metadata().await?;
        let track_id = metadata
            .track_id()
            .ok_or_else(|| CliError::InvalidArgument {
                arg: "player-id".to_string(),
                reason: format!("{} does not report a track id", player.id()),
            })?;
        let track_id = ObjectPath::try_from(track_id).map_err(|e| CliError::InvalidArgument {
            arg: "player-id".to_string(),
            reason: format!("{} reported an invalid track id: {e}", player.id()),
        })?;

        player.set_position(&track_id, position).await?;

        Ok(format!(
            "Moved to {} on: {}",
            format_micros(position),
            player.id()
        ))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "position".to_string(),
            description: "Jump to an absolute position in the current track".to_string(),
            category: "media".to_string(),
            args: vec![
                CommandArg {
                    name: "position".to_string(),
                    description: "Target position - seconds (90), m:ss (1:30) or h:mm:ss".to_string(),
                    required: true,
                    value_type: ArgType::Time,
                },
                player_arg(),
            ],
            examples: vec![
                "wayle-mpris media position 90".to_string(),
                "wayle-mpris media position 1:30 vlc".to_string(),
            ],
        }
    }
}
