use std::sync::Arc;

use async_trait::async_trait;

use super::utils::{parse_offset, player_arg};
use crate::cli::{
    ArgType, CliContext, Command, CommandArg, CommandMetadata, CommandResult,
    formatting::format_micros,
};

/// Command to move the playback position relative to where it is
pub struct SeekCommand {
    context: Arc<CliContext>,
}

impl SeekCommand {
    /// Creates a new SeekCommand
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for SeekCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let offset = parse_offset(&args[0])?;
        let player = self.context.player(args.get(1)).await?;

        player.seek(offset).await?;

        let sign = if offset < 0 { "" } else { "+" };
        Ok(format!(
            "Seeked {sign}{} on: {}",
            format_micros(offset),
            player.id()
        ))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "seek".to_string(),
            description: "Move the playback position by a relative offset".to_string(),
            category: "media".to_string(),
            args: vec![
                CommandArg {
                    name: "offset".to_string(),
                    description: "Offset in seconds; negative values seek backwards (10, +10, -2.5)".to_string(),
                    required: true,
                    value_type: ArgType::Number,
                },
                player_arg(),
            ],
            examples: vec![
                "wayle-mpris media seek 30".to_string(),
                "wayle-mpris media seek -15 spotify".to_string(),
            ],
        }
    }
}
