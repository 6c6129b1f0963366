use std::sync::Arc;

use async_trait::async_trait;

use super::utils::{parse_switch, player_arg};
use crate::cli::{ArgType, CliContext, Command, CommandArg, CommandMetadata, CommandResult};

/// Command to turn shuffle on, off, or toggle it
pub struct ShuffleCommand {
    context: Arc<CliContext>,
}

impl ShuffleCommand {
    /// Creates a new ShuffleCommand
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for ShuffleCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let requested = match args[0].to_lowercase().as_str() {
            "toggle" => None,
            other => Some(parse_switch("state", other)?),
        };
        let player = self.context.player(args.get(1)).await?;

        let shuffle = match requested {
            Some(shuffle) => shuffle,
            None => !player.shuffle().await?,
        };
        player.set_shuffle(shuffle).await?;

        let state = if shuffle { "on" } else { "off" };
        Ok(format!("Turned shuffle {state} on: {}", player.id()))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "shuffle".to_string(),
            description: "Turn shuffle on, off, or toggle it".to_string(),
            category: "media".to_string(),
            args: vec![
                CommandArg {
                    name: "state".to_string(),
                    description: "on, off or toggle".to_string(),
                    required: true,
                    value_type: ArgType::Boolean,
                },
                player_arg(),
            ],
            examples: vec![
                "wayle-mpris media shuffle toggle".to_string(),
                "wayle-mpris media shuffle on spotify".to_string(),
            ],
        }
    }
}
