use std::sync::Arc;

use async_trait::async_trait;

use super::utils::player_arg;
use crate::cli::{ArgType, CliContext, Command, CommandArg, CommandMetadata, CommandResult};

/// Command asking a player to open and play a URI
pub struct OpenCommand {
    context: Arc<CliContext>,
}

impl OpenCommand {
    /// Creates a new OpenCommand
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for OpenCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let uri = &args[0];
        let player = self.context.player(args.get(1)).await?;

        player.open_uri(uri).await?;

        Ok(format!("Opened {uri} in: {}", player.id()))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "open".to_string(),
            description: "Open and play a URI".to_string(),
            category: "media".to_string(),
            args: vec![
                CommandArg {
                    name: "uri".to_string(),
                    description: "URI to open; its scheme must be in the player's SupportedUriSchemes".to_string(),
                    required: true,
                    value_type: ArgType::String,
                },
                player_arg(),
            ],
            examples: vec![
                "wayle-mpris media open file:///home/me/song.flac".to_string(),
                "wayle-mpris media open https://example.com/stream.ogg vlc".to_string(),
            ],
        }
    }
}
