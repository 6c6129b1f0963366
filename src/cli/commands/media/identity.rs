use std::sync::Arc;

use async_trait::async_trait;

use super::utils::player_arg;
use crate::cli::{CliContext, Command, CommandMetadata, CommandResult};

/// Command printing a player's human-readable name
pub struct IdentityCommand {
    context: Arc<CliContext>,
}

impl IdentityCommand {
    /// Creates a new IdentityCommand
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for IdentityCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let player = self.context.player(args.first()).await?;

        Ok(player.identity().await?)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "identity".to_string(),
            description: "Print the player's human-readable name".to_string(),
            category: "media".to_string(),
            args: vec![player_arg()],
            examples: vec![
                "wayle-mpris media identity".to_string(),
                "wayle-mpris media identity vlc".to_string(),
            ],
        }
    }
}
