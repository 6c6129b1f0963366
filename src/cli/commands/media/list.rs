use std::sync::Arc;

use async_trait::async_trait;

use super::utils::visible_players;
use crate::{
    cli::{CliContext, Command, CommandMetadata, CommandResult},
    player::Player,
    types::PlaybackStatus,
};

/// Command to list all available media players
///
/// Shows player index, identifier, identity and playback state
pub struct ListCommand {
    context: Arc<CliContext>,
}

impl ListCommand {
    /// Creates a new ListCommand
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for ListCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let connection = self.context.connection().await?;
        let players = visible_players(connection, &self.context.config().media).await?;

        if players.is_empty() {
            return Ok("No media players found".to_string());
        }

        let mut output = format!("Found {} media player(s):\n\n", players.len());

        for (index, id) in players.into_iter().enumerate() {
            let player = Player::new(connection.clone(), id);

            // A player that vanished or misbehaves still gets listed.
            let identity = player.identity().await.unwrap_or_else(|_| "?".to_string());
            let playback_state = match player.playback_status().await {
                Ok(PlaybackStatus::Playing) => "▶ Playing".to_string(),
                Ok(PlaybackStatus::Paused) => "⏸ Paused".to_string(),
                Ok(PlaybackStatus::Stopped) => "⏹ Stopped".to_string(),
                Ok(PlaybackStatus::Other(raw)) => raw,
                Err(_) => "unknown".to_string(),
            };

            output.push_str(&format!(
                "{:2}. {:<28} {:<30} {:>12}\n",
                index + 1,
                player.id(),
                identity,
                playback_state
            ));
        }

        output.push_str("\nUse player number or partial name with other commands.");
        Ok(output)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "list".to_string(),
            description: "List all available media players".to_string(),
            category: "media".to_string(),
            args: vec![],
            examples: vec!["wayle-mpris media list".to_string()],
        }
    }
}
