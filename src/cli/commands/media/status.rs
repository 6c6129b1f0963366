use std::sync::Arc;

use async_trait::async_trait;

use super::utils::player_arg;
use crate::cli::{CliContext, Command, CommandMetadata, CommandResult, formatting::format_micros};

/// Command summarising a player's playback properties
pub struct StatusCommand {
    context: Arc<CliContext>,
}

impl StatusCommand {
    /// Creates a new StatusCommand
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

fn or_unsupported<T>(value: crate::Result<T>, render: impl FnOnce(T) -> String) -> String {
    value.map(render).unwrap_or_else(|_| "unsupported".to_string())
}

#[async_trait]
impl Command for StatusCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let player = self.context.player(args.first()).await?;

        // Identity and PlaybackStatus are mandatory; the rest is optional in practice.
        let identity = player.identity().await?;
        let playback = player.playback_status().await?;

        let loop_status = or_unsupported(player.loop_status().await, |status| status.to_string());
        let shuffle = or_unsupported(player.shuffle().await, |shuffle| shuffle.to_string());
        let rate = or_unsupported(player.rate().await, |rate| format!("{rate:.2}"));
        let volume = or_unsupported(player.volume().await, |volume| format!("{volume:.2}"));
        let position = or_unsupported(player.position().await, format_micros);

        Ok(format!(
            "Player:   {identity} ({})\n\
             Status:   {playback}\n\
             Position: {position}\n\
             Volume:   {volume}\n\
             Rate:     {rate}\n\
             Loop:     {loop_status}\n\
             Shuffle:  {shuffle}",
            player.id()
        ))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "status".to_string(),
            description: "Show playback state, position, volume, rate, loop and shuffle".to_string(),
            category: "media".to_string(),
            args: vec![player_arg()],
            examples: vec![
                "wayle-mpris media status".to_string(),
                "wayle-mpris media status 2".to_string(),
            ],
        }
    }
}
