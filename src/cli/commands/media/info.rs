use std::sync::Arc;

use async_trait::async_trait;

use super::utils::player_arg;
use crate::cli::{
    CliContext, Command, CommandMetadata, CommandResult,
    formatting::{format_micros, format_value},
};

/// Command printing the current track's metadata
///
/// Shows the common fields first, then every raw entry the player publishes.
pub struct InfoCommand {
    context: Arc<CliContext>,
}

impl InfoCommand {
    /// Creates a new InfoCommand
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for InfoCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let player = self.context.player(args.first()).await?;
        let metadata = player.metadata().await?;

        if metadata.is_empty() {
            return Ok(format!("{} reports no track metadata", player.id()));
        }

        let length = metadata
            .length()
            .map(|length| format_micros(i64::try_from(length.as_micros()).unwrap_or(i64::MAX)))
            .unwrap_or_else(|| "unknown".to_string());

        let mut output = format!(
            "Title:  {}\nArtist: {}\nAlbum:  {}\nLength: {}\n",
            metadata.title().unwrap_or("Unknown"),
            metadata.artists().join(", "),
            metadata.album().unwrap_or("Unknown"),
            length
        );

        let mut entries: Vec<(&str, String)> = metadata
            .iter()
            .map(|(key, value)| (key, format_value(value)))
            .collect();
        entries.sort();

        output.push_str("\nAll entries:\n");
        for (key, value) in entries {
            output.push_str(&format!("  {key:<24} {value}\n"));
        }

        Ok(output.trim_end().to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "info".to_string(),
            description: "Show metadata of the current track".to_string(),
            category: "media".to_string(),
            args: vec![player_arg()],
            examples: vec![
                "wayle-mpris media info".to_string(),
                "wayle-mpris media info firefox".to_string(),
            ],
        }
    }
}
