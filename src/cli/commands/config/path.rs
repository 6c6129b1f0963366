use async_trait::async_trait;

use crate::{
    cli::{CliError, Command, CommandMetadata, CommandResult},
    config::ConfigPaths,
};

/// Command printing where the configuration file is read from
pub struct PathCommand;

impl PathCommand {
    /// Creates a new PathCommand
    pub fn new() -> Self {
        Self
    }
}

impl Default for PathCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Command for PathCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let path = ConfigPaths::main_config().map_err(|e| CliError::ConfigError(e.to_string()))?;

        Ok(path.display().to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "path".to_string(),
            description: "Print the location of config.toml".to_string(),
            category: "config".to_string(),
            args: vec![],
            examples: vec!["wayle-mpris config path".to_string()],
        }
    }
}
