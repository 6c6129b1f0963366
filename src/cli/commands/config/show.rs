use std::sync::Arc;

use async_trait::async_trait;

use crate::cli::{CliContext, CliError, Command, CommandMetadata, CommandResult};

/// Command printing the effective configuration as TOML
pub struct ShowCommand {
    context: Arc<CliContext>,
}

impl ShowCommand {
    /// Creates a new ShowCommand
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for ShowCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        self.context
            .config()
            .to_toml()
            .map_err(|e| CliError::ConfigError(e.to_string()))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "show".to_string(),
            description: "Print the effective configuration, defaults included".to_string(),
            category: "config".to_string(),
            args: vec![],
            examples: vec!["wayle-mpris config show".to_string()],
        }
    }
}
