//! Configuration inspection commands.
mod path;
mod schema;
mod show;

use std::sync::Arc;

pub use path::PathCommand;
pub use schema::SchemaCommand;
pub use show::ShowCommand;

use crate::cli::{CliContext, CommandRegistry};

/// Registers all configuration-related commands with the command registry.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `context` - Shared context holding the loaded configuration
pub fn register_commands(registry: &mut CommandRegistry, context: Arc<CliContext>) {
    const CATEGORY_NAME: &str = "config";

    registry.register_command(CATEGORY_NAME, Box::new(ShowCommand::new(context)));
    registry.register_command(CATEGORY_NAME, Box::new(SchemaCommand::new()));
    registry.register_command(CATEGORY_NAME, Box::new(PathCommand::new()));
}
