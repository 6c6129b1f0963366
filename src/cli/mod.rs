//! Command-line interface for controlling media players.
//!
//! Commands are organized by category (`media`, `config`) and generate
//! their help text from metadata.

mod commands;
mod context;
pub mod formatting;
mod registry;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use context::CliContext;
pub use registry::CommandRegistry;
pub use service::CliService;
pub use types::{ArgType, CliError, Command, CommandArg, CommandMetadata, CommandResult};
