use async_trait::async_trait;
use thiserror::Error;

use crate::error::MprisError;

/// Errors that can occur during CLI command execution.
#[derive(Error, Debug)]
pub enum CliError {
    /// A command or category was not found in the registry.
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// Wrong number of arguments for a command.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// A single argument could not be used.
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// Name of the argument
        arg: String,
        /// Why it was rejected
        reason: String,
    },

    /// A service the command depends on is unavailable.
    #[error("{service} error: {details}")]
    ServiceError {
        /// Service name
        service: String,
        /// Failure details
        details: String,
    },

    /// A player operation failed.
    #[error(transparent)]
    Media(#[from] MprisError),

    /// An error occurred in the configuration system.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result of a command: text to print on success.
pub type CommandResult = Result<String, CliError>;

/// Specification for a single command argument.
#[derive(Debug, Clone)]
pub struct CommandArg {
    /// The name of the argument (e.g., "player-id", "offset").
    pub name: String,

    /// Human-readable description of what this argument does.
    pub description: String,

    /// Whether this argument is required for command execution.
    pub required: bool,

    /// The expected type of this argument for help display.
    pub value_type: ArgType,
}

/// Type classification for command arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    /// A general string value.
    String,

    /// A numeric value (integer or float).
    Number,

    /// A boolean-like value (on/off, true/false).
    Boolean,

    /// A time value in seconds or m:ss.
    Time,
}

/// Complete metadata for a CLI command.
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    /// The command name (e.g., "play", "seek").
    pub name: String,

    /// Brief description of what this command does.
    pub description: String,

    /// Specification of all arguments this command accepts.
    pub args: Vec<CommandArg>,

    /// Example usage strings to show in help text.
    pub examples: Vec<String>,

    /// Category this command belongs to (e.g., "media", "config").
    pub category: String,
}

/// Interface implemented by every CLI command.
///
/// Commands receive their dependencies through their constructors. The
/// registry checks argument counts against [`Command::metadata`] before
/// calling [`Command::execute`].
#[async_trait]
pub trait Command: Send + Sync {
    /// Executes the command with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `CliError` for invalid argument values, unavailable services
    /// or failed player operations
    async fn execute(&self, args: &[String]) -> CommandResult;

    /// Returns the complete metadata for this command.
    fn metadata(&self) -> CommandMetadata;
}
