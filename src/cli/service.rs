use std::sync::Arc;

use super::{
    CliError, CommandRegistry,
    context::CliContext,
    formatting::{
        format_category, format_command, format_description, format_header, format_subheader,
        format_usage,
    },
};
use crate::config::Config;

/// High-level service for managing and executing CLI commands.
pub struct CliService {
    registry: CommandRegistry,
}

impl CliService {
    /// Creates a new CLI service with all available commands registered.
    pub fn new(config: Config) -> Self {
        let context = Arc::new(CliContext::new(config));
        let mut registry = CommandRegistry::new(context);
        registry.register_all_commands();

        CliService { registry }
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// `help` as the category, or a missing command, prints help text instead.
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` if the command doesn't exist in the
    /// category, or the error produced by the command.
    pub async fn execute_command(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        if category == "help" {
            return match command_name {
                "" => Ok(self.help()),
                _ => self.category_help(command_name),
            };
        }

        if command_name.is_empty() || command_name == "help" {
            return self.category_help(category);
        }

        self.registry.execute(category, command_name, args).await
    }

    /// Lists all available commands organized by category.
    pub fn list_all(&self) -> Vec<(String, Vec<String>)> {
        self.registry.list_commands()
    }

    /// Overview of every category and command.
    pub fn help(&self) -> String {
        let mut output = format!(
            "{}\n\n{}\n  wayle-mpris <category> <command> [args]\n",
            format_header("wayle-mpris - control MPRIS2 media players"),
            format_subheader("Usage:")
        );

        for (category, commands) in self.list_all() {
            output.push_str(&format!("\n{}\n", format_category(&category)));

            for command in commands {
                let description = self
                    .registry
                    .command_metadata(&category, &command)
                    .map(|metadata| metadata.description)
                    .unwrap_or_default();

                output.push_str(&format!(
                    "  {} {}\n",
                    format_command(&format!("{command:<14}")),
                    format_description(&description)
                ));
            }
        }

        output
    }

    /// Detailed help for one category, including arguments and examples.
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` if the category does not exist
    pub fn category_help(&self, category: &str) -> Result<String, CliError> {
        let (_, commands) = self
            .list_all()
            .into_iter()
            .find(|(name, _)| name == category)
            .ok_or_else(|| {
                CliError::CommandNotFound(format!("Failed to find category '{category}'"))
            })?;

        let mut output = format!("{}\n", format_header(category));

        for command in commands {
            let metadata = self.registry.command_metadata(category, &command)?;
            let args: Vec<String> = metadata
                .args
                .iter()
                .map(|arg| {
                    if arg.required {
                        format!("<{}>", arg.name)
                    } else {
                        format!("[{}]", arg.name)
                    }
                })
                .collect();

            output.push_str(&format!(
                "\n  {} {}\n    {}\n",
                format_command(&metadata.name),
                args.join(" "),
                format_description(&metadata.description)
            ));

            for example in &metadata.examples {
                output.push_str(&format!("    {}\n", format_usage(example)));
            }
        }

        Ok(output)
    }
}
