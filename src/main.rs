//! wayle-mpris - command-line control for MPRIS2 media players.

use std::{env, error::Error, process};

use tracing::debug;
use wayle_mpris::{
    cli::{CliService, formatting::format_error},
    config::Config,
    tracing_config,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    };

    tracing_config::init(config.general.log_level)?;
    debug!(?args, "Starting wayle-mpris");

    run_cli_command(config, &args).await
}

/// Executes a CLI command through the CliService.
///
/// The first argument selects the category and the second the command; the
/// rest are passed to the command. With no arguments the overview help is
/// printed.
///
/// # Errors
/// Command failures are printed to stderr and exit with status 1.
async fn run_cli_command(config: Config, args: &[String]) -> Result<(), Box<dyn Error>> {
    let cli_service = CliService::new(config);

    let category = args.first().map(|s| s.as_str()).unwrap_or("help");
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("");
    let command_args = args.get(2..).unwrap_or(&[]);

    let result = cli_service
        .execute_command(category, command, command_args)
        .await;

    match result {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    }
}
