//! fm-roles CLI
//!
//! Turns the in-possession and out-of-possession scouting tables into the
//! `roles.json` file used by the player-rating tool.

mod cli_types;
mod commands;
mod error;
mod logger;

use std::process::ExitCode;

use clap::Parser;

use cli_types::{Cli, Commands, GenerateArgs};
use error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logger::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let root = cli.root.as_deref();
    let config_file = cli.config.as_deref();

    match cli.command {
        None => {
            let config = commands::resolve_config(config_file, root, &GenerateArgs::default())?;
            commands::run_generate(&config)
        }
        Some(Commands::Generate(args)) => {
            let config = commands::resolve_config(config_file, root, &args)?;
            commands::run_generate(&config)
        }
        Some(Commands::List {
            file,
            phase,
            weights,
        }) => {
            let path = match file {
                Some(f) => f,
                None => {
                    commands::resolve_config(config_file, root, &GenerateArgs::default())?
                        .output_path()
                }
            };
            commands::run_list(&path, phase, weights)
        }
    }
}
