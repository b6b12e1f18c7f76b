mod cli;
mod commands;
mod config;
mod file_utils;
mod logging;

use anyhow::Result;
use clap::Parser;
use config::Config;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(&cli.config)?;
    logging::init(config.log_dir.as_deref())?;

    match cli.command {
        Commands::Dump {
            save,
            profile,
            output,
            width,
        } => {
            commands::dump::handle(
                &config,
                save.as_deref(),
                profile.as_deref(),
                output.as_deref(),
                width,
            )?;
        }

        Commands::Profiles => {
            commands::profiles::handle(&config)?;
        }

        Commands::Schemas => {
            commands::schemas::handle();
        }
    }

    Ok(())
}
