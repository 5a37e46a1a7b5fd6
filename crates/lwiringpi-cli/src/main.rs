use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;

use lwiringpi_cli::args::{Cli, Commands};
use lwiringpi_cli::commands::{board, call, constants, ops};
use lwiringpi_cli::load_config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter())).init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Ops => ops::list_operations(cli.json, &mut out)?,
        Commands::Constants => constants::list_constants(cli.json, &mut out)?,
        Commands::Call { op, args } => {
            let binding = open_binding(&cli)?;
            call::call_command(&binding, op, args, cli.json, &mut out)?;
        }
        Commands::Board => {
            let binding = open_binding(&cli)?;
            board::board_command(&binding, cli.json, &mut out)?;
        }
    }
    out.flush().context("Failed to flush stdout")
}

fn open_binding(cli: &Cli) -> Result<lwiringpi_core::Binding> {
    let config = load_config(cli.config.as_deref(), cli.backend.map(Into::into))?;
    config.open().context("Failed to open wiringPi backend")
}
