mod commands;
mod config;
mod telemetry;

use anyhow::Context;
use clap::Parser;
use config::{CliArgs, CliConfig, Command};
use std::io::{self, Write};
use std::process::ExitCode;
use telemetry::init_telemetry;

fn main() -> anyhow::Result<ExitCode> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = CliConfig::try_from(args)?;

    init_telemetry()?;

    let generator = tickid::global();
    if let Some(region) = config.region {
        generator
            .set_region(region)
            .context("invalid --region / TICKID_REGION")?;
    }
    if let Some(machine) = config.machine {
        generator
            .set_machine(machine)
            .context("invalid --machine / TICKID_MACHINE")?;
    }
    tracing::debug!(
        region = generator.region(),
        machine = generator.machine(),
        "using default generator"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let code = match config.command {
        Command::Generate { count, format } => {
            commands::generate(generator, count, format, &mut out)?;
            ExitCode::SUCCESS
        }
        Command::Inspect { id } => {
            commands::inspect(&id, &mut out)?;
            ExitCode::SUCCESS
        }
        Command::Validate { ids } => {
            if commands::validate(&ids, &mut out)? {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
    };
    out.flush()?;
    Ok(code)
}
