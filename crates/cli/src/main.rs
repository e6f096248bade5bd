//! `moe-history`: render and inspect a project's recent history from the
//! command line.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Commands::Render {
            input,
            format,
            column_spacing,
            row_spacing,
            resolve_first_row,
            config,
        } => {
            let history = commands::load_history(input.as_deref())?;
            let options = commands::render_options(
                config.as_deref(),
                column_spacing,
                row_spacing,
                resolve_first_row,
            )?;
            println!("{}", commands::render(&history, options, format)?);
            Ok(ExitCode::SUCCESS)
        }

        Commands::Validate {
            input,
            resolve_first_row,
            json,
        } => {
            let history = commands::load_history(input.as_deref())?;
            let report = commands::validate(&history, resolve_first_row, json)?;
            print!("{}", report.output);
            Ok(if report.passed {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }

        Commands::Stats { input, json } => {
            let history = commands::load_history(input.as_deref())?;
            print!("{}", commands::stats(&history, json)?);
            Ok(ExitCode::SUCCESS)
        }

        Commands::Related {
            rev_id,
            input,
            column,
        } => {
            let history = commands::load_history(input.as_deref())?;
            print!("{}", commands::related(&history, column.into(), &rev_id)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
