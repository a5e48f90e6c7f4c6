//! # emform CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use emform_cli::catalog::{write_departments, write_schema};
use emform_cli::config::FormConfig;
use emform_cli::fill::{run_fill, FillArgs};
use emform_cli::validate::{run_validate, ValidateArgs};
use emform_schema::EmployeeSchema;

/// Employee form toolchain.
///
/// Fills the employee form interactively, validates submission documents,
/// and lists the schema and department choices.
#[derive(Parser, Debug)]
#[command(name = "emform", version, about)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Form configuration file (YAML).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Fill the employee form interactively.
    Fill(FillArgs),
    /// Validate a submission document.
    Validate(ValidateArgs),
    /// List the department choices.
    Departments,
    /// Print the Employee JSON Schema.
    Schema,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match dispatch(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

fn dispatch(cli: Cli) -> anyhow::Result<u8> {
    match cli.command {
        Commands::Departments => write_departments(&mut std::io::stdout().lock()),
        Commands::Schema => {
            let schema = EmployeeSchema::new()?;
            write_schema(&schema, &mut std::io::stdout().lock())
        }
        Commands::Validate(args) => {
            let schema = EmployeeSchema::new()?;
            run_validate(&args, &schema)
        }
        Commands::Fill(args) => {
            let config = FormConfig::load(cli.config.as_deref())?;
            tracing::debug!(?config, "form configuration loaded");
            let schema = Arc::new(EmployeeSchema::new()?);
            run_fill(&args, schema, config.form_options())
        }
    }
}
