//! suitectl - schema migrations and legacy configuration for SuiteCRM projects

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod context;

use cli::{Cli, Commands, ConfigCommands, SchemaCommands};
use commands::common::ExitCode;
use commands::{config_render, list, make_migration, migrate, schema_diff};

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    match run(&cli).await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<ExitCode>() {
            Some(ExitCode(code)) => std::process::ExitCode::from(exit_status_byte(*code)),
            None => {
                eprintln!("Error: {err:#}");
                std::process::ExitCode::FAILURE
            }
        },
    }
}

async fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Schema(schema) => match &schema.command {
            SchemaCommands::Diff(args) => schema_diff::execute(args, &cli.global).await,
            SchemaCommands::MakeMigration(args) => {
                make_migration::execute(args, &cli.global).await
            }
            SchemaCommands::Migrate => migrate::execute(&cli.global).await,
            SchemaCommands::List => list::execute(&cli.global).await,
        },
        Commands::Config(config) => match &config.command {
            ConfigCommands::Render(args) => config_render::execute(args, &cli.global).await,
        },
    }
}

/// Log records go to stderr; `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn exit_status_byte(code: i32) -> u8 {
    u8::try_from(code).ok().filter(|c| *c != 0).unwrap_or(1)
}
