//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// suitectl - schema migrations and legacy configuration for SuiteCRM projects
#[derive(Parser, Debug)]
#[command(name = "suitectl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect, generate, and apply schema migrations
    Schema(SchemaArgs),

    /// Legacy CRM configuration
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct SchemaArgs {
    #[command(subcommand)]
    pub command: SchemaCommands,
}

#[derive(Subcommand, Debug)]
pub enum SchemaCommands {
    /// Show the SQL the CRM's dry-run repair would execute
    Diff(DiffArgs),

    /// Turn the pending schema changes into a guarded migration class
    MakeMigration(MakeMigrationArgs),

    /// Apply pending migrations through the migration framework
    Migrate,

    /// List generated migrations, oldest first
    List,
}

/// Arguments for the schema diff command
#[derive(Args, Debug)]
pub struct DiffArgs {
    /// Read a captured dump instead of running the repair (`-` for stdin)
    #[arg(long)]
    pub from_file: Option<String>,
}

/// Arguments for the schema make-migration command
#[derive(Args, Debug)]
pub struct MakeMigrationArgs {
    /// One-line description stored in the migration
    pub description: Option<String>,

    /// Read a captured dump instead of running the repair (`-` for stdin)
    #[arg(long)]
    pub from_file: Option<String>,

    /// Print the migration to stdout instead of writing it
    #[arg(long)]
    pub print: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Render config_override.php from the process environment
    Render(RenderArgs),
}

/// Arguments for the config render command
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Output file (`-` for stdout; defaults to config_override_path)
    #[arg(short, long)]
    pub out: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "php")]
    pub format: RenderFormat,
}

/// Legacy configuration output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFormat {
    /// config_override.php
    Php,
    /// JSON, for inspection
    Json,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
