//! Clap derive structures for the `scorpionctl` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// scorpionctl -- provision and audit Scorpion frame defaults
#[derive(Debug, Parser)]
#[command(
    name = "scorpionctl",
    version,
    about = "Set and audit default parameters on Evertz Scorpion frames",
    long_about = "Derives the target defaults for a frame from its alias and the\n\
        site configuration, then pushes them over the V-API control surface\n\
        or compares them against what the frame currently holds.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Device hostname or IP address
    #[arg(long, short = 'H', env = "SCORPION_HOST", global = true)]
    pub host: Option<String>,

    /// Device control-API port
    #[arg(long, short = 'P', env = "SCORPION_PORT", default_value = "80", global = true)]
    pub port: u16,

    /// Path to the site config JSON (default: platform config dir)
    #[arg(long, env = "SCORPION_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Path to the default-parameter template JSON
    #[arg(long, env = "SCORPION_PARAMS", global = true)]
    pub params: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'o', default_value = "table", global = true)]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Request timeout in seconds
    #[arg(long, env = "SCORPION_TIMEOUT", default_value = "30", global = true)]
    pub timeout: u64,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compare current device values against the derived defaults
    #[command(alias = "st")]
    Status,

    /// Clear the routing bank and push the derived defaults
    Apply(ApplyArgs),
}

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Reserved: request a factory reset before applying (no-op today)
    #[arg(long)]
    pub factory: bool,
}
