//! Weldify CLI - welding workshop assistant.
//!
//! Provides commands for:
//! - `render`: Render assistant-style markup to HTML
//! - `calc`: Joint geometry, filler cost and cooling calculators
//! - `ask`: Parameter suggestions, defect analysis and general questions
//! - `jobs`, `trace`, `checklist`: Workshop records

mod commands;
mod error;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{AskCommand, CalcCommand, ChecklistCommand, JobsCommand, RenderArgs, TraceCommand};
use output::Output;

/// Weldify - welding workshop assistant.
#[derive(Parser)]
#[command(name = "weldify", version, about)]
struct Cli {
    /// Path to configuration file (default: auto-discover weldify.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory for saved jobs, logs and checklist state (overrides config).
    #[arg(long, global = true, env = "WELDIFY_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render markup from a file or stdin to HTML.
    Render(RenderArgs),
    /// Welding calculators.
    #[command(subcommand)]
    Calc(CalcCommand),
    /// Ask the welding assistant.
    #[command(subcommand)]
    Ask(AskCommand),
    /// Saved welding jobs.
    #[command(subcommand)]
    Jobs(JobsCommand),
    /// Weld traceability log.
    #[command(subcommand)]
    Trace(TraceCommand),
    /// Pre-work safety checklist.
    #[command(subcommand)]
    Checklist(ChecklistCommand),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let ctx = commands::Context {
        config_path: cli.config,
        data_dir: cli.data_dir,
    };

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Calc(cmd) => cmd.execute(&ctx),
        Commands::Ask(cmd) => cmd.execute(&ctx),
        Commands::Jobs(cmd) => cmd.execute(&ctx),
        Commands::Trace(cmd) => cmd.execute(&ctx),
        Commands::Checklist(cmd) => cmd.execute(&ctx),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
