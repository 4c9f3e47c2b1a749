use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// Simple, file-backed todo CLI.
/// Storage defaults to ./tasks.json or a path passed via --file.
#[derive(Parser)]
#[command(name = "todo", version, about = "Simple todo CLI (add, list)")]
pub struct Cli {
    /// Path to the tasks JSON file.
    #[arg(short, long, global = true, default_value = "tasks.json")]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}
