//! # todo - minimal file-backed task tracker
//!
//! A small command-line task tracker that persists a flat list of tasks to
//! a local JSON file.
//!
//! ```bash
//! # Add a task (description may span multiple arguments)
//! todo add Buy milk
//!
//! # List tasks
//! todo list
//!
//! # Use a different storage file
//! todo --file ~/notes/tasks.json add "Call plumber"
//! ```
//!
//! Storage is a plain JSON array of `{id, description, done}` objects,
//! defaulting to `tasks.json` in the current directory. A missing or
//! corrupt file is treated as an empty list.

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod store;
pub mod task;

use cli::Cli;
use cmd::{cmd_add, cmd_completions, cmd_list, Commands};

fn main() {
    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Add { description } => cmd_add(&cli.file, description),
        Commands::List => cmd_list(&cli.file),
        Commands::Completions { shell } => cmd_completions(shell),
    };
    std::process::exit(code);
}
