//! Command implementations for the CLI interface.
//!
//! Subcommand definitions plus the handlers behind them. Handlers return a
//! process exit code; `main` passes it to `std::process::exit`.

use std::path::Path;

use clap::{CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::store::Store;
use crate::task::Task;

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task.
    Add {
        /// Task description. Multiple words are joined with spaces.
        #[arg(trailing_var_arg = true)]
        description: Vec<String>,
    },

    /// List tasks.
    List,

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Join description words and trim surrounding whitespace.
pub fn join_description(words: &[String]) -> String {
    words.join(" ").trim().to_string()
}

/// Format a single task line for `list` output.
pub fn format_task_line(task: &Task) -> String {
    let status = if task.done { "x" } else { " " };
    format!("[{}] {}: {}", status, task.id, task.description)
}

/// Format the confirmation line printed after a successful add.
pub fn format_added_line(task: &Task) -> String {
    format!("Added task #{}: {}", task.id, task.description)
}

/// Render the full `list` output: the empty-list message, or one line per
/// task in insertion order.
pub fn render_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks found.".to_string();
    }
    tasks
        .iter()
        .map(format_task_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Add a new task to the storage file.
pub fn cmd_add(file: &Path, description: Vec<String>) -> i32 {
    let description = join_description(&description);
    if description.is_empty() {
        eprintln!("Error: empty task description.");
        return 2;
    }

    let mut store = match Store::load(file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to read tasks: {e}");
            return 1;
        }
    };
    let task = Task::new(store.next_id(), description);
    let line = format_added_line(&task);
    store.tasks.push(task);
    if let Err(e) = store.save(file) {
        eprintln!("Failed to save tasks: {e}");
        return 1;
    }
    println!("{line}");
    0
}

/// List all tasks in insertion order.
pub fn cmd_list(file: &Path) -> i32 {
    let store = match Store::load(file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to read tasks: {e}");
            return 1;
        }
    };
    println!("{}", render_list(&store.tasks));
    0
}

/// Emit a completion script for the given shell on stdout.
pub fn cmd_completions(shell: Shell) -> i32 {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
    0
}
