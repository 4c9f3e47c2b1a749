//! Task data structure.
//!
//! This module defines the `Task` struct that represents a single todo item
//! as it is persisted in the storage file.

use serde::{Deserialize, Serialize};

/// A single todo item.
///
/// Serialized as a plain JSON object with `id`, `description` and `done`
/// keys. `done` defaults to false so documents written before the flag
/// existed still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub description: String,
    #[serde(default)]
    pub done: bool,
}

impl Task {
    /// Create a new open task.
    pub fn new(id: u64, description: impl Into<String>) -> Self {
        Task {
            id,
            description: description.into(),
            done: false,
        }
    }
}
