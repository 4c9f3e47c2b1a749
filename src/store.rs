//! Storage accessor for the task list.
//!
//! Tasks live in a single JSON file holding a flat array of task objects.
//! Reads are lenient: a missing or unparseable file yields an empty store,
//! and the corrupt content is simply replaced on the next save. Real I/O
//! failures while reading are errors, not an empty store.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::task::Task;

/// In-memory view of the storage file.
///
/// Serializes transparently as the task array itself, so the on-disk
/// format is a plain JSON array of task objects.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Store {
    pub tasks: Vec<Task>,
}

impl Store {
    /// Load the store from a JSON file. A missing or unparseable file is
    /// treated as an empty store; read I/O errors (permissions, EISDIR)
    /// propagate to the caller.
    pub fn load(path: &Path) -> std::io::Result<Self> {
        if !path.exists() {
            return Ok(Store::default());
        }
        let mut buf = String::new();
        File::open(path)?.read_to_string(&mut buf)?;
        Ok(serde_json::from_str(&buf).unwrap_or_default())
    }

    /// Save the store as pretty-printed JSON, fully replacing prior content.
    /// Writes via temp file + rename.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let tmp = path.with_extension("json.tmp");
        let mut f = File::create(&tmp)?;
        let data = serde_json::to_string_pretty(&self.tasks)
            .map_err(std::io::Error::other)?;
        f.write_all(data.as_bytes())?;
        f.flush()?;
        fs::rename(tmp, path)?;
        Ok(())
    }

    /// Generate the next available task ID: max existing ID + 1, or 1 when
    /// the store is empty. IDs are unique but not necessarily contiguous.
    pub fn next_id(&self) -> u64 {
        self.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = Store::load(&dir.path().join("nope.json")).unwrap();
        assert!(store.tasks.is_empty());
    }

    #[test]
    fn load_invalid_json_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(&path, "not json").unwrap();
        let store = Store::load(&path).unwrap();
        assert!(store.tasks.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        let mut store = Store::default();
        store.tasks.push(Task::new(1, "Buy milk"));
        store.tasks.push(Task::new(2, "Call plumber"));
        store.save(&path).unwrap();

        let loaded = Store::load(&path).unwrap();
        assert_eq!(loaded.tasks, store.tasks);
    }

    #[test]
    fn save_writes_plain_json_array() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        let mut store = Store::default();
        store.tasks.push(Task::new(1, "Buy milk"));
        store.save(&path).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["id"], 1);
        assert_eq!(value[0]["description"], "Buy milk");
        assert_eq!(value[0]["done"], false);
    }

    #[test]
    fn save_preserves_non_ascii() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        let mut store = Store::default();
        store.tasks.push(Task::new(1, "Café ☕"));
        store.save(&path).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("Café ☕"));
    }

    #[test]
    fn next_id_is_max_plus_one() {
        let mut store = Store::default();
        assert_eq!(store.next_id(), 1);
        store.tasks.push(Task::new(1, "a"));
        store.tasks.push(Task::new(7, "b"));
        assert_eq!(store.next_id(), 8);
    }

    #[test]
    fn load_propagates_read_errors() {
        // A directory at the storage path opens fine but fails to read.
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        fs::create_dir(&path).unwrap();
        assert!(Store::load(&path).is_err());
    }

    #[test]
    fn missing_done_defaults_to_false() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(&path, r#"[{"id": 1, "description": "old task"}]"#).unwrap();
        let store = Store::load(&path).unwrap();
        assert_eq!(store.tasks.len(), 1);
        assert!(!store.tasks[0].done);
    }
}
