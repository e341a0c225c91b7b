//! A small durable key-value slot for UI state that outlives a session: the
//! chosen theme and the last loan request.
//!
//! The browser build backs this with `localStorage` (see `ui::compat`).
//! Native builds use [`FileSlot`], tests use [`MemorySlot`].

use std::cell::RefCell;
use std::collections::BTreeMap;

/// A string-to-string store that survives restarts.
///
/// Writes are best-effort: callers log failures and carry on.
pub trait KeyValueSlot {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// A slot that forgets everything when dropped.
#[derive(Debug, Default)]
pub struct MemorySlot {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueSlot for MemorySlot {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file_slot::FileSlot;

#[cfg(not(target_arch = "wasm32"))]
mod file_slot {
    use std::collections::BTreeMap;
    use std::fs;
    use std::path::PathBuf;

    use anyhow::Context;

    use super::KeyValueSlot;

    const FILE_NAME: &str = "local_storage.json";

    /// A slot persisted as one JSON object in `<dir>/local_storage.json`.
    ///
    /// The file is re-read on every access, so two windows of the app see
    /// each other's writes.
    #[derive(Debug, Clone)]
    pub struct FileSlot {
        path: PathBuf,
    }

    impl FileSlot {
        pub fn new(dir: impl Into<PathBuf>) -> Self {
            Self {
                path: dir.into().join(FILE_NAME),
            }
        }

        fn load(&self) -> anyhow::Result<BTreeMap<String, String>> {
            if !self.path.exists() {
                return Ok(BTreeMap::new());
            }
            let text = fs::read_to_string(&self.path)
                .with_context(|| format!("reading {}", self.path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing {}", self.path.display()))
        }
    }

    impl KeyValueSlot for FileSlot {
        fn get(&self, key: &str) -> Option<String> {
            match self.load() {
                Ok(mut entries) => entries.remove(key),
                Err(e) => {
                    dioxus_logger::tracing::warn!("local slot unreadable: {e:#}");
                    None
                }
            }
        }

        fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
            let mut entries = match self.load() {
                Ok(entries) => entries,
                Err(e) => {
                    dioxus_logger::tracing::warn!("local slot unreadable, starting fresh: {e:#}");
                    BTreeMap::new()
                }
            };
            entries.insert(key.to_string(), value.to_string());

            if let Some(dir) = self.path.parent() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("creating {}", dir.display()))?;
            }
            let text = serde_json::to_string_pretty(&entries)?;
            fs::write(&self.path, text)
                .with_context(|| format!("writing {}", self.path.display()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_slot_overwrites_values() {
        let slot = MemorySlot::new();
        assert_eq!(slot.get("theme"), None);
        slot.set("theme", "dark").unwrap();
        slot.set("theme", "light").unwrap();
        assert_eq!(slot.get("theme").as_deref(), Some("light"));
    }

    #[test]
    fn file_slot_persists_across_instances() {
        let dir = tempfile::TempDir::new().unwrap();

        FileSlot::new(dir.path()).set("createdLoan", r#"{"id":"7"}"#).unwrap();
        FileSlot::new(dir.path()).set("theme", "dark").unwrap();

        let reopened = FileSlot::new(dir.path());
        assert_eq!(reopened.get("createdLoan").as_deref(), Some(r#"{"id":"7"}"#));
        assert_eq!(reopened.get("theme").as_deref(), Some("dark"));
        assert_eq!(reopened.get("missing"), None);
    }

    #[test]
    fn file_slot_recovers_from_a_corrupt_file() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("local_storage.json"), "{not json").unwrap();

        let slot = FileSlot::new(dir.path());
        assert_eq!(slot.get("theme"), None);
        slot.set("theme", "dark").unwrap();
        assert_eq!(slot.get("theme").as_deref(), Some("dark"));
    }
}
