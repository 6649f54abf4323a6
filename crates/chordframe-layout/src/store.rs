//! Persistence of the vertical split ratio.

use std::collections::HashMap;

use chordframe_common::HostError;

/// Key-value storage holding the split ratio as a decimal string.
pub trait RatioStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), HostError>;
}

/// In-process store, for hosts without web storage and for tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl RatioStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), HostError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
