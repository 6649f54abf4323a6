//! `RatioStore` over `window.localStorage`.

use chordframe_common::HostError;
use chordframe_layout::RatioStore;
use tracing::warn;
use web_sys::{Storage, Window};

use crate::frames::describe;

/// Values are stored as plain strings, never JSON-encoded.
///
/// Storage can be missing (disabled, sandboxed frame); reads then find
/// nothing and writes fail with [`HostError::StorageUnavailable`].
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn new(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                warn!(error = %describe(&e), "localStorage is not accessible");
                None
            }
        };
        Self { storage }
    }
}

impl RatioStore for LocalStore {
    fn read(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), HostError> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| HostError::StorageUnavailable("localStorage".into()))?;
        storage
            .set_item(key, value)
            .map_err(|e| HostError::StorageWrite(describe(&e)))
    }
}
