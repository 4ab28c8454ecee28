use std::collections::HashMap;
use std::sync::Mutex;

use super::KeyValueStore;
use crate::errors::AppError;

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| AppError::Persistence(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| AppError::Persistence(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
