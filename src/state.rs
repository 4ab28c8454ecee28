use std::sync::Mutex;

use crate::services::storage::KeyValueStore;

pub struct AppState {
    pub store: Box<dyn KeyValueStore>,
    /// Time-slot list owned on behalf of clients between update events.
    pub available_times: Mutex<Vec<String>>,
}
