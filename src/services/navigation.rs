use std::sync::Mutex;

/// Moves the user to another view once the form is done with them.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Records requested paths; the HTTP layer turns the last one into a redirect.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().map(|v| v.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<String> {
        self.visited.lock().ok().and_then(|v| v.last().cloned())
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        if let Ok(mut visited) = self.visited.lock() {
            visited.push(path.to_string());
        }
    }
}
