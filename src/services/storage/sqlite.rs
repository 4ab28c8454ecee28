use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use super::KeyValueStore;
use crate::db::queries;
use crate::errors::AppError;

pub struct SqliteStore {
    db: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    pub fn new(db: Arc<Mutex<Connection>>) -> Self {
        Self { db }
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let db = self
            .db
            .lock()
            .map_err(|e| AppError::Persistence(e.to_string()))?;
        Ok(queries::get_value(&db, key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let db = self
            .db
            .lock()
            .map_err(|e| AppError::Persistence(e.to_string()))?;
        queries::set_value(&db, key, value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn setup_store() -> SqliteStore {
        let conn = db::init_db(":memory:").unwrap();
        SqliteStore::new(Arc::new(Mutex::new(conn)))
    }

    #[test]
    fn test_set_then_get() {
        let store = setup_store();
        store.set("Bookings", "{}").unwrap();
        assert_eq!(store.get("Bookings").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_missing_table_is_database_error() {
        let conn = Connection::open_in_memory().unwrap();
        let store = SqliteStore::new(Arc::new(Mutex::new(conn)));
        assert!(matches!(
            store.set("Bookings", "{}"),
            Err(AppError::Database(_))
        ));
    }
}
