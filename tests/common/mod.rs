//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use employee_directory::directory::{
    ApplicationState, Department, DirectoryStore, Employee, EmployeeId, Position, RootReducer,
    ViewState,
};
use employee_directory::store::{KeyValueStorage, MemoryStorage, StorageError};
use parking_lot::Mutex;

pub fn employee(id: &str, first: &str, last: &str) -> Employee {
    Employee {
        id: EmployeeId::new(id),
        first_name: first.to_string(),
        last_name: last.to_string(),
        date_of_employment: "23/09/2022".to_string(),
        date_of_birth: "23/09/1990".to_string(),
        phone: "+(90) 532 123 45 67".to_string(),
        email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        department: Department::Tech,
        position: Position::Medior,
    }
}

pub fn empty_state() -> ApplicationState {
    ApplicationState {
        employees: Vec::new(),
        ui: ViewState::default(),
    }
}

pub fn state_with(employees: Vec<Employee>) -> ApplicationState {
    ApplicationState {
        employees,
        ui: ViewState::default(),
    }
}

/// Store over fresh in-memory storage. Returns the storage for inspection.
pub fn memory_store(initial: ApplicationState) -> (DirectoryStore, MemoryStorage) {
    let storage = MemoryStorage::new();
    let store = DirectoryStore::new(RootReducer::new(), initial, Arc::new(storage.clone()));
    (store, storage)
}

/// Storage whose writes always fail; reads return whatever was preloaded.
#[derive(Default)]
pub struct ReadOnlyStorage {
    pub preloaded: Option<String>,
    pub write_attempts: AtomicUsize,
}

impl KeyValueStorage for ReadOnlyStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.preloaded.clone())
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        self.write_attempts.fetch_add(1, Ordering::SeqCst);
        Err(StorageError::Unavailable {
            reason: "quota exceeded".to_string(),
        })
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

/// Storage whose reads always fail.
pub struct UnreadableStorage;

impl KeyValueStorage for UnreadableStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable {
            reason: "disk offline".to_string(),
        })
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

/// Shared call log for ordering assertions.
pub type CallLog = Arc<Mutex<Vec<String>>>;

pub fn call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}
