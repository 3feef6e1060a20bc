mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use common::{employee, empty_state, memory_store, state_with, ReadOnlyStorage, UnreadableStorage};
use employee_directory::directory::{
    add_employee, seed, set_current_page, set_search_term, set_view_mode, DirectoryStore,
    RootReducer, ViewMode,
};
use employee_directory::store::{
    snapshot, FileStorage, KeyValueStorage, MemoryStorage, DEFAULT_STORAGE_KEY, SNAPSHOT_VERSION,
};
use tempfile::TempDir;

#[test]
fn fresh_store_reloads_last_dispatched_state() {
    let storage = MemoryStorage::new();
    let s1 = empty_state();

    let first = DirectoryStore::new(RootReducer::new(), s1.clone(), Arc::new(storage.clone()));
    first.dispatch(add_employee(employee("1", "John", "Doe")));
    let s2 = (*first.get_state()).clone();

    let second = DirectoryStore::new(RootReducer::new(), s1.clone(), Arc::new(storage));
    assert_eq!(*second.get_state(), s2);
    assert_ne!(*second.get_state(), s1);
}

#[test]
fn persisted_snapshot_replaces_initial_state_wholesale() {
    let storage = MemoryStorage::new();
    {
        let store = DirectoryStore::new(RootReducer::new(), empty_state(), Arc::new(storage.clone()));
        store.dispatch(set_view_mode(ViewMode::List));
    }

    // Seeded initial state is ignored entirely, not merged.
    let store = DirectoryStore::new(
        RootReducer::new(),
        seed::initial_state(true),
        Arc::new(storage),
    );
    let state = store.get_state();
    assert!(state.employees.is_empty());
    assert_eq!(state.ui.view_mode, ViewMode::List);
}

#[test]
fn every_dispatch_writes_versioned_envelope() {
    let (store, storage) = memory_store(empty_state());
    assert!(storage.get(DEFAULT_STORAGE_KEY).unwrap().is_none());

    store.dispatch(set_search_term("ay"));

    let blob = storage.get(DEFAULT_STORAGE_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&blob).unwrap();
    assert_eq!(value["version"], SNAPSHOT_VERSION);
    assert_eq!(value["state"]["ui"]["searchTerm"], "ay");
}

#[test]
fn custom_key_is_used_for_reads_and_writes() {
    let storage = MemoryStorage::new();
    let store = DirectoryStore::with_key(
        RootReducer::new(),
        empty_state(),
        Arc::new(storage.clone()),
        "directoryTest",
    );
    assert_eq!(store.storage_key(), "directoryTest");

    store.dispatch(set_current_page(4));

    assert!(storage.get(DEFAULT_STORAGE_KEY).unwrap().is_none());
    assert!(storage.get("directoryTest").unwrap().is_some());
}

#[test]
fn corrupt_blob_falls_back_to_initial_state() {
    let storage = MemoryStorage::new();
    storage.set(DEFAULT_STORAGE_KEY, "{\"employees\": [").unwrap();
    let initial = state_with(vec![employee("1", "John", "Doe")]);

    let store = DirectoryStore::new(RootReducer::new(), initial.clone(), Arc::new(storage));
    assert_eq!(*store.get_state(), initial);
}

#[test]
fn future_snapshot_version_falls_back_to_initial_state() {
    let storage = MemoryStorage::new();
    storage
        .set(
            DEFAULT_STORAGE_KEY,
            "{\"version\": 99, \"state\": {\"whatever\": true}}",
        )
        .unwrap();

    let store = DirectoryStore::new(RootReducer::new(), empty_state(), Arc::new(storage));
    assert_eq!(*store.get_state(), empty_state());
}

#[test]
fn legacy_bare_state_loads_and_is_upgraded_on_next_write() {
    let storage = MemoryStorage::new();
    let legacy = serde_json::to_string(&state_with(vec![employee("7", "Lisa", "Taylor")])).unwrap();
    storage.set(DEFAULT_STORAGE_KEY, &legacy).unwrap();

    let store = DirectoryStore::new(RootReducer::new(), empty_state(), Arc::new(storage.clone()));
    assert_eq!(store.get_state().employees[0].first_name, "Lisa");

    store.dispatch(set_current_page(1));
    let blob = storage.get(DEFAULT_STORAGE_KEY).unwrap().unwrap();
    let decoded = snapshot::decode::<employee_directory::directory::ApplicationState>(&blob).unwrap();
    assert!(!decoded.needs_upgrade());
    assert_eq!(decoded.state.employees.len(), 1);
}

#[test]
fn unreadable_storage_falls_back_to_initial_state() {
    let initial = seed::initial_state(true);
    let store = DirectoryStore::new(RootReducer::new(), initial.clone(), Arc::new(UnreadableStorage));
    assert_eq!(*store.get_state(), initial);
}

#[test]
fn write_failure_keeps_state_and_still_notifies() {
    let storage = Arc::new(ReadOnlyStorage::default());
    let store = DirectoryStore::new(RootReducer::new(), empty_state(), storage.clone());
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_clone = Arc::clone(&hits);
    let _sub = store.subscribe(move || {
        hits_clone.fetch_add(1, Ordering::SeqCst);
    });

    let action = add_employee(employee("1", "John", "Doe"));
    assert_eq!(store.dispatch(action.clone()), action);

    assert_eq!(store.get_state().employees.len(), 1);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert_eq!(storage.write_attempts.load(Ordering::SeqCst), 1);
}

#[test]
fn file_storage_round_trip_across_store_instances() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("data");

    {
        let store = DirectoryStore::new(
            RootReducer::new(),
            seed::initial_state(true),
            Arc::new(FileStorage::new(&data_dir)),
        );
        store.dispatch(add_employee(employee("new-1", "Meryem", "Kaya")));
        store.dispatch(set_current_page(2));
    }

    let storage = FileStorage::new(&data_dir);
    assert!(storage.path_for(DEFAULT_STORAGE_KEY).exists());

    let store = DirectoryStore::new(RootReducer::new(), empty_state(), Arc::new(storage));
    let state = store.get_state();
    assert_eq!(state.employees.len(), 16);
    assert_eq!(state.employees[15].id.as_str(), "new-1");
    assert_eq!(state.ui.current_page, 2);
}
