//! Test utilities shared by the integration tests.

use std::path::Path;

use guessgame::storage::HistoryStore;

/// A scratch logs directory and a store rooted in it. Keep the `TempDir` alive for the test.
#[allow(dead_code)] // Not every test binary uses every helper.
pub fn scratch_store() -> (tempfile::TempDir, HistoryStore) {
    let tmp = tempfile::tempdir().expect("tempdir");
    let store = HistoryStore::new(tmp.path().join("logs"));
    (tmp, store)
}

/// Write raw content to the round log `name`, creating the logs dir as needed.
#[allow(dead_code)]
pub fn write_log(store: &HistoryStore, name: &str, content: &str) {
    std::fs::create_dir_all(store.logs_dir()).expect("create logs dir");
    std::fs::write(store.path_for(name), content).expect("write round log");
}

/// Read back the raw content of a round log.
#[allow(dead_code)]
pub fn read_log(path: &Path) -> String {
    std::fs::read_to_string(path).expect("read round log")
}
