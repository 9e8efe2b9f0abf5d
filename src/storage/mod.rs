//! # Storage - round log persistence
//!
//! Round logs are plain JSON files inside one directory (`storage.logs_dir`, default `logs/`):
//!
//! ```text
//! logs/
//! ├── today.json   ← [{"number":1,"win":true},{"number":2,"win":false}]
//! └── ...
//! ```
//!
//! - **Save** rewrites the whole file with the complete history every time (no append, no
//!   merge with what was there before). It is synchronous and its errors propagate.
//! - **Load** distinguishes an unreadable file ([`GuessError::HistoryNotFound`]) from one
//!   that reads but does not parse, which is treated as an empty history.
//!
//! No locking: two processes writing the same log race and the last rewrite wins.
//!
//! ```rust,no_run
//! use guessgame::game::round::History;
//! use guessgame::storage::HistoryStore;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = HistoryStore::new("logs");
//!     let mut history = History::new();
//!     history.record(true);
//!     store.save("today.json", &history)?;
//!     let loaded = store.load("today.json").await?;
//!     assert_eq!(loaded, history);
//!     Ok(())
//! }
//! ```

use log::{debug, warn};
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::errors::GuessError;
use crate::game::round::History;

#[derive(Debug, Clone)]
pub struct HistoryStore {
    logs_dir: PathBuf,
}

impl HistoryStore {
    pub fn new(logs_dir: impl AsRef<Path>) -> Self {
        Self {
            logs_dir: logs_dir.as_ref().to_path_buf(),
        }
    }

    pub fn logs_dir(&self) -> &Path {
        &self.logs_dir
    }

    /// Location of the round log called `name`. Root and drive prefixes are dropped, so an
    /// absolute name like `/tmp/x.json` still lands at `<logs_dir>/tmp/x.json`.
    pub fn path_for(&self, name: &str) -> PathBuf {
        let mut path = self.logs_dir.clone();
        for component in Path::new(name).components() {
            match component {
                Component::Prefix(_) | Component::RootDir => {}
                other => path.push(other),
            }
        }
        path
    }

    /// Overwrite the round log `name` with the full `history`.
    pub fn save(&self, name: &str, history: &History) -> Result<(), GuessError> {
        let path = self.path_for(name);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let data = serde_json::to_string(history)?;
        fs::write(&path, data)?;
        debug!("saved {} rounds to {}", history.len(), path.display());
        Ok(())
    }

    /// Read the round log `name`. Content that is not a round array yields an empty history.
    pub async fn load(&self, name: &str) -> Result<History, GuessError> {
        let path = self.path_for(name);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(source) => return Err(GuessError::HistoryNotFound { path, source }),
        };
        match serde_json::from_slice::<History>(&bytes) {
            Ok(history) => {
                debug!("loaded {} rounds from {}", history.len(), path.display());
                Ok(history)
            }
            Err(e) => {
                warn!(
                    "round log {} is not valid, treating it as empty: {}",
                    path.display(),
                    e
                );
                Ok(History::new())
            }
        }
    }
}
