use crate::core::TodoCollection;
use crate::error::{Result, TodoError};
use crate::snapshot::SessionSnapshot;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default session document name in the current directory
pub const SESSION_FILE: &str = "todos.json";

/// Session store handle. Persists only the inert snapshot; live entities
/// are rebuilt from it on every load.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        SessionStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Open the session document in the current directory
    pub fn open_current_dir() -> Self {
        Self::open(SESSION_FILE)
    }

    /// Load and rehydrate the collection. A missing document is the
    /// first-visit case and reads as an empty collection; a document that
    /// exists but does not parse is a malformed snapshot and fails.
    pub fn load(&self) -> Result<TodoCollection> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no session document, starting empty");
                return Ok(TodoCollection::new());
            }
            Err(e) => return Err(e.into()),
        };

        let snapshot: SessionSnapshot =
            serde_json::from_str(&raw).map_err(|e| TodoError::Rehydration(e.to_string()))?;
        TodoCollection::from_snapshot(&snapshot)
    }

    /// Serialize and write back. Called unconditionally at the end of every
    /// invocation, mutation or not.
    pub fn save(&self, collection: &TodoCollection) -> Result<()> {
        let raw = serde_json::to_string_pretty(&collection.to_snapshot())?;
        fs::write(&self.path, raw)?;
        debug!(path = %self.path.display(), lists = collection.len(), "session saved");
        Ok(())
    }
}
