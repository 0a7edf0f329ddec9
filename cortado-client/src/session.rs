//! Session token storage
//!
//! The bearer token is process-wide state read by every request and by the
//! navigation guard. It stays behind this narrow interface so the backing
//! storage can be swapped without touching call sites.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Narrow interface over the cached bearer token
///
/// Implementations must be cheap to call; `get` is read on every request.
pub trait TokenStore: Send + Sync {
    /// Current token, if any
    fn get(&self) -> Option<String>;

    /// Replace the cached token
    fn set(&self, token: &str);

    /// Evict the cached token
    fn clear(&self);

    /// Whether a token is currently cached
    fn is_present(&self) -> bool {
        self.get().is_some()
    }
}

/// Process-local token store
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    inner: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.inner.lock().expect("token store poisoned").clone()
    }

    fn set(&self, token: &str) {
        *self.inner.lock().expect("token store poisoned") = Some(token.to_string());
    }

    fn clear(&self) {
        *self.inner.lock().expect("token store poisoned") = None;
    }
}

/// On-disk session file format
#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    token: Option<String>,
}

/// File-backed token store
///
/// Persists the token as JSON under the given directory so a session
/// survives process restarts. Storage failures are logged and the
/// in-memory copy stays authoritative for the rest of the session.
#[derive(Debug)]
pub struct FileTokenStore {
    file_path: PathBuf,
    cached: Mutex<Option<String>>,
}

impl FileTokenStore {
    /// Session file name within the session directory
    const FILE_NAME: &'static str = "session.json";

    /// Load (or initialize) a token store rooted at `dir`
    pub fn load(dir: &Path) -> Self {
        let file_path = dir.join(Self::FILE_NAME);
        let token = match std::fs::read_to_string(&file_path) {
            Ok(content) => match serde_json::from_str::<SessionFile>(&content) {
                Ok(session) => session.token,
                Err(e) => {
                    tracing::warn!("Discarding unreadable session file: {}", e);
                    None
                }
            },
            Err(_) => None,
        };

        Self {
            file_path,
            cached: Mutex::new(token),
        }
    }

    /// Path of the backing session file
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn persist(&self, token: Option<&str>) {
        let session = SessionFile {
            token: token.map(str::to_string),
        };
        let result = self
            .file_path
            .parent()
            .map(std::fs::create_dir_all)
            .unwrap_or(Ok(()))
            .and_then(|_| {
                let content = serde_json::to_string_pretty(&session)?;
                std::fs::write(&self.file_path, content)
            });
        if let Err(e) = result {
            tracing::warn!("Failed to persist session file: {}", e);
        }
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        self.cached.lock().expect("token store poisoned").clone()
    }

    fn set(&self, token: &str) {
        *self.cached.lock().expect("token store poisoned") = Some(token.to_string());
        self.persist(Some(token));
    }

    fn clear(&self) {
        *self.cached.lock().expect("token store poisoned") = None;
        self.persist(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryTokenStore::new();
        assert!(!store.is_present());

        store.set("tok-abc");
        assert!(store.is_present());
        assert_eq!(store.get().as_deref(), Some("tok-abc"));

        store.clear();
        assert!(!store.is_present());
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileTokenStore::load(temp_dir.path());
        assert!(!store.is_present());

        store.set("tok-persisted");
        assert!(store.file_path().exists());

        // A fresh load picks up the persisted token
        let reloaded = FileTokenStore::load(temp_dir.path());
        assert_eq!(reloaded.get().as_deref(), Some("tok-persisted"));

        reloaded.clear();
        let reloaded_again = FileTokenStore::load(temp_dir.path());
        assert!(!reloaded_again.is_present());
    }

    #[test]
    fn test_file_store_ignores_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("session.json"), "not json").unwrap();

        let store = FileTokenStore::load(temp_dir.path());
        assert!(!store.is_present());
    }
}
