use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use fleet_core::SessionError;
use fleet_core::ports::SessionStore;
use fleet_shared::Session;

/// Session persisted as a small JSON file, so the console stays signed in
/// between runs. A missing file means no session.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn get(&self) -> Result<Option<Session>, SessionError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        serde_json::from_slice(&raw)
            .map(Some)
            .map_err(|e| SessionError::Serialization(e.to_string()))
    }

    async fn set(&self, session: &Session) -> Result<(), SessionError> {
        let raw = serde_json::to_vec_pretty(session)
            .map_err(|e| SessionError::Serialization(e.to_string()))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, raw).await?;
        tracing::debug!(path = %self.path.display(), "Session stored");
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_is_no_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));

        assert_eq!(store.get().await.unwrap(), None);
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_session_survives_new_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");
        let session = Session {
            token: "abc".to_string(),
        };

        FileSessionStore::new(&path).set(&session).await.unwrap();

        let reopened = FileSessionStore::new(&path);
        assert_eq!(reopened.get().await.unwrap(), Some(session));
        reopened.clear().await.unwrap();
        assert_eq!(reopened.get().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, b"{not json").unwrap();

        let result = FileSessionStore::new(&path).get().await;

        assert!(matches!(result, Err(SessionError::Serialization(_))));
    }
}
