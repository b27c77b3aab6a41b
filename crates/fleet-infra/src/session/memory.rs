use async_trait::async_trait;
use tokio::sync::RwLock;

use fleet_core::SessionError;
use fleet_core::ports::SessionStore;
use fleet_shared::Session;

/// Session held for the lifetime of the process.
#[derive(Default)]
pub struct InMemorySessionStore {
    session: RwLock<Option<Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self) -> Result<Option<Session>, SessionError> {
        Ok(self.session.read().await.clone())
    }

    async fn set(&self, session: &Session) -> Result<(), SessionError> {
        *self.session.write().await = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionError> {
        *self.session.write().await = None;
        Ok(())
    }
}
