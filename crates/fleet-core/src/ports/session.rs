use async_trait::async_trait;
use fleet_shared::Session;

use crate::error::SessionError;

/// Client-side session storage - abstraction over where the login token
/// lives (memory, a file, browser storage).
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read the stored session, if any.
    async fn get(&self) -> Result<Option<Session>, SessionError>;

    /// Store a session, replacing any previous one.
    async fn set(&self, session: &Session) -> Result<(), SessionError>;

    /// Forget the stored session.
    async fn clear(&self) -> Result<(), SessionError>;
}
