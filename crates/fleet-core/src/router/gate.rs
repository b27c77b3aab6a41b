//! Authentication gate for private route loaders.

use async_trait::async_trait;

use super::data::Outcome;
use super::location::Location;
use super::route::{Loader, Request, RouteContext};
use crate::error::RouteError;
use crate::ports::SessionStore;

/// Where unauthenticated navigations are sent.
pub const LOGIN_PATH: &str = "/login";

/// Wraps a loader so it only runs when a session is stored.
///
/// Without a session the navigation is redirected to the login route with
/// the requested pathname in `to`. The gate never fails on its own; errors
/// from the wrapped loader pass through untouched.
pub struct Private<L> {
    inner: L,
}

pub fn private<L: Loader>(loader: L) -> Private<L> {
    Private { inner: loader }
}

/// `/login?to=<path>` for the given location.
pub fn login_redirect(location: &Location) -> Location {
    Location::new(LOGIN_PATH).with_query("to", location.path())
}

async fn has_session(store: &dyn SessionStore) -> bool {
    match store.get().await {
        Ok(session) => session.is_some_and(|s| !s.token.is_empty()),
        Err(e) => {
            tracing::warn!(error = %e, "Session storage unreadable, treating as signed out");
            false
        }
    }
}

#[async_trait]
impl<L: Loader> Loader for Private<L> {
    async fn load(&self, ctx: &RouteContext, request: &Request) -> Result<Outcome, RouteError> {
        if !has_session(ctx.session.as_ref()).await {
            tracing::debug!(path = %request.location.path(), "No session, redirecting to login");
            return Ok(Outcome::Redirect(login_redirect(&request.location)));
        }
        self.inner.load(ctx, request).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::router::data::LoaderData;
    use crate::router::route::Params;
    use crate::testing::{FakeApi, MemorySession, ctx_with};
    use fleet_shared::Session;

    struct Counting(Arc<AtomicUsize>);

    #[async_trait]
    impl Loader for Counting {
        async fn load(&self, _: &RouteContext, _: &Request) -> Result<Outcome, RouteError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(Outcome::Data(LoaderData::None))
        }
    }

    fn request(href: &str) -> Request {
        Request::new(Location::parse(href), Params::new())
    }

    #[tokio::test]
    async fn test_redirects_without_session_and_skips_loader() {
        let calls = Arc::new(AtomicUsize::new(0));
        let gate = private(Counting(calls.clone()));
        let ctx = ctx_with(FakeApi::new(), MemorySession::empty());

        let outcome = gate
            .load(&ctx, &request("/vehicles/abc?page=2"))
            .await
            .unwrap();

        let Outcome::Redirect(to) = outcome else {
            panic!("expected redirect, got {outcome:?}");
        };
        assert_eq!(to.path(), "/login");
        assert_eq!(to.query("to"), Some("/vehicles/abc"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_runs_loader_with_session() {
        let calls = Arc::new(AtomicUsize::new(0));
        let gate = private(Counting(calls.clone()));
        let session = MemorySession::with(Session {
            token: "abc".to_string(),
        });
        let ctx = ctx_with(FakeApi::new(), session);

        let outcome = gate.load(&ctx, &request("/")).await.unwrap();

        assert_eq!(outcome, Outcome::Data(LoaderData::None));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unreadable_session_counts_as_signed_out() {
        let calls = Arc::new(AtomicUsize::new(0));
        let gate = private(Counting(calls.clone()));
        let ctx = ctx_with(FakeApi::new(), MemorySession::broken());

        let outcome = gate.load(&ctx, &request("/add")).await.unwrap();

        assert!(matches!(outcome, Outcome::Redirect(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
