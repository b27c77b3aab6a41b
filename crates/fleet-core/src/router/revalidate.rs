//! When an already rendered route reruns its loader.

use super::route::Request;

/// Declarative cache key for a loader's inputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(Vec<(String, String)>);

impl CacheKey {
    pub fn new<K, V>(parts: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            parts
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Derives a route's cache key from the request.
pub type KeyFn = fn(&Request) -> CacheKey;

/// What triggered a resolution of the route chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cause {
    /// Link follow, history move or redirect after a loader.
    Navigation,
    /// Redirect or inline result after a form submission.
    Action,
}

#[derive(Debug, Clone, Copy)]
pub enum Revalidate {
    /// Reload whenever the route is part of a navigation.
    Always,
    /// Load the first time the route renders and keep that data.
    Once,
    /// Reload when the key changes, or after any action.
    OnKeyChange(KeyFn),
}

impl Revalidate {
    pub fn key(&self, request: &Request) -> Option<CacheKey> {
        match self {
            Revalidate::OnKeyChange(key_fn) => Some(key_fn(request)),
            Revalidate::Always | Revalidate::Once => None,
        }
    }

    /// Decide whether to rerun the loader.
    ///
    /// `previous` is the key the route was rendered with, `None` when the
    /// route is not currently rendered.
    pub fn should_reload(
        &self,
        previous: Option<&Option<CacheKey>>,
        next: Option<&CacheKey>,
        cause: Cause,
    ) -> bool {
        let Some(previous) = previous else {
            return true;
        };

        match self {
            Revalidate::Always => true,
            Revalidate::Once => false,
            Revalidate::OnKeyChange(_) => {
                cause == Cause::Action || previous.as_ref() != next
            }
        }
    }
}
