//! Route descriptors and the loader/action extension points.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;

use super::data::Outcome;
use super::location::Location;
use super::revalidate::Revalidate;
use crate::domain::FormData;
use crate::error::RouteError;
use crate::ports::{InventoryApi, SessionStore};

/// Every route the application knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteId {
    Root,
    Dashboard,
    Vehicles,
    VehicleDetails,
    DestroyVehicle,
    AddVehicle,
    Login,
    NotFound,
}

/// Path parameters captured by `:name` segments.
pub type Params = BTreeMap<String, String>;

/// What a loader or action sees of the navigation.
#[derive(Debug, Clone)]
pub struct Request {
    pub location: Location,
    pub params: Params,
    /// Present for form submissions only.
    pub form: Option<FormData>,
}

impl Request {
    pub fn new(location: Location, params: Params) -> Self {
        Self {
            location,
            params,
            form: None,
        }
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Collaborators injected into every loader and action.
#[derive(Clone)]
pub struct RouteContext {
    pub api: Arc<dyn InventoryApi>,
    pub session: Arc<dyn SessionStore>,
}

impl RouteContext {
    pub fn new(api: Arc<dyn InventoryApi>, session: Arc<dyn SessionStore>) -> Self {
        Self { api, session }
    }
}

/// Fetches data before a route renders.
#[async_trait]
pub trait Loader: Send + Sync {
    async fn load(&self, ctx: &RouteContext, request: &Request) -> Result<Outcome, RouteError>;
}

/// Performs a mutation for a form submission.
#[async_trait]
pub trait Action: Send + Sync {
    async fn submit(&self, ctx: &RouteContext, request: &Request) -> Result<Outcome, RouteError>;
}

/// Whether a route renders on its own or only wraps child routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    Layout,
    Page,
}

/// Named configuration entry for one route.
#[derive(Clone)]
pub struct RouteDescriptor {
    pub id: RouteId,
    /// Full pattern, `:name` segments capture parameters, `*` matches anything.
    pub path: &'static str,
    pub kind: RouteKind,
    pub parent: Option<RouteId>,
    pub loader: Option<Arc<dyn Loader>>,
    pub action: Option<Arc<dyn Action>>,
    pub revalidate: Revalidate,
}

impl RouteDescriptor {
    pub fn page(id: RouteId, path: &'static str) -> Self {
        Self {
            id,
            path,
            kind: RouteKind::Page,
            parent: None,
            loader: None,
            action: None,
            revalidate: Revalidate::Always,
        }
    }

    pub fn layout(id: RouteId, path: &'static str) -> Self {
        Self {
            kind: RouteKind::Layout,
            ..Self::page(id, path)
        }
    }

    pub fn parent(mut self, parent: RouteId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn loader(mut self, loader: impl Loader + 'static) -> Self {
        self.loader = Some(Arc::new(loader));
        self
    }

    pub fn action(mut self, action: impl Action + 'static) -> Self {
        self.action = Some(Arc::new(action));
        self
    }

    pub fn revalidate(mut self, policy: Revalidate) -> Self {
        self.revalidate = policy;
        self
    }

    pub fn is_catch_all(&self) -> bool {
        self.path == "*"
    }

    /// Match this route's pattern against a whole pathname.
    pub fn match_path(&self, location: &Location) -> Option<Params> {
        if self.is_catch_all() {
            return Some(Params::new());
        }

        let pattern: Vec<&str> = self.path.split('/').filter(|s| !s.is_empty()).collect();
        let segments: Vec<&str> = location.segments().collect();
        if pattern.len() != segments.len() {
            return None;
        }

        let mut params = Params::new();
        for (expected, actual) in pattern.iter().zip(segments) {
            match expected.strip_prefix(':') {
                Some(name) => {
                    let value = urlencoding::decode(actual)
                        .map(|v| v.into_owned())
                        .unwrap_or_else(|_| actual.to_string());
                    params.insert(name.to_string(), value);
                }
                None if *expected == actual => {}
                None => return None,
            }
        }
        Some(params)
    }
}

impl std::fmt::Debug for RouteDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteDescriptor")
            .field("id", &self.id)
            .field("path", &self.path)
            .field("kind", &self.kind)
            .field("parent", &self.parent)
            .field("loader", &self.loader.is_some())
            .field("action", &self.action.is_some())
            .finish()
    }
}
