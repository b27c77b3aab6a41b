//! Router engine.
//!
//! Matches a location to a chain of routes (layouts first, leaf last), runs
//! the chain's loaders concurrently, follows redirects, and keeps the last
//! committed page so later navigations can skip loaders whose data is still
//! valid. Form submissions run the leaf route's action first.
//!
//! Navigations race freely: each one takes a generation number and only the
//! newest may commit. An older navigation that finishes late is reported as
//! [`Navigation::Superseded`] and leaves the router untouched.

mod boundary;
pub mod data;
pub mod gate;
mod location;
mod revalidate;
mod route;


use std::sync::atomic::{AtomicU64, Ordering};

use futures::future::{self, BoxFuture, FutureExt};
use tokio::sync::Mutex;

use crate::domain::FormData;
use crate::error::RouteError;

pub use boundary::ErrorPage;
pub use data::{Dashboard, FormOptions, LoaderData, LoginForm, Outcome};
pub use gate::{LOGIN_PATH, Private, login_redirect, private};
pub use location::Location;
pub use revalidate::{CacheKey, Cause, KeyFn, Revalidate};
pub use route::{
    Action, Loader, Params, Request, RouteContext, RouteDescriptor, RouteId, RouteKind,
};

/// Redirect hops followed before giving up.
const MAX_REDIRECTS: usize = 8;

/// One rendered route with its data.
#[derive(Debug, Clone)]
pub struct RouteMatch {
    pub id: RouteId,
    pub params: Params,
    pub data: LoaderData,
    pub(crate) key: Option<CacheKey>,
}

/// A fully resolved navigation.
#[derive(Debug, Clone)]
pub struct Page {
    pub location: Location,
    /// Successfully loaded routes, outermost first. When `error` is set this
    /// stops just above the failing route.
    pub matches: Vec<RouteMatch>,
    pub error: Option<ErrorPage>,
}

impl Page {
    pub fn leaf(&self) -> Option<&RouteMatch> {
        self.matches.last()
    }

    pub fn data(&self, id: RouteId) -> Option<&LoaderData> {
        self.matches.iter().find(|m| m.id == id).map(|m| &m.data)
    }

    pub fn is_not_found(&self) -> bool {
        self.leaf().is_some_and(|m| m.id == RouteId::NotFound)
    }
}

#[derive(Debug, Clone)]
pub enum Navigation {
    Rendered(Page),
    /// A newer navigation started before this one finished.
    Superseded,
}

impl Navigation {
    pub fn page(&self) -> Option<&Page> {
        match self {
            Navigation::Rendered(page) => Some(page),
            Navigation::Superseded => None,
        }
    }

    pub fn into_page(self) -> Option<Page> {
        match self {
            Navigation::Rendered(page) => Some(page),
            Navigation::Superseded => None,
        }
    }
}

/// Result forced onto the leaf route instead of running its loader.
enum LeafOverride {
    Data(LoaderData),
    Error(RouteError),
}

pub struct Router {
    routes: Vec<RouteDescriptor>,
    ctx: RouteContext,
    current: Mutex<Option<Page>>,
    generation: AtomicU64,
}

impl Router {
    pub fn new(routes: Vec<RouteDescriptor>, ctx: RouteContext) -> Self {
        Self {
            routes,
            ctx,
            current: Mutex::new(None),
            generation: AtomicU64::new(0),
        }
    }

    pub fn context(&self) -> &RouteContext {
        &self.ctx
    }

    /// The last committed page.
    pub async fn current(&self) -> Option<Page> {
        self.current.lock().await.clone()
    }

    /// Navigate to an href, running whichever loaders need to run.
    pub async fn navigate(&self, href: &str) -> Navigation {
        let generation = self.begin();
        let location = Location::parse(href);
        tracing::debug!(location = %location, generation, "Navigating");
        self.resolve(generation, location, Cause::Navigation, None)
            .await
    }

    /// Submit a form to the action of the route matching `href`.
    pub async fn submit(&self, href: &str, form: FormData) -> Navigation {
        let generation = self.begin();
        let location = Location::parse(href);
        tracing::debug!(location = %location, generation, "Submitting form");

        let Some((chain, params)) = self.match_chain(&location) else {
            return self.resolve(generation, location, Cause::Action, None).await;
        };
        let action = chain.last().and_then(|leaf| leaf.action.clone());
        let Some(action) = action else {
            let error = RouteError::MethodNotAllowed(location.path().to_string());
            return self
                .resolve(
                    generation,
                    location,
                    Cause::Navigation,
                    Some(LeafOverride::Error(error)),
                )
                .await;
        };

        let request = Request {
            location: location.clone(),
            params,
            form: Some(form),
        };

        match action.submit(&self.ctx, &request).await {
            Ok(Outcome::Redirect(to)) => self.resolve(generation, to, Cause::Action, None).await,
            Ok(Outcome::Data(data)) => {
                self.resolve(
                    generation,
                    location,
                    Cause::Action,
                    Some(LeafOverride::Data(data)),
                )
                .await
            }
            Err(error) => {
                tracing::warn!(location = %location, error = %error, "Action failed");
                self.resolve(
                    generation,
                    location,
                    Cause::Action,
                    Some(LeafOverride::Error(error)),
                )
                .await
            }
        }
    }

    fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_stale(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) != generation
    }

    fn find(&self, id: RouteId) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|r| r.id == id)
    }

    /// Leaf route plus its ancestors, outermost first.
    fn match_chain(&self, location: &Location) -> Option<(Vec<&RouteDescriptor>, Params)> {
        let (leaf, params) = self
            .routes
            .iter()
            .filter(|r| r.kind == RouteKind::Page && !r.is_catch_all())
            .find_map(|r| r.match_path(location).map(|params| (r, params)))
            .or_else(|| {
                self.routes
                    .iter()
                    .find(|r| r.is_catch_all())
                    .map(|r| (r, Params::new()))
            })?;

        let mut chain = vec![leaf];
        let mut parent = leaf.parent;
        while let Some(id) = parent {
            match self.find(id) {
                Some(route) => {
                    chain.push(route);
                    parent = route.parent;
                }
                None => break,
            }
        }
        chain.reverse();
        Some((chain, params))
    }

    async fn resolve(
        &self,
        generation: u64,
        mut location: Location,
        cause: Cause,
        mut leaf_override: Option<LeafOverride>,
    ) -> Navigation {
        for _ in 0..MAX_REDIRECTS {
            let previous = self.current.lock().await.clone();
            let leaf_result = leaf_override.take();

            let Some((chain, params)) = self.match_chain(&location) else {
                let error = RouteError::Failed(format!("No route matches {}", location.path()));
                let page = Page {
                    error: Some(ErrorPage::new(RouteId::NotFound, &error, &location)),
                    location,
                    matches: Vec::new(),
                };
                return self.commit(generation, page).await;
            };

            let request = Request::new(location.clone(), params.clone());
            let leaf_index = chain.len() - 1;
            let keys: Vec<Option<CacheKey>> =
                chain.iter().map(|r| r.revalidate.key(&request)).collect();

            let pending: Vec<BoxFuture<'_, Result<Outcome, RouteError>>> = chain
                .iter()
                .enumerate()
                .map(|(index, route)| {
                    if index == leaf_index && leaf_result.is_some() {
                        return future::ready(Ok(Outcome::Data(LoaderData::None))).boxed();
                    }
                    let Some(loader) = &route.loader else {
                        return future::ready(Ok(Outcome::Data(LoaderData::None))).boxed();
                    };
                    let rendered = previous
                        .as_ref()
                        .and_then(|page| page.matches.iter().find(|m| m.id == route.id));
                    match rendered {
                        Some(m)
                            if !route.revalidate.should_reload(
                                Some(&m.key),
                                keys[index].as_ref(),
                                cause,
                            ) =>
                        {
                            tracing::trace!(route = ?route.id, "Reusing loader data");
                            future::ready(Ok(Outcome::Data(m.data.clone()))).boxed()
                        }
                        _ => loader.load(&self.ctx, &request),
                    }
                })
                .collect();

            let mut results = future::join_all(pending).await;
            if self.is_stale(generation) {
                tracing::debug!(location = %location, "Discarding superseded navigation");
                return Navigation::Superseded;
            }

            if let Some(forced) = leaf_result {
                results[leaf_index] = match forced {
                    LeafOverride::Data(data) => Ok(Outcome::Data(data)),
                    LeafOverride::Error(error) => Err(error),
                };
            }

            let mut matches = Vec::with_capacity(chain.len());
            let mut redirect = None;
            let mut error = None;
            for ((route, result), key) in chain.iter().zip(results).zip(keys) {
                match result {
                    Ok(Outcome::Data(data)) => matches.push(RouteMatch {
                        id: route.id,
                        params: params.clone(),
                        data,
                        key,
                    }),
                    Ok(Outcome::Redirect(to)) => {
                        redirect = Some(to);
                        break;
                    }
                    Err(e) => {
                        tracing::warn!(route = ?route.id, location = %location, error = %e, "Route failed");
                        error = Some(ErrorPage::new(route.id, &e, &location));
                        break;
                    }
                }
            }

            match redirect {
                Some(to) => {
                    tracing::debug!(from = %location, to = %to, "Following redirect");
                    location = to;
                }
                None => {
                    let page = Page {
                        location,
                        matches,
                        error,
                    };
                    return self.commit(generation, page).await;
                }
            }
        }

        let error = RouteError::TooManyRedirects(location.path().to_string());
        tracing::error!(location = %location, "Redirect limit reached");
        let page = Page {
            error: Some(ErrorPage::new(RouteId::NotFound, &error, &location)),
            location,
            matches: Vec::new(),
        };
        self.commit(generation, page).await
    }

    async fn commit(&self, generation: u64, page: Page) -> Navigation {
        let mut current = self.current.lock().await;
        if self.is_stale(generation) {
            tracing::debug!(location = %page.location, "Discarding superseded navigation");
            return Navigation::Superseded;
        }
        *current = Some(page.clone());
        Navigation::Rendered(page)
    }
}
