use super::location::Location;
use super::route::RouteId;
use crate::error::RouteError;

/// What the nearest error boundary renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPage {
    /// Route whose loader or action failed.
    pub route: RouteId,
    pub message: String,
    /// A link home is offered everywhere except at `/`.
    pub home_link: bool,
}

impl ErrorPage {
    pub fn new(route: RouteId, error: &RouteError, location: &Location) -> Self {
        Self {
            route,
            message: error.to_string(),
            home_link: location.path() != "/",
        }
    }
}
