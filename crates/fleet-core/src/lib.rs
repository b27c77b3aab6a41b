//! # Fleet Core
//!
//! The domain layer of the inventory client.
//! This crate contains the search, pagination and aggregation policy, the
//! ports that infrastructure implements, and the router engine with the
//! application's route table. It has no HTTP or storage dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod router;
pub mod routes;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{ApiError, DomainError, RepoError, RouteError, SessionError};
pub use router::{Navigation, Page, Router};
