//! # Fleet Infrastructure
//!
//! Concrete implementations of the ports defined in `fleet-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - In-memory stores only
//! - `http` - `InventoryApi` over HTTP via reqwest
//! - `auth` - JWT + Argon2 for the mock login endpoint
//! - `mock` - Seeded fixture generation for the mock inventory

pub mod inventory;
pub mod session;

#[cfg(feature = "auth")]
pub mod auth;

#[cfg(feature = "http")]
pub mod http;

pub use inventory::InMemoryVehicleRepository;
pub use session::{FileSessionStore, InMemorySessionStore};

#[cfg(feature = "auth")]
pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};

#[cfg(feature = "http")]
pub use http::{HttpConfig, HttpInventoryApi};

#[cfg(feature = "mock")]
pub use inventory::{Catalogue, FixtureGenerator, catalogue};
