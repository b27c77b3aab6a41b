//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod api;
mod auth;
mod repository;
mod session;

pub use api::InventoryApi;
pub use auth::{AuthError, PasswordService, TokenClaims, TokenService};
pub use repository::{BaseRepository, VehicleRepository};
pub use session::SessionStore;
