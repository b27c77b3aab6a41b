//! Mock inventory storage and fixtures.

#[cfg(feature = "mock")]
pub mod fixtures;
mod memory;

#[cfg(feature = "mock")]
pub use fixtures::{Catalogue, FixtureGenerator, catalogue};
pub use memory::InMemoryVehicleRepository;
