//! `SessionStore` implementations.

mod file;
mod memory;

pub use file::FileSessionStore;
pub use memory::InMemorySessionStore;
