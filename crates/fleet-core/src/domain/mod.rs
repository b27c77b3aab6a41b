//! Domain policy - the rules shared by the client and the mock backend.

pub mod forms;
pub mod inventory;
pub mod stats;

pub use forms::FormData;
pub use inventory::PAGE_SIZE;
