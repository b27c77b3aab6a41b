//! # Fleet Console
//!
//! A terminal front end for the inventory. Commands typed at the prompt
//! become router navigations and form submissions; committed pages are
//! rendered as text.

pub mod cli;
pub mod commands;
pub mod config;
pub mod console;
pub mod telemetry;
pub mod views;

pub use cli::Cli;
pub use commands::{Command, CommandError};
pub use config::ConsoleConfig;
pub use console::{Console, Flow};
