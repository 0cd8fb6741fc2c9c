//! Working-hours report CLI library.
//!
//! This crate provides the CLI interface over `wh-core`.

mod cli;
pub mod commands;
mod config;

pub use cli::{Action, Cli, OutputMode};
pub use config::Config;
