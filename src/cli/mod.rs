//! Command-line interface
//!
//! This module contains the CLI commands and argument parsing
//! for the address tool.

pub mod commands;

pub use commands::{ClassArg, Command, Opt};
