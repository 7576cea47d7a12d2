//! Configuration management
//!
//! Process-wide settings for the CLI, currently the location of the local
//! address store. Values come from the environment and can be overridden at
//! runtime.

pub mod settings;

pub use settings::{Config, GLOBAL_CONFIG};
