//! Core infrastructure shared by the commands
//!
//! This module provides:
//! - Configuration constants and the `config.toml` settings
//! - Logging setup

pub mod config;
pub(crate) mod logging;

pub use config::Config;
pub use logging::init_logging;
