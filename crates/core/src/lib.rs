//! Core utilities for the Lazer typeahead tools
//!
//! This crate provides functionality shared by the picker library and its
//! command-line host:
//!
//! - **Error handling**: errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with validation
//!
//! # Example
//!
//! ```rust,no_run
//! use lazer_core::config::Config;
//!
//! let config = Config::load(None).expect("invalid configuration");
//! assert!(config.schema.typeahead.limit > 0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigSchema, TelemetrySettings, TypeaheadConfig};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
}
