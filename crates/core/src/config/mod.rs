//! Configuration loading and schema definitions
//!
//! `.lazer.toml` settings shared by the picker library and the CLI.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
