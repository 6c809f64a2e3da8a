//! Configuration loader and schema types.
//!
//! This module exposes the settings that shape the directory walk and the
//! XML export, and helpers to load them from disk and the environment.

mod load;
mod schema;

pub use load::{MAX_INDENT, default_config_path, resolve_config_path};
pub use schema::*;
