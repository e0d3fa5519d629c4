//! Configuration loader and schema types.
//!
//! This module exposes the configuration schema used to drive the catalog
//! client and playback defaults, plus helpers to load configuration from
//! disk and environment.

mod load;
mod schema;

pub use schema::*;
