//! Configuration loading for the Ruminate framework.
//!
//! Components keep their own serde-deserializable config structs; this
//! module reads them from JSON or TOML files, substituting `${VAR}` and
//! `${VAR:default}` environment references first.

pub mod loader;

pub use loader::*;
