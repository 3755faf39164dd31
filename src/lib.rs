//! Biostrap Library
//!
//! Core functionality for the `biostrap` installer CLI: resolving the current
//! client version, reading its package manifest, and extracting each package
//! into a version-scoped folder without letting archive entries escape it.

pub mod commands;
pub mod core;
pub mod error;
pub mod utils;
