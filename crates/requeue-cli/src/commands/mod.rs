//! CLI command implementations.

pub mod reset;
