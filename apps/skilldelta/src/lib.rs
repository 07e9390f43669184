//! # skilldelta
//!
//! Library target of the `skilldelta` binary, exposing the CLI and its
//! configuration to integration tests.

pub mod cli;
pub mod config;
