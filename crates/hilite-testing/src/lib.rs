//! Testing infrastructure for hilite integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `FixtureDb`: Scan databases seeded with a known set of records
//! - `TestWorld`: Isolated environment for running the CLI
//! - `assertions`: Checks over the CLI's JSON output

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use fixtures::FixtureDb;
pub use world::{CliResult, TestWorld};
