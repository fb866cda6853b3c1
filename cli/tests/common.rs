//! # cmdtree CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each other `.rs`
//! file in this directory is compiled as its own test crate and pulls these
//! in with `mod common;`.
//!

// Not every test crate uses every helper.
#![allow(dead_code)]

pub use assert_cmd::Command;

/// An `assert_cmd::Command` for the compiled `cmdtree` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn cmdtree_cmd() -> Command {
    Command::cargo_bin("cmdtree").expect("Failed to find cmdtree binary for testing")
}
