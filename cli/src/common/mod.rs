//! # cmdtree Common Utilities
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Helpers shared across command handlers that are not part of the dispatch
//! core:
//!
//! - **`fs`**: filesystem reads and writes with contextual errors.
//! - **`ui`**: text formatting for key/value blocks, aligned columns and
//!   status lines.
//!
pub mod fs;
pub mod ui;
