//! # cmdtree Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the dispatch engine and the infrastructure the
//! command handlers build on.
//!
//! ## Architecture
//!
//! - `command`: `CommandNode` tree nodes and the `Arity` constraint
//! - `flags`: typed flag declarations, the per-node registry and flag resolution
//! - `dispatch`: resolving a token sequence to one node and invoking its handler
//! - `help`: help and version text rendering
//! - `error`: `CmdtreeError` and the `Result` alias
//! - `config`: the fixed key/value settings read by `config get`
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::command::{Arity, CommandNode};
//! use crate::core::dispatch::{Dispatcher, ParsedInvocation};
//! use crate::core::error::Result;
//! use crate::core::flags::FlagSpec;
//! ```
//!
pub mod command;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod flags;
pub mod help;
