//! # cmdtree Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! Groups the filesystem helpers used by command handlers. Currently only
//! [`io`], the context-carrying read/write wrappers.
//!
pub mod io;
