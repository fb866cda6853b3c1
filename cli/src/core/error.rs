//! # cmdtree Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout cmdtree. Errors raised
//! while building the command tree or while dispatching an argument vector are
//! *structured*: each carries its kind, the offending token (when one exists)
//! and the command path of the node being processed, so callers can match on
//! them instead of parsing messages.
//!
//! ## Architecture
//!
//! The error system consists of three pieces:
//! - `CmdtreeError`: a `thiserror` enum covering declaration, parsing, arity and
//!   usage failures, plus a few handler-side variants (settings, filesystem).
//! - `ErrorKind`: a fieldless tag returned by `CmdtreeError::kind()` for matching.
//! - `Result<T>`: an alias for `anyhow::Result<T>` used by handlers and application
//!   code, where adding context matters more than the concrete error type.
//!
//! ## Examples
//!
//! ```rust
//! match dispatcher.resolve(["create-user"]) {
//!     Err(e) if e.kind() == ErrorKind::ArgumentCount => eprintln!("{}", e),
//!     Err(e) => return Err(e.into()),
//!     Ok(action) => { /* ... */ }
//! }
//!
//! // Handler-side errors go through anyhow and can be downcast back.
//! if let Some(CmdtreeError::Usage { path, .. }) = err.downcast_ref::<CmdtreeError>() {
//!     println!("{} needs a subcommand", path);
//! }
//! ```
//!
use crate::core::command::Arity;
use thiserror::Error;

/// Coarse classification of a [`CmdtreeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed flag or subcommand declaration, caught while building the tree.
    Config,
    /// A flag value that could not be converted, or a missing flag value.
    Parse,
    /// A `--name` or `-s` token not declared on the resolved node.
    UnknownFlag,
    /// Too few or too many positional arguments.
    ArgumentCount,
    /// A namespace node invoked without (or with an unknown) subcommand.
    Usage,
    /// A handler asked for a flag that is undeclared or of a different kind.
    FlagLookup,
    /// A settings key or value was rejected.
    Settings,
    /// Filesystem failures surfaced by handlers.
    FileSystem,
}

/// Custom error type for cmdtree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CmdtreeError {
    #[error("Configuration error in '{path}': {message} ({token})")]
    Config {
        path: String,
        token: String,
        message: String,
    },

    #[error("invalid argument \"{token}\" for '{path}': {message}")]
    Parse {
        path: String,
        token: String,
        message: String,
    },

    #[error("unknown flag: {token} (command '{path}')")]
    UnknownFlag { path: String, token: String },

    #[error("'{path}' {expected}, received {received}")]
    ArgumentCount {
        path: String,
        expected: Arity,
        received: usize,
        token: Option<String>,
    },

    #[error("{}", usage_message(.path, .token))]
    Usage { path: String, token: Option<String> },

    #[error("flag '--{name}' {message}")]
    FlagLookup { name: String, message: String },

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),
}

fn usage_message(path: &str, token: &Option<String>) -> String {
    match token {
        Some(token) => format!("unknown command \"{}\" for '{}'", token, path),
        None => format!("'{}' requires a subcommand", path),
    }
}

impl CmdtreeError {
    /// Returns the coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CmdtreeError::Config { .. } => ErrorKind::Config,
            CmdtreeError::Parse { .. } => ErrorKind::Parse,
            CmdtreeError::UnknownFlag { .. } => ErrorKind::UnknownFlag,
            CmdtreeError::ArgumentCount { .. } => ErrorKind::ArgumentCount,
            CmdtreeError::Usage { .. } => ErrorKind::Usage,
            CmdtreeError::FlagLookup { .. } => ErrorKind::FlagLookup,
            CmdtreeError::Settings(_) => ErrorKind::Settings,
            CmdtreeError::FileSystem(_) => ErrorKind::FileSystem,
        }
    }

    /// The command path of the node the error was raised for, if it has one.
    pub fn path(&self) -> Option<&str> {
        match self {
            CmdtreeError::Config { path, .. }
            | CmdtreeError::Parse { path, .. }
            | CmdtreeError::UnknownFlag { path, .. }
            | CmdtreeError::ArgumentCount { path, .. }
            | CmdtreeError::Usage { path, .. } => Some(path),
            _ => None,
        }
    }

    /// The token that triggered the error, if one can be singled out.
    pub fn token(&self) -> Option<&str> {
        match self {
            CmdtreeError::Config { token, .. }
            | CmdtreeError::Parse { token, .. }
            | CmdtreeError::UnknownFlag { token, .. } => Some(token),
            CmdtreeError::ArgumentCount { token, .. } | CmdtreeError::Usage { token, .. } => {
                token.as_deref()
            }
            CmdtreeError::FlagLookup { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Replaces the command path carried by the error.
    ///
    /// The flag registry does not know where in the tree it lives, so its errors
    /// are raised with an empty path and re-homed by the node or dispatcher.
    pub fn at(mut self, node_path: &str) -> Self {
        match &mut self {
            CmdtreeError::Config { path, .. }
            | CmdtreeError::Parse { path, .. }
            | CmdtreeError::UnknownFlag { path, .. }
            | CmdtreeError::ArgumentCount { path, .. }
            | CmdtreeError::Usage { path, .. } => *path = node_path.to_string(),
            _ => {}
        }
        self
    }
}

/// Type alias for Result using anyhow::Error for handlers and application code.
pub type Result<T> = anyhow::Result<T>;
