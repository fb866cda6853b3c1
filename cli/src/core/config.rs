//! # cmdtree Settings
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module holds the key/value settings read by `cmdtree config get`. The
//! settings are a fixed in-memory mapping compiled into the binary: nothing is
//! read from disk or the environment, and `config set` never changes them.
//!
//! | Key       | Value   |
//! |-----------|---------|
//! | `theme`   | `dark`  |
//! | `debug`   | `false` |
//! | `timeout` | `30`    |
//!
//! The *scope* (`local` or `global`, chosen with `--global`) only labels the
//! output; both scopes see the same mapping.
//!
//! ## Examples
//!
//! ```rust
//! let settings = Settings::new(Scope::Local);
//! match settings.get("theme") {
//!     Some(value) => println!("theme = {}", value),
//!     None => println!("theme is not set"),
//! }
//! ```
//!
use std::fmt;
use tracing::debug;

const DEFAULT_SETTINGS: [(&str, &str); 3] = [("theme", "dark"), ("debug", "false"), ("timeout", "30")];

/// Scope label of a settings lookup or update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Local,
    Global,
}

impl Scope {
    /// Maps the `--global` flag of the `config` commands to a scope.
    pub fn from_global_flag(global: bool) -> Self {
        if global {
            Scope::Global
        } else {
            Scope::Local
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Scope::Local => "local",
            Scope::Global => "global",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The settings visible in one scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    scope: Scope,
}

impl Settings {
    pub fn new(scope: Scope) -> Self {
        Self { scope }
    }

    pub fn get(&self, key: &str) -> Option<&'static str> {
        let value = DEFAULT_SETTINGS
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| *value);
        debug!("Settings lookup [{}] '{}' -> {:?}", self.scope, key, value);
        value
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }
}
