//! # cmdtree Command Tree
//!
//! File: cli/src/core/command.rs
//!
//! ## Overview
//!
//! Defines `CommandNode`, one named point in the command tree, and `Arity`,
//! the positional-argument constraint a node enforces. A node is either a
//! *namespace* (children, no handler, e.g. `file`) or *invocable* (has a
//! handler, e.g. `file read`). Nodes may carry both.
//!
//! The tree is assembled bottom-up with a consuming builder and is immutable
//! once built. Each node owns its children, so the structure is a tree by
//! construction. Declarations that would break the per-node invariants
//! (duplicate child names, colliding flags) fail with `CmdtreeError::Config`
//! at build time.
//!
//! ## Examples
//!
//! ```rust
//! let read = CommandNode::new("read", "Read a file")
//!     .args_hint("<filename>")
//!     .arity(Arity::Exact(1))
//!     .handler(handle_read);
//! let file = CommandNode::new("file", "File operations").subcommand(read)?;
//! ```
//!
use crate::core::dispatch::ParsedInvocation;
use crate::core::error::{CmdtreeError, Result};
use crate::core::flags::{FlagRegistry, FlagSpec};
use std::fmt;

/// A command handler: a plain function of the parsed invocation.
pub type Handler = fn(&ParsedInvocation<'_>) -> Result<()>;

/// Positional-argument constraint of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Arity {
    /// Any number of positionals.
    #[default]
    Any,
    Exact(usize),
    AtMost(usize),
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Any => true,
            Arity::Exact(n) => count == n,
            Arity::AtMost(n) => count <= n,
        }
    }

    /// Largest accepted count, if bounded.
    pub fn max(self) -> Option<usize> {
        match self {
            Arity::Any => None,
            Arity::Exact(n) | Arity::AtMost(n) => Some(n),
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Any => write!(f, "accepts any number of args"),
            Arity::Exact(n) => write!(f, "accepts {} arg(s)", n),
            Arity::AtMost(n) => write!(f, "accepts at most {} arg(s)", n),
        }
    }
}

/// A named node of the command tree.
#[derive(Clone)]
pub struct CommandNode {
    name: String,
    args_hint: Option<String>,
    short_help: String,
    long_help: Option<String>,
    arity: Arity,
    children: Vec<CommandNode>,
    handler: Option<Handler>,
    flags: FlagRegistry,
    version: Option<String>,
}

impl fmt::Debug for CommandNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandNode")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .field("invocable", &self.handler.is_some())
            .field("flags", &self.flags)
            .field("children", &self.children)
            .finish()
    }
}

impl CommandNode {
    pub fn new(name: impl Into<String>, short_help: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args_hint: None,
            short_help: short_help.into(),
            long_help: None,
            arity: Arity::Any,
            children: Vec::new(),
            handler: None,
            flags: FlagRegistry::new(),
            version: None,
        }
    }

    /// Longer description shown at the top of this node's help.
    pub fn long_help(mut self, text: impl Into<String>) -> Self {
        self.long_help = Some(text.into());
        self
    }

    /// Positional placeholder for the usage line, e.g. `<key> <value>`.
    pub fn args_hint(mut self, hint: impl Into<String>) -> Self {
        self.args_hint = Some(hint.into());
        self
    }

    pub fn arity(mut self, arity: Arity) -> Self {
        self.arity = arity;
        self
    }

    pub fn handler(mut self, handler: Handler) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Attaches a version string; `--version` is honoured on this node.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Declares a flag on this node (not inherited by children).
    pub fn flag(mut self, spec: FlagSpec) -> std::result::Result<Self, CmdtreeError> {
        self.flags.declare(spec).map_err(|e| e.at(&self.name))?;
        Ok(self)
    }

    /// Appends a child. Child names must be unique and usable as a token.
    pub fn subcommand(mut self, child: CommandNode) -> std::result::Result<Self, CmdtreeError> {
        let config_err = |message: &str| CmdtreeError::Config {
            path: self.name.clone(),
            token: child.name.clone(),
            message: message.to_string(),
        };
        if child.name.is_empty()
            || child.name.starts_with('-')
            || child.name.chars().any(char::is_whitespace)
        {
            return Err(config_err("malformed subcommand name"));
        }
        if self.child(&child.name).is_some() {
            return Err(config_err("duplicate subcommand name"));
        }
        self.children.push(child);
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn short_help(&self) -> &str {
        &self.short_help
    }

    /// The long description, falling back to the short one.
    pub fn description(&self) -> &str {
        self.long_help.as_deref().unwrap_or(&self.short_help)
    }

    pub fn hint(&self) -> Option<&str> {
        self.args_hint.as_deref()
    }

    pub fn arity_constraint(&self) -> Arity {
        self.arity
    }

    pub fn children(&self) -> &[CommandNode] {
        &self.children
    }

    /// Exact, case-sensitive child lookup.
    pub fn child(&self, name: &str) -> Option<&CommandNode> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn handler_fn(&self) -> Option<Handler> {
        self.handler
    }

    pub fn flags(&self) -> &FlagRegistry {
        &self.flags
    }

    pub fn version_string(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// A namespace groups children and cannot be invoked itself.
    pub fn is_namespace(&self) -> bool {
        self.handler.is_none()
    }
}
