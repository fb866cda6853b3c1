//! # cmdtree Dispatcher
//!
//! File: cli/src/core/dispatch.rs
//!
//! ## Overview
//!
//! Routes a flat token sequence to exactly one handler of a command tree.
//!
//! ## Architecture
//!
//! Dispatch runs in two phases so that no handler ever sees partially
//! validated input:
//!
//! 1. **Resolve** (`Dispatcher::resolve`): starting at the root, descend while
//!    the next token exactly names a child. The remaining tokens belong to the
//!    node reached. Reserved `--help`/`-h` (any node) and `--version` (a node
//!    carrying a version) short-circuit to an `Action::Help`/`Action::Version`.
//!    The scan for them runs before flag parsing and stops at `--`, so a help
//!    token is never taken as the value of a preceding flag:
//!    `file create x --content --help` shows help, not a missing-value error.
//!    Otherwise the node's `FlagRegistry` resolves the flags, the positional
//!    count is checked against the node's `Arity`, and a namespace node is
//!    rejected with a usage error.
//! 2. **Invoke** (`Dispatcher::dispatch`): run the handler with the
//!    `ParsedInvocation`, or print the help/version text.
//!
//! The dispatcher only borrows the tree, which is owned by the caller and may
//! be reused for any number of dispatches.
//!
//! ## Examples
//!
//! ```rust
//! let tree = commands::build_command_tree()?;
//! let dispatcher = Dispatcher::new(&tree);
//! dispatcher.dispatch(["hello", "Ann", "--count", "2"])?;
//! ```
//!
use crate::core::command::CommandNode;
use crate::core::error::{CmdtreeError, Result};
use crate::core::flags::{FlagValues, HELP_FLAG, HELP_SHORT};
use crate::core::help;
use tracing::{debug, info};

/// The resolved node, its flags and positional arguments for one invocation.
#[derive(Debug, Clone)]
pub struct ParsedInvocation<'a> {
    pub node: &'a CommandNode,
    /// Node names from the root down to `node`.
    pub path: Vec<&'a str>,
    pub flags: FlagValues,
    pub positionals: Vec<String>,
}

impl<'a> ParsedInvocation<'a> {
    /// Space-joined command path, e.g. `cmdtree config set`.
    pub fn command_path(&self) -> String {
        self.path.join(" ")
    }

    pub fn positional(&self, index: usize) -> Option<&str> {
        self.positionals.get(index).map(String::as_str)
    }

    /// Like `positional`, for arguments the node's arity guarantees.
    pub fn required(&self, index: usize) -> std::result::Result<&str, CmdtreeError> {
        self.positional(index).ok_or_else(|| CmdtreeError::ArgumentCount {
            path: self.command_path(),
            expected: self.node.arity_constraint(),
            received: self.positionals.len(),
            token: None,
        })
    }
}

/// What a successful resolution asks the caller to do.
#[derive(Debug, Clone)]
pub enum Action<'a> {
    Run(ParsedInvocation<'a>),
    Help {
        node: &'a CommandNode,
        path: Vec<&'a str>,
    },
    Version(String),
}

/// Dispatches argument vectors against a borrowed command tree.
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher<'t> {
    root: &'t CommandNode,
}

impl<'t> Dispatcher<'t> {
    pub fn new(root: &'t CommandNode) -> Self {
        Self { root }
    }

    /// Parses and validates `tokens` without running any handler.
    pub fn resolve<I, S>(&self, tokens: I) -> std::result::Result<Action<'t>, CmdtreeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();

        let mut node = self.root;
        let mut path = vec![node.name()];
        let mut consumed = 0;
        while let Some(child) = tokens.get(consumed).and_then(move |t| node.child(t)) {
            node = child;
            path.push(child.name());
            consumed += 1;
        }
        let rest = tokens.split_off(consumed);
        let path_str = path.join(" ");
        debug!("Resolved command path '{}' with tokens {:?}", path_str, rest);

        let before_terminator = || rest.iter().take_while(|t| t.as_str() != "--");
        let help_long = format!("--{}", HELP_FLAG);
        let help_short = format!("-{}", HELP_SHORT);
        if before_terminator().any(|t| *t == help_long || *t == help_short) {
            return Ok(Action::Help { node, path });
        }
        if let Some(version) = help::render_version(node) {
            if before_terminator().any(|t| t == "--version") {
                return Ok(Action::Version(version));
            }
        }

        let (flags, positionals) = node.flags().resolve(rest).map_err(|e| e.at(&path_str))?;
        for (name, entry) in flags.iter().filter(|(_, entry)| entry.explicit) {
            debug!("--{} = {}", name, entry.value);
        }

        if node.is_namespace() {
            return Err(CmdtreeError::Usage {
                path: path_str,
                token: positionals.into_iter().next(),
            });
        }

        let arity = node.arity_constraint();
        if !arity.accepts(positionals.len()) {
            let surplus = arity.max().and_then(|max| positionals.get(max)).cloned();
            return Err(CmdtreeError::ArgumentCount {
                path: path_str,
                expected: arity,
                received: positionals.len(),
                token: surplus,
            });
        }

        Ok(Action::Run(ParsedInvocation {
            node,
            path,
            flags,
            positionals,
        }))
    }

    /// Resolves `tokens` and carries out the resulting action.
    ///
    /// Handler errors are returned unchanged; dispatch errors are returned as
    /// `CmdtreeError` inside the `anyhow::Error` and can be downcast.
    pub fn dispatch<I, S>(&self, tokens: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match self.resolve(tokens)? {
            Action::Run(invocation) => {
                info!("Running '{}'", invocation.command_path());
                match invocation.node.handler_fn() {
                    Some(handler) => handler(&invocation),
                    // resolve() never yields Run for a namespace node.
                    None => Err(CmdtreeError::Usage {
                        path: invocation.command_path(),
                        token: None,
                    }
                    .into()),
                }
            }
            Action::Help { node, path } => {
                print!("{}", help::render_help(node, &path));
                Ok(())
            }
            Action::Version(text) => {
                println!("{}", text);
                Ok(())
            }
        }
    }

    /// Finds a node by its space-separated command path (as carried in errors).
    pub fn find(&self, command_path: &str) -> Option<(&'t CommandNode, Vec<&'t str>)> {
        let mut names = command_path.split(' ');
        if names.next()? != self.root.name() {
            return None;
        }
        let mut node = self.root;
        let mut path = vec![node.name()];
        for name in names {
            node = node.child(name)?;
            path.push(node.name());
        }
        Some((node, path))
    }

    /// Help text for the node a usage error refers to.
    pub fn usage_for(&self, err: &CmdtreeError) -> Option<String> {
        match err {
            CmdtreeError::Usage { path, .. } => self
                .find(path)
                .map(|(node, path)| help::render_help(node, &path)),
            _ => None,
        }
    }
}
