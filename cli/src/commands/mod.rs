//! # cmdtree Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module assembles the `cmdtree` command tree from the individual
//! command modules. `main.rs` calls [`build_command_tree`] once and hands the
//! result to a `Dispatcher`.
//!
//! ## Architecture
//!
//! Each top-level module exposes `command()`, returning its fully declared
//! `CommandNode` (flags, arity, handler, children). Groups (`file`, `config`)
//! are namespaces whose subcommands live in their own files and are attached
//! in the group's `mod.rs`.
//!
//! ## Command Groups
//!
//! - `hello`: greet someone
//! - `create-user`: print a new user profile
//! - `deploy`: simulate a deployment
//! - `file`: `create` and `read` files
//! - `process`: process a list of items
//! - `config`: `get` and `set` settings
//! - `info`: describe this tool
//!
use crate::core::command::CommandNode;
use crate::core::error::CmdtreeError;

pub mod config;
pub mod create_user;
pub mod deploy;
pub mod file;
pub mod hello;
pub mod info;
pub mod process;

/// Name of the root command, used in usage lines and version output.
pub const ROOT_NAME: &str = "cmdtree";

/// Builds the complete, immutable command tree.
///
/// # Errors
///
/// `CmdtreeError::Config` if any declaration is malformed.
pub fn build_command_tree() -> std::result::Result<CommandNode, CmdtreeError> {
    CommandNode::new(ROOT_NAME, "A small CLI built on a typed command tree")
        .long_help(
            "cmdtree demonstrates nested subcommands, typed flags with shorthands \
             and defaults, and positional argument validation.",
        )
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(hello::command()?)?
        .subcommand(create_user::command()?)?
        .subcommand(deploy::command()?)?
        .subcommand(file::command()?)?
        .subcommand(process::command()?)?
        .subcommand(config::command()?)?
        .subcommand(info::command()?)
}

// --- Unit Tests ---
// These resolve argument vectors against the real tree without running
// handlers.
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dispatch::{Action, Dispatcher, ParsedInvocation};
    use crate::core::error::ErrorKind;

    fn run<'t>(d: &Dispatcher<'t>, tokens: &[&str]) -> ParsedInvocation<'t> {
        match d.resolve(tokens.iter().copied()) {
            Ok(Action::Run(inv)) => inv,
            other => panic!("expected a run action for {:?}, got {:?}", tokens, other),
        }
    }

    fn err_kind(d: &Dispatcher<'_>, tokens: &[&str]) -> ErrorKind {
        match d.resolve(tokens.iter().copied()) {
            Err(e) => e.kind(),
            Ok(other) => panic!("expected an error for {:?}, got {:?}", tokens, other),
        }
    }

    #[test]
    fn test_tree_builds_with_every_command() {
        let tree = build_command_tree().unwrap();
        let names: Vec<&str> = tree.children().iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec!["hello", "create-user", "deploy", "file", "process", "config", "info"]
        );
        assert!(tree.is_namespace());
        assert_eq!(tree.version_string(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_hello_invocation() {
        let tree = build_command_tree().unwrap();
        let d = Dispatcher::new(&tree);
        let inv = run(&d, &["hello", "Ann", "--count", "2", "--shout"]);
        assert_eq!(inv.command_path(), "cmdtree hello");
        assert_eq!(inv.flags.int("count").unwrap(), 2);
        assert!(inv.flags.bool("shout").unwrap());
        assert_eq!(inv.positionals, vec!["Ann"]);

        // Flag order does not matter.
        let reordered = run(&d, &["hello", "-s", "-c", "2", "Ann"]);
        assert_eq!(reordered.flags, inv.flags);
        assert_eq!(reordered.positionals, inv.positionals);
    }

    #[test]
    fn test_config_set_invocation() {
        let tree = build_command_tree().unwrap();
        let d = Dispatcher::new(&tree);
        let inv = run(&d, &["config", "set", "theme", "dark", "--global"]);
        assert_eq!(inv.command_path(), "cmdtree config set");
        assert!(inv.flags.bool("global").unwrap());
        assert_eq!(inv.positionals, vec!["theme", "dark"]);
    }

    #[test]
    fn test_create_user_arity() {
        let tree = build_command_tree().unwrap();
        let d = Dispatcher::new(&tree);
        assert_eq!(err_kind(&d, &["create-user"]), ErrorKind::ArgumentCount);
        assert_eq!(err_kind(&d, &["create-user", "a", "b"]), ErrorKind::ArgumentCount);
        let inv = run(&d, &["create-user", "alice"]);
        assert!(inv.flags.bool("active").unwrap());
        assert!(!inv.flags.is_set("age"));
    }

    #[test]
    fn test_bogus_flag_everywhere() {
        let tree = build_command_tree().unwrap();
        let d = Dispatcher::new(&tree);
        for path in [
            vec!["hello"],
            vec!["create-user", "x"],
            vec!["deploy"],
            vec!["file", "create", "f"],
            vec!["file", "read", "f"],
            vec!["process"],
            vec!["config", "get", "k"],
            vec!["config", "set", "k", "v"],
            vec!["info"],
        ] {
            let mut tokens = path.clone();
            tokens.push("--bogus");
            assert_eq!(err_kind(&d, &tokens), ErrorKind::UnknownFlag, "{:?}", path);
        }
    }

    #[test]
    fn test_namespaces_need_a_subcommand() {
        let tree = build_command_tree().unwrap();
        let d = Dispatcher::new(&tree);
        assert_eq!(err_kind(&d, &["file"]), ErrorKind::Usage);
        assert_eq!(err_kind(&d, &["config"]), ErrorKind::Usage);
        assert_eq!(err_kind(&d, &[]), ErrorKind::Usage);
        assert_eq!(err_kind(&d, &["frobnicate"]), ErrorKind::Usage);
    }

    #[test]
    fn test_process_items_accumulate() {
        let tree = build_command_tree().unwrap();
        let d = Dispatcher::new(&tree);
        let inv = run(&d, &["process", "-i", "a,b", "--items", "c"]);
        assert_eq!(inv.flags.list("items").unwrap(), ["a", "b", "c"]);
        let defaults = run(&d, &["process"]);
        assert_eq!(defaults.flags.list("items").unwrap(), ["item1", "item2", "item3"]);
        assert!(!defaults.flags.is_set("items"));
    }

    #[test]
    fn test_deploy_defaults_and_shorthands() {
        let tree = build_command_tree().unwrap();
        let d = Dispatcher::new(&tree);
        let inv = run(&d, &["deploy"]);
        assert_eq!(inv.flags.string("env").unwrap(), "development");
        let inv = run(&d, &["deploy", "-e", "prod", "-f", "--dry-run", "-c", "x.toml"]);
        assert_eq!(inv.flags.string("env").unwrap(), "prod");
        assert!(inv.flags.bool("force").unwrap() && inv.flags.bool("dry-run").unwrap());
        assert_eq!(inv.flags.string("config").unwrap(), "x.toml");
    }

    #[test]
    fn test_flag_only_commands_ignore_positionals() {
        let tree = build_command_tree().unwrap();
        let d = Dispatcher::new(&tree);
        assert_eq!(run(&d, &["deploy", "now", "--dry-run"]).positionals, ["now"]);
        assert_eq!(run(&d, &["process", "x", "y"]).positionals, ["x", "y"]);
        assert_eq!(run(&d, &["info", "x", "-f", "json"]).positionals, ["x"]);
    }

    #[test]
    fn test_root_version_and_help() {
        let tree = build_command_tree().unwrap();
        let d = Dispatcher::new(&tree);
        match d.resolve(["--version"]).unwrap() {
            Action::Version(text) => {
                assert_eq!(text, format!("cmdtree version {}", env!("CARGO_PKG_VERSION")))
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(
            d.resolve(["file", "read", "--help"]).unwrap(),
            Action::Help { .. }
        ));
    }
}
