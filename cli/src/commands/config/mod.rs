//! # cmdtree Config Command Group
//!
//! File: cli/src/commands/config/mod.rs
//!
//! ## Overview
//!
//! The `config` namespace reads and (nominally) writes settings.
//!
//! - `get <key>`: looks `key` up in the fixed settings (see `core::config`)
//! - `set <key> <value>`: reports the change; settings are not persisted
//!
//! Both accept `--global`/`-g`, which switches the scope label to `global`.
//!
use crate::core::command::CommandNode;
use crate::core::error::CmdtreeError;
use crate::core::flags::FlagSpec;

mod get;
mod set;

pub fn command() -> std::result::Result<CommandNode, CmdtreeError> {
    CommandNode::new("config", "Manage settings")
        .long_help("Commands for reading and updating application settings.")
        .subcommand(get::command()?)?
        .subcommand(set::command()?)
}

/// The `--global` flag shared by both subcommands.
fn global_flag() -> FlagSpec {
    FlagSpec::bool("global", false, "Use global settings").short('g')
}

/// Heading printed above every `config` result.
fn scope_heading(scope: crate::core::config::Scope) -> String {
    format!("Configuration [{}]:", scope)
}
