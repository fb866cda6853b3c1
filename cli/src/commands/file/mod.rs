//! # cmdtree File Command Group
//!
//! File: cli/src/commands/file/mod.rs
//!
//! ## Overview
//!
//! The `file` namespace groups simple file operations. It has no handler of
//! its own: `cmdtree file` without a subcommand is a usage error that prints
//! this group's help.
//!
//! - `create`: write a file with the given (or default) content
//! - `read`: print a file's name and content
//!
use crate::core::command::CommandNode;
use crate::core::error::CmdtreeError;

mod create;
mod read;

pub fn command() -> std::result::Result<CommandNode, CmdtreeError> {
    CommandNode::new("file", "File operations")
        .long_help("Commands for creating and reading files.")
        .subcommand(create::command()?)?
        .subcommand(read::command()?)
}
