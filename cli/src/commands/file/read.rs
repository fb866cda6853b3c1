//! # cmdtree File Read Handler
//!
//! File: cli/src/commands/file/read.rs
//!
//! Implements `cmdtree file read <filename>`: prints the file name followed by
//! its full content. A missing or unreadable file is an error.
//!
use crate::common::fs::io;
use crate::core::command::{Arity, CommandNode};
use crate::core::dispatch::ParsedInvocation;
use crate::core::error::{CmdtreeError, Result};
use std::path::Path;

pub(super) fn command() -> std::result::Result<CommandNode, CmdtreeError> {
    Ok(CommandNode::new("read", "Read a file")
        .args_hint("<filename>")
        .arity(Arity::Exact(1))
        .handler(handle_read))
}

fn handle_read(inv: &ParsedInvocation<'_>) -> Result<()> {
    let filename = inv.required(0)?;
    let content = io::read_file_to_string(Path::new(filename))?;
    print!("{}", render_file(filename, &content));
    Ok(())
}

fn render_file(filename: &str, content: &str) -> String {
    format!("File: {}\nContent: {}\n", filename, content)
}
