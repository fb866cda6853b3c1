//! # cmdtree File Create Handler
//!
//! File: cli/src/commands/file/create.rs
//!
//! Implements `cmdtree file create <filename> [--content TEXT]`. Without
//! `--content` the file receives a fixed greeting; an explicit empty
//! `--content ""` creates an empty file. Missing parent directories are
//! created.
//!
use crate::common::fs::io;
use crate::common::ui;
use crate::core::command::{Arity, CommandNode};
use crate::core::dispatch::ParsedInvocation;
use crate::core::error::{CmdtreeError, Result};
use crate::core::flags::FlagSpec;
use std::path::Path;

pub(super) const DEFAULT_CONTENT: &str = "Hello from cmdtree!";

pub(super) fn command() -> std::result::Result<CommandNode, CmdtreeError> {
    CommandNode::new("create", "Create a file")
        .args_hint("<filename>")
        .arity(Arity::Exact(1))
        .handler(handle_create)
        .flag(FlagSpec::string("content", "", "Content to write").short('c'))
}

fn handle_create(inv: &ParsedInvocation<'_>) -> Result<()> {
    let filename = inv.required(0)?;
    let content = content_to_write(inv)?;

    io::write_string_to_file(Path::new(filename), content)?;

    println!("{}", ui::success(&format!("File created: {}", filename)));
    println!("Content: {}", content);
    Ok(())
}

fn content_to_write<'a>(inv: &'a ParsedInvocation<'_>) -> Result<&'a str> {
    if inv.flags.is_set("content") {
        Ok(inv.flags.string("content")?)
    } else {
        Ok(DEFAULT_CONTENT)
    }
}
