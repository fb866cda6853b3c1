//! # cmdtree Config Get Handler
//!
//! File: cli/src/commands/config/get.rs
//!
//! Implements `cmdtree config get <key> [--global]`. The key is looked up in
//! the fixed settings mapping; an unknown key is reported as `not found` and
//! is not an error.
//!
use super::{global_flag, scope_heading};
use crate::core::command::{Arity, CommandNode};
use crate::core::config::{Scope, Settings};
use crate::core::dispatch::ParsedInvocation;
use crate::core::error::{CmdtreeError, Result};
use tracing::info;

pub(super) fn command() -> std::result::Result<CommandNode, CmdtreeError> {
    CommandNode::new("get", "Get a setting")
        .args_hint("<key>")
        .arity(Arity::Exact(1))
        .handler(handle_get)
        .flag(global_flag())
}

fn handle_get(inv: &ParsedInvocation<'_>) -> Result<()> {
    let key = inv.required(0)?;
    let scope = Scope::from_global_flag(inv.flags.bool("global")?);
    info!("Looking up setting '{}' ({} scope)", key, scope);
    let settings = Settings::new(scope);
    print!("{}", render_lookup(settings.scope(), key, settings.get(key)));
    Ok(())
}

fn render_lookup(scope: Scope, key: &str, value: Option<&str>) -> String {
    format!(
        "{}\n  {}: {}\n",
        scope_heading(scope),
        key,
        value.unwrap_or("not found")
    )
}
