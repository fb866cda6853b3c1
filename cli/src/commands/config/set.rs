//! # cmdtree Config Set Handler
//!
//! File: cli/src/commands/config/set.rs
//!
//! Implements `cmdtree config set <key> <value> [--global]`. The update is
//! reported but not written anywhere, so a later `config get` still returns
//! the built-in value.
//!
use super::{global_flag, scope_heading};
use crate::common::ui;
use crate::core::command::{Arity, CommandNode};
use crate::core::config::Scope;
use crate::core::dispatch::ParsedInvocation;
use crate::core::error::{CmdtreeError, Result};
use tracing::info;

pub(super) fn command() -> std::result::Result<CommandNode, CmdtreeError> {
    CommandNode::new("set", "Set a setting")
        .args_hint("<key> <value>")
        .arity(Arity::Exact(2))
        .handler(handle_set)
        .flag(global_flag())
}

fn handle_set(inv: &ParsedInvocation<'_>) -> Result<()> {
    let key = inv.required(0)?;
    let value = inv.required(1)?;
    if key.trim().is_empty() {
        return Err(CmdtreeError::Settings("setting keys must not be empty".to_string()).into());
    }
    let scope = Scope::from_global_flag(inv.flags.bool("global")?);
    info!("Setting '{}' = '{}' ({} scope)", key, value, scope);
    print!("{}", render_update(scope, key, value));
    Ok(())
}

fn render_update(scope: Scope, key: &str, value: &str) -> String {
    format!(
        "{}\n  Setting {} = {}\n{}\n",
        scope_heading(scope),
        key,
        value,
        ui::success("Configuration updated!")
    )
}
