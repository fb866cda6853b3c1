//! # cmdtree Info Command
//!
//! File: cli/src/commands/info.rs
//!
//! ## Overview
//!
//! Implements `cmdtree info [--format table|json]`, which reports what this
//! binary is. The table form is an indented key/value listing; the JSON form
//! is pretty-printed by `serde_json` with a fixed field order.
//!
//! ## Usage
//!
//! ```bash
//! cmdtree info
//! cmdtree info -f json | jq .Version
//! ```
//!
use crate::common::ui;
use crate::core::command::CommandNode;
use crate::core::dispatch::ParsedInvocation;
use crate::core::error::{CmdtreeError, Result};
use crate::core::flags::FlagSpec;
use anyhow::Context;
use chrono::Local;
use serde::Serialize;
use std::str::FromStr;

pub fn command() -> std::result::Result<CommandNode, CmdtreeError> {
    CommandNode::new("info", "Show information about this tool")
        .handler(handle_info)
        .flag(FlagSpec::string("format", "table", "Output format (table|json)").short('f'))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err("expected \"table\" or \"json\"".to_string()),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
struct SystemInfo {
    library: String,
    version: String,
    language: String,
    features: String,
    timestamp: String,
}

impl SystemInfo {
    fn collect() -> Self {
        Self {
            library: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            language: "Rust".to_string(),
            features: "Subcommands, Flags, POSIX compliant".to_string(),
            timestamp: Local::now().to_rfc3339(),
        }
    }

    fn render_table(&self) -> String {
        ui::key_value_block(
            "System Information",
            &[
                ("Library", self.library.clone()),
                ("Version", self.version.clone()),
                ("Language", self.language.clone()),
                ("Features", self.features.clone()),
                ("Timestamp", self.timestamp.clone()),
            ],
        )
    }

    fn render_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize system information")
    }
}

/// Handler for `cmdtree info`.
pub fn handle_info(inv: &ParsedInvocation<'_>) -> Result<()> {
    let raw = inv.flags.string("format")?;
    let format = raw.parse::<OutputFormat>().map_err(|message| CmdtreeError::Parse {
        path: inv.command_path(),
        token: raw.to_string(),
        message,
    })?;

    let info = SystemInfo::collect();
    match format {
        OutputFormat::Table => print!("{}", info.render_table()),
        OutputFormat::Json => println!("{}", info.render_json()?),
    }
    Ok(())
}
