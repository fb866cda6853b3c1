//! # cmdtree Process Command
//!
//! File: cli/src/commands/process.rs
//!
//! ## Overview
//!
//! Implements `cmdtree process`, which walks a list of items with a short
//! simulated delay per item and reports progress as it goes.
//!
//! `--items` is a string-list flag: values may be comma-separated and the
//! flag may be repeated, accumulating in order. An empty list falls back to
//! the default items.
//!
//! ## Usage
//!
//! ```bash
//! cmdtree process
//! cmdtree process -i a,b -i c --verbose
//! ```
//!
use crate::common::ui;
use crate::core::command::CommandNode;
use crate::core::dispatch::ParsedInvocation;
use crate::core::error::{CmdtreeError, Result};
use crate::core::flags::FlagSpec;
use anyhow::Context;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;
use tracing::debug;

const DEFAULT_ITEMS: [&str; 3] = ["item1", "item2", "item3"];
const ITEM_DURATION: Duration = Duration::from_millis(100);

pub fn command() -> std::result::Result<CommandNode, CmdtreeError> {
    CommandNode::new("process", "Process a list of items")
        .long_help("Processes each item in turn, reporting progress.")
        .handler(handle_process)
        .flag(FlagSpec::list("items", DEFAULT_ITEMS, "Items to process").short('i'))?
        .flag(FlagSpec::bool("verbose", false, "Show detailed output").short('v'))
}

/// Handler for `cmdtree process`.
pub fn handle_process(inv: &ParsedInvocation<'_>) -> Result<()> {
    let given = inv.flags.list("items")?;
    let defaults: Vec<String> = DEFAULT_ITEMS.iter().map(|s| s.to_string()).collect();
    let items = if given.is_empty() { &defaults[..] } else { given };
    let verbose = inv.flags.bool("verbose")?;
    debug!("Processing items {:?} (verbose={})", items, verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    process_items(&mut out, items, verbose, ITEM_DURATION).context("Failed to write progress")?;
    Ok(())
}

/// Writes progress for each item, sleeping `delay` per item.
///
/// Output is flushed after every line so progress shows while waiting.
fn process_items<W: Write>(
    out: &mut W,
    items: &[String],
    verbose: bool,
    delay: Duration,
) -> io::Result<()> {
    writeln!(out, "Processing {} items...", items.len())?;
    for (i, item) in items.iter().enumerate() {
        if verbose {
            writeln!(out, "  Processing: {}", item)?;
            out.flush()?;
        }
        thread::sleep(delay);
        writeln!(out, "  [{}/{}] Completed: {}", i + 1, items.len(), item)?;
        out.flush()?;
    }
    writeln!(out, "{}", ui::success("All items processed!"))
}
