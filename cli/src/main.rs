//! # cmdtree Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file is the entry point of the `cmdtree` binary. It:
//! - sets up logging (`RUST_LOG`, defaulting to `warn`)
//! - builds the command tree
//! - dispatches the process arguments to the matching handler
//! - turns any error into `Error: ...` on stderr and exit status 1
//!
//! ## Architecture
//!
//! The command tree is an ordinary value built by
//! `commands::build_command_tree()` and borrowed by a `core::dispatch::Dispatcher`.
//! All parsing and validation happens in the dispatcher before any handler
//! runs; errors from either stage propagate back here.
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! cmdtree --help
//! cmdtree file --help
//!
//! # Run a command with debug logging
//! RUST_LOG=debug cmdtree hello Ann --count 2
//! ```
//!
use crate::core::dispatch::Dispatcher;
use crate::core::error::{CmdtreeError, Result};
use anyhow::anyhow;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command declarations and handlers (hello, file, config, ...)
mod common; // Shared utilities (fs, ui)
mod core; // Dispatch engine, errors, settings

const DEFAULT_LOG_LEVEL: &str = "warn";

fn main() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    if let Err(e) = run() {
        tracing::error!("Command execution failed: {:?}", e);
        if let Some(err) = e.downcast_ref::<CmdtreeError>() {
            tracing::debug!(
                "{:?} error at {:?} (token {:?})",
                err.kind(),
                err.path(),
                err.token()
            );
        }
        eprintln!("Error: {:#}", e);
        if let Some(usage) = usage_text(&e) {
            eprintln!();
            eprint!("{}", usage);
        }
        std::process::exit(1);
    }
}

/// Builds the tree and dispatches the process arguments.
fn run() -> Result<()> {
    let args = collect_args()?;
    tracing::debug!("Command-line arguments: {:?}", args);

    let tree = commands::build_command_tree()?;
    Dispatcher::new(&tree).dispatch(args)
}

/// Process arguments without the program name. Non-UTF-8 arguments are rejected.
fn collect_args() -> Result<Vec<String>> {
    std::env::args_os()
        .skip(1)
        .map(|arg| {
            arg.into_string()
                .map_err(|raw| anyhow!("argument is not valid UTF-8: {:?}", raw))
        })
        .collect()
}

/// Help text of the namespace a usage error refers to.
fn usage_text(err: &anyhow::Error) -> Option<String> {
    let usage_err = err.downcast_ref::<CmdtreeError>()?;
    let tree = commands::build_command_tree().ok()?;
    Dispatcher::new(&tree).usage_for(usage_err)
}
