//! # cmdtree Hello Command
//!
//! File: cli/src/commands/hello.rs
//!
//! ## Overview
//!
//! Implements `cmdtree hello [name]`, the smallest command in the tree. It
//! greets `name` (or `World`) `--count` times, optionally in upper case.
//!
//! ## Usage
//!
//! ```bash
//! cmdtree hello                 # Hello, World!
//! cmdtree hello Ann -c 2 -s     # HELLO, ANN! twice, with (1/2) (2/2) counters
//! ```
//!
use crate::core::command::{Arity, CommandNode};
use crate::core::dispatch::ParsedInvocation;
use crate::core::error::{CmdtreeError, Result};
use crate::core::flags::FlagSpec;
use tracing::debug;

const DEFAULT_NAME: &str = "World";

pub fn command() -> std::result::Result<CommandNode, CmdtreeError> {
    CommandNode::new("hello", "Greet someone by name")
        .long_help("Greets the given name. When no name is given, 'World' is used.")
        .args_hint("[name]")
        .arity(Arity::AtMost(1))
        .handler(handle_hello)
        .flag(FlagSpec::int("count", 1, "Number of times to greet").short('c'))?
        .flag(FlagSpec::bool("shout", false, "Greet in upper case").short('s'))
}

/// Handler for `cmdtree hello`.
pub fn handle_hello(inv: &ParsedInvocation<'_>) -> Result<()> {
    let name = inv.positional(0).unwrap_or(DEFAULT_NAME);
    let count = inv.flags.int("count")?;
    let shout = inv.flags.bool("shout")?;
    debug!("Greeting '{}' {} time(s), shout={}", name, count, shout);
    print!("{}", render_greeting(name, count, shout));
    Ok(())
}

/// Builds the greeting lines. A count of zero or less greets nobody.
fn render_greeting(name: &str, count: i64, shout: bool) -> String {
    let (greeting, name) = if shout {
        ("HELLO".to_string(), name.to_uppercase())
    } else {
        ("Hello".to_string(), name.to_string())
    };
    let mut out = String::new();
    for i in 1..=count {
        out.push_str(&format!("{}, {}!\n", greeting, name));
        if count > 1 {
            out.push_str(&format!("  ({}/{})\n", i, count));
        }
    }
    out
}
