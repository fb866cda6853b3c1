//! # cmdtree Help & Version Rendering
//!
//! File: cli/src/core/help.rs
//!
//! ## Overview
//!
//! Read-only traversal of a command node producing the text printed for
//! `--help`, for a namespace invoked without a subcommand, and for
//! `--version`. Nothing here takes part in dispatch decisions; when help is
//! shown is decided in `core::dispatch`, where `--help` outranks every flag
//! and arity error on the same command line.
//!
//! Example output for `cmdtree hello --help`:
//!
//! ```text
//! Greet someone by name
//!
//! Usage:
//!   cmdtree hello [name] [flags]
//!
//! Flags:
//!   -c, --count int   Number of times to greet (default 1)
//!   -s, --shout       Greet in upper case
//!   -h, --help        help for hello
//! ```
//!
use crate::common::ui;
use crate::core::command::CommandNode;
use crate::core::flags::{HELP_FLAG, HELP_SHORT};

/// Renders the full help text of `node`, reached via `path` (root first).
pub fn render_help(node: &CommandNode, path: &[&str]) -> String {
    let cmd_path = path.join(" ");
    let mut out = format!("{}\n\nUsage:\n", node.description());

    if !node.is_namespace() {
        let hint = node.hint().map(|h| format!(" {}", h)).unwrap_or_default();
        out.push_str(&format!("  {}{} [flags]\n", cmd_path, hint));
    }
    if !node.children().is_empty() {
        out.push_str(&format!("  {} [command]\n", cmd_path));

        let commands: Vec<(String, String)> = node
            .children()
            .iter()
            .map(|c| (c.name().to_string(), c.short_help().to_string()))
            .collect();
        out.push_str("\nAvailable Commands:\n");
        out.push_str(&ui::two_columns(&commands, 2));
    }

    let mut flags: Vec<(String, String)> = node
        .flags()
        .iter()
        .map(|spec| {
            let mut text = spec.help.clone();
            if !spec.default.is_zero() {
                text.push_str(&format!(" (default {})", spec.default));
            }
            (spec.usage_label(), text)
        })
        .collect();
    flags.push((
        format!("-{}, --{}", HELP_SHORT, HELP_FLAG),
        format!("help for {}", node.name()),
    ));
    if node.version_string().is_some() {
        flags.push(("    --version".to_string(), format!("version for {}", node.name())));
    }
    out.push_str("\nFlags:\n");
    out.push_str(&ui::two_columns(&flags, 2));

    if !node.children().is_empty() {
        out.push_str(&format!(
            "\nUse \"{} [command] --help\" for more information about a command.\n",
            cmd_path
        ));
    }
    out
}

/// `"<name> version <version>"` for a node carrying a version.
pub fn render_version(node: &CommandNode) -> Option<String> {
    node.version_string()
        .map(|version| format!("{} version {}", node.name(), version))
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::command::Arity;
    use crate::core::dispatch::ParsedInvocation;
    use crate::core::error::Result;
    use crate::core::flags::FlagSpec;

    fn ok(_inv: &ParsedInvocation<'_>) -> Result<()> {
        Ok(())
    }

    #[test]
    fn test_leaf_help() {
        let hello = CommandNode::new("hello", "Greet someone")
            .long_help("Greet someone by name")
            .args_hint("[name]")
            .arity(Arity::AtMost(1))
            .handler(ok)
            .flag(FlagSpec::int("count", 1, "Number of times to greet").short('c'))
            .unwrap()
            .flag(FlagSpec::bool("shout", false, "Greet in upper case").short('s'))
            .unwrap();
        let text = render_help(&hello, &["cmdtree", "hello"]);
        let expected = "Greet someone by name\n\
                        \n\
                        Usage:\n  cmdtree hello [name] [flags]\n\
                        \n\
                        Flags:\n\
                        \x20 -c, --count int   Number of times to greet (default 1)\n\
                        \x20 -s, --shout       Greet in upper case\n\
                        \x20 -h, --help        help for hello\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_namespace_help_lists_children() {
        let file = CommandNode::new("file", "File operations")
            .subcommand(CommandNode::new("create", "Create a file").handler(ok))
            .unwrap()
            .subcommand(CommandNode::new("read", "Read a file").handler(ok))
            .unwrap();
        let text = render_help(&file, &["cmdtree", "file"]);
        assert!(text.contains("Usage:\n  cmdtree file [command]\n"));
        assert!(!text.contains("[flags]"));
        assert!(text.contains("  create   Create a file\n"));
        assert!(text.contains("  read     Read a file\n"));
        assert!(text.contains("Use \"cmdtree file [command] --help\""));
    }

    #[test]
    fn test_string_defaults_and_version() {
        let root = CommandNode::new("cmdtree", "Demo")
            .version("1.0.0")
            .flag(FlagSpec::string("env", "development", "Target").short('e'))
            .unwrap()
            .flag(FlagSpec::string("config", "", "Config path"))
            .unwrap();
        let text = render_help(&root, &["cmdtree"]);
        assert!(text.contains("-e, --env string      Target (default \"development\")"));
        assert!(text.contains("    --config string   Config path\n"));
        assert!(text.contains("    --version         version for cmdtree"));
        assert_eq!(render_version(&root).as_deref(), Some("cmdtree version 1.0.0"));
        assert_eq!(render_version(&CommandNode::new("x", "")), None);
    }
}
