//! # cmdtree UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Small text-formatting helpers shared by the help renderer and the command
//! handlers. Every function *returns* a `String` rather than printing, so the
//! callers decide where output goes and the formatting stays unit-testable.
//!
//! - **`key_value_block`**: a titled, indented `key: value` listing, used by
//!   `create-user`, `deploy`, `config` and `info`.
//! - **`two_columns`**: left column padded to a common width, used for the
//!   command and flag listings in help output.
//! - **`success`**: status lines prefixed with `✓`.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::ui;
//!
//! print!("{}", ui::key_value_block("Deployment Configuration", &[
//!     ("Environment", "staging".to_string()),
//!     ("Force", "false".to_string()),
//! ]));
//! println!("{}", ui::success("Deployment completed successfully!"));
//! ```
//!

/// Number of spaces between the columns of `two_columns`.
const COLUMN_GAP: usize = 3;

/// Formats a titled block of indented `key: value` lines.
///
/// ```text
/// User Information:
///   Username: alice
///   Email: Not provided
/// ```
pub fn key_value_block(title: &str, rows: &[(&str, String)]) -> String {
    let mut out = format!("{}:\n", title);
    for (key, value) in rows {
        out.push_str(&format!("  {}: {}\n", key, value));
    }
    out
}

/// Formats rows as two aligned columns, each line indented by `indent` spaces.
///
/// Rows with an empty right-hand side are emitted without trailing padding.
pub fn two_columns(rows: &[(String, String)], indent: usize) -> String {
    let width = rows.iter().map(|(left, _)| left.chars().count()).max().unwrap_or(0);
    let pad = " ".repeat(indent);
    let mut out = String::new();
    for (left, right) in rows {
        if right.is_empty() {
            out.push_str(&format!("{}{}\n", pad, left));
        } else {
            out.push_str(&format!(
                "{}{:<width$}{}{}\n",
                pad,
                left,
                " ".repeat(COLUMN_GAP),
                right,
                width = width
            ));
        }
    }
    out
}

/// `✓ <message>`
pub fn success(message: &str) -> String {
    format!("✓ {}", message)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_value_block() {
        let block = key_value_block(
            "Configuration [local]",
            &[("theme", "dark".to_string()), ("timeout", "30".to_string())],
        );
        assert_eq!(block, "Configuration [local]:\n  theme: dark\n  timeout: 30\n");
        assert_eq!(key_value_block("Empty", &[]), "Empty:\n");
    }

    #[test]
    fn test_two_columns_alignment() {
        let rows = vec![
            ("hello".to_string(), "Greet someone".to_string()),
            ("create-user".to_string(), "Create a user".to_string()),
            ("bare".to_string(), String::new()),
        ];
        let out = two_columns(&rows, 2);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "  hello         Greet someone");
        assert_eq!(lines[1], "  create-user   Create a user");
        assert_eq!(lines[2], "  bare");
        assert_eq!(two_columns(&[], 2), "");
    }

    #[test]
    fn test_status_lines() {
        assert_eq!(success("done"), "✓ done");
    }
}
