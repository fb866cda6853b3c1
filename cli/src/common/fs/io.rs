//! # cmdtree Filesystem I/O
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Thin wrappers around `std::fs` used by the `file` commands and the settings
//! loader. Each wrapper attaches an `anyhow::Context` message naming the path,
//! so a failure surfaces to the user as e.g.
//! `Failed to read file: notes.txt: No such file or directory (os error 2)`.
//!
//! - **`ensure_parent_dir`**: creates the parent directory of a file path if
//!   it is missing; fails if that parent exists but is not a directory.
//! - **`read_file_to_string`**: reads a whole UTF-8 file.
//! - **`write_string_to_file`**: writes (truncating) after `ensure_parent_dir`.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! io::write_string_to_file(Path::new("out/notes.txt"), "Hello")?;
//! let text = io::read_file_to_string(Path::new("out/notes.txt"))?;
//! ```
//!
use crate::core::error::{CmdtreeError, Result};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Creates the parent directory of `file_path` when it does not exist yet.
///
/// Paths without a parent component (`notes.txt`) need nothing created.
///
/// # Errors
///
/// `CmdtreeError::FileSystem` if the parent exists but is not a directory, or
/// the I/O error from `fs::create_dir_all` with context.
pub fn ensure_parent_dir(file_path: &Path) -> Result<()> {
    let parent = match file_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => return Ok(()),
    };
    if parent.exists() {
        if !parent.is_dir() {
            return Err(CmdtreeError::FileSystem(format!(
                "Parent path '{}' exists but is not a directory",
                parent.display()
            ))
            .into());
        }
        return Ok(());
    }
    debug!("Creating parent directory: {}", parent.display());
    fs::create_dir_all(parent)
        .with_context(|| format!("Failed to create directory: {}", parent.display()))
}

/// Reads the entire contents of `path` into a `String`.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    debug!("Reading file: {}", path.display());
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Writes `content` to `path`, overwriting any existing file.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    info!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
