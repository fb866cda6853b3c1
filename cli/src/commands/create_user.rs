//! # cmdtree Create-User Command
//!
//! File: cli/src/commands/create_user.rs
//!
//! ## Overview
//!
//! Implements `cmdtree create-user <username>`. Nothing is stored: the command
//! prints the profile it would create, stamped with the local time.
//!
//! Optional fields are reported as `Not provided` only when their flag was not
//! given at all, so `--age 0` prints `Age: 0`.
//!
//! ## Usage
//!
//! ```bash
//! cmdtree create-user alice --email alice@example.com --age 30
//! cmdtree create-user bob --active=false
//! ```
//!
use crate::common::ui;
use crate::core::command::{Arity, CommandNode};
use crate::core::dispatch::ParsedInvocation;
use crate::core::error::{CmdtreeError, Result};
use crate::core::flags::FlagSpec;
use chrono::Local;
use tracing::info;

const NOT_PROVIDED: &str = "Not provided";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn command() -> std::result::Result<CommandNode, CmdtreeError> {
    CommandNode::new("create-user", "Create a user profile")
        .long_help("Creates a new user profile (demonstration only, nothing is stored).")
        .args_hint("<username>")
        .arity(Arity::Exact(1))
        .handler(handle_create_user)
        .flag(FlagSpec::string("email", "", "Email address").short('e'))?
        .flag(FlagSpec::int("age", 0, "Age in years").short('a'))?
        .flag(FlagSpec::bool("active", true, "Whether the account is active"))
}

/// The fields printed for a new user.
#[derive(Debug, Clone, PartialEq, Eq)]
struct UserProfile<'a> {
    username: &'a str,
    email: Option<&'a str>,
    age: Option<i64>,
    active: bool,
}

/// Handler for `cmdtree create-user`.
pub fn handle_create_user(inv: &ParsedInvocation<'_>) -> Result<()> {
    let email = if inv.flags.is_set("email") {
        Some(inv.flags.string("email")?)
    } else {
        None
    };
    let age = if inv.flags.is_set("age") {
        Some(inv.flags.int("age")?)
    } else {
        None
    };
    let profile = UserProfile {
        username: inv.required(0)?,
        email,
        age,
        active: inv.flags.bool("active")?,
    };
    info!("Creating user '{}'", profile.username);

    let created = Local::now().format(TIMESTAMP_FORMAT).to_string();
    println!("Creating user...");
    print!("{}", render_profile(&profile, &created));
    println!("{}", ui::success("User created successfully!"));
    Ok(())
}

fn render_profile(profile: &UserProfile<'_>, created: &str) -> String {
    ui::key_value_block(
        "User Information",
        &[
            ("Username", profile.username.to_string()),
            ("Email", profile.email.unwrap_or(NOT_PROVIDED).to_string()),
            (
                "Age",
                profile
                    .age
                    .map(|a| a.to_string())
                    .unwrap_or_else(|| NOT_PROVIDED.to_string()),
            ),
            ("Active", profile.active.to_string()),
            ("Created", created.to_string()),
        ],
    )
}
