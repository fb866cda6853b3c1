//! # cmdtree Deploy Command
//!
//! File: cli/src/commands/deploy.rs
//!
//! ## Overview
//!
//! Implements `cmdtree deploy`, a simulated deployment. It prints the
//! deployment plan, then either stops there (`--dry-run`) or waits one second
//! and reports success.
//!
//! ## Usage
//!
//! ```bash
//! cmdtree deploy --env production --dry-run
//! cmdtree deploy -e staging -f -c deploy.toml
//! ```
//!
use crate::common::ui;
use crate::core::command::CommandNode;
use crate::core::dispatch::ParsedInvocation;
use crate::core::error::{CmdtreeError, Result};
use crate::core::flags::FlagSpec;
use std::thread;
use std::time::Duration;
use tracing::info;

const DEPLOY_DURATION: Duration = Duration::from_secs(1);

pub fn command() -> std::result::Result<CommandNode, CmdtreeError> {
    CommandNode::new("deploy", "Simulate a deployment")
        .long_help("Simulates deploying the application to the selected environment.")
        .handler(handle_deploy)
        .flag(FlagSpec::string("env", "development", "Target environment").short('e'))?
        .flag(FlagSpec::bool("force", false, "Force the deployment").short('f'))?
        .flag(FlagSpec::bool("dry-run", false, "Show the plan without deploying"))?
        .flag(FlagSpec::string("config", "", "Path to a deployment config file").short('c'))
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct DeployPlan<'a> {
    env: &'a str,
    force: bool,
    dry_run: bool,
    config: Option<&'a str>,
}

/// Handler for `cmdtree deploy`.
pub fn handle_deploy(inv: &ParsedInvocation<'_>) -> Result<()> {
    let plan = DeployPlan {
        env: inv.flags.string("env")?,
        force: inv.flags.bool("force")?,
        dry_run: inv.flags.bool("dry-run")?,
        config: if inv.flags.is_set("config") {
            Some(inv.flags.string("config")?)
        } else {
            None
        },
    };
    info!("Deploy requested: {:?}", plan);

    print!("{}", render_plan(&plan));
    if plan.dry_run {
        println!("\n[DRY RUN] Would deploy to {}", plan.env);
        return Ok(());
    }

    println!("\nDeploying to {}...", plan.env);
    thread::sleep(DEPLOY_DURATION);
    println!("{}", ui::success("Deployment completed successfully!"));
    Ok(())
}

fn render_plan(plan: &DeployPlan<'_>) -> String {
    ui::key_value_block(
        "Deployment Configuration",
        &[
            ("Environment", plan.env.to_string()),
            ("Force", plan.force.to_string()),
            ("Dry Run", plan.dry_run.to_string()),
            ("Config", plan.config.unwrap_or("Default").to_string()),
        ],
    )
}
