//! DynamoDB infrastructure management commands.

mod client;
mod config;
mod deploy;
mod error;
mod planning;
mod seed;

pub use error::{DynamodbError, Result};

use crate::prelude::*;
use aws_sdk_dynamodb::Client;
use dialoguer::Confirm;
use planning::PlanLine;

/// DynamoDB infrastructure management commands.
///
/// The target comes from the standard AWS environment: `AWS_ENDPOINT_URL`
/// for a local DynamoDB, `AWS_REGION` (default us-east-1) and `AWS_PROFILE`.
#[derive(Debug, clap::Parser)]
pub struct DynamodbCommand {
    #[command(subcommand)]
    pub action: DynamodbAction,
}

#[derive(Debug, clap::Subcommand)]
pub enum DynamodbAction {
    /// Create the wishlist table and its `wishlist_id` index, or destroy it.
    Deploy(DeployCommand),

    /// Write demo wishlists and items for an owner.
    Seed(SeedCommand),
}

/// Table selection shared by every action.
#[derive(Debug, clap::Args)]
pub struct TableArgs {
    /// Table name to use.
    #[arg(long, env = "DYNAMODB_TABLE_NAME", default_value = "wishlist")]
    pub table_name: String,

    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, clap::Parser)]
pub struct DeployCommand {
    #[command(flatten)]
    pub table: TableArgs,

    /// Delete the table and all of its rows.
    #[arg(long)]
    pub destroy: bool,
}

#[derive(Debug, clap::Parser)]
pub struct SeedCommand {
    #[command(flatten)]
    pub table: TableArgs,

    /// Owner identity (email) of the generated lists.
    #[arg(long, value_name = "EMAIL")]
    pub owner: String,

    /// Number of lists to generate.
    #[arg(long, default_value = "3")]
    pub lists: u32,

    /// Number of items per list.
    #[arg(long, default_value = "4")]
    pub items: u32,
}

/// Console output that honours `--silent`.
struct Console {
    silent: bool,
}

impl Console {
    fn line(&self, text: &str) {
        if !self.silent {
            aprintln!("{}", text);
        }
    }

    fn field(&self, label: &str, value: &str) {
        self.line(&format!("{} {}", p_b(label), value));
    }
}

/// Main entry point for dynamodb command.
pub async fn run(command: DynamodbCommand, global: crate::Global) -> Result<()> {
    let console = Console {
        silent: global.is_silent(),
    };
    let aws_config = client::AwsConfig::default();
    console.field("Target:", &aws_config.target_display());

    let dynamo_client = client::create_client(&aws_config).await;
    match command.action {
        DynamodbAction::Deploy(cmd) => deploy(&dynamo_client, cmd, &console).await,
        DynamodbAction::Seed(cmd) => seed(&dynamo_client, cmd, &console).await,
    }
}

async fn deploy(dynamo_client: &Client, cmd: DeployCommand, console: &Console) -> Result<()> {
    let table_name = &cmd.table.table_name;
    let current = client::get_table_state(dynamo_client, table_name).await?;

    let plan = if cmd.destroy {
        planning::destroy_plan(current.as_ref(), table_name)
    } else {
        let desired = config::wishlist_table_config().with_table_name(table_name);
        planning::deploy_plan(current.as_ref(), &desired)?
    };

    console.line(&p_c("Plan:"));
    for line in planning::describe(&plan) {
        console.line(&render(&line));
    }

    if plan.is_noop() {
        console.line(&p_g("Nothing to do."));
        return Ok(());
    }

    let (prompt, default) = plan.prompt();
    confirm(prompt, default, cmd.table.force)?;

    console.line(&p_b("Applying..."));
    deploy::execute_plan(dynamo_client, &plan).await?;
    console.line(&p_g("Done."));
    Ok(())
}

async fn seed(dynamo_client: &Client, cmd: SeedCommand, console: &Console) -> Result<()> {
    let table_name = &cmd.table.table_name;
    if client::get_table_state(dynamo_client, table_name)
        .await?
        .is_none()
    {
        return Err(DynamodbError::TableNotFound {
            table_name: table_name.clone(),
        });
    }

    let lists = seed::generate_seed_lists(&cmd.owner, cmd.lists, cmd.items);
    let rows = seed::seed_rows(&lists);

    console.field("Owner:", &cmd.owner);
    for list in &lists {
        console.line(&format!(
            "  {} {} ({} items)",
            list.wishlist.id,
            list.wishlist.name,
            list.items.len()
        ));
    }

    confirm(
        &format!("Write {} rows to '{}'?", rows.len(), table_name),
        true,
        cmd.table.force,
    )?;

    let written = seed::write_rows(dynamo_client, table_name, &rows).await?;
    console.line(&format!("{} {} rows written.", p_g("Success:"), written));
    Ok(())
}

fn render(line: &PlanLine) -> String {
    match line {
        PlanLine::Add(text) => format!("  {}", p_g(&format!("+ {text}"))),
        PlanLine::Change(text) => format!("  {}", p_y(&format!("~ {text}"))),
        PlanLine::Remove(text) => format!("  {}", p_r(&format!("- {text}"))),
        PlanLine::Keep(text) => format!("  = {text}"),
        PlanLine::Detail(text) => format!("    {text}"),
    }
}

fn confirm(prompt: &str, default: bool, force: bool) -> Result<()> {
    if force {
        return Ok(());
    }
    match Confirm::new().with_prompt(prompt).default(default).interact()? {
        true => Ok(()),
        false => Err(DynamodbError::UserCancelled),
    }
}
