//! Classroom Admin - terminal front end.
//!
//! Drives the same view-state stores as the web UI against the assignment
//! and teacher profile APIs.

#![allow(clippy::print_stdout, reason = "CLI tool outputs to stdout")]

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod assignment_commands;
mod cli;
mod profile_commands;
mod prompt;

use classroom_client::{ClassroomClient, ClientConfig};
use classroom_core::Outcome;
use cli::{Cli, Commands, ProfileCommands};
use prompt::TerminalInteraction;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let client =
        ClassroomClient::new(client_config(&cli)).context("failed to build HTTP client")?;
    tracing::debug!("Using {:?}", client.config());
    let ui = TerminalInteraction::new(cli.yes);

    match cli.command {
        Commands::Teachers => assignment_commands::list_teachers(&client).await,
        Commands::Assignments { json } => {
            assignment_commands::list_assignments(&client, json).await
        }
        Commands::Assign { teacher, class } => {
            assignment_commands::assign(&client, &ui, teacher, class).await
        }
        Commands::Unassign { id } => assignment_commands::unassign(&client, &ui, id).await,
        Commands::Profile(cmd) => match cmd {
            ProfileCommands::List { json } => profile_commands::list_profiles(&client, json).await,
            ProfileCommands::Add(fields) => profile_commands::add_profile(&client, fields).await,
            ProfileCommands::Update { id, fields } => {
                profile_commands::update_profile(&client, id, fields).await
            }
            ProfileCommands::Delete { id } => {
                profile_commands::delete_profile(&client, &ui, id).await
            }
        },
    }
}

fn client_config(cli: &Cli) -> ClientConfig {
    let mut config = ClientConfig::from_env();
    if let Some(url) = &cli.assign_url {
        config.assignment_base_url.clone_from(url);
    }
    if let Some(url) = &cli.teacher_url {
        config.teacher_base_url.clone_from(url);
    }
    config.normalized()
}

/// Turn a store outcome into the process result, printing the banner message.
pub(crate) fn report(outcome: &Outcome, error: Option<&str>) -> Result<()> {
    match outcome {
        Outcome::Done => Ok(()),
        Outcome::Cancelled => {
            println!("{}", "Cancelled.".yellow());
            Ok(())
        }
        Outcome::Busy => anyhow::bail!("A submission is already in progress"),
        Outcome::Invalid(e) => {
            anyhow::bail!("{}", error.map_or_else(|| e.to_string(), str::to_string))
        }
        Outcome::Failed(e) => {
            anyhow::bail!("{}", error.map_or_else(|| e.to_string(), str::to_string))
        }
    }
}
