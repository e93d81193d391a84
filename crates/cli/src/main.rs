mod client;
mod config;
mod error;
mod views;

use std::process::ExitCode;

use api_types::snapshot::Snapshot;
use chrono::Utc;
use chrono_tz::Tz;

use crate::{
    client::Client,
    config::{Command, MissionCommand, TaskCommand},
    error::{AppError, Result},
};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("finquest_cli=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let (config, command) = config::load()?;
    let tz = config.tz()?;
    let client = Client::new(&config.base_url)?;
    tracing::debug!(base_url = %config.base_url, timezone = %tz, "cli configured");

    execute(&client, tz, command).await
}

async fn execute(client: &Client, tz: Tz, command: Command) -> Result<()> {
    let now = Utc::now().with_timezone(&tz).fixed_offset();

    match command {
        Command::Dashboard => {
            let snapshot = client.snapshot().await?;
            print_dashboard(&snapshot, tz);
        }
        Command::Missions => {
            let snapshot = client.snapshot().await?;
            println!("{}", views::missions(&snapshot));
        }
        Command::Income { source, amount } => {
            let created = client.income_new(&source, amount.minor(), now).await?;
            println!("Income #{} logged: {source} {amount}", created.id);
            print_dashboard(&client.snapshot().await?, tz);
        }
        Command::Expense {
            description,
            amount,
        } => {
            let created = client.expense_new(&description, amount.minor(), now).await?;
            println!("Expense #{} logged: {description} {amount}", created.id);
            print_dashboard(&client.snapshot().await?, tz);
        }
        Command::Mission { action } => mission(client, action).await?,
        Command::Task { action } => task(client, action).await?,
    }

    Ok(())
}

async fn mission(client: &Client, action: MissionCommand) -> Result<()> {
    match action {
        MissionCommand::New { name, goal } => {
            let created = client.project_new(&name, goal.minor()).await?;
            println!("Mission #{} started: {name} (goal {goal})", created.id);
        }
        MissionCommand::Save { id, amount } => {
            let before = client.snapshot().await?;
            let project = before
                .projects
                .iter()
                .find(|p| p.id == id)
                .ok_or_else(|| AppError::NotFound(format!("mission #{id} not found")))?;
            let crossed = views::crosses_goal(project.saved, project.goal, amount.minor());

            client.project_save(id, amount.minor()).await?;
            println!("Saved {amount} towards {}", project.name);
            if crossed {
                println!("Mission Complete! 🎉");
            }
        }
        MissionCommand::Delete { id } => {
            let changes = client.project_delete(id).await?;
            if changes.changes == 0 {
                return Err(AppError::NotFound(format!("mission #{id} not found")));
            }
            println!("Mission #{id} abandoned");
        }
    }

    println!("{}", views::missions(&client.snapshot().await?));
    Ok(())
}

async fn task(client: &Client, action: TaskCommand) -> Result<()> {
    match action {
        TaskCommand::Add {
            project_id,
            description,
        } => {
            let created = client.task_new(project_id, &description).await?;
            println!("Task #{} added to mission #{project_id}", created.id);
        }
        TaskCommand::Toggle { task_id } => {
            let snapshot = client.snapshot().await?;
            let status = snapshot
                .projects
                .iter()
                .flat_map(|p| p.tasks.iter())
                .find(|t| t.id == task_id)
                .map(|t| t.status.toggled())
                .ok_or_else(|| AppError::NotFound(format!("task #{task_id} not found")))?;

            client.task_set_status(task_id, status).await?;
            println!("Task #{task_id} is now {}", status.as_str());
        }
    }

    println!("{}", views::missions(&client.snapshot().await?));
    Ok(())
}

fn print_dashboard(snapshot: &Snapshot, tz: Tz) {
    let today = Utc::now().with_timezone(&tz).date_naive();
    println!("{}", views::dashboard(snapshot, &tz, today));
}
