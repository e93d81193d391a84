use clap::{Parser, Subcommand};
use chrono_tz::Tz;
use engine::Money;
use serde::Deserialize;

use crate::error::{AppError, Result};

const DEFAULT_CONFIG_PATH: &str = "config/cli.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub timezone: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3001/api/".to_string(),
            timezone: "Africa/Lagos".to_string(),
        }
    }
}

impl AppConfig {
    pub fn tz(&self) -> Result<Tz> {
        self.timezone
            .parse()
            .map_err(|_| AppError::Timezone(self.timezone.clone()))
    }
}

#[derive(Debug, Parser)]
#[command(name = "finquest-cli", about = "Fin-Quest from the terminal", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override base URL (e.g. http://127.0.0.1:3001/api/).
    #[arg(long)]
    base_url: Option<String>,
    /// Override timezone (IANA name) used for dates and the streak.
    #[arg(long)]
    timezone: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Totals, net balance and logging streak.
    Dashboard,
    /// Savings missions with progress and action plans.
    Missions,
    /// Log money coming in.
    Income { source: String, amount: Money },
    /// Log money going out.
    Expense { description: String, amount: Money },
    /// Manage savings missions.
    Mission {
        #[command(subcommand)]
        action: MissionCommand,
    },
    /// Manage action-plan tasks.
    Task {
        #[command(subcommand)]
        action: TaskCommand,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum MissionCommand {
    /// Start a new mission.
    New { name: String, goal: Money },
    /// Add a contribution to a mission.
    Save { id: i64, amount: Money },
    /// Abandon a mission and its tasks.
    Delete { id: i64 },
}

#[derive(Debug, Clone, Subcommand)]
pub enum TaskCommand {
    /// Add a task to a mission.
    Add { project_id: i64, description: String },
    /// Flip a task between todo and done.
    Toggle { task_id: i64 },
}

pub fn load() -> Result<(AppConfig, Command)> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("FINQUEST_CLI"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(base_url) = args.base_url {
        settings.base_url = base_url;
    }
    if let Some(timezone) = args.timezone {
        settings.timezone = timezone;
    }

    Ok((settings, args.command))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_subcommands_and_amounts() {
        let args = Args::try_parse_from(["finquest-cli", "mission", "save", "1", "2000.50"]).unwrap();
        match args.command {
            Command::Mission {
                action: MissionCommand::Save { id, amount },
            } => {
                assert_eq!(id, 1);
                assert_eq!(amount, Money::new(200_050));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_amounts() {
        assert!(Args::try_parse_from(["finquest-cli", "expense", "Food", "12.345"]).is_err());
    }

    #[test]
    fn overrides_are_optional() {
        let args =
            Args::try_parse_from(["finquest-cli", "--timezone", "Europe/Rome", "dashboard"]).unwrap();
        assert_eq!(args.timezone.as_deref(), Some("Europe/Rome"));
        assert!(args.base_url.is_none());
    }

    #[test]
    fn default_timezone_is_valid() {
        assert_eq!(AppConfig::default().tz().unwrap(), chrono_tz::Africa::Lagos);
        let bad = AppConfig {
            timezone: "Nowhere/Land".to_string(),
            ..AppConfig::default()
        };
        assert!(bad.tz().is_err());
    }
}
