//! Handles settings for the application. Configuration is read from an
//! optional `settings.toml` and from `FINQUEST__*` environment variables,
//! e.g. `FINQUEST__SERVER__PORT=8080`.
//!
//! See `settings.toml` for the configuration.
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct App {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Memory,
    Sqlite(String),
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: Option<String>,
    #[serde(default = "default_port")]
    pub port: u16,
    pub database: Database,
}

fn default_port() -> u16 {
    3001
}

#[derive(Debug, Deserialize)]
pub struct ReminderTime {
    pub label: String,
    pub at: String,
}

#[derive(Debug, Deserialize)]
pub struct Reminder {
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_times")]
    pub times: Vec<ReminderTime>,
    #[serde(default = "default_app_url")]
    pub app_url: String,
    pub webhook_url: Option<String>,
}

fn default_timezone() -> String {
    "Africa/Lagos".to_string()
}

fn default_times() -> Vec<ReminderTime> {
    vec![
        ReminderTime {
            label: "Morning".to_string(),
            at: "09:00".to_string(),
        },
        ReminderTime {
            label: "Evening".to_string(),
            at: "20:00".to_string(),
        },
    ]
}

fn default_app_url() -> String {
    "http://localhost:5173".to_string()
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub app: App,
    pub server: Option<Server>,
    pub reminder: Option<Reminder>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_config(
            Config::builder()
                .add_source(File::with_name("settings").required(false))
                .add_source(Environment::with_prefix("FINQUEST").separator("__"))
                .build()?,
        )
    }

    fn from_config(config: Config) -> Result<Self, ConfigError> {
        config.try_deserialize()
    }
}
