use thiserror::Error;

use crate::client::ClientError;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("unknown timezone: {0}")]
    Timezone(String),
    #[error("{0}")]
    NotFound(String),
    #[error("invalid base_url: {0}")]
    BaseUrl(String),
}
