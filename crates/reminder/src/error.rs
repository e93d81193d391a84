use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReminderError {
    #[error("unknown timezone: {0}")]
    Timezone(String),
    #[error("invalid reminder time \"{0}\" (expected HH:MM)")]
    Time(String),
    #[error("invalid webhook url: {0}")]
    Url(String),
    #[error("webhook delivery failed: {0}")]
    Http(#[from] reqwest::Error),
}
