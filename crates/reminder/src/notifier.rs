use reqwest::Url;

use crate::{Reminder, ReminderError};

/// Delivers reminders somewhere a user will see them.
pub trait Notifier {
    fn send_reminder(
        &self,
        reminder: &Reminder,
    ) -> impl Future<Output = Result<(), ReminderError>> + Send;
}

/// Writes reminders to the log only.
#[derive(Clone, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    async fn send_reminder(&self, reminder: &Reminder) -> Result<(), ReminderError> {
        tracing::info!(subject = %reminder.subject, "{}", reminder.body);
        Ok(())
    }
}

/// POSTs the reminder as JSON to a webhook.
#[derive(Clone, Debug)]
pub struct WebhookNotifier {
    url: Url,
    http: reqwest::Client,
}

impl WebhookNotifier {
    pub fn new(url: &str) -> Result<Self, ReminderError> {
        let url = Url::parse(url).map_err(|err| ReminderError::Url(format!("{url}: {err}")))?;
        Ok(Self {
            url,
            http: reqwest::Client::new(),
        })
    }
}

impl Notifier for WebhookNotifier {
    async fn send_reminder(&self, reminder: &Reminder) -> Result<(), ReminderError> {
        self.http
            .post(self.url.clone())
            .json(reminder)
            .send()
            .await?
            .error_for_status()?;
        tracing::debug!(url = %self.url, subject = %reminder.subject, "reminder delivered");
        Ok(())
    }
}

/// Notifier picked from configuration.
#[derive(Clone, Debug)]
pub enum Channel {
    Log(LogNotifier),
    Webhook(WebhookNotifier),
}

impl Channel {
    /// Webhook when a URL is configured, log otherwise.
    pub fn from_webhook(url: Option<&str>) -> Result<Self, ReminderError> {
        match url {
            Some(url) => Ok(Self::Webhook(WebhookNotifier::new(url)?)),
            None => Ok(Self::Log(LogNotifier)),
        }
    }
}

impl Notifier for Channel {
    async fn send_reminder(&self, reminder: &Reminder) -> Result<(), ReminderError> {
        match self {
            Channel::Log(notifier) => notifier.send_reminder(reminder).await,
            Channel::Webhook(notifier) => notifier.send_reminder(reminder).await,
        }
    }
}
