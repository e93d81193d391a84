//! Daily "quest" reminders.
//!
//! A [`Scheduler`] wakes up at fixed local times in a configured timezone and
//! hands a [`Reminder`] to a [`Notifier`]. Delivery failures are logged and
//! never stop the loop.

pub use error::ReminderError;
pub use notifier::{Channel, LogNotifier, Notifier, WebhookNotifier};
pub use scheduler::Scheduler;

mod error;
mod notifier;
mod scheduler;

use serde::Serialize;

/// A single reminder message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Reminder {
    pub time_of_day: String,
    pub subject: String,
    pub body: String,
}

impl Reminder {
    /// Composes the message for a time-of-day label such as `Morning`.
    pub fn new(time_of_day: &str, app_url: &str) -> Self {
        Self {
            time_of_day: time_of_day.to_string(),
            subject: format!("{time_of_day} Fin-Quest Reminder ⚔️"),
            body: format!(
                "Greetings, Adventurer! Your {} quest awaits. Log your finances and check your mission progress! {app_url}",
                time_of_day.to_lowercase()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn morning_message() {
        let reminder = Reminder::new("Morning", "http://localhost:5173");
        assert_eq!(reminder.subject, "Morning Fin-Quest Reminder ⚔️");
        assert_eq!(
            reminder.body,
            "Greetings, Adventurer! Your morning quest awaits. Log your finances and check your mission progress! http://localhost:5173"
        );
    }

    #[test]
    fn serializes_all_fields() {
        let reminder = Reminder::new("Evening", "https://finquest.example");
        let value = serde_json::to_value(&reminder).unwrap();
        assert_eq!(value["time_of_day"], "Evening");
        assert_eq!(value["subject"], "Evening Fin-Quest Reminder ⚔️");
        assert!(value["body"].as_str().unwrap().contains("evening quest"));
    }
}
