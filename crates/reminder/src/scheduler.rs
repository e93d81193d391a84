use std::time::Duration;

use chrono::{DateTime, Days, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::{Notifier, Reminder, ReminderError};

/// Fires reminders at fixed local times of day.
#[derive(Clone, Debug)]
pub struct Scheduler {
    tz: Tz,
    times: Vec<(String, NaiveTime)>,
    app_url: String,
}

impl Scheduler {
    pub fn new(tz: Tz, times: Vec<(String, NaiveTime)>, app_url: &str) -> Self {
        Self {
            tz,
            times,
            app_url: app_url.to_string(),
        }
    }

    /// Builds a scheduler from textual settings: an IANA timezone name and
    /// `(label, "HH:MM")` pairs.
    pub fn parse<L, T>(timezone: &str, times: &[(L, T)], app_url: &str) -> Result<Self, ReminderError>
    where
        L: AsRef<str>,
        T: AsRef<str>,
    {
        let tz: Tz = timezone
            .parse()
            .map_err(|_| ReminderError::Timezone(timezone.to_string()))?;

        let times = times
            .iter()
            .map(|(label, time)| {
                let time = time.as_ref();
                NaiveTime::parse_from_str(time, "%H:%M")
                    .map(|parsed| (label.as_ref().to_string(), parsed))
                    .map_err(|_| ReminderError::Time(time.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(tz, times, app_url))
    }

    fn occurrence(&self, date: NaiveDate, time: NaiveTime) -> Option<DateTime<Utc>> {
        // Local times skipped by a DST jump have no occurrence that day.
        self.tz
            .from_local_datetime(&date.and_time(time))
            .earliest()
            .map(|local| local.with_timezone(&Utc))
    }

    /// The first reminder strictly after `now`, or `None` without any
    /// configured time.
    pub fn next_fire(&self, now: DateTime<Utc>) -> Option<(&str, DateTime<Utc>)> {
        let today = now.with_timezone(&self.tz).date_naive();

        (0..=2)
            .filter_map(|offset| today.checked_add_days(Days::new(offset)))
            .flat_map(|date| {
                self.times.iter().filter_map(move |(label, time)| {
                    self.occurrence(date, *time).map(|at| (label.as_str(), at))
                })
            })
            .filter(|(_, at)| *at > now)
            .min_by_key(|(_, at)| *at)
    }

    /// Runs forever, sending one reminder per configured time each day.
    pub async fn run<N: Notifier>(self, notifier: N) {
        tracing::info!(
            timezone = %self.tz,
            reminders = self.times.len(),
            "reminder scheduler started"
        );

        loop {
            let now = Utc::now();
            let Some((label, at)) = self.next_fire(now) else {
                tracing::warn!("no reminder times configured, scheduler stopped");
                return;
            };
            let label = label.to_string();

            let wait = (at - now).to_std().unwrap_or(Duration::ZERO);
            tracing::debug!(%label, %at, "next reminder scheduled");
            tokio::time::sleep(wait).await;

            let reminder = Reminder::new(&label, &self.app_url);
            match notifier.send_reminder(&reminder).await {
                Ok(()) => tracing::info!(%label, "reminder sent"),
                Err(err) => tracing::error!(%label, "failed to send reminder: {err}"),
            }
        }
    }
}
