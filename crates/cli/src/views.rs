//! Plain-text renderings of a snapshot.

use api_types::{project::ProjectView, snapshot::Snapshot, task::TaskStatus};
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use engine::{
    Money,
    metrics::{self, Totals},
};

const RECENT_ACTIVITY: usize = 5;

pub fn totals(snapshot: &Snapshot) -> Totals {
    Totals::from_amounts(
        snapshot.income.iter().map(|i| i.amount),
        snapshot.expenses.iter().map(|e| e.amount),
    )
}

pub fn streak(snapshot: &Snapshot, tz: &Tz, today: NaiveDate) -> u32 {
    let dates = metrics::calendar_dates(snapshot.expenses.iter().map(|e| e.date), tz);
    metrics::logging_streak(dates, today)
}

/// True when adding `amount` takes a mission from below its goal to at or
/// above it.
pub fn crosses_goal(saved: i64, goal: i64, amount: i64) -> bool {
    saved < goal && saved.saturating_add(amount) >= goal
}

pub fn dashboard(snapshot: &Snapshot, tz: &Tz, today: NaiveDate) -> String {
    let totals = totals(snapshot);
    let streak = streak(snapshot, tz, today);
    let completed = snapshot
        .projects
        .iter()
        .filter(|p| metrics::completion_percentage(p.saved, p.goal) == 100)
        .count();

    let mut lines = vec![
        "Fin-Quest ⚔️".to_string(),
        format!("Income       {}", totals.income),
        format!("Expenses     {}", totals.expenses),
        format!("Net balance  {}", totals.net),
        format!("Streak       {streak} {}", if streak == 1 { "day" } else { "days" }),
        format!(
            "Missions     {} ({completed} complete)",
            snapshot.projects.len()
        ),
    ];

    let mut activity: Vec<(DateTime<Utc>, char, &str, i64)> = snapshot
        .income
        .iter()
        .map(|i| (i.date, '+', i.source.as_str(), i.amount))
        .chain(
            snapshot
                .expenses
                .iter()
                .map(|e| (e.date, '-', e.description.as_str(), e.amount)),
        )
        .collect();
    activity.sort_by(|a, b| b.0.cmp(&a.0));

    if !activity.is_empty() {
        lines.push(String::new());
        lines.push("Recent activity".to_string());
        for (date, sign, label, amount) in activity.into_iter().take(RECENT_ACTIVITY) {
            let when = date.with_timezone(tz).format("%d %b");
            lines.push(format!("  {when}  {sign} {label}  {}", Money::new(amount)));
        }
    }

    lines.join("\n")
}

fn mission(project: &ProjectView) -> Vec<String> {
    let percentage = metrics::completion_percentage(project.saved, project.goal);
    let mut header = format!(
        "#{} {}  {percentage}%  {} / {}",
        project.id,
        project.name,
        Money::new(project.saved),
        Money::new(project.goal)
    );
    if percentage == 100 {
        header.push_str("  ✔ Mission complete");
    }

    let mut lines = vec![header];
    for task in &project.tasks {
        let mark = match task.status {
            TaskStatus::Done => 'x',
            TaskStatus::Todo => ' ',
        };
        lines.push(format!("   [{mark}] #{} {}", task.id, task.description));
    }
    lines
}

pub fn missions(snapshot: &Snapshot) -> String {
    if snapshot.projects.is_empty() {
        return "No missions yet. Start one with `finquest-cli mission new <name> <goal>`."
            .to_string();
    }

    snapshot
        .projects
        .iter()
        .map(|p| mission(p).join("\n"))
        .collect::<Vec<_>>()
        .join("\n")
}
