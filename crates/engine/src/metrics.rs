//! Derived metrics computed by clients over a snapshot.
//!
//! Nothing here is persisted: totals, progress and the logging streak are
//! recomputed from the latest snapshot on every refresh.

use std::collections::BTreeSet;

use chrono::{DateTime, Days, NaiveDate, TimeZone, Utc};

use crate::Money;

/// Income/expense totals and the resulting balance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Totals {
    pub income: Money,
    pub expenses: Money,
    pub net: Money,
}

impl Totals {
    /// Sums raw minor-unit amounts. Sums past the `i64` range stick at the
    /// bound.
    pub fn from_amounts<I, E>(income: I, expenses: E) -> Self
    where
        I: IntoIterator<Item = i64>,
        E: IntoIterator<Item = i64>,
    {
        let income = Money::saturating_sum(income);
        let expenses = Money::saturating_sum(expenses);
        Self {
            income,
            expenses,
            net: income.saturating_sub(expenses),
        }
    }
}

/// `round(100 * saved / goal)` clamped to `0..=100`.
///
/// A goal of zero or less has nothing left to save and reads as 100%.
pub fn completion_percentage(saved: i64, goal: i64) -> u8 {
    if goal <= 0 {
        return 100;
    }
    if saved <= 0 {
        return 0;
    }
    // Half-up rounding in integers: (200 * saved + goal) / (2 * goal).
    let saved = i128::from(saved);
    let goal = i128::from(goal);
    let rounded = (200 * saved + goal) / (2 * goal);
    rounded.min(100) as u8
}

/// Unclamped `saved / goal`; can exceed 1.0 for over-completed missions.
pub fn completion_ratio(saved: i64, goal: i64) -> f64 {
    if goal <= 0 {
        return 1.0;
    }
    saved as f64 / goal as f64
}

/// Maps timestamps to calendar dates in `tz`.
pub fn calendar_dates<Tz, I>(timestamps: I, tz: &Tz) -> Vec<NaiveDate>
where
    Tz: TimeZone,
    I: IntoIterator<Item = DateTime<Utc>>,
{
    timestamps
        .into_iter()
        .map(|ts| ts.with_timezone(tz).date_naive())
        .collect()
}

/// Number of consecutive days with at least one logged expense.
///
/// The run must end today or yesterday, otherwise the streak is broken and
/// the result is 0. Counting walks back from the most recent date and stops
/// at the first missing day.
pub fn logging_streak<I>(dates: I, today: NaiveDate) -> u32
where
    I: IntoIterator<Item = NaiveDate>,
{
    let distinct: BTreeSet<NaiveDate> = dates.into_iter().collect();
    let mut newest_first = distinct.into_iter().rev();

    let Some(mut previous) = newest_first.next() else {
        return 0;
    };

    let yesterday = today.checked_sub_days(Days::new(1));
    if previous != today && Some(previous) != yesterday {
        return 0;
    }

    let mut streak = 1;
    for date in newest_first {
        if previous.checked_sub_days(Days::new(1)) != Some(date) {
            break;
        }
        streak += 1;
        previous = date;
    }
    streak
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn totals_and_net_balance() {
        let totals = Totals::from_amounts([300_000, 50_000], [120_000, 30_000, 500]);
        assert_eq!(totals.income, Money::new(350_000));
        assert_eq!(totals.expenses, Money::new(150_500));
        assert_eq!(totals.net, Money::new(199_500));
    }

    #[test]
    fn net_balance_can_be_negative() {
        let totals = Totals::from_amounts([100], [250]);
        assert_eq!(totals.net, Money::new(-150));
    }

    #[test]
    fn huge_totals_do_not_overflow() {
        let totals = Totals::from_amounts([i64::MAX, 1], []);
        assert_eq!(totals.income, Money::new(i64::MAX));
        assert_eq!(totals.net, Money::new(i64::MAX));

        let totals = Totals::from_amounts([], [i64::MAX, i64::MAX]);
        assert_eq!(totals.net, Money::new(-i64::MAX));
    }

    #[test]
    fn percentage_rounds_half_up_and_clamps() {
        assert_eq!(completion_percentage(0, 500_000), 0);
        assert_eq!(completion_percentage(200_000, 500_000), 40);
        assert_eq!(completion_percentage(1, 200), 1);
        assert_eq!(completion_percentage(1, 300), 0);
        assert_eq!(completion_percentage(500_000, 500_000), 100);
        assert_eq!(completion_percentage(150, 100), 100);
        assert_eq!(completion_percentage(i64::MAX, 1), 100);
    }

    #[test]
    fn zero_goal_reads_as_complete() {
        assert_eq!(completion_percentage(0, 0), 100);
        assert!((completion_ratio(10, 0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn streak_of_consecutive_days_ending_today() {
        let dates = [date(2024, 1, 3), date(2024, 1, 2), date(2024, 1, 1)];
        assert_eq!(logging_streak(dates, date(2024, 1, 3)), 3);
    }

    #[test]
    fn streak_stops_at_first_gap() {
        let dates = [date(2024, 1, 3), date(2024, 1, 1)];
        assert_eq!(logging_streak(dates, date(2024, 1, 3)), 1);
    }

    #[test]
    fn streak_may_end_yesterday() {
        let dates = [date(2024, 1, 2), date(2024, 1, 1)];
        assert_eq!(logging_streak(dates, date(2024, 1, 3)), 2);
    }

    #[test]
    fn streak_is_broken_when_last_log_is_older() {
        let dates = [date(2024, 1, 1)];
        assert_eq!(logging_streak(dates, date(2024, 1, 3)), 0);
        assert_eq!(logging_streak(Vec::new(), date(2024, 1, 3)), 0);
    }

    #[test]
    fn duplicate_dates_count_once() {
        let dates = [
            date(2024, 1, 3),
            date(2024, 1, 3),
            date(2024, 1, 2),
            date(2024, 1, 2),
        ];
        assert_eq!(logging_streak(dates, date(2024, 1, 3)), 2);
    }

    #[test]
    fn future_dates_break_the_streak() {
        let dates = [date(2024, 1, 4), date(2024, 1, 3)];
        assert_eq!(logging_streak(dates, date(2024, 1, 3)), 0);
    }

    #[test]
    fn calendar_dates_follow_the_timezone() {
        let late_utc = Utc.with_ymd_and_hms(2024, 1, 2, 23, 30, 0).unwrap();
        let lagos = FixedOffset::east_opt(3600).unwrap();
        assert_eq!(calendar_dates([late_utc], &Utc), vec![date(2024, 1, 2)]);
        assert_eq!(calendar_dates([late_utc], &lagos), vec![date(2024, 1, 3)]);
    }
}
