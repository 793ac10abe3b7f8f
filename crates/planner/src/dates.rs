//! Calendar-day helpers for due-date windows.
//!
//! Day-granularity comparisons use the local calendar day (midnight to
//! midnight), computed relative to "now" at call time. Weeks run Sunday
//! through Saturday.

use chrono::{DateTime, Duration, Local, NaiveDate, Utc, Weekday};

/// Current local calendar day.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Local calendar day of a UTC timestamp.
pub fn local_day(ts: DateTime<Utc>) -> NaiveDate {
    ts.with_timezone(&Local).date_naive()
}

/// Default due date for new tasks: one day from now.
pub fn default_due_date() -> DateTime<Utc> {
    Utc::now() + Duration::days(1)
}

/// Inclusive containment in `[start, end]`.
pub fn in_day_range(day: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    day >= start && day <= end
}

/// First and last day of the week containing `day`.
pub fn week_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let week = day.week(Weekday::Sun);
    (week.first_day(), week.last_day())
}
