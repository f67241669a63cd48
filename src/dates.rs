//! Calendar helpers
//!
//! All scheduling works in whole calendar days (no time-of-day component).
//! Dates are rendered long-form, e.g. "October 05, 2026".

use chrono::{Days, Local, NaiveDate};

/// Long-form date format: "Month DD, YYYY"
pub const LONG_DATE_FORMAT: &str = "%B %d, %Y";

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Add whole days, saturating at the end of the supported calendar
pub fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days))
        .unwrap_or(NaiveDate::MAX)
}

/// Format as "Month DD, YYYY"
pub fn format_long(date: NaiveDate) -> String {
    date.format(LONG_DATE_FORMAT).to_string()
}
