use crate::calendar::days_in_month;
use crate::consts::{MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_MONTH, MIN_YEAR, MONTHS_PER_YEAR};
use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime};

/// A subtraction left the range the calendar primitive can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("date arithmetic on {0} left the supported range")]
pub struct OutOfRange(pub NaiveDateTime);

/// Returns the final calendar day of `date`'s month, keeping the time of day.
pub fn last_day_of_month(date: NaiveDateTime) -> NaiveDateTime {
    set_day(date, days_in_month(date.year(), date.month()))
}

/// Sets the day of month, clamped to the length of the current month.
pub fn set_day(date: NaiveDateTime, day: u32) -> NaiveDateTime {
    let day = day.clamp(MIN_DAY, days_in_month(date.year(), date.month()));
    rebuild(date, date.year(), date.month(), day)
}

/// Sets the month, clamped to `1..=12`. The date moves to day 1 first and the
/// original day is re-applied through [`set_day`], so the day ends up clamped
/// against the new month's length.
pub fn set_month(date: NaiveDateTime, month: u32) -> NaiveDateTime {
    let month = month.clamp(MIN_MONTH, MAX_MONTH);
    let day = date.day();
    let first = rebuild(date, date.year(), month, MIN_DAY);
    set_day(first, day)
}

/// Sets the year, clamped to `MIN_YEAR..=MAX_YEAR`. The date moves to January
/// 1st of that year, then month and day are re-applied in sequence so each is
/// clamped against its new context.
pub fn set_year(date: NaiveDateTime, year: i32) -> NaiveDateTime {
    let year = year.clamp(MIN_YEAR, MAX_YEAR);
    let (month, day) = (date.month(), date.day());
    let first = rebuild(date, year, MIN_MONTH, MIN_DAY);
    set_day(set_month(first, month), day)
}

/// Subtracts `|days|` days. The sign of `days` is ignored.
///
/// # Errors
/// Returns [`OutOfRange`] when the result leaves the representable date range.
pub fn remove_days(date: NaiveDateTime, days: i64) -> Result<NaiveDateTime, OutOfRange> {
    date.checked_sub_days(Days::new(days.unsigned_abs()))
        .ok_or(OutOfRange(date))
}

/// Subtracts `|months|` months, clamping the day to the target month's length.
/// The sign of `months` is ignored.
///
/// # Errors
/// Returns [`OutOfRange`] when the result leaves the representable date range.
pub fn remove_months(date: NaiveDateTime, months: i32) -> Result<NaiveDateTime, OutOfRange> {
    date.checked_sub_months(Months::new(months.unsigned_abs()))
        .ok_or(OutOfRange(date))
}

/// Subtracts `|years|` years, clamping February 29th to the 28th when the
/// target year is not a leap year. The sign of `years` is ignored.
///
/// # Errors
/// Returns [`OutOfRange`] when the result leaves the representable date range.
pub fn remove_years(date: NaiveDateTime, years: i32) -> Result<NaiveDateTime, OutOfRange> {
    let months = years.unsigned_abs().saturating_mul(MONTHS_PER_YEAR);
    date.checked_sub_months(Months::new(months))
        .ok_or(OutOfRange(date))
}

/// Rebuilds the calendar date around the same time of day. Callers pass
/// components already clamped to a real calendar date.
fn rebuild(date: NaiveDateTime, year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day).map_or(date, |d| d.and_time(date.time()))
}
