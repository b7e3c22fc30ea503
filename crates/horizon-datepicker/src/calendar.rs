//! Calendar arithmetic shared by the picker state and its panels.
//!
//! All timestamps are [`NaiveDateTime`] values at minute precision. The
//! helpers here are total: an operation that would leave chrono's supported
//! range returns its input unchanged.

use chrono::{Datelike, Duration, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};

/// Number of days shown by the month grid (five full weeks).
pub const GRID_DAYS: usize = 35;

/// Number of hours listed for the displayed day.
pub const HOURS_PER_DAY: usize = 24;

/// Number of minutes listed for the displayed hour.
pub const MINUTES_PER_HOUR: usize = 60;

/// Source of "now" for the picker.
pub type Clock = fn() -> NaiveDateTime;

/// The local wall-clock time, truncated to the minute.
pub fn system_now() -> NaiveDateTime {
    truncate_to_minute(Local::now().naive_local())
}

/// Drop seconds and sub-second precision.
pub fn truncate_to_minute(value: NaiveDateTime) -> NaiveDateTime {
    value
        .with_second(0)
        .and_then(|v| v.with_nanosecond(0))
        .unwrap_or(value)
}

/// Shift by a signed number of months, clamping the day to the target month.
pub fn add_months(value: NaiveDateTime, months: i32) -> NaiveDateTime {
    let shifted = if months >= 0 {
        value.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        value.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(value)
}

/// Shift by a signed number of years.
pub fn add_years(value: NaiveDateTime, years: i32) -> NaiveDateTime {
    add_months(value, years.saturating_mul(12))
}

/// Shift by a signed number of days.
pub fn add_days(value: NaiveDateTime, days: i64) -> NaiveDateTime {
    Duration::try_days(days)
        .and_then(|d| value.checked_add_signed(d))
        .unwrap_or(value)
}

/// Midnight on the first day of `value`'s month.
pub fn start_of_month(value: NaiveDateTime) -> NaiveDateTime {
    value
        .date()
        .with_day(1)
        .unwrap_or(value.date())
        .and_time(NaiveTime::MIN)
}

/// Midnight on the first day of the week containing `date`.
pub fn start_of_week(date: NaiveDate, first_day_of_week: Weekday) -> NaiveDate {
    let first = first_day_of_week.num_days_from_sunday();
    let this = date.weekday().num_days_from_sunday();
    let offset = (this + 7 - first) % 7;
    date.checked_sub_signed(Duration::days(i64::from(offset)))
        .unwrap_or(date)
}

/// First cell of the month grid displayed for `view_date`.
pub fn grid_start(view_date: NaiveDateTime, first_day_of_week: Weekday) -> NaiveDateTime {
    start_of_week(start_of_month(view_date).date(), first_day_of_week).and_time(NaiveTime::MIN)
}

/// Last cell of the month grid displayed for `view_date`.
pub fn grid_end(view_date: NaiveDateTime, first_day_of_week: Weekday) -> NaiveDateTime {
    add_days(grid_start(view_date, first_day_of_week), GRID_DAYS as i64 - 1)
}

/// Clamp `value` into the month grid displayed for `view_date`.
pub fn clamp_to_grid(
    value: NaiveDateTime,
    view_date: NaiveDateTime,
    first_day_of_week: Weekday,
) -> NaiveDateTime {
    let earliest = grid_start(view_date, first_day_of_week);
    let latest = grid_end(view_date, first_day_of_week);
    value.clamp(earliest, latest)
}

/// The 35 days of the month grid displayed for `view_date`.
pub fn days_in_grid(view_date: NaiveDateTime, first_day_of_week: Weekday) -> Vec<NaiveDateTime> {
    let start = grid_start(view_date, first_day_of_week);
    (0..GRID_DAYS as i64).map(|i| add_days(start, i)).collect()
}

/// The 24 hours of `view_date`'s day.
pub fn hours_in_day(view_date: NaiveDateTime) -> Vec<NaiveDateTime> {
    let start = view_date.date().and_time(NaiveTime::MIN);
    (0..HOURS_PER_DAY as i64)
        .filter_map(|i| start.checked_add_signed(Duration::hours(i)))
        .collect()
}

/// The 60 minutes of `view_date`'s hour.
pub fn minutes_in_hour(view_date: NaiveDateTime) -> Vec<NaiveDateTime> {
    let start = view_date
        .with_minute(0)
        .map(truncate_to_minute)
        .unwrap_or(view_date);
    (0..MINUTES_PER_HOUR as i64)
        .filter_map(|i| start.checked_add_signed(Duration::minutes(i)))
        .collect()
}

/// Granularity at which two timestamps are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarUnit {
    /// Same calendar year.
    Year,
    /// Same year and month.
    Month,
    /// Same calendar day.
    #[default]
    Day,
    /// Same day and hour.
    Hour,
    /// Same day, hour and minute.
    Minute,
}

impl CalendarUnit {
    /// Whether `a` and `b` fall into the same unit.
    pub fn same(self, a: NaiveDateTime, b: NaiveDateTime) -> bool {
        let same_year = a.year() == b.year();
        let same_month = same_year && a.month() == b.month();
        let same_day = a.date() == b.date();
        match self {
            Self::Year => same_year,
            Self::Month => same_month,
            Self::Day => same_day,
            Self::Hour => same_day && a.hour() == b.hour(),
            Self::Minute => same_day && a.hour() == b.hour() && a.minute() == b.minute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_grid_is_five_weeks_from_sunday() {
        // January 2021 starts on a Friday.
        let days = days_in_grid(at(2021, 1, 15, 9, 30), Weekday::Sun);
        assert_eq!(days.len(), GRID_DAYS);
        assert_eq!(days[0], at(2020, 12, 27, 0, 0));
        assert_eq!(days[34], at(2021, 1, 30, 0, 0));
        assert!(days.iter().all(|d| d.time() == NaiveTime::MIN));
    }

    #[test]
    fn test_grid_respects_first_day_of_week() {
        let days = days_in_grid(at(2021, 1, 15, 0, 0), Weekday::Mon);
        assert_eq!(days[0], at(2020, 12, 28, 0, 0));
        assert_eq!(days[0].weekday(), Weekday::Mon);
    }

    #[test]
    fn test_grid_for_month_starting_on_first_day() {
        // August 2021 starts on a Sunday.
        let days = days_in_grid(at(2021, 8, 31, 0, 0), Weekday::Sun);
        assert_eq!(days[0], at(2021, 8, 1, 0, 0));
    }

    #[test]
    fn test_add_months_clamps_day() {
        assert_eq!(add_months(at(2021, 1, 31, 12, 0), 1), at(2021, 2, 28, 12, 0));
        assert_eq!(add_months(at(2021, 3, 31, 12, 0), -1), at(2021, 2, 28, 12, 0));
        assert_eq!(add_years(at(2020, 2, 29, 0, 0), 1), at(2021, 2, 28, 0, 0));
    }

    #[test]
    fn test_clamp_to_grid() {
        let view = at(2021, 1, 1, 0, 0);
        assert_eq!(clamp_to_grid(at(2020, 12, 1, 0, 0), view, Weekday::Sun), at(2020, 12, 27, 0, 0));
        assert_eq!(clamp_to_grid(at(2021, 2, 10, 0, 0), view, Weekday::Sun), at(2021, 1, 30, 0, 0));
        assert_eq!(clamp_to_grid(at(2021, 1, 7, 0, 0), view, Weekday::Sun), at(2021, 1, 7, 0, 0));
    }

    #[test]
    fn test_hours_and_minutes() {
        let hours = hours_in_day(at(2021, 1, 7, 13, 45));
        assert_eq!(hours.len(), HOURS_PER_DAY);
        assert_eq!(hours[0], at(2021, 1, 7, 0, 0));
        assert_eq!(hours[23], at(2021, 1, 7, 23, 0));

        let minutes = minutes_in_hour(at(2021, 1, 7, 13, 45));
        assert_eq!(minutes.len(), MINUTES_PER_HOUR);
        assert_eq!(minutes[0], at(2021, 1, 7, 13, 0));
        assert_eq!(minutes[59], at(2021, 1, 7, 13, 59));
    }

    #[test]
    fn test_calendar_unit_same() {
        let a = at(2021, 1, 7, 13, 45);
        assert!(CalendarUnit::Day.same(a, at(2021, 1, 7, 0, 0)));
        assert!(!CalendarUnit::Hour.same(a, at(2021, 1, 7, 0, 0)));
        assert!(CalendarUnit::Month.same(a, at(2021, 1, 31, 0, 0)));
        assert!(CalendarUnit::Minute.same(a, at(2021, 1, 7, 13, 45)));
        assert!(!CalendarUnit::Year.same(a, at(2022, 1, 7, 13, 45)));
    }
}
