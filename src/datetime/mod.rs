//! Calendar arithmetic on dates
//!
//! Day boundaries, day offsets, weekday search, and calendar-component
//! comparisons on [`chrono::NaiveDate`]. Every operation takes its reference
//! date explicitly; nothing here reads the system clock, so results are
//! reproducible and the operations stay pure.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// Extension methods on [`NaiveDate`]
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, Weekday};
/// use collkit::datetime::DateExt;
///
/// let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(); // a Monday
///
/// assert_eq!(date.days_between(date.adding_days(3).unwrap()), 3);
/// assert_eq!(
///     date.next_weekday(Weekday::Mon),
///     NaiveDate::from_ymd_opt(2025, 6, 9)
/// );
/// assert!(!date.is_weekend());
/// ```
pub trait DateExt {
    /// Midnight (00:00:00) of this day
    fn start_of_day(&self) -> NaiveDateTime;

    /// The date `days` days later (negative to go back), `None` on calendar
    /// overflow
    fn adding_days(&self, days: i64) -> Option<NaiveDate>;

    /// The next occurrence of `weekday` strictly after this date
    ///
    /// Asking for this date's own weekday returns the date one week later.
    /// `None` only on calendar overflow.
    fn next_weekday(&self, weekday: Weekday) -> Option<NaiveDate>;

    /// Signed number of whole days from this date to `other`
    ///
    /// Positive when `other` is later, negative when earlier.
    fn days_between(&self, other: NaiveDate) -> i64;

    /// Whether the date falls on Saturday or Sunday
    fn is_weekend(&self) -> bool;

    /// Whether both dates fall in the same month of the same year
    fn is_same_month(&self, other: NaiveDate) -> bool;

    /// Whether both dates fall in the same year
    fn is_same_year(&self, other: NaiveDate) -> bool;
}

impl DateExt for NaiveDate {
    fn start_of_day(&self) -> NaiveDateTime {
        self.and_time(NaiveTime::MIN)
    }

    fn adding_days(&self, days: i64) -> Option<NaiveDate> {
        self.checked_add_signed(Duration::try_days(days)?)
    }

    fn next_weekday(&self, weekday: Weekday) -> Option<NaiveDate> {
        let current = i64::from(self.weekday().num_days_from_monday());
        let target = i64::from(weekday.num_days_from_monday());
        let mut ahead = (target - current).rem_euclid(7);
        if ahead == 0 {
            ahead = 7;
        }
        self.adding_days(ahead)
    }

    fn days_between(&self, other: NaiveDate) -> i64 {
        other.signed_duration_since(*self).num_days()
    }

    fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    fn is_same_month(&self, other: NaiveDate) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }

    fn is_same_year(&self, other: NaiveDate) -> bool {
        self.year() == other.year()
    }
}
