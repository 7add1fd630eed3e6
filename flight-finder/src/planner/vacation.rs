//! Vacation-day accounting.

use chrono::NaiveDate;

use crate::holidays::HolidayCalendar;

/// Source of non-working-day information.
///
/// This abstraction allows the filter to be tested with fixed calendars.
pub trait NonWorkingDays {
    /// True iff `date` falls on a weekend or a public holiday.
    fn is_non_working_day(&self, date: NaiveDate) -> bool;
}

impl NonWorkingDays for HolidayCalendar {
    fn is_non_working_day(&self, date: NaiveDate) -> bool {
        HolidayCalendar::is_non_working_day(self, date)
    }
}

/// Count the vacation days a trip consumes.
///
/// Every date in the inclusive `departure ..= return_date` range that is
/// a working day costs one vacation day. A trip touching only weekends
/// and holidays costs zero. Pure function of its inputs.
pub fn vacation_days_required<C: NonWorkingDays>(
    calendar: &C,
    departure: NaiveDate,
    return_date: NaiveDate,
) -> u32 {
    departure
        .iter_days()
        .take_while(|d| *d <= return_date)
        .filter(|d| !calendar.is_non_working_day(*d))
        .count() as u32
}
