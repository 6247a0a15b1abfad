//! Range and projection queries over the day resolver.
//!
//! Month-grid expansion for calendar screens, the forward
//! nearest-occurrence projection for "upcoming" lists, and the non-empty
//! forward window a reminder scheduler consumes. All of these walk the
//! calendar one day at a time and call [`ScheduleContext::resolve_day`] or
//! [`ScheduleContext::collections_for`] per date; bounds are deterministic
//! (month length or an explicit horizon), so every scan terminates.

use chrono::{Datelike, NaiveDate};

use crate::date::{days_between, iso_date};
use crate::models::{CalendarDay, NextCollection};
use crate::resolve::ScheduleContext;

/// Default forward-search horizon, in days, for
/// [`ScheduleContext::next_collections`].
pub const DEFAULT_HORIZON_DAYS: u32 = 60;

impl ScheduleContext<'_> {
    /// Resolve every date of a calendar month, in ascending order.
    ///
    /// The result has one entry per day of the month (28-31). A month
    /// outside 1-12 yields an empty result.
    #[must_use]
    pub fn month_days(&self, year: i32, month: u32) -> Vec<CalendarDay> {
        let mut days = Vec::new();
        let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
            return days;
        };

        let mut date = first;
        while date.year() == year && date.month() == month {
            days.push(self.resolve_day(date));
            let Some(next) = date.succ_opt() else {
                break;
            };
            date = next;
        }
        days
    }

    /// The nearest future occurrence of each garbage type, scanning
    /// forward from `from` (inclusive) for at most `horizon_days` days.
    ///
    /// Results are sorted ascending by [`NextCollection::days_until`];
    /// same-day types keep their resolution order. Types with no
    /// occurrence inside the horizon are absent. The scan stops early
    /// once every catalog type has been found.
    #[must_use]
    pub fn next_collections(&self, from: NaiveDate, horizon_days: u32) -> Vec<NextCollection> {
        let mut found: Vec<NextCollection> = Vec::new();

        let mut date = from;
        for _ in 0..horizon_days {
            for garbage_type in self.collections_for(date) {
                if !found
                    .iter()
                    .any(|n| n.garbage_type.type_id == garbage_type.type_id)
                {
                    found.push(NextCollection {
                        garbage_type,
                        date: iso_date(date),
                        days_until: days_between(from, date),
                    });
                }
            }
            if found.len() == self.garbage_types.len() {
                break;
            }
            let Some(next) = date.succ_opt() else {
                break;
            };
            date = next;
        }

        found.sort_by_key(|n| n.days_until);
        found
    }

    /// The days with at least one collection in a forward window of
    /// `days_ahead` days starting at `from` (inclusive), ascending.
    ///
    /// This is the per-date feed a reminder scheduler iterates; the
    /// engine itself schedules nothing.
    #[must_use]
    pub fn collection_days(&self, from: NaiveDate, days_ahead: u32) -> Vec<CalendarDay> {
        let mut days = Vec::new();

        let mut date = from;
        for _ in 0..days_ahead {
            let day = self.resolve_day(date);
            if !day.garbage_types.is_empty() {
                days.push(day);
            }
            let Some(next) = date.succ_opt() else {
                break;
            };
            date = next;
        }
        days
    }
}
