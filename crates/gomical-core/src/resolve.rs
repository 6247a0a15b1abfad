//! Collection day resolution.
//!
//! [`matches_schedule`] decides whether a single recurrence rule fires on a
//! date. [`ScheduleContext`] layers the municipality-wide exceptions on
//! top, in strict precedence order:
//!
//! 1. Year-end/New-Year blackout: no collection at all, regardless of
//!    schedules or overrides.
//! 2. Holiday suppression, only under [`HolidayPolicy::Skip`].
//! 3. Per-date overrides: `cancel` removes a schedule-matched type, `add`
//!    injects an unmatched one. Overrides are never consulted on days the
//!    trucks do not run at all (steps 1 and 2).
//!
//! Every function here is a pure computation over the immutable reference
//! data; nothing is cached, nothing is mutated, and identical inputs give
//! identical outputs.

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, NaiveDate};

use crate::date::{date_weekday_index, iso_date, ordinal_week_of_month, weekday_index};
use crate::models::{
    Area, CalendarDay, CollectionSchedule, GarbageType, Holiday, HolidayPolicy, Municipality,
    OverrideAction, ScheduleOverride, SpecialRules,
};

/// Whether a recurrence rule fires on the given date.
///
/// Unknown weekday names and the [`CollectionSchedule::Unknown`] fallback
/// never match; malformed rules silently yield "not collected".
#[must_use]
pub fn matches_schedule(date: NaiveDate, schedule: &CollectionSchedule) -> bool {
    match schedule {
        CollectionSchedule::Weekday { days } => {
            let dow = date_weekday_index(date);
            days.iter().any(|day| weekday_index(day) == Some(dow))
        }
        CollectionSchedule::Monthly { day, ordinal_weeks } => {
            let Some(day) = day else {
                return false;
            };
            if weekday_index(day) != Some(date_weekday_index(date)) {
                return false;
            }
            ordinal_weeks.contains(&ordinal_week_of_month(date))
        }
        CollectionSchedule::Custom { dates } => {
            let date_str = iso_date(date);
            dates.iter().any(|d| *d == date_str)
        }
        CollectionSchedule::Unknown => false,
    }
}

/// Immutable inputs for one query session: the selected area plus the
/// municipality-wide reference tables.
///
/// The context only borrows; it holds no state of its own, so it is cheap
/// to construct per query and safe to share across threads. Resolving the
/// area identifier is the caller's job — the engine assumes the area is
/// valid.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleContext<'a> {
    pub(crate) area: &'a Area,
    pub(crate) garbage_types: &'a [GarbageType],
    pub(crate) holidays: &'a [Holiday],
    pub(crate) special_rules: &'a SpecialRules,
    pub(crate) overrides: &'a [ScheduleOverride],
}

impl<'a> ScheduleContext<'a> {
    /// Build a context from its individual reference tables.
    #[must_use]
    pub fn new(
        area: &'a Area,
        garbage_types: &'a [GarbageType],
        holidays: &'a [Holiday],
        special_rules: &'a SpecialRules,
        overrides: &'a [ScheduleOverride],
    ) -> Self {
        Self {
            area,
            garbage_types,
            holidays,
            special_rules,
            overrides,
        }
    }

    /// Build a context for one of the municipality's areas.
    #[must_use]
    pub fn for_area(
        municipality: &'a Municipality,
        area: &'a Area,
        holidays: &'a [Holiday],
    ) -> Self {
        Self::new(
            area,
            &municipality.garbage_types,
            holidays,
            &municipality.special_rules,
            &municipality.overrides,
        )
    }

    /// The area this context resolves for.
    #[must_use]
    pub fn area(&self) -> &'a Area {
        self.area
    }

    /// Whether the date falls in the year-end/New-Year blackout window.
    ///
    /// The window is two `MM-DD` boundaries, start in December and end in
    /// January; a date is inside when its December day is at or past the
    /// start day, or its January day is at or before the end day.
    /// Malformed boundaries disable the window.
    #[must_use]
    pub fn in_year_end_period(&self, date: NaiveDate) -> bool {
        let Some(window) = &self.special_rules.year_end_year_start else {
            return false;
        };
        let (Some((start_month, start_day)), Some((end_month, end_day))) = (
            parse_month_day(&window.no_collection_start),
            parse_month_day(&window.no_collection_end),
        ) else {
            return false;
        };

        let month = date.month();
        let day = date.day();

        (month == 12 && start_month == 12 && day >= start_day)
            || (month == 1 && end_month == 1 && day <= end_day)
    }

    /// The holiday table entry for a date, if any.
    #[must_use]
    pub fn holiday_on(&self, date_str: &str) -> Option<&'a Holiday> {
        self.holidays.iter().find(|h| h.date == date_str)
    }

    /// The garbage types collected on a date, after blackout, holiday
    /// suppression, and overrides.
    ///
    /// Schedule-matched types come first, in the area's schedule-map
    /// iteration order; override additions are appended last, without
    /// duplicates. Type ids that are not in the catalog are skipped.
    #[must_use]
    pub fn collections_for(&self, date: NaiveDate) -> Vec<GarbageType> {
        let date_str = iso_date(date);

        if self.in_year_end_period(date) {
            return Vec::new();
        }

        if self.holiday_on(&date_str).is_some()
            && self.special_rules.holiday_policy == HolidayPolicy::Skip
        {
            return Vec::new();
        }

        let mut cancelled: HashSet<&str> = HashSet::new();
        let mut added: Vec<&str> = Vec::new();
        for o in self.overrides {
            if o.date == date_str && o.area_id == self.area.area_id {
                match o.action {
                    OverrideAction::Cancel => {
                        cancelled.insert(o.type_id.as_str());
                    }
                    OverrideAction::Add => {
                        if !added.contains(&o.type_id.as_str()) {
                            added.push(o.type_id.as_str());
                        }
                    }
                }
            }
        }

        let catalog: HashMap<&str, &GarbageType> = self
            .garbage_types
            .iter()
            .map(|t| (t.type_id.as_str(), t))
            .collect();

        let mut matched: Vec<GarbageType> = Vec::new();
        for (type_id, schedule) in &self.area.schedule {
            if cancelled.contains(type_id.as_str()) {
                continue;
            }
            if matches_schedule(date, schedule) {
                if let Some(garbage_type) = catalog.get(type_id.as_str()) {
                    matched.push((*garbage_type).clone());
                }
            }
        }

        for type_id in added {
            if let Some(garbage_type) = catalog.get(type_id) {
                if !matched.iter().any(|m| m.type_id == garbage_type.type_id) {
                    matched.push((*garbage_type).clone());
                }
            }
        }

        matched
    }

    /// The full per-date result: collected types, holiday flag and name,
    /// and display notes.
    #[must_use]
    pub fn resolve_day(&self, date: NaiveDate) -> CalendarDay {
        let date_str = iso_date(date);
        let holiday = self.holiday_on(&date_str);
        let garbage_types = self.collections_for(date);

        let mut notes = Vec::new();
        if self.in_year_end_period(date) {
            notes.push("年末年始のため収集はありません".to_string());
        } else if let Some(holiday) = holiday {
            if self.special_rules.holiday_policy == HolidayPolicy::Skip {
                notes.push(format!("{}のため収集はありません", holiday.name));
            }
        }

        CalendarDay {
            date: date_str,
            garbage_types,
            is_holiday: holiday.is_some(),
            holiday_name: holiday.map(|h| h.name.clone()),
            notes,
        }
    }
}

/// Split an `MM-DD` string into month and day numbers.
fn parse_month_day(s: &str) -> Option<(u32, u32)> {
    let (month, day) = s.split_once('-')?;
    Some((month.parse().ok()?, day.parse().ok()?))
}
