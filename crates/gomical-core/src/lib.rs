//! # gomical-core
//!
//! A garbage collection day resolution engine for Japanese municipalities.
//!
//! Given a municipality's per-area pickup rules, the national holiday
//! table, a year-end/New-Year blackout window, and date-specific
//! overrides, the engine answers which garbage categories are collected on
//! an arbitrary date, expands whole month grids, and projects the next
//! pickup of each category forward in time.
//!
//! ## Design
//!
//! - **Pure and stateless**: every query is a function of its explicit
//!   arguments plus immutable reference data. No I/O, no caching, no
//!   shared mutable state; concurrent callers need no coordination.
//! - **Fail closed**: unrecognized schedule patterns, weekday names, and
//!   type references silently resolve to "not collected" — malformed
//!   municipal data never panics and never over-collects.
//! - **Date-string keyed**: matching and lookups key on the zero-padded
//!   ISO `YYYY-MM-DD` string; there is no time of day and no timezone.
//!
//! ## Example
//!
//! ```rust
//! use gomical_core::prelude::*;
//!
//! let registry = Registry::bundled();
//! let municipality = registry.municipality("nagareyama").unwrap();
//! let holidays = registry.holidays().unwrap();
//!
//! // Area selection happens outside the engine.
//! let area = municipality.area_by_id("north").unwrap();
//! let ctx = ScheduleContext::for_area(&municipality, area, &holidays);
//!
//! let day = ctx.resolve_day(parse_iso_date("2025-11-06").unwrap());
//! assert_eq!(day.garbage_types[0].type_id, "burnable");
//! ```

pub mod date;
pub mod error;
pub mod models;
pub mod query;
pub mod registry;
pub mod resolve;

// Re-export commonly used items at the crate root
pub use date::{days_between, iso_date, ordinal_week_of_month, parse_iso_date, weekday_index};
pub use error::{GomicalError, Result};
pub use models::{
    Area, CalendarDay, CollectionSchedule, GarbageType, Holiday, HolidayPolicy, Municipality,
    NextCollection, OverrideAction, ScheduleOverride, SpecialRules, YearEndYearStart,
};
pub use query::DEFAULT_HORIZON_DAYS;
pub use registry::{MunicipalityEntry, Registry, holidays_from_json};
pub use resolve::{ScheduleContext, matches_schedule};

/// Prelude module for convenient imports.
///
/// ```
/// use gomical_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::date::{days_between, iso_date, parse_iso_date};
    pub use crate::error::{GomicalError, Result};
    pub use crate::models::*;
    pub use crate::query::DEFAULT_HORIZON_DAYS;
    pub use crate::registry::{MunicipalityEntry, Registry};
    pub use crate::resolve::{ScheduleContext, matches_schedule};
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
        chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn full_workflow_over_bundled_data() {
        let registry = Registry::bundled();
        let municipality = registry.municipality("nagareyama").unwrap();
        let holidays = registry.holidays().unwrap();
        let area = municipality.area_by_id("north").unwrap();
        let ctx = ScheduleContext::for_area(&municipality, area, &holidays);

        // Thursday Nov 6 2025: a regular burnable day.
        let day = ctx.resolve_day(date(2025, 11, 6));
        assert_eq!(day.garbage_types.len(), 1);
        assert_eq!(day.garbage_types[0].type_id, "burnable");
        assert!(!day.is_holiday);

        // Culture Day (Monday Nov 3) suppresses the burnable pickup.
        let holiday_day = ctx.resolve_day(date(2025, 11, 3));
        assert!(holiday_day.garbage_types.is_empty());
        assert_eq!(holiday_day.holiday_name.as_deref(), Some("文化の日"));

        // The month grid covers all of November.
        let month = ctx.month_days(2025, 11);
        assert_eq!(month.len(), 30);

        // Every catalog type has an upcoming pickup within 60 days.
        let upcoming = ctx.next_collections(date(2025, 11, 1), DEFAULT_HORIZON_DAYS);
        assert_eq!(upcoming.len(), municipality.garbage_types.len());
    }

    #[test]
    fn add_override_reaches_the_day_result() {
        let registry = Registry::bundled();
        let municipality = registry.municipality("nagareyama").unwrap();
        let holidays = registry.holidays().unwrap();
        let area = municipality.area_by_id("north").unwrap();
        let ctx = ScheduleContext::for_area(&municipality, area, &holidays);

        // Wednesday May 7 2025: plastic by schedule, paper by override.
        let day = ctx.resolve_day(date(2025, 5, 7));
        let ids: Vec<&str> = day.garbage_types.iter().map(|t| t.type_id.as_str()).collect();
        assert_eq!(ids, vec!["plastic", "paper"]);
    }

    #[test]
    fn prelude_exports() {
        use crate::prelude::*;

        let _registry = Registry::bundled();
        let _policy = HolidayPolicy::Skip;
        let _horizon = DEFAULT_HORIZON_DAYS;
    }
}
