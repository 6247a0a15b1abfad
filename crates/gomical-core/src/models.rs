//! Core data types for gomical.
//!
//! This module defines the immutable reference data loaded from municipal
//! JSON files and the freshly-computed engine outputs:
//! - [`GarbageType`] - A collection category (burnable, plastic, ...)
//! - [`CollectionSchedule`] - Recurrence rule for one (area, type) pair
//! - [`Area`] - A collection zone with its per-type schedule map
//! - [`ScheduleOverride`] - A single-date cancel/add exception
//! - [`SpecialRules`] - Holiday policy and year-end blackout window
//! - [`Holiday`] - One entry of the national holiday table
//! - [`Municipality`] - The aggregate root bundling all of the above
//! - [`CalendarDay`] / [`NextCollection`] - Engine outputs
//!
//! Reference data is created at import time and never mutated at runtime;
//! outputs are owned by the caller.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A garbage collection category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GarbageType {
    /// Stable identifier, referenced by schedules and overrides.
    pub type_id: String,
    /// Display name.
    pub name: String,
    /// Short display name for badges and notifications.
    pub short_name: String,
    /// Display color as a hex string.
    pub color: String,
    /// Icon key understood by consumers.
    pub icon: String,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordered disposal rule strings.
    #[serde(default)]
    pub rules: Vec<String>,
}

/// Recurrence rule bound to one (area, garbage type) pair.
///
/// The `pattern` tag selects the variant, and only the fields of that
/// variant are meaningful. An unrecognized tag deserializes to
/// [`CollectionSchedule::Unknown`], which matches no date — malformed data
/// fails closed instead of erroring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "pattern", rename_all = "lowercase")]
pub enum CollectionSchedule {
    /// Fires every week on any of the listed weekday names.
    Weekday {
        /// English weekday names, e.g. `["monday", "thursday"]`.
        #[serde(default)]
        days: Vec<String>,
    },
    /// Fires on one weekday name, only in the listed ordinal weeks of the
    /// month (e.g. the 1st and 3rd Monday).
    #[serde(rename_all = "camelCase")]
    Monthly {
        /// English weekday name; a missing day never matches.
        #[serde(default)]
        day: Option<String>,
        /// 1-based ordinal weeks, e.g. `[1, 3]`.
        #[serde(default)]
        ordinal_weeks: Vec<u32>,
    },
    /// Fires only on the listed ISO dates (exact string match).
    Custom {
        /// ISO `YYYY-MM-DD` dates.
        #[serde(default)]
        dates: Vec<String>,
    },
    /// Unrecognized pattern tag; matches no date.
    #[serde(other)]
    Unknown,
}

/// A named collection zone within a municipality.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    /// Identifier, selected by the caller.
    pub area_id: String,
    /// Display name.
    pub area_name: String,
    /// Constituent district names, for free-text lookup.
    #[serde(default)]
    pub districts: Vec<String>,
    /// Recurrence rule per garbage type id. A type missing here is never
    /// collected in this area. Iteration order (sorted by type id) decides
    /// the base ordering of resolved collection lists.
    #[serde(default)]
    pub schedule: BTreeMap<String, CollectionSchedule>,
}

/// What a [`ScheduleOverride`] does on its date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverrideAction {
    /// Suppress an otherwise-scheduled pickup.
    Cancel,
    /// Inject a pickup that no schedule fires for.
    Add,
}

/// A single-date, single-area, single-type exception.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleOverride {
    /// ISO `YYYY-MM-DD` date the override applies to.
    pub date: String,
    /// Area the override applies to.
    pub area_id: String,
    /// Garbage type the override applies to.
    pub type_id: String,
    /// Cancel or add.
    pub action: OverrideAction,
    /// Free-text reason for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Year-end/New-Year no-collection window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearEndYearStart {
    /// `MM-DD` boundary in December (inclusive).
    pub no_collection_start: String,
    /// `MM-DD` boundary in January (inclusive).
    pub no_collection_end: String,
}

/// How public holidays affect collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayPolicy {
    /// No collection on public holidays.
    Skip,
    /// Holidays are ignored; collection runs as scheduled.
    Collect,
}

/// Municipality-wide exception policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialRules {
    /// Whether public holidays suppress collection.
    pub holiday_policy: HolidayPolicy,
    /// Free-text note on alternative holiday arrangements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holiday_alternative: Option<String>,
    /// Optional year-end blackout window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_end_year_start: Option<YearEndYearStart>,
    /// Free-text municipality notes.
    #[serde(default)]
    pub notes: Vec<String>,
}

/// One entry of the national holiday table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holiday {
    /// ISO `YYYY-MM-DD` date, matched exactly.
    pub date: String,
    /// Display name.
    pub name: String,
}

/// The aggregate root: one municipality's complete collection data.
///
/// Loaded once per session from static data and treated as a read-only
/// snapshot for the life of every query against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Municipality {
    /// Stable identifier, used as the registry key.
    pub municipality_id: String,
    /// Display name.
    pub municipality_name: String,
    /// Prefecture the municipality belongs to.
    pub prefecture: String,
    /// ISO date the data was last updated.
    pub last_updated: String,
    /// Fiscal year the data covers.
    pub fiscal_year: i32,
    /// Collection deadline time-of-day label, e.g. "8:30".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_deadline: Option<String>,
    /// The full garbage type catalog.
    pub garbage_types: Vec<GarbageType>,
    /// All collection areas.
    pub areas: Vec<Area>,
    /// Municipality-wide exception policy.
    pub special_rules: SpecialRules,
    /// All date-specific overrides.
    #[serde(default)]
    pub overrides: Vec<ScheduleOverride>,
}

impl Municipality {
    /// Parse a municipality snapshot from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GomicalError::Data`] when the JSON does not match
    /// the municipal data shape.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Look up an area by identifier.
    #[must_use]
    pub fn area_by_id(&self, area_id: &str) -> Option<&Area> {
        self.areas.iter().find(|area| area.area_id == area_id)
    }

    /// Look up the area covering a district name.
    ///
    /// Matches in both directions (query contains district or district
    /// contains query) so that "流山市江戸川台東" finds the district
    /// "江戸川台東".
    #[must_use]
    pub fn area_by_district(&self, district: &str) -> Option<&Area> {
        self.areas.iter().find(|area| {
            area.districts
                .iter()
                .any(|d| district.contains(d.as_str()) || d.contains(district))
        })
    }

    /// Look up a garbage type by identifier.
    #[must_use]
    pub fn type_by_id(&self, type_id: &str) -> Option<&GarbageType> {
        self.garbage_types.iter().find(|t| t.type_id == type_id)
    }
}

/// The resolved collection result for one date.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    /// ISO `YYYY-MM-DD` date.
    pub date: String,
    /// Garbage types collected on this date, possibly empty.
    pub garbage_types: Vec<GarbageType>,
    /// Whether the date is a recognized public holiday.
    pub is_holiday: bool,
    /// The holiday's display name, when it is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday_name: Option<String>,
    /// Human-readable notes, e.g. the year-end no-collection notice.
    pub notes: Vec<String>,
}

/// The nearest future occurrence of one garbage type.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextCollection {
    /// The garbage type.
    pub garbage_type: GarbageType,
    /// ISO `YYYY-MM-DD` date of the next pickup.
    pub date: String,
    /// Whole days from the query date to that pickup (0 = today).
    pub days_until: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_pattern_deserializes() {
        let json = r#"{"pattern": "weekday", "days": ["monday", "thursday"]}"#;
        let schedule: CollectionSchedule = serde_json::from_str(json).unwrap();
        match schedule {
            CollectionSchedule::Weekday { days } => {
                assert_eq!(days, vec!["monday", "thursday"]);
            }
            other => panic!("Expected weekday pattern, got {other:?}"),
        }
    }

    #[test]
    fn monthly_pattern_deserializes_with_camel_case_fields() {
        let json = r#"{"pattern": "monthly", "day": "wednesday", "ordinalWeeks": [1, 3]}"#;
        let schedule: CollectionSchedule = serde_json::from_str(json).unwrap();
        match schedule {
            CollectionSchedule::Monthly { day, ordinal_weeks } => {
                assert_eq!(day.as_deref(), Some("wednesday"));
                assert_eq!(ordinal_weeks, vec![1, 3]);
            }
            other => panic!("Expected monthly pattern, got {other:?}"),
        }
    }

    #[test]
    fn custom_pattern_deserializes() {
        let json = r#"{"pattern": "custom", "dates": ["2025-06-18"]}"#;
        let schedule: CollectionSchedule = serde_json::from_str(json).unwrap();
        match schedule {
            CollectionSchedule::Custom { dates } => assert_eq!(dates, vec!["2025-06-18"]),
            other => panic!("Expected custom pattern, got {other:?}"),
        }
    }

    #[test]
    fn unrecognized_pattern_falls_back_to_unknown() {
        let json = r#"{"pattern": "lunar", "phase": "full"}"#;
        let schedule: CollectionSchedule = serde_json::from_str(json).unwrap();
        assert!(matches!(schedule, CollectionSchedule::Unknown));
    }

    #[test]
    fn missing_variant_fields_default_to_empty() {
        let json = r#"{"pattern": "monthly"}"#;
        let schedule: CollectionSchedule = serde_json::from_str(json).unwrap();
        match schedule {
            CollectionSchedule::Monthly { day, ordinal_weeks } => {
                assert_eq!(day, None);
                assert!(ordinal_weeks.is_empty());
            }
            other => panic!("Expected monthly pattern, got {other:?}"),
        }
    }

    #[test]
    fn override_action_serialization() {
        assert_eq!(
            serde_json::to_string(&OverrideAction::Cancel).unwrap(),
            "\"cancel\""
        );
        assert_eq!(serde_json::to_string(&OverrideAction::Add).unwrap(), "\"add\"");
    }

    #[test]
    fn holiday_policy_serialization() {
        assert_eq!(
            serde_json::to_string(&HolidayPolicy::Skip).unwrap(),
            "\"skip\""
        );
        assert_eq!(
            serde_json::to_string(&HolidayPolicy::Collect).unwrap(),
            "\"collect\""
        );
    }

    #[test]
    fn calendar_day_omits_absent_holiday_name() {
        let day = CalendarDay {
            date: "2025-11-01".to_string(),
            garbage_types: Vec::new(),
            is_holiday: false,
            holiday_name: None,
            notes: Vec::new(),
        };
        assert_eq!(
            serde_json::to_string(&day).unwrap(),
            r#"{"date":"2025-11-01","garbageTypes":[],"isHoliday":false,"notes":[]}"#
        );
    }

    #[test]
    fn area_schedule_map_iterates_in_type_id_order() {
        let json = r#"{
            "areaId": "north",
            "areaName": "北部",
            "districts": [],
            "schedule": {
                "plastic": {"pattern": "weekday", "days": ["wednesday"]},
                "burnable": {"pattern": "weekday", "days": ["monday"]}
            }
        }"#;
        let area: Area = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = area.schedule.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["burnable", "plastic"]);
    }

    #[test]
    fn municipality_lookups() {
        let json = r##"{
            "municipalityId": "demo",
            "municipalityName": "デモ市",
            "prefecture": "千葉県",
            "lastUpdated": "2025-04-01",
            "fiscalYear": 2025,
            "garbageTypes": [{
                "typeId": "burnable",
                "name": "可燃ごみ",
                "shortName": "可燃",
                "color": "#E4572E",
                "icon": "flame",
                "rules": []
            }],
            "areas": [{
                "areaId": "north",
                "areaName": "北部",
                "districts": ["江戸川台東", "美原"],
                "schedule": {}
            }],
            "specialRules": {"holidayPolicy": "skip", "notes": []},
            "overrides": []
        }"##;
        let m = Municipality::from_json(json).unwrap();

        assert!(m.area_by_id("north").is_some());
        assert!(m.area_by_id("west").is_none());
        assert!(m.type_by_id("burnable").is_some());
        assert!(m.type_by_id("uranium").is_none());

        // Both containment directions find the area.
        assert_eq!(
            m.area_by_district("美原").map(|a| a.area_id.as_str()),
            Some("north")
        );
        assert_eq!(
            m.area_by_district("流山市江戸川台東3丁目").map(|a| a.area_id.as_str()),
            Some("north")
        );
        assert!(m.area_by_district("存在しない町").is_none());
    }
}
