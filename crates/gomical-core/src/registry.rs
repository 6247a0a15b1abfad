//! Bundled municipality data registry.
//!
//! Municipal schedule data is produced offline and compiled into the crate
//! as JSON; the registry resolves a read-only [`Municipality`] snapshot by
//! identifier and exposes the national holiday table. Parsed snapshots are
//! plain owned values: load once, then share freely across queries and
//! threads.

use serde::Serialize;

use crate::error::{GomicalError, Result};
use crate::models::{Holiday, Municipality};

/// Municipality JSON bundled into the crate, keyed by identifier.
const BUNDLED: &[(&str, &str)] = &[("nagareyama", include_str!("../data/nagareyama.json"))];

/// The national holiday table bundled into the crate.
const HOLIDAYS_JSON: &str = include_str!("../data/holidays.json");

/// Listing entry for a registered municipality.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MunicipalityEntry {
    /// Registry key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Prefecture the municipality belongs to.
    pub prefecture: String,
}

/// Registry resolving municipality snapshots by identifier.
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    municipalities: &'static [(&'static str, &'static str)],
    holidays_json: &'static str,
}

impl Registry {
    /// The registry over the data bundled into this crate.
    #[must_use]
    pub fn bundled() -> Self {
        Self {
            municipalities: BUNDLED,
            holidays_json: HOLIDAYS_JSON,
        }
    }

    /// Identifiers of every registered municipality.
    #[must_use]
    pub fn municipality_ids(&self) -> Vec<&'static str> {
        self.municipalities.iter().map(|(id, _)| *id).collect()
    }

    /// Parse and return the snapshot for the given municipality.
    ///
    /// # Errors
    ///
    /// Returns [`GomicalError::UnknownMunicipality`] when the identifier is
    /// not registered, or [`GomicalError::Data`] when the bundled JSON does
    /// not parse.
    pub fn municipality(&self, id: &str) -> Result<Municipality> {
        let (_, json) = self
            .municipalities
            .iter()
            .find(|(mid, _)| *mid == id)
            .ok_or_else(|| GomicalError::UnknownMunicipality(id.to_string()))?;
        Municipality::from_json(json)
    }

    /// Listing entries (id, display name, prefecture) for every registered
    /// municipality.
    ///
    /// # Errors
    ///
    /// Returns [`GomicalError::Data`] when a bundled snapshot does not
    /// parse.
    pub fn entries(&self) -> Result<Vec<MunicipalityEntry>> {
        self.municipalities
            .iter()
            .map(|(_, json)| {
                let m = Municipality::from_json(json)?;
                Ok(MunicipalityEntry {
                    id: m.municipality_id,
                    name: m.municipality_name,
                    prefecture: m.prefecture,
                })
            })
            .collect()
    }

    /// The bundled national holiday table.
    ///
    /// # Errors
    ///
    /// Returns [`GomicalError::Data`] when the bundled JSON does not parse.
    pub fn holidays(&self) -> Result<Vec<Holiday>> {
        holidays_from_json(self.holidays_json)
    }
}

/// Parse a holiday table from JSON.
///
/// # Errors
///
/// Returns [`GomicalError::Data`] when the JSON is not a list of
/// `{date, name}` entries.
pub fn holidays_from_json(json: &str) -> Result<Vec<Holiday>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_municipality_loads() {
        let municipality = Registry::bundled().municipality("nagareyama").unwrap();
        assert_eq!(municipality.municipality_id, "nagareyama");
        assert_eq!(municipality.prefecture, "千葉県");
        assert!(!municipality.garbage_types.is_empty());
        assert!(municipality.area_by_id("north").is_some());
        assert!(municipality.area_by_id("south").is_some());
    }

    #[test]
    fn bundled_schedules_reference_catalog_types() {
        let municipality = Registry::bundled().municipality("nagareyama").unwrap();
        for area in &municipality.areas {
            for type_id in area.schedule.keys() {
                assert!(
                    municipality.type_by_id(type_id).is_some(),
                    "dangling type id {type_id} in area {}",
                    area.area_id
                );
            }
        }
    }

    #[test]
    fn unknown_municipality_is_an_error() {
        let err = Registry::bundled().municipality("atlantis").unwrap_err();
        assert!(matches!(err, GomicalError::UnknownMunicipality(id) if id == "atlantis"));
    }

    #[test]
    fn entries_list_the_bundled_data() {
        let entries = Registry::bundled().entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "nagareyama");
        assert_eq!(entries[0].name, "流山市");
    }

    #[test]
    fn holidays_load_and_are_iso_keyed() {
        let holidays = Registry::bundled().holidays().unwrap();
        assert!(holidays.iter().any(|h| h.date == "2025-11-03"));
        for h in &holidays {
            assert_eq!(h.date.len(), 10, "non-ISO holiday date {}", h.date);
        }
    }

    #[test]
    fn holidays_from_json_rejects_wrong_shape() {
        assert!(holidays_from_json("{\"date\": \"2025-01-01\"}").is_err());
    }
}
