//! Campus reference records served by the directory endpoints.

use serde::{ser::SerializeMap, Serialize, Serializer};
use std::collections::BTreeMap;

/// One department's weekly schedule, Monday through Friday.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WeekSchedule {
    pub monday: Vec<&'static str>,
    pub tuesday: Vec<&'static str>,
    pub wednesday: Vec<&'static str>,
    pub thursday: Vec<&'static str>,
    pub friday: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FacultyMember {
    pub name: &'static str,
    pub email: &'static str,
    pub office: &'static str,
    pub subjects: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CampusLocation {
    pub building: &'static str,
    pub floor: &'static str,
    pub hours: &'static str,
    pub features: Vec<&'static str>,
}

/// Department name -> weekly schedule.
pub type Timetable = BTreeMap<&'static str, WeekSchedule>;

/// Department name -> faculty list.
pub type FacultyDirectory = BTreeMap<&'static str, Vec<FacultyMember>>;

/// Place name -> location details, serialized in insertion order.
#[derive(Debug, Clone, Default)]
pub struct LocationMap {
    entries: Vec<(&'static str, CampusLocation)>,
}

impl LocationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a place. A replaced place keeps its original position.
    pub fn insert(&mut self, name: &'static str, location: CampusLocation) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = location,
            None => self.entries.push((name, location)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&CampusLocation> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, location)| location)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for LocationMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, location) in &self.entries {
            map.serialize_entry(name, location)?;
        }
        map.end()
    }
}

/// Body of `GET /api/locations`. Typed so the place order survives encoding.
#[derive(Debug, Serialize)]
pub struct LocationsResponse<'a> {
    pub success: bool,
    pub locations: &'a LocationMap,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(building: &'static str) -> CampusLocation {
        CampusLocation {
            building,
            floor: "1st Floor",
            hours: "9:00 AM - 5:00 PM",
            features: vec![],
        }
    }

    #[test]
    fn test_locations_keep_insertion_order() {
        let mut map = LocationMap::new();
        map.insert("Zoo", place("A"));
        map.insert("Annex", place("B"));
        map.insert("Zoo", place("C"));

        assert_eq!(map.names().collect::<Vec<_>>(), vec!["Zoo", "Annex"]);
        assert_eq!(map.get("Zoo").unwrap().building, "C");
        assert!(map.get("Nowhere").is_none());

        let json = serde_json::to_string(&map).unwrap();
        assert!(json.find("\"Zoo\"").unwrap() < json.find("\"Annex\"").unwrap());
    }
}
