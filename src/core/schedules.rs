//! School name → bell schedule lookup, loaded once from a JSON file.

use crate::errors::AppResult;
use crate::models::BellSchedule;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Key of the header row left behind by the CSV → JSON conversion.
const HEADER_KEY: &str = "School Name";

/// Maximum number of names returned by [`ScheduleBook::search`].
pub const SEARCH_LIMIT: usize = 10;

/// Starter schedule file written by `init`.
pub const BUNDLED_SCHEDULES: &str = include_str!("../../res/school_times.json");

#[derive(Debug, Default, Clone)]
pub struct ScheduleBook {
    schools: BTreeMap<String, BellSchedule>,
}

impl ScheduleBook {
    pub fn from_json(content: &str) -> AppResult<Self> {
        let mut schools: BTreeMap<String, BellSchedule> = serde_json::from_str(content)?;
        schools.remove(HEADER_KEY);
        Ok(Self { schools })
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn bundled() -> AppResult<Self> {
        Self::from_json(BUNDLED_SCHEDULES)
    }

    pub fn len(&self) -> usize {
        self.schools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schools.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&BellSchedule> {
        self.entry(name).map(|(_, school)| school)
    }

    /// Stored name and schedule. Exact name first, then a case-insensitive
    /// match.
    pub fn entry(&self, name: &str) -> Option<(&str, &BellSchedule)> {
        let name = name.trim();
        self.schools
            .get_key_value(name)
            .or_else(|| {
                self.schools
                    .iter()
                    .find(|(k, _)| k.eq_ignore_ascii_case(name))
            })
            .map(|(k, v)| (k.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.schools.keys().map(String::as_str)
    }

    /// Case-insensitive substring search. Names starting with the query come
    /// first, then shorter names.
    pub fn search(&self, query: &str) -> Vec<&str> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<&str> = self
            .names()
            .filter(|name| name.to_lowercase().contains(&q))
            .collect();

        hits.sort_by_key(|name| (!name.to_lowercase().starts_with(&q), name.chars().count()));
        hits.truncate(SEARCH_LIMIT);
        hits
    }
}
