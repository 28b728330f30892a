//! Country life-expectancy table with exact-match lookup
//!
//! The table preserves source row order: if a country appears twice the
//! first row wins, matching the behavior of the original data set.

use crate::profile::Gender;
use serde::{Deserialize, Serialize};

/// One row of the expectancy table: country name plus expected lifespan
/// at birth in years, by gender
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRow {
    pub name: String,
    pub male: f64,
    pub female: f64,
}

impl CountryRow {
    pub fn new(name: impl Into<String>, male: f64, female: f64) -> Self {
        Self {
            name: name.into(),
            male,
            female,
        }
    }

    /// Expectancy value for the given gender
    pub fn expectancy(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
        }
    }
}

/// Immutable country -> (male, female) expectancy mapping
///
/// Loaded once at startup and shared read-only across requests.
#[derive(Debug, Clone, Default)]
pub struct ExpectancyTable {
    rows: Vec<CountryRow>,
}

impl ExpectancyTable {
    pub fn new(rows: Vec<CountryRow>) -> Self {
        Self { rows }
    }

    /// Look up the tabulated expectancy for a country and gender
    ///
    /// Exact, case-sensitive match on the country name; no normalization.
    /// Returns `None` when the country is absent, so callers can tell
    /// "no data" apart from a zero-year expectancy.
    pub fn lookup(&self, country: &str, gender: Gender) -> Option<f64> {
        self.rows
            .iter()
            .find(|row| row.name == country)
            .map(|row| row.expectancy(gender))
    }

    pub fn contains(&self, country: &str) -> bool {
        self.rows.iter().any(|row| row.name == country)
    }

    /// Country names in table order
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.name.as_str())
    }

    pub fn rows(&self) -> &[CountryRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Built-in 2021 life expectancy table
    ///
    /// Covers the countries shipped with the original data file so the
    /// calculator works without any external CSV.
    pub fn builtin_2021() -> Self {
        Self::new(
            BUILTIN_2021
                .iter()
                .map(|&(name, male, female)| CountryRow::new(name, male, female))
                .collect(),
        )
    }
}

/// 2021 expectancy at birth (male, female), in years
const BUILTIN_2021: &[(&str, f64, f64)] = &[
    ("Afghanistan", 60.0, 64.7),
    ("Argentina", 72.5, 79.0),
    ("Australia", 81.3, 85.4),
    ("Austria", 78.8, 83.7),
    ("Bangladesh", 70.6, 74.3),
    ("Belgium", 79.2, 84.0),
    ("Brazil", 69.3, 76.7),
    ("Canada", 79.8, 84.1),
    ("Chile", 75.5, 81.2),
    ("China", 74.9, 80.5),
    ("Colombia", 70.1, 77.4),
    ("Czechia", 74.2, 80.6),
    ("Denmark", 79.5, 83.3),
    ("Egypt", 67.9, 72.6),
    ("Ethiopia", 63.0, 67.2),
    ("Finland", 79.2, 84.8),
    ("France", 79.3, 85.5),
    ("Germany", 78.1, 83.1),
    ("Greece", 77.9, 83.2),
    ("Hungary", 70.9, 77.9),
    ("India", 66.2, 69.0),
    ("Indonesia", 66.2, 70.4),
    ("Iran", 71.6, 76.0),
    ("Iraq", 67.8, 72.1),
    ("Ireland", 80.6, 84.3),
    ("Israel", 80.8, 84.6),
    ("Italy", 80.3, 84.9),
    ("Japan", 81.5, 87.6),
    ("Kenya", 59.4, 65.4),
    ("Mexico", 67.3, 74.5),
    ("Morocco", 71.7, 75.2),
    ("Netherlands", 79.9, 83.2),
    ("New Zealand", 80.5, 84.0),
    ("Nigeria", 52.5, 54.3),
    ("Norway", 81.6, 84.9),
    ("Pakistan", 64.4, 68.3),
    ("Peru", 69.9, 75.3),
    ("Philippines", 66.7, 72.7),
    ("Poland", 72.5, 80.1),
    ("Portugal", 78.1, 84.2),
    ("Romania", 70.1, 77.5),
    ("Russia", 64.2, 74.8),
    ("Saudi Arabia", 73.8, 76.8),
    ("Singapore", 80.7, 85.2),
    ("South Africa", 59.3, 64.9),
    ("South Korea", 80.6, 86.6),
    ("Spain", 80.3, 86.1),
    ("Sweden", 81.2, 84.8),
    ("Switzerland", 81.9, 85.7),
    ("Thailand", 74.4, 81.0),
    ("Turkey", 73.0, 78.6),
    ("Ukraine", 66.9, 76.2),
    ("United Arab Emirates", 77.5, 80.2),
    ("United Kingdom", 78.7, 82.8),
    ("United States", 73.5, 79.3),
    ("Vietnam", 69.6, 78.1),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn small_table() -> ExpectancyTable {
        ExpectancyTable::new(vec![
            CountryRow::new("Japan", 81.5, 87.6),
            CountryRow::new("Nowhere", 0.0, 0.0),
            CountryRow::new("Japan", 50.0, 50.0), // duplicate, must never win
        ])
    }

    #[test]
    fn test_lookup_returns_column_value() {
        let table = small_table();
        assert_eq!(table.lookup("Japan", Gender::Male), Some(81.5));
        assert_eq!(table.lookup("Japan", Gender::Female), Some(87.6));
    }

    #[test]
    fn test_lookup_miss() {
        let table = small_table();
        assert_eq!(table.lookup("Atlantis", Gender::Male), None);
        assert_eq!(table.lookup("Atlantis", Gender::Female), None);
    }

    #[test]
    fn test_zero_expectancy_is_not_a_miss() {
        let table = small_table();
        assert_eq!(table.lookup("Nowhere", Gender::Male), Some(0.0));
    }

    #[test]
    fn test_duplicate_country_first_match_wins() {
        let table = small_table();
        assert_eq!(table.lookup("Japan", Gender::Male), Some(81.5));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = small_table();
        assert_eq!(table.lookup("japan", Gender::Male), None);
    }

    #[test]
    fn test_builtin_table() {
        let table = ExpectancyTable::builtin_2021();
        assert!(table.len() > 50);
        assert!(table.contains("United States"));

        // Female expectancy exceeds male for every built-in row
        for row in table.rows() {
            assert!(
                row.female >= row.male,
                "{}: female {} < male {}",
                row.name,
                row.female,
                row.male
            );
        }
    }
}
