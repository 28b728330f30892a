//! Load user profiles from a cohort CSV for batch runs

use super::{DailyUsage, Gender, UserProfile};
use csv::Reader;
use std::error::Error;
use std::path::Path;

/// Raw CSV row for a cohort file
///
/// Batch inputs carry the usage total only; per-platform breakdowns exist
/// just in the interactive form.
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Country")]
    country: String,
    #[serde(rename = "Gender")]
    gender: String,
    #[serde(rename = "Age")]
    age: u8,
    #[serde(rename = "StartYear")]
    start_year: i32,
    #[serde(rename = "DailyMinutes")]
    daily_minutes: f64,
}

impl CsvRow {
    fn to_profile(self) -> Result<UserProfile, Box<dyn Error>> {
        let gender = Gender::parse(&self.gender)
            .ok_or_else(|| format!("Unknown Gender: {}", self.gender))?;

        Ok(UserProfile::new(
            self.country,
            gender,
            self.age,
            self.start_year,
            DailyUsage::Total(self.daily_minutes),
        ))
    }
}

/// Load all profiles from a CSV file
pub fn load_profiles<P: AsRef<Path>>(path: P) -> Result<Vec<UserProfile>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut profiles = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        profiles.push(row.to_profile()?);
    }

    log::debug!("loaded {} profiles", profiles.len());
    Ok(profiles)
}

/// Load profiles from any reader (e.g., string buffer, network stream)
pub fn load_profiles_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<UserProfile>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut profiles = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        profiles.push(row.to_profile()?);
    }

    Ok(profiles)
}
