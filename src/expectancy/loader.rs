//! CSV-based expectancy table loader
//!
//! Reads a `name,male,female` table such as Life_Expectancy_by_Country_2021.csv

use super::{CountryRow, ExpectancyTable};
use std::error::Error;
use std::fs::File;
use std::path::Path;

/// Default path to the expectancy data file
pub const DEFAULT_TABLE_PATH: &str = "data/life_expectancy_2021.csv";

/// Load the expectancy table from a CSV file
///
/// Expects a header row followed by `name,male,female` records. Rows are
/// kept in file order; duplicates are preserved (lookup takes the first).
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<ExpectancyTable, Box<dyn Error>> {
    let file = File::open(path)?;
    load_table_from_reader(file)
}

/// Load the expectancy table from any reader (string buffer, network stream)
pub fn load_table_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<ExpectancyTable, Box<dyn Error>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();

    for result in csv_reader.records() {
        let record = result?;
        let name = record[0].to_string();
        let male: f64 = record[1].parse()?;
        let female: f64 = record[2].parse()?;

        if male < 0.0 || female < 0.0 {
            return Err(format!("negative expectancy for {}", name).into());
        }

        rows.push(CountryRow::new(name, male, female));
    }

    log::debug!("loaded expectancy table with {} rows", rows.len());
    Ok(ExpectancyTable::new(rows))
}

/// Load the expectancy table from the default data location
pub fn load_default_table() -> Result<ExpectancyTable, Box<dyn Error>> {
    load_table(DEFAULT_TABLE_PATH)
}
