//! Life expectancy data: country/gender table and CSV loading

mod table;
pub mod loader;

pub use loader::{load_default_table, load_table, load_table_from_reader, DEFAULT_TABLE_PATH};
pub use table::{CountryRow, ExpectancyTable};
