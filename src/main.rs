//! Mind Your Time CLI
//!
//! Interactive single-calculation front end: collects the profile from
//! command-line flags, runs one calculation, and renders the report,
//! chart, and percentage metrics (or JSON with `--json`).

use anyhow::{bail, Context, Result};
use clap::Parser;
use mind_your_time::expectancy::{load_table, ExpectancyTable};
use mind_your_time::{
    report, CalcError, CalculatorSession, DailyUsage, Gender, Platform, UserProfile,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mind_your_time", version, about = "Life expectancy vs. social media usage calculator")]
struct Cli {
    /// Path to a life expectancy CSV (name,male,female); built-in 2021
    /// table is used when omitted
    #[arg(long)]
    table: Option<PathBuf>,

    /// Country name, exactly as it appears in the table
    #[arg(long, required_unless_present = "list_countries")]
    country: Option<String>,

    /// Gender: Male or Female
    #[arg(long, required_unless_present = "list_countries")]
    gender: Option<String>,

    /// Current age in whole years
    #[arg(long, required_unless_present = "list_countries")]
    age: Option<u8>,

    /// Year you started using social media
    #[arg(long, required_unless_present = "list_countries")]
    start_year: Option<i32>,

    /// Per-platform daily usage, e.g. --usage Facebook=30 (repeatable)
    #[arg(long = "usage", value_name = "PLATFORM=MINUTES")]
    usage: Vec<String>,

    /// Pre-summed total daily minutes (alternative to --usage)
    #[arg(long, conflicts_with = "usage")]
    minutes: Option<f64>,

    /// Override the current calendar year
    #[arg(long)]
    year: Option<i32>,

    /// Emit the full outcome as JSON instead of a text report
    #[arg(long)]
    json: bool,

    /// Skip the life chart
    #[arg(long)]
    no_chart: bool,

    /// List the countries available in the table and exit
    #[arg(long)]
    list_countries: bool,
}

/// Parse one `Platform=minutes` argument
fn parse_usage_entry(entry: &str) -> Result<(Platform, f64)> {
    let (name, minutes) = entry
        .split_once('=')
        .with_context(|| format!("expected PLATFORM=MINUTES, got '{}'", entry))?;
    let platform = Platform::parse(name)
        .with_context(|| format!("unknown platform '{}' (one of: {})", name, platform_list()))?;
    let minutes: f64 = minutes
        .parse()
        .with_context(|| format!("invalid minutes value '{}'", minutes))?;
    Ok((platform, minutes))
}

fn platform_list() -> String {
    Platform::ALL
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let table = match &cli.table {
        Some(path) => load_table(path)
            .map_err(|e| anyhow::anyhow!("failed to load table from {}: {}", path.display(), e))?,
        None => ExpectancyTable::builtin_2021(),
    };

    if cli.list_countries {
        for country in table.countries() {
            println!("{}", country);
        }
        return Ok(());
    }

    // Required flags are enforced by clap unless --list-countries was given
    let country = cli.country.expect("clap enforces --country");
    let gender_str = cli.gender.expect("clap enforces --gender");
    let age = cli.age.expect("clap enforces --age");
    let start_year = cli.start_year.expect("clap enforces --start-year");

    let gender = match Gender::parse(&gender_str) {
        Some(g) => g,
        None => bail!("gender must be 'Male' or 'Female', got '{}'", gender_str),
    };

    let usage = if !cli.usage.is_empty() {
        let entries = cli
            .usage
            .iter()
            .map(|e| parse_usage_entry(e))
            .collect::<Result<Vec<_>>>()?;
        DailyUsage::PerPlatform(entries)
    } else {
        DailyUsage::Total(cli.minutes.unwrap_or(0.0))
    };

    let profile = UserProfile::new(country, gender, age, start_year, usage);

    let session = match cli.year {
        Some(year) => CalculatorSession::with_current_year(table, year),
        None => CalculatorSession::new(table),
    };

    let outcome = match session.run(&profile) {
        Ok(outcome) => outcome,
        Err(CalcError::DataNotFound { .. }) => {
            println!("Life expectancy data not available for your selections.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!("Mind Your Time");
    println!("==============\n");
    println!("{}\n", report::render_report(&outcome.metrics));

    if !cli.no_chart {
        println!("{}", outcome.chart.render());
    }

    Ok(())
}
