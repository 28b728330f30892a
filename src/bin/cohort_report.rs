//! Run calculations for a whole cohort of profiles from a CSV file
//!
//! Outputs per-profile derived metrics plus summary statistics.
//! Usage: cohort_report [profiles.csv] [expectancy_table.csv]

use mind_your_time::expectancy::{load_table, ExpectancyTable};
use mind_your_time::profile::load_profiles;
use mind_your_time::{CalcError, CalculatorSession, Outcome, UserProfile};
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let profiles_path = args.get(1).map(String::as_str).unwrap_or("profiles.csv");
    let table_path = args.get(2).map(String::as_str);

    let start = Instant::now();
    println!("Loading profiles from {}...", profiles_path);

    let profiles = load_profiles(profiles_path).expect("Failed to load profiles");
    println!("Loaded {} profiles in {:?}", profiles.len(), start.elapsed());

    let table = match table_path {
        Some(path) => load_table(path).expect("Failed to load expectancy table"),
        None => ExpectancyTable::builtin_2021(),
    };
    let session = CalculatorSession::new(table);

    println!("Running calculations...");
    let calc_start = Instant::now();

    // Each calculation is independent; the session is shared read-only
    let results: Vec<(&UserProfile, Result<Outcome, CalcError>)> = profiles
        .par_iter()
        .map(|profile| (profile, session.run(profile)))
        .collect();

    println!("Calculations complete in {:?}", calc_start.elapsed());

    // Write per-profile output
    let output_path = "cohort_metrics.csv";
    let mut file = File::create(output_path).expect("Failed to create output file");

    writeln!(
        file,
        "Country,Gender,Age,StartYear,DailyMinutes,Expectancy,YearsRemaining,DaysSpent,ProjectedYears,AdjustedYears,PctLived,PctSocialMedia,PctRemaining"
    )
    .unwrap();

    let mut errors = 0usize;
    let mut total_days = 0.0;
    let mut total_projected = 0.0;

    for (profile, result) in &results {
        match result {
            Ok(outcome) => {
                let m = &outcome.metrics;
                writeln!(
                    file,
                    "{},{},{},{},{:.2},{:.2},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4}",
                    profile.country,
                    profile.gender,
                    profile.age,
                    profile.start_year,
                    profile.total_daily_minutes(),
                    outcome.expectancy,
                    m.years_remaining,
                    m.total_days_spent,
                    m.projected_social_media_years,
                    m.adjusted_remaining_years,
                    m.percent_life_lived,
                    m.percent_social_media_time,
                    m.percent_life_remaining,
                )
                .unwrap();

                total_days += m.total_days_spent;
                total_projected += m.projected_social_media_years;
            }
            Err(e) => {
                log::warn!("skipping {} ({}): {}", profile.country, profile.gender, e);
                errors += 1;
            }
        }
    }

    println!("Output written to {}", output_path);

    let ok_count = results.len() - errors;
    println!("\nCohort Summary:");
    println!("  Profiles:        {}", results.len());
    println!("  Computed:        {}", ok_count);
    println!("  Skipped:         {}", errors);
    if ok_count > 0 {
        println!("  Avg days spent:  {:.2}", total_days / ok_count as f64);
        println!(
            "  Avg projected:   {:.2} years",
            total_projected / ok_count as f64
        );
    }

    println!("\nTotal time: {:?}", start.elapsed());
}
