//! Request/response boundary: validated profile in, derived metrics out
//!
//! A session owns the immutable expectancy table and a fixed current year,
//! so running the same profile twice always yields the same result. The
//! table is read-only; sessions can be shared across threads freely.

use crate::chart::ChartInput;
use crate::expectancy::ExpectancyTable;
use crate::metrics::{compute_metrics, DerivedMetrics};
use crate::profile::{Gender, UserProfile};
use chrono::Datelike;
use serde::Serialize;
use thiserror::Error;

/// Calculation failure modes
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Country/gender combination absent from the expectancy table
    #[error("no life expectancy data for {country} ({gender})")]
    DataNotFound { country: String, gender: Gender },

    /// Age of zero would divide by zero in the percentage metrics
    #[error("age must be positive, got {age}")]
    InvalidAge { age: u8 },

    /// Negative per-platform or total usage minutes
    #[error("daily usage minutes must be non-negative, got {minutes}")]
    NegativeUsage { minutes: f64 },

    /// Reported start year lies in the future
    #[error("start year {start_year} is after the current year {current_year}")]
    StartYearInFuture { start_year: i32, current_year: i32 },

    /// Tabulated expectancy truncates to a zero-year lifespan
    #[error("expectancy of {expectancy} years yields a zero total lifespan")]
    ZeroLifespan { expectancy: f64 },
}

/// Result of one successful calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    /// Tabulated life expectancy used for the calculation
    pub expectancy: f64,
    pub metrics: DerivedMetrics,
    pub chart: ChartInput,
}

/// Calculator bound to one expectancy table and one current year
#[derive(Debug, Clone)]
pub struct CalculatorSession {
    table: ExpectancyTable,
    current_year: i32,
}

impl CalculatorSession {
    /// Create a session using the current calendar year
    pub fn new(table: ExpectancyTable) -> Self {
        Self::with_current_year(table, chrono::Utc::now().year())
    }

    /// Create a session with an explicit current year (deterministic runs)
    pub fn with_current_year(table: ExpectancyTable, current_year: i32) -> Self {
        Self {
            table,
            current_year,
        }
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    pub fn table(&self) -> &ExpectancyTable {
        &self.table
    }

    /// Validate the profile, look up the expectancy, and compute metrics
    ///
    /// Ages past the tabulated expectancy are allowed through: the deficit
    /// shows up as negative remaining years and the chart clamps it away.
    pub fn run(&self, profile: &UserProfile) -> Result<Outcome, CalcError> {
        if profile.age == 0 {
            return Err(CalcError::InvalidAge { age: profile.age });
        }
        if profile.start_year > self.current_year {
            return Err(CalcError::StartYearInFuture {
                start_year: profile.start_year,
                current_year: self.current_year,
            });
        }
        if profile.usage.has_negative_entry() {
            return Err(CalcError::NegativeUsage {
                minutes: profile.total_daily_minutes(),
            });
        }

        let expectancy = self
            .table
            .lookup(&profile.country, profile.gender)
            .ok_or_else(|| CalcError::DataNotFound {
                country: profile.country.clone(),
                gender: profile.gender,
            })?;

        let metrics = compute_metrics(
            profile.age,
            expectancy,
            profile.start_year,
            profile.total_daily_minutes(),
            self.current_year,
        );

        if metrics.total_lifespan == 0 {
            return Err(CalcError::ZeroLifespan { expectancy });
        }

        log::debug!(
            "computed metrics for {} ({}): {:.2} days spent, {:.2} years remaining",
            profile.country,
            profile.gender,
            metrics.total_days_spent,
            metrics.years_remaining,
        );

        let chart = ChartInput::from_metrics(profile.age, &metrics);
        Ok(Outcome {
            expectancy,
            metrics,
            chart,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expectancy::CountryRow;
    use crate::profile::DailyUsage;

    fn session() -> CalculatorSession {
        let table = ExpectancyTable::new(vec![
            CountryRow::new("Testland", 80.0, 80.0),
            CountryRow::new("Shortland", 0.4, 0.4),
        ]);
        CalculatorSession::with_current_year(table, 2024)
    }

    fn profile() -> UserProfile {
        UserProfile::new(
            "Testland",
            Gender::Male,
            25,
            2010,
            DailyUsage::Total(90.0),
        )
    }

    #[test]
    fn test_run_reference_scenario() {
        let outcome = session().run(&profile()).unwrap();
        assert_eq!(outcome.expectancy, 80.0);
        assert_eq!(outcome.metrics.total_lifespan, 80);
        assert!((outcome.metrics.adjusted_remaining_years - 51.5625).abs() < 1e-9);
        assert_eq!(outcome.chart.total, 80);
    }

    #[test]
    fn test_unknown_country_is_data_not_found() {
        let mut p = profile();
        p.country = "Atlantis".to_string();
        let err = session().run(&p).unwrap_err();
        assert_eq!(
            err,
            CalcError::DataNotFound {
                country: "Atlantis".to_string(),
                gender: Gender::Male,
            }
        );
    }

    #[test]
    fn test_zero_age_rejected() {
        let mut p = profile();
        p.age = 0;
        assert_eq!(session().run(&p).unwrap_err(), CalcError::InvalidAge { age: 0 });
    }

    #[test]
    fn test_future_start_year_rejected() {
        let mut p = profile();
        p.start_year = 2030;
        assert_eq!(
            session().run(&p).unwrap_err(),
            CalcError::StartYearInFuture {
                start_year: 2030,
                current_year: 2024,
            }
        );
    }

    #[test]
    fn test_negative_usage_rejected() {
        let mut p = profile();
        p.usage = DailyUsage::Total(-5.0);
        assert!(matches!(
            session().run(&p).unwrap_err(),
            CalcError::NegativeUsage { .. }
        ));
    }

    #[test]
    fn test_zero_lifespan_rejected() {
        let mut p = profile();
        p.country = "Shortland".to_string();
        p.age = 1;
        assert!(matches!(
            session().run(&p).unwrap_err(),
            CalcError::ZeroLifespan { .. }
        ));
    }

    #[test]
    fn test_age_past_expectancy_yields_deficit() {
        let mut p = profile();
        p.age = 90;
        let outcome = session().run(&p).unwrap();
        assert!(outcome.metrics.years_remaining < 0.0);
        assert_eq!(outcome.chart.remaining(), 0);
    }
}
