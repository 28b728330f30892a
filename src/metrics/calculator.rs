//! Pure arithmetic pipeline turning usage inputs into derived metrics
//!
//! Single-pass and side-effect free. Negative intermediates (future start
//! year, age past expectancy) flow through unclamped; rejecting them is
//! the request boundary's job, not the calculator's.

use serde::{Deserialize, Serialize};

/// Day-count convention used throughout: 365 days per year, no leap days
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Minutes in a day (24 * 60)
pub const MINUTES_PER_DAY: f64 = 24.0 * 60.0;

/// Everything derived from one calculation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// Whole years since the reported start year (may be negative)
    pub years_using_social_media: i32,

    /// Minutes spent on social media so far
    pub total_minutes_spent: f64,

    /// Days spent on social media so far
    pub total_days_spent: f64,

    /// Days spent so far expressed in years
    pub social_media_years: f64,

    /// Expectancy minus current age (may be negative)
    pub years_remaining: f64,

    /// age + years_remaining, truncated to whole years
    pub total_lifespan: i64,

    /// Years the user will spend on social media over the remaining
    /// lifespan, assuming constant daily usage
    pub projected_social_media_years: f64,

    /// years_remaining net of projected future social media time
    pub adjusted_remaining_years: f64,

    pub percent_life_lived: f64,
    pub percent_social_media_time: f64,
    pub percent_life_remaining: f64,
}

/// Compute all derived metrics from validated inputs
///
/// Deterministic and total provided `age != 0` and the resulting
/// `total_lifespan != 0`; with either denominator zero the percentage
/// fields are non-finite rather than a panic.
pub fn compute_metrics(
    age: u8,
    expectancy: f64,
    start_year: i32,
    daily_minutes: f64,
    current_year: i32,
) -> DerivedMetrics {
    let years_using_social_media = current_year - start_year;

    let total_minutes_spent = f64::from(years_using_social_media) * DAYS_PER_YEAR * daily_minutes;
    let total_days_spent = total_minutes_spent / MINUTES_PER_DAY;
    let social_media_years = total_days_spent / DAYS_PER_YEAR;

    let age_years = f64::from(age);
    let years_remaining = expectancy - age_years;
    let total_lifespan = (age_years + years_remaining).floor() as i64;

    // Average hours/day spread over the remaining years, expressed in years
    let projected_social_media_years =
        (daily_minutes / 60.0) * DAYS_PER_YEAR * years_remaining / 24.0 / DAYS_PER_YEAR;
    let adjusted_remaining_years = years_remaining - projected_social_media_years;

    let lifespan_years = total_lifespan as f64;
    let percent_life_lived = age_years / lifespan_years * 100.0;
    let percent_social_media_time = total_days_spent / (age_years * DAYS_PER_YEAR) * 100.0;
    let percent_life_remaining = adjusted_remaining_years / lifespan_years * 100.0;

    DerivedMetrics {
        years_using_social_media,
        total_minutes_spent,
        total_days_spent,
        social_media_years,
        years_remaining,
        total_lifespan,
        projected_social_media_years,
        adjusted_remaining_years,
        percent_life_lived,
        percent_social_media_time,
        percent_life_remaining,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_scenario() {
        // age 25, expectancy 80, started 2010, 90 min/day, year 2024
        let m = compute_metrics(25, 80.0, 2010, 90.0, 2024);

        assert_eq!(m.years_using_social_media, 14);
        assert_relative_eq!(m.total_minutes_spent, 459_900.0);
        assert_relative_eq!(m.total_days_spent, 319.375);
        assert_relative_eq!(m.years_remaining, 55.0);
        assert_eq!(m.total_lifespan, 80);
        assert_relative_eq!(m.projected_social_media_years, 3.4375);
        assert_relative_eq!(m.adjusted_remaining_years, 51.5625);
        assert_relative_eq!(m.percent_life_lived, 31.25);
        assert_relative_eq!(m.percent_life_remaining, 51.5625 / 80.0 * 100.0);
    }

    #[test]
    fn test_start_year_equal_to_current_year() {
        let m = compute_metrics(30, 75.0, 2024, 480.0, 2024);
        assert_eq!(m.years_using_social_media, 0);
        assert_eq!(m.total_minutes_spent, 0.0);
        assert_eq!(m.total_days_spent, 0.0);
    }

    #[test]
    fn test_zero_usage_leaves_remaining_years_unchanged() {
        let m = compute_metrics(25, 80.0, 2010, 0.0, 2024);
        assert_eq!(m.total_days_spent, 0.0);
        assert_eq!(m.projected_social_media_years, 0.0);
        assert_relative_eq!(m.adjusted_remaining_years, m.years_remaining);
    }

    #[test]
    fn test_days_and_projection_monotone_in_minutes() {
        let mut prev_days = -1.0;
        let mut prev_projected = -1.0;
        for minutes in [10.0, 30.0, 90.0, 240.0, 600.0] {
            let m = compute_metrics(25, 80.0, 2010, minutes, 2024);
            assert!(m.total_days_spent > prev_days);
            assert!(m.projected_social_media_years > prev_projected);
            prev_days = m.total_days_spent;
            prev_projected = m.projected_social_media_years;
        }
    }

    #[test]
    fn test_fractional_expectancy_floors_lifespan() {
        let m = compute_metrics(25, 80.9, 2010, 60.0, 2024);
        assert_eq!(m.total_lifespan, 80);
    }

    #[test]
    fn test_future_start_year_propagates_negative_elapsed() {
        let m = compute_metrics(25, 80.0, 2030, 60.0, 2024);
        assert_eq!(m.years_using_social_media, -6);
        assert!(m.total_days_spent < 0.0);
    }

    #[test]
    fn test_age_past_expectancy_propagates_negative_remaining() {
        let m = compute_metrics(90, 80.0, 2010, 60.0, 2024);
        assert_relative_eq!(m.years_remaining, -10.0);
        assert!(m.projected_social_media_years < 0.0);
        assert_eq!(m.total_lifespan, 80);
    }
}
