//! Narrative report rendering for derived metrics

use crate::metrics::DerivedMetrics;

/// Day count used when expressing elapsed days as months
const DAYS_PER_MONTH: f64 = 30.0;

/// The three narrative sentences of the report
pub fn narrative_lines(metrics: &DerivedMetrics) -> Vec<String> {
    vec![
        format!(
            "Based on your inputs, you have spent approximately {:.2} months ({:.2} days) on social media so far.",
            metrics.total_days_spent / DAYS_PER_MONTH,
            metrics.total_days_spent,
        ),
        format!(
            "With a life expectancy of approximately {} years, you have about {:.2} years left.",
            metrics.total_lifespan, metrics.years_remaining,
        ),
        format!(
            "If you continue with your current habits, you will spend about {:.2} more years on social media.",
            metrics.projected_social_media_years,
        ),
    ]
}

/// The three percentage metrics as labelled lines
pub fn percentage_lines(metrics: &DerivedMetrics) -> Vec<String> {
    vec![
        format!(
            "Percentage of Life Lived: {:.2}%",
            metrics.percent_life_lived
        ),
        format!(
            "Percentage of Life Spent on Social Media: {:.2}%",
            metrics.percent_social_media_time
        ),
        format!(
            "Percentage of Life Left: {:.2}%",
            metrics.percent_life_remaining
        ),
    ]
}

/// Full text report: narrative followed by the percentage metrics
pub fn render_report(metrics: &DerivedMetrics) -> String {
    let mut lines = narrative_lines(metrics);
    lines.push(String::new());
    lines.extend(percentage_lines(metrics));
    lines.join("\n")
}
