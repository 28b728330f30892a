//! Derived metrics calculation

mod calculator;

pub use calculator::{compute_metrics, DerivedMetrics, DAYS_PER_YEAR, MINUTES_PER_DAY};
