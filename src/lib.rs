//! Mind Your Time - life expectancy vs. social media usage calculator
//!
//! This library provides:
//! - A country/gender life-expectancy table with CSV loading
//! - A pure calculation pipeline for elapsed and projected usage metrics
//! - Chart input construction for the one-marker-per-year life chart
//! - Narrative report rendering
//! - A request/response session tying the pieces together

pub mod chart;
pub mod expectancy;
pub mod metrics;
pub mod profile;
pub mod report;
pub mod session;

// Re-export commonly used types
pub use chart::{ChartInput, LifeSegment};
pub use expectancy::{CountryRow, ExpectancyTable};
pub use metrics::{compute_metrics, DerivedMetrics};
pub use profile::{DailyUsage, Gender, Platform, UserProfile};
pub use session::{CalcError, CalculatorSession, Outcome};
