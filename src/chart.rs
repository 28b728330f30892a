//! Life chart: one marker per year of life, in four categories
//!
//! The chart input is built from already-computed metrics with all counts
//! clamped to zero, so rendering can never see a negative marker count.

use crate::metrics::DerivedMetrics;
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Markers per row in the terminal rendering
const MARKERS_PER_ROW: usize = 40;

/// Category of one year of life on the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeSegment {
    /// Years already lived
    Lived,
    /// Years spent on social media so far
    SocialMediaPast,
    /// Projected future years on social media
    SocialMediaFuture,
    /// Remaining years net of social media
    Remaining,
}

impl LifeSegment {
    pub fn label(&self) -> &'static str {
        match self {
            LifeSegment::Lived => "Lived",
            LifeSegment::SocialMediaPast => "Social Media",
            LifeSegment::SocialMediaFuture => "Projected Social Media",
            LifeSegment::Remaining => "Remaining",
        }
    }

    /// Colored terminal marker for this segment
    fn marker(&self) -> String {
        match self {
            LifeSegment::Lived => format!("{}", "●".bright_black()),
            LifeSegment::SocialMediaPast => format!("{}", "●".red()),
            LifeSegment::SocialMediaFuture => format!("{}", "●".blue()),
            LifeSegment::Remaining => format!("{}", "●".green()),
        }
    }
}

/// Whole-year marker counts feeding the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartInput {
    pub lived: u32,
    pub social_media_past: u32,
    pub social_media_future: u32,
    /// Adjusted total: at least the sum of the three components
    pub total: u32,
}

impl ChartInput {
    /// Build chart input, widening `total` so the remaining count can
    /// never go negative
    pub fn new(lived: u32, social_media_past: u32, social_media_future: u32, total: u32) -> Self {
        let component_sum = lived + social_media_past + social_media_future;
        Self {
            lived,
            social_media_past,
            social_media_future,
            total: total.max(component_sum),
        }
    }

    /// Derive chart input from computed metrics
    ///
    /// Fractional year counts truncate to whole markers; negative values
    /// clamp to zero rather than surfacing as negative counts.
    pub fn from_metrics(age: u8, metrics: &DerivedMetrics) -> Self {
        let lived = u32::from(age);
        let past = metrics.social_media_years.max(0.0) as u32;
        let future = metrics.projected_social_media_years.max(0.0) as u32;
        let total = metrics.total_lifespan.max(0) as u32;
        Self::new(lived, past, future, total)
    }

    /// Remaining years after the other three categories
    pub fn remaining(&self) -> u32 {
        self.total - self.lived - self.social_media_past - self.social_media_future
    }

    /// One segment per year of life, in chart order
    pub fn segments(&self) -> Vec<LifeSegment> {
        let mut segments = Vec::with_capacity(self.total as usize);
        segments.extend(std::iter::repeat(LifeSegment::Lived).take(self.lived as usize));
        segments.extend(
            std::iter::repeat(LifeSegment::SocialMediaPast).take(self.social_media_past as usize),
        );
        segments.extend(
            std::iter::repeat(LifeSegment::SocialMediaFuture)
                .take(self.social_media_future as usize),
        );
        segments.extend(std::iter::repeat(LifeSegment::Remaining).take(self.remaining() as usize));
        segments
    }

    /// Render the chart as colored marker rows plus a legend
    pub fn render(&self) -> String {
        let mut out = String::new();
        writeln!(out, "Life expectancy breakdown ({} years):", self.total).unwrap();

        for (i, segment) in self.segments().iter().enumerate() {
            if i > 0 && i % MARKERS_PER_ROW == 0 {
                out.push('\n');
            }
            out.push_str(&segment.marker());
            out.push(' ');
        }
        out.push('\n');

        writeln!(
            out,
            "{} Lived ({})   {} Social Media ({})   {} Projected Social Media ({})   {} Remaining ({})",
            "●".bright_black(),
            self.lived,
            "●".red(),
            self.social_media_past,
            "●".blue(),
            self.social_media_future,
            "●".green(),
            self.remaining(),
        )
        .unwrap();

        out
    }
}
