//! User profile data structures for a single calculation request

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender used for the expectancy table lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    /// Parse from the string form used in CSV files and CLI arguments
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Male" => Some(Gender::Male),
            "Female" => Some(Gender::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Social media platforms offered by the input form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Facebook,
    Instagram,
    TikTok,
    Twitter,
    Snapchat,
    LinkedIn,
    YouTube,
    Reddit,
}

impl Platform {
    /// All platforms the form can offer, in display order
    pub const ALL: [Platform; 8] = [
        Platform::Facebook,
        Platform::Instagram,
        Platform::TikTok,
        Platform::Twitter,
        Platform::Snapchat,
        Platform::LinkedIn,
        Platform::YouTube,
        Platform::Reddit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
            Platform::TikTok => "TikTok",
            Platform::Twitter => "Twitter",
            Platform::Snapchat => "Snapchat",
            Platform::LinkedIn => "LinkedIn",
            Platform::YouTube => "YouTube",
            Platform::Reddit => "Reddit",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.as_str() == s)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-reported daily social media usage
///
/// The form collects minutes per platform; batch inputs only carry a
/// pre-summed daily total. The calculator only ever needs the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DailyUsage {
    /// Minutes per platform, summed on demand
    PerPlatform(Vec<(Platform, f64)>),
    /// A single pre-summed daily total in minutes
    Total(f64),
}

impl DailyUsage {
    /// Total daily minutes across all platforms
    pub fn total_minutes(&self) -> f64 {
        match self {
            DailyUsage::PerPlatform(entries) => entries.iter().map(|(_, m)| m).sum(),
            DailyUsage::Total(minutes) => *minutes,
        }
    }

    /// True if any reported per-platform or total value is negative
    pub fn has_negative_entry(&self) -> bool {
        match self {
            DailyUsage::PerPlatform(entries) => entries.iter().any(|(_, m)| *m < 0.0),
            DailyUsage::Total(minutes) => *minutes < 0.0,
        }
    }
}

/// A single user's demographic profile and usage report
///
/// Lives only for the duration of one calculation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Country name; must exactly match a row in the expectancy table
    pub country: String,

    /// Gender for the expectancy lookup
    pub gender: Gender,

    /// Current age in whole years
    pub age: u8,

    /// Calendar year the user started using social media
    pub start_year: i32,

    /// Self-reported daily usage
    pub usage: DailyUsage,
}

impl UserProfile {
    pub fn new(
        country: impl Into<String>,
        gender: Gender,
        age: u8,
        start_year: i32,
        usage: DailyUsage,
    ) -> Self {
        Self {
            country: country.into(),
            gender,
            age,
            start_year,
            usage,
        }
    }

    /// Total daily usage in minutes across all platforms
    pub fn total_daily_minutes(&self) -> f64 {
        self.usage.total_minutes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_total() {
        let usage = DailyUsage::PerPlatform(vec![
            (Platform::Facebook, 30.0),
            (Platform::Instagram, 45.0),
            (Platform::YouTube, 15.0),
        ]);
        assert!((usage.total_minutes() - 90.0).abs() < 1e-12);

        let total = DailyUsage::Total(120.0);
        assert!((total.total_minutes() - 120.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_usage_is_zero() {
        let usage = DailyUsage::PerPlatform(vec![]);
        assert_eq!(usage.total_minutes(), 0.0);
    }

    #[test]
    fn test_negative_entry_detection() {
        let usage = DailyUsage::PerPlatform(vec![(Platform::Reddit, -10.0)]);
        assert!(usage.has_negative_entry());
        assert!(!DailyUsage::Total(0.0).has_negative_entry());
    }

    #[test]
    fn test_gender_parse_roundtrip() {
        assert_eq!(Gender::parse("Male"), Some(Gender::Male));
        assert_eq!(Gender::parse("Female"), Some(Gender::Female));
        assert_eq!(Gender::parse("male"), None); // case-sensitive, like the table
    }

    #[test]
    fn test_platform_parse() {
        for p in Platform::ALL {
            assert_eq!(Platform::parse(p.as_str()), Some(p));
        }
        assert_eq!(Platform::parse("MySpace"), None);
    }
}
