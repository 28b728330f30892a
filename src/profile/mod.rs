//! User profile data structures and cohort loading

mod data;
pub mod loader;

pub use data::{DailyUsage, Gender, Platform, UserProfile};
pub use loader::{load_profiles, load_profiles_from_reader};
