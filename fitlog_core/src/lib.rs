#![forbid(unsafe_code)]

//! Core domain model and business logic for the fitlog journal.
//!
//! This crate provides:
//! - Domain types (profile, daily entries, workouts)
//! - Metabolic calculations (BMR/TDEE)
//! - The recommendation engine
//! - Streak and achievement evaluation
//! - Windowed aggregates for trend views
//! - Persistence (JSON store, CSV export)

pub mod achievements;
pub mod aggregate;
pub mod config;
pub mod error;
pub mod export;
pub mod journal;
pub mod logging;
pub mod metabolic;
pub mod recommend;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use achievements::{
    compute_streak, evaluate_achievements, AchievementDef, AchievementId, AchievementState,
    ACHIEVEMENTS,
};
pub use aggregate::{
    weight_summary, weight_window, windowed, workout_totals, Metric, WeightSummary, WorkoutTotals,
};
pub use config::Config;
pub use error::{Error, Result};
pub use export::export_csv;
pub use journal::Journal;
pub use metabolic::{compute_bmr, compute_tdee};
pub use recommend::{recommend, Recommendation, RecommendationSet, Severity, Topic};
pub use store::Store;
pub use types::*;
