//! Core domain types for the fitlog journal.
//!
//! This module defines the fundamental types used throughout the system:
//! - The user profile (static attributes, goal, activity level)
//! - Daily entries and their embedded workouts

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Profile Types
// ============================================================================

/// The user's fitness goal
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    WeightLoss,
    MuscleGain,
    Maintenance,
    Endurance,
}

impl FitnessGoal {
    /// Human-readable label for display
    pub fn label(self) -> &'static str {
        match self {
            FitnessGoal::WeightLoss => "Weight loss",
            FitnessGoal::MuscleGain => "Muscle gain",
            FitnessGoal::Maintenance => "Maintenance",
            FitnessGoal::Endurance => "Endurance",
        }
    }
}

/// Self-reported day-to-day activity level
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Low,
    Medium,
    High,
}

impl ActivityLevel {
    /// Human-readable label for display
    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::Low => "Low",
            ActivityLevel::Medium => "Medium",
            ActivityLevel::High => "High",
        }
    }
}

/// The user's profile
///
/// At most one profile exists. It is saved wholesale on every edit and
/// never partially mutated.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub age: u32,
    pub height_cm: u32,
    pub weight_kg: f64,
    pub goal_weight_kg: f64,
    pub goal: FitnessGoal,
    pub activity_level: ActivityLevel,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Body mass index from current weight and height
    pub fn bmi(&self) -> f64 {
        let height_m = f64::from(self.height_cm) / 100.0;
        self.weight_kg / (height_m * height_m)
    }
}

// ============================================================================
// Daily Entry Types
// ============================================================================

/// A workout embedded in a daily entry
///
/// Presence of a workout is an optional field on the entry, not a
/// separate collection.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Workout {
    pub name: String,
    pub duration_minutes: u32,
    pub intensity: String,
    pub calories: u32,
}

/// One day's logged metrics
///
/// The calendar date is the unique key: exactly one entry exists per
/// date, and saving an entry for an already-logged date replaces it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DailyEntry {
    pub date: NaiveDate,
    pub weight_kg: Option<f64>,
    pub water_ml: u32,
    pub food: String,
    pub calories: u32,
    pub steps: u32,
    pub activity_minutes: u32,
    pub workout: Option<Workout>,
    pub recorded_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi() {
        let profile = Profile {
            name: "Sam".into(),
            age: 30,
            height_cm: 175,
            weight_kg: 70.0,
            goal_weight_kg: 65.0,
            goal: FitnessGoal::WeightLoss,
            activity_level: ActivityLevel::Medium,
            created_at: Utc::now(),
        };

        // 70 / 1.75^2 = 22.857...
        assert!((profile.bmi() - 22.857).abs() < 0.001);
    }

    #[test]
    fn test_goal_serde_names() {
        let json = serde_json::to_string(&FitnessGoal::WeightLoss).unwrap();
        assert_eq!(json, "\"weight_loss\"");

        let parsed: ActivityLevel = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(parsed, ActivityLevel::Medium);
    }
}
