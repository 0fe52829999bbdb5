//! Consecutive-day streaks and one-way achievement unlocks.
//!
//! Achievements are a closed set of six milestones derived from the
//! cumulative journal history. Unlocks are monotonic: a flag that has
//! been set is never cleared, even if later entries would no longer
//! satisfy the rule. Evaluation is idempotent over unchanged history.

use crate::recommend::WATER_GOAL_ML;
use crate::Journal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

const STREAK_DAYS: u32 = 3;
const WORKOUT_COUNT: usize = 5;
const WATER_GOAL_DAYS: usize = 7;
const CONSISTENCY_DAYS: usize = 14;
const TOTAL_STEPS: u64 = 100_000;
const TOTAL_ACTIVITY_MINUTES: u64 = 1800;

/// The closed set of achievement identifiers
#[derive(
    Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub enum AchievementId {
    #[serde(rename = "streak_3")]
    Streak3,
    #[serde(rename = "workouts_5")]
    Workouts5,
    #[serde(rename = "water_7")]
    Water7,
    #[serde(rename = "consistency_14")]
    Consistency14,
    #[serde(rename = "steps_100k")]
    Steps100k,
    #[serde(rename = "activity_30h")]
    Activity30h,
}

impl AchievementId {
    pub fn as_str(self) -> &'static str {
        match self {
            AchievementId::Streak3 => "streak_3",
            AchievementId::Workouts5 => "workouts_5",
            AchievementId::Water7 => "water_7",
            AchievementId::Consistency14 => "consistency_14",
            AchievementId::Steps100k => "steps_100k",
            AchievementId::Activity30h => "activity_30h",
        }
    }
}

impl fmt::Display for AchievementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display metadata for one achievement
#[derive(Clone, Copy, Debug)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub title: &'static str,
    pub description: &'static str,
}

/// The built-in achievement catalog, in display order
pub static ACHIEVEMENTS: [AchievementDef; 6] = [
    AchievementDef {
        id: AchievementId::Streak3,
        title: "3 days in a row",
        description: "Fill in the journal 3 days in a row",
    },
    AchievementDef {
        id: AchievementId::Workouts5,
        title: "5 workouts",
        description: "Complete 5 workouts",
    },
    AchievementDef {
        id: AchievementId::Water7,
        title: "Water goal",
        description: "Drink 2L+ of water on 7 days",
    },
    AchievementDef {
        id: AchievementId::Consistency14,
        title: "2 weeks",
        description: "Fill in the journal on 14 days",
    },
    AchievementDef {
        id: AchievementId::Steps100k,
        title: "100,000 steps",
        description: "Walk 100k steps in total",
    },
    AchievementDef {
        id: AchievementId::Activity30h,
        title: "30 hours",
        description: "Be active for 30 hours in total",
    },
];

/// Unlock flags keyed by achievement id
///
/// Monotonic: `unlock` only ever sets a flag to true.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct AchievementState {
    #[serde(default)]
    unlocked: BTreeMap<AchievementId, bool>,
}

impl AchievementState {
    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocked.get(&id).copied().unwrap_or(false)
    }

    pub fn unlock(&mut self, id: AchievementId) {
        self.unlocked.insert(id, true);
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked.values().filter(|v| **v).count()
    }
}

/// Count of consecutive logged days ending at the most recent entry.
///
/// Returns 0 when the log is empty or the most recent entry is more
/// than one calendar day before `today` (the streak is broken).
/// Otherwise the count starts at 1 for the most recent date and walks
/// backward while successive dates differ by exactly one day.
pub fn compute_streak(journal: &Journal, today: NaiveDate) -> u32 {
    let dates = journal.dates_desc();
    let Some(most_recent) = dates.first() else {
        return 0;
    };

    if (today - *most_recent).num_days() > 1 {
        return 0;
    }

    let mut streak = 1;
    for pair in dates.windows(2) {
        if (pair[0] - pair[1]).num_days() == 1 {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

/// Evaluate every achievement rule against the journal.
///
/// Returns the updated state and the ids that newly transitioned to
/// unlocked. Re-running against unchanged history yields no new
/// unlocks.
pub fn evaluate_achievements(
    journal: &Journal,
    current: &AchievementState,
    today: NaiveDate,
) -> (AchievementState, Vec<AchievementId>) {
    let checks = [
        (
            AchievementId::Streak3,
            compute_streak(journal, today) >= STREAK_DAYS,
        ),
        (
            AchievementId::Workouts5,
            journal.workout_count() >= WORKOUT_COUNT,
        ),
        (
            AchievementId::Water7,
            journal.days_at_water_goal(WATER_GOAL_ML) >= WATER_GOAL_DAYS,
        ),
        (
            AchievementId::Consistency14,
            journal.len() >= CONSISTENCY_DAYS,
        ),
        (
            AchievementId::Steps100k,
            journal.total_steps() >= TOTAL_STEPS,
        ),
        (
            AchievementId::Activity30h,
            journal.total_activity_minutes() >= TOTAL_ACTIVITY_MINUTES,
        ),
    ];

    let mut state = current.clone();
    let mut newly_unlocked = Vec::new();

    for (id, met) in checks {
        if met && !state.is_unlocked(id) {
            state.unlock(id);
            newly_unlocked.push(id);
            tracing::info!("Achievement unlocked: {}", id);
        }
    }

    (state, newly_unlocked)
}
