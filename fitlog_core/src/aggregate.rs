//! Windowed projections over the journal for trend views.
//!
//! The trend views consume fixed-size trailing windows (7-day water and
//! activity, 30-day weight) rather than the raw log. Dates with no
//! entry project as zero so a window always has exactly `days` points;
//! the weight view is the exception and only carries recorded weights.

use crate::{DailyEntry, Journal, Profile};
use chrono::{Duration, NaiveDate};

/// A metric that can be projected out of a daily entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    Water,
    ActivityMinutes,
    Steps,
    Calories,
    /// 1 when the day included a workout, 0 otherwise
    WorkoutDone,
}

impl Metric {
    fn project(self, entry: &DailyEntry) -> u32 {
        match self {
            Metric::Water => entry.water_ml,
            Metric::ActivityMinutes => entry.activity_minutes,
            Metric::Steps => entry.steps,
            Metric::Calories => entry.calories,
            Metric::WorkoutDone => u32::from(entry.workout.is_some()),
        }
    }
}

/// Trailing window of `days` calendar days ending at `today`, ascending.
///
/// Dates with no entry are included with a value of 0, not skipped.
pub fn windowed(
    journal: &Journal,
    days: u32,
    today: NaiveDate,
    metric: Metric,
) -> Vec<(NaiveDate, u32)> {
    (0..days)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(i64::from(offset));
            let value = journal.get(date).map_or(0, |e| metric.project(e));
            (date, value)
        })
        .collect()
}

/// Recorded weights only, ascending by date, capped to the last `days`
/// data points.
///
/// Unlike [`windowed`] this does not zero-fill: a day without a weigh-in
/// carries no information for the weight trend.
pub fn weight_window(journal: &Journal, days: usize) -> Vec<(NaiveDate, f64)> {
    let mut points: Vec<(NaiveDate, f64)> = journal
        .iter()
        .filter_map(|e| e.weight_kg.map(|w| (e.date, w)))
        .collect();

    let skip = points.len().saturating_sub(days);
    points.split_off(skip)
}

/// Start/current/goal weight plus the change so far
#[derive(Clone, Debug, PartialEq)]
pub struct WeightSummary {
    pub start_kg: f64,
    pub current_kg: f64,
    pub goal_kg: f64,
    pub change_kg: f64,
}

/// Weight progress from the earliest to the latest recorded weigh-in.
///
/// Returns None when no entry has a recorded weight.
pub fn weight_summary(journal: &Journal, profile: &Profile) -> Option<WeightSummary> {
    let mut weights = journal.iter().filter_map(|e| e.weight_kg);
    let start_kg = weights.next()?;
    let current_kg = weights.last().unwrap_or(start_kg);

    Some(WeightSummary {
        start_kg,
        current_kg,
        goal_kg: profile.goal_weight_kg,
        change_kg: current_kg - start_kg,
    })
}

/// Lifetime workout totals
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorkoutTotals {
    pub count: usize,
    pub minutes: u64,
    pub calories: u64,
}

pub fn workout_totals(journal: &Journal) -> WorkoutTotals {
    WorkoutTotals {
        count: journal.workout_count(),
        minutes: journal.total_workout_minutes(),
        calories: journal.total_workout_calories(),
    }
}
