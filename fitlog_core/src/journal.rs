//! The daily log: a date-keyed collection of entries.
//!
//! Keying the collection by calendar date makes "replace the entry for
//! an already-logged date" a single well-defined operation, and keeps
//! the one-entry-per-date invariant structural.

use crate::{DailyEntry, Workout};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The full daily log for one user
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Journal {
    entries: BTreeMap<NaiveDate, DailyEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the entry for its date, replacing any existing entry.
    ///
    /// Returns true when an existing entry was replaced.
    pub fn upsert(&mut self, entry: DailyEntry) -> bool {
        let replaced = self.entries.insert(entry.date, entry).is_some();
        if replaced {
            tracing::debug!("Replaced existing journal entry");
        }
        replaced
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DailyEntry> {
        self.entries.get(&date)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in ascending date order
    pub fn iter(&self) -> impl Iterator<Item = &DailyEntry> {
        self.entries.values()
    }

    /// All entries in descending date order (the display order)
    pub fn entries_desc(&self) -> Vec<&DailyEntry> {
        self.entries.values().rev().collect()
    }

    /// Entries dated on or after `cutoff`, descending
    pub fn entries_since(&self, cutoff: NaiveDate) -> Vec<&DailyEntry> {
        self.entries
            .range(cutoff..)
            .map(|(_, e)| e)
            .rev()
            .collect()
    }

    /// Distinct logged dates, most recent first
    pub fn dates_desc(&self) -> Vec<NaiveDate> {
        self.entries.keys().rev().copied().collect()
    }

    /// Date of the most recent entry, if any
    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.entries.keys().next_back().copied()
    }

    // ------------------------------------------------------------------
    // Cumulative scans used by achievements and summary views
    // ------------------------------------------------------------------

    pub fn total_steps(&self) -> u64 {
        self.iter().map(|e| u64::from(e.steps)).sum()
    }

    pub fn total_activity_minutes(&self) -> u64 {
        self.iter().map(|e| u64::from(e.activity_minutes)).sum()
    }

    /// Number of entries that include a workout
    pub fn workout_count(&self) -> usize {
        self.iter().filter(|e| e.workout.is_some()).count()
    }

    /// Number of entries with water intake at or above `goal_ml`
    pub fn days_at_water_goal(&self, goal_ml: u32) -> usize {
        self.iter().filter(|e| e.water_ml >= goal_ml).count()
    }

    fn workouts(&self) -> impl Iterator<Item = &Workout> {
        self.iter().filter_map(|e| e.workout.as_ref())
    }

    pub fn total_workout_minutes(&self) -> u64 {
        self.workouts().map(|w| u64::from(w.duration_minutes)).sum()
    }

    pub fn total_workout_calories(&self) -> u64 {
        self.workouts().map(|w| u64::from(w.calories)).sum()
    }
}
