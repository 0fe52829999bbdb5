//! CSV export of the journal history.

use crate::{DailyEntry, Journal, Result};
use std::fs::File;
use std::path::Path;

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct CsvRow {
    date: String,
    weight_kg: Option<f64>,
    water_ml: u32,
    calories: u32,
    steps: u32,
    activity_minutes: u32,
    food: String,
    workout: Option<String>,
    workout_minutes: Option<u32>,
    workout_intensity: Option<String>,
    workout_calories: Option<u32>,
}

impl From<&DailyEntry> for CsvRow {
    fn from(entry: &DailyEntry) -> Self {
        CsvRow {
            date: entry.date.to_string(),
            weight_kg: entry.weight_kg,
            water_ml: entry.water_ml,
            calories: entry.calories,
            steps: entry.steps,
            activity_minutes: entry.activity_minutes,
            food: entry.food.clone(),
            workout: entry.workout.as_ref().map(|w| w.name.clone()),
            workout_minutes: entry.workout.as_ref().map(|w| w.duration_minutes),
            workout_intensity: entry.workout.as_ref().map(|w| w.intensity.clone()),
            workout_calories: entry.workout.as_ref().map(|w| w.calories),
        }
    }
}

/// Write the full history to `path` as CSV, newest entry first.
///
/// Overwrites any existing file. The CSV is synced to disk before the
/// row count is returned.
pub fn export_csv(journal: &Journal, path: &Path) -> Result<usize> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);

    let entries = journal.entries_desc();
    for entry in &entries {
        writer.serialize(CsvRow::from(*entry))?;
    }

    writer.flush()?;
    let file = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    file.sync_all()?;

    tracing::info!("Exported {} entries to {:?}", entries.len(), path);
    Ok(entries.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Workout;
    use chrono::Utc;

    fn entry(date: &str, calories: u32) -> DailyEntry {
        DailyEntry {
            date: date.parse().unwrap(),
            weight_kg: Some(70.0),
            water_ml: 2000,
            food: "oats, soup".into(),
            calories,
            steps: 9000,
            activity_minutes: 35,
            workout: Some(Workout {
                name: "Run".into(),
                duration_minutes: 30,
                intensity: "medium".into(),
                calories: 300,
            }),
            recorded_at: Utc::now(),
        }
    }

    #[test]
    fn test_export_writes_rows_newest_first() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("history.csv");

        let mut journal = Journal::new();
        journal.upsert(entry("2024-01-05", 1800));
        journal.upsert(entry("2024-01-06", 2200));

        let count = export_csv(&journal, &path).unwrap();
        assert_eq!(count, 2);

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert!(lines.next().unwrap().starts_with("date,"));
        assert!(lines.next().unwrap().starts_with("2024-01-06"));
        assert!(lines.next().unwrap().starts_with("2024-01-05"));
    }

    #[test]
    fn test_export_empty_journal() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("history.csv");

        let count = export_csv(&Journal::new(), &path).unwrap();
        assert_eq!(count, 0);
        assert!(path.exists());
    }

    #[test]
    fn test_rows_can_be_read_back() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("history.csv");

        let mut journal = Journal::new();
        journal.upsert(entry("2024-01-05", 1800));
        export_csv(&journal, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let records: Vec<_> = reader.records().collect::<std::result::Result<_, _>>().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(&records[0][0], "2024-01-05");
        assert_eq!(&records[0][7], "Run");
    }
}
