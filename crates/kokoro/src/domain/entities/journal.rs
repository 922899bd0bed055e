//! Journal entities - diary, sleep and mood records
//!
//! All three histories are date-keyed with at most one record per calendar
//! date. A save for an existing date replaces the prior record.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::errors::DomainError;

/// A record keyed by calendar date.
pub trait DatedRecord {
    fn date(&self) -> NaiveDate;
}

/// Replace-or-insert a record by date, keeping the history sorted
/// newest-first. Returns the replaced record, if any.
pub fn upsert_by_date<R: DatedRecord>(history: &mut Vec<R>, record: R) -> Option<R> {
    let previous = history
        .iter()
        .position(|r| r.date() == record.date())
        .map(|idx| history.remove(idx));
    history.push(record);
    history.sort_by(|a, b| b.date().cmp(&a.date()));
    previous
}

/// Achievements attached to a diary entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AchievementList {
    pub predefined: BTreeMap<String, bool>,
    pub custom: Vec<CustomAchievement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomAchievement {
    pub id: i64,
    pub text: String,
}

/// DiaryEntry - at most one per date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiaryEntry {
    pub date: NaiveDate,
    pub plan: String,
    pub achievements: AchievementList,
    pub score: u32,
}

impl DatedRecord for DiaryEntry {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// SleepRecord - one per wake-up date, last-write-wins
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepRecord {
    pub date: NaiveDate,
    /// "HH:mm"
    pub bed_time: String,
    /// "HH:mm"
    pub wake_time: String,
    /// Hours slept
    pub duration: f32,
}

impl SleepRecord {
    /// Build a record from bed and wake clock times, deriving the duration.
    /// A wake time at or before the bed time is read as crossing midnight.
    pub fn from_times(
        date: NaiveDate,
        bed_time: &str,
        wake_time: &str,
    ) -> Result<Self, DomainError> {
        let bed = parse_clock(bed_time)?;
        let wake = parse_clock(wake_time)?;

        let mut minutes = (wake - bed).num_minutes();
        if minutes < 0 {
            minutes += 24 * 60;
        }

        Ok(Self {
            date,
            bed_time: bed_time.to_string(),
            wake_time: wake_time.to_string(),
            duration: minutes as f32 / 60.0,
        })
    }
}

fn parse_clock(value: &str) -> Result<NaiveTime, DomainError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| DomainError::Validation(format!("invalid clock time: {}", value)))
}

impl DatedRecord for SleepRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// MoodRecord - at most one per date, score in -3..=3
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodRecord {
    pub date: NaiveDate,
    pub score: i8,
    pub emoji: String,
}

impl DatedRecord for MoodRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mood(date: &str, score: i8) -> MoodRecord {
        MoodRecord {
            date: date.parse().unwrap(),
            score,
            emoji: "🙂".to_string(),
        }
    }

    #[test]
    fn test_upsert_inserts_new_date() {
        let mut history = vec![mood("2025-06-01", 1)];
        let previous = upsert_by_date(&mut history, mood("2025-06-02", 2));
        assert!(previous.is_none());
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_upsert_replaces_same_date() {
        let mut history = vec![mood("2025-06-01", 1)];
        let previous = upsert_by_date(&mut history, mood("2025-06-01", -2));
        assert_eq!(previous.unwrap().score, 1);
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].score, -2);
    }

    #[test]
    fn test_upsert_keeps_newest_first() {
        let mut history = Vec::new();
        upsert_by_date(&mut history, mood("2025-06-01", 0));
        upsert_by_date(&mut history, mood("2025-06-03", 0));
        upsert_by_date(&mut history, mood("2025-06-02", 0));
        let dates: Vec<String> = history.iter().map(|r| r.date.to_string()).collect();
        assert_eq!(dates, vec!["2025-06-03", "2025-06-02", "2025-06-01"]);
    }

    #[test]
    fn test_sleep_duration_from_times() {
        let record = SleepRecord::from_times("2025-06-01".parse().unwrap(), "22:30", "06:00")
            .unwrap();
        assert_eq!(record.duration, 7.5);
    }

    #[test]
    fn test_sleep_duration_same_day() {
        let record = SleepRecord::from_times("2025-06-01".parse().unwrap(), "01:00", "08:15")
            .unwrap();
        assert_eq!(record.duration, 7.25);
    }

    #[test]
    fn test_sleep_rejects_bad_clock() {
        assert!(SleepRecord::from_times("2025-06-01".parse().unwrap(), "25:00", "07:00").is_err());
    }

    #[test]
    fn test_repeated_saves_never_duplicate() {
        let mut history = Vec::new();
        for score in [-3, 0, 3, 1] {
            upsert_by_date(&mut history, mood("2025-06-01", score));
        }
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].score, 1);
    }
}
