//! Diary, sleep and mood DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use kokoro::{AchievementList, CustomAchievement, DiaryEntry, MoodRecord, SleepRecord};

// ============================================
// Diary
// ============================================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CustomAchievementDto {
    pub id: i64,
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AchievementsDto {
    #[serde(default)]
    pub predefined: BTreeMap<String, bool>,
    #[serde(default)]
    pub custom: Vec<CustomAchievementDto>,
}

impl From<AchievementsDto> for AchievementList {
    fn from(dto: AchievementsDto) -> Self {
        Self {
            predefined: dto.predefined,
            custom: dto
                .custom
                .into_iter()
                .map(|c| CustomAchievement {
                    id: c.id,
                    text: c.text,
                })
                .collect(),
        }
    }
}

impl From<AchievementList> for AchievementsDto {
    fn from(list: AchievementList) -> Self {
        Self {
            predefined: list.predefined,
            custom: list
                .custom
                .into_iter()
                .map(|c| CustomAchievementDto {
                    id: c.id,
                    text: c.text,
                })
                .collect(),
        }
    }
}

/// Upsert a diary entry
#[derive(Debug, Deserialize, ToSchema)]
pub struct SaveDiaryRequest {
    pub date: NaiveDate,
    #[serde(default)]
    pub plan: String,
    #[serde(default)]
    pub achievements: AchievementsDto,
    pub score: u32,
}

impl From<SaveDiaryRequest> for DiaryEntry {
    fn from(request: SaveDiaryRequest) -> Self {
        Self {
            date: request.date,
            plan: request.plan,
            achievements: request.achievements.into(),
            score: request.score,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DiaryEntryResponse {
    pub date: NaiveDate,
    pub plan: String,
    pub achievements: AchievementsDto,
    pub score: u32,
}

impl From<DiaryEntry> for DiaryEntryResponse {
    fn from(entry: DiaryEntry) -> Self {
        Self {
            date: entry.date,
            plan: entry.plan,
            achievements: entry.achievements.into(),
            score: entry.score,
        }
    }
}

/// Diary saved, with the power it earned
#[derive(Debug, Serialize, ToSchema)]
pub struct SaveDiaryResponse {
    pub entry: DiaryEntryResponse,
    pub credited: u32,
    pub power_bank: u32,
}

// ============================================
// Sleep
// ============================================

/// Log a night of sleep; the duration is derived from the clock times
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveSleepRequest {
    /// Wake-up day
    pub date: NaiveDate,
    /// "HH:mm"
    pub bed_time: String,
    /// "HH:mm"
    pub wake_time: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SleepRecordResponse {
    pub date: NaiveDate,
    pub bed_time: String,
    pub wake_time: String,
    pub duration: f32,
}

impl From<SleepRecord> for SleepRecordResponse {
    fn from(record: SleepRecord) -> Self {
        Self {
            date: record.date,
            bed_time: record.bed_time,
            wake_time: record.wake_time,
            duration: record.duration,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SaveSleepResponse {
    pub record: SleepRecordResponse,
    pub credited: u32,
    pub power_bank: u32,
}

// ============================================
// Mood
// ============================================

/// Record today's mood
#[derive(Debug, Deserialize, ToSchema)]
pub struct SaveMoodRequest {
    pub date: NaiveDate,
    /// -3..=3
    pub score: i8,
    pub emoji: String,
}

impl From<SaveMoodRequest> for MoodRecord {
    fn from(request: SaveMoodRequest) -> Self {
        Self {
            date: request.date,
            score: request.score,
            emoji: request.emoji,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MoodRecordResponse {
    pub date: NaiveDate,
    pub score: i8,
    pub emoji: String,
}

impl From<MoodRecord> for MoodRecordResponse {
    fn from(record: MoodRecord) -> Self {
        Self {
            date: record.date,
            score: record.score,
            emoji: record.emoji,
        }
    }
}

/// Mood saved; the save can be undone while the window is open
#[derive(Debug, Serialize, ToSchema)]
pub struct SaveMoodResponse {
    pub record: MoodRecordResponse,
    pub undo_window_ms: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UndoMoodResponse {
    /// False when the undo window had already closed
    pub restored: bool,
}
