//! Domain Entities
//!
//! Core domain models persisted as independent JSON documents.

pub mod journal;
pub mod message;
pub mod monster;
pub mod streak;
pub mod todo;

pub use journal::{
    upsert_by_date, AchievementList, CustomAchievement, DatedRecord, DiaryEntry, MoodRecord,
    SleepRecord,
};
pub use message::{ChatMessage, MessageRole};
pub use monster::{Monster, StressAnalysis, StressRecord, PLACEHOLDER_IMAGE};
pub use streak::{LoginBonus, LoginStreak};
pub use todo::{sort_by_schedule, ToDoItem};
