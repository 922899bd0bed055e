//! State Repository Port
//!
//! Typed load/save access to the independent JSON documents that make up
//! the app state. Each document lives under a fixed logical key; loads of
//! a malformed document are treated as empty/absent rather than failing.

use async_trait::async_trait;

use crate::domain::{
    errors::DomainError, DiaryEntry, LoginStreak, Monster, MoodRecord, SleepRecord, StressRecord,
    ToDoItem,
};

/// Fixed logical keys of the persisted documents.
///
/// The names are carried over from the original storage layout so existing
/// exports remain readable.
pub mod keys {
    pub const STRESS_HISTORY: &str = "stressHistory";
    pub const SLEEP_HISTORY: &str = "sleepHistory";
    pub const DIARY_HISTORY: &str = "diaryHistory";
    pub const TODO_LIST: &str = "toDoList";
    pub const MOOD_HISTORY: &str = "moodHistory";
    pub const MONSTER: &str = "monsterState";
    pub const AI_NAME: &str = "aiName";
    pub const LOGIN_DATA: &str = "loginData";
}

/// Repository interface for the persisted app state
#[async_trait]
pub trait StateRepository: Send + Sync {
    async fn load_stress_history(&self) -> Result<Vec<StressRecord>, DomainError>;
    async fn save_stress_history(&self, history: &[StressRecord]) -> Result<(), DomainError>;

    async fn load_sleep_history(&self) -> Result<Vec<SleepRecord>, DomainError>;
    async fn save_sleep_history(&self, history: &[SleepRecord]) -> Result<(), DomainError>;

    async fn load_diary_history(&self) -> Result<Vec<DiaryEntry>, DomainError>;
    async fn save_diary_history(&self, history: &[DiaryEntry]) -> Result<(), DomainError>;

    async fn load_todo_list(&self) -> Result<Vec<ToDoItem>, DomainError>;
    async fn save_todo_list(&self, items: &[ToDoItem]) -> Result<(), DomainError>;

    async fn load_mood_history(&self) -> Result<Vec<MoodRecord>, DomainError>;
    async fn save_mood_history(&self, history: &[MoodRecord]) -> Result<(), DomainError>;

    async fn load_monster(&self) -> Result<Option<Monster>, DomainError>;
    async fn save_monster(&self, monster: &Monster) -> Result<(), DomainError>;
    async fn clear_monster(&self) -> Result<(), DomainError>;

    async fn load_assistant_name(&self) -> Result<Option<String>, DomainError>;
    async fn save_assistant_name(&self, name: &str) -> Result<(), DomainError>;

    async fn load_login_streak(&self) -> Result<Option<LoginStreak>, DomainError>;
    async fn save_login_streak(&self, streak: &LoginStreak) -> Result<(), DomainError>;
}
