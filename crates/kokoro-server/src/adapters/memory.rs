//! In-memory implementation of StateRepository
//!
//! Backs the application-service tests; behaves like the Postgres adapter
//! minus durability.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

use kokoro::domain::{
    DiaryEntry, DomainError, LoginStreak, Monster, MoodRecord, SleepRecord, StressRecord, ToDoItem,
};
use kokoro::{keys, StateRepository};

/// In-memory document store
#[derive(Default)]
pub struct MemoryStateRepository {
    documents: Mutex<HashMap<String, Value>>,
}

impl MemoryStateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn load_list<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, DomainError> {
        let documents = self.documents.lock().expect("document store poisoned");
        match documents.get(key) {
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|e| DomainError::Repository(e.to_string())),
            None => Ok(Vec::new()),
        }
    }

    fn save_value<T: Serialize>(&self, key: &str, value: &T) -> Result<(), DomainError> {
        let value =
            serde_json::to_value(value).map_err(|e| DomainError::Repository(e.to_string()))?;
        let mut documents = self.documents.lock().expect("document store poisoned");
        documents.insert(key.to_string(), value);
        Ok(())
    }

    fn load_value<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, DomainError> {
        let documents = self.documents.lock().expect("document store poisoned");
        match documents.get(key) {
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| DomainError::Repository(e.to_string())),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl StateRepository for MemoryStateRepository {
    async fn load_stress_history(&self) -> Result<Vec<StressRecord>, DomainError> {
        self.load_list(keys::STRESS_HISTORY)
    }

    async fn save_stress_history(&self, history: &[StressRecord]) -> Result<(), DomainError> {
        self.save_value(keys::STRESS_HISTORY, &history)
    }

    async fn load_sleep_history(&self) -> Result<Vec<SleepRecord>, DomainError> {
        self.load_list(keys::SLEEP_HISTORY)
    }

    async fn save_sleep_history(&self, history: &[SleepRecord]) -> Result<(), DomainError> {
        self.save_value(keys::SLEEP_HISTORY, &history)
    }

    async fn load_diary_history(&self) -> Result<Vec<DiaryEntry>, DomainError> {
        self.load_list(keys::DIARY_HISTORY)
    }

    async fn save_diary_history(&self, history: &[DiaryEntry]) -> Result<(), DomainError> {
        self.save_value(keys::DIARY_HISTORY, &history)
    }

    async fn load_todo_list(&self) -> Result<Vec<ToDoItem>, DomainError> {
        self.load_list(keys::TODO_LIST)
    }

    async fn save_todo_list(&self, items: &[ToDoItem]) -> Result<(), DomainError> {
        self.save_value(keys::TODO_LIST, &items)
    }

    async fn load_mood_history(&self) -> Result<Vec<MoodRecord>, DomainError> {
        self.load_list(keys::MOOD_HISTORY)
    }

    async fn save_mood_history(&self, history: &[MoodRecord]) -> Result<(), DomainError> {
        self.save_value(keys::MOOD_HISTORY, &history)
    }

    async fn load_monster(&self) -> Result<Option<Monster>, DomainError> {
        self.load_value(keys::MONSTER)
    }

    async fn save_monster(&self, monster: &Monster) -> Result<(), DomainError> {
        self.save_value(keys::MONSTER, monster)
    }

    async fn clear_monster(&self) -> Result<(), DomainError> {
        let mut documents = self.documents.lock().expect("document store poisoned");
        documents.remove(keys::MONSTER);
        Ok(())
    }

    async fn load_assistant_name(&self) -> Result<Option<String>, DomainError> {
        self.load_value(keys::AI_NAME)
    }

    async fn save_assistant_name(&self, name: &str) -> Result<(), DomainError> {
        self.save_value(keys::AI_NAME, &name)
    }

    async fn load_login_streak(&self) -> Result<Option<LoginStreak>, DomainError> {
        self.load_value(keys::LOGIN_DATA)
    }

    async fn save_login_streak(&self, streak: &LoginStreak) -> Result<(), DomainError> {
        self.save_value(keys::LOGIN_DATA, streak)
    }
}
