//! PostgreSQL implementation of StateRepository
//!
//! All documents live in a single `documents` table keyed by logical name,
//! one JSONB value per key. A stored document that no longer deserializes
//! is logged and treated as empty/absent; reads never fail the caller over
//! corrupt content.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use sqlx::PgPool;

use kokoro::domain::{
    DiaryEntry, DomainError, LoginStreak, Monster, MoodRecord, SleepRecord, StressRecord, ToDoItem,
};
use kokoro::{keys, StateRepository};

use crate::adapters::migrate;

/// PostgreSQL implementation of StateRepository
pub struct PgStateRepository {
    pool: PgPool,
}

impl PgStateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn read_document(&self, key: &str) -> Result<Option<Value>, DomainError> {
        sqlx::query_scalar::<_, Value>("SELECT value FROM documents WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))
    }

    async fn write_document(&self, key: &str, value: Value) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO documents (key, value)
            VALUES ($1, $2)
            ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(())
    }

    async fn delete_document(&self, key: &str) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM documents WHERE key = $1")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(())
    }

    async fn load_list<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, DomainError> {
        let value = match self.read_document(key).await? {
            Some(value) => value,
            None => return Ok(Vec::new()),
        };

        Ok(decode_or_empty(key, value))
    }

    async fn save_list<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), DomainError> {
        let value =
            serde_json::to_value(items).map_err(|e| DomainError::Repository(e.to_string()))?;
        self.write_document(key, value).await
    }
}

/// Decode a stored list, falling back to empty on corruption.
fn decode_or_empty<T: DeserializeOwned>(key: &str, value: Value) -> Vec<T> {
    match serde_json::from_value(value) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!("Could not parse stored document '{}': {}", key, e);
            Vec::new()
        }
    }
}

#[async_trait]
impl StateRepository for PgStateRepository {
    async fn load_stress_history(&self) -> Result<Vec<StressRecord>, DomainError> {
        self.load_list(keys::STRESS_HISTORY).await
    }

    async fn save_stress_history(&self, history: &[StressRecord]) -> Result<(), DomainError> {
        self.save_list(keys::STRESS_HISTORY, history).await
    }

    async fn load_sleep_history(&self) -> Result<Vec<SleepRecord>, DomainError> {
        self.load_list(keys::SLEEP_HISTORY).await
    }

    async fn save_sleep_history(&self, history: &[SleepRecord]) -> Result<(), DomainError> {
        self.save_list(keys::SLEEP_HISTORY, history).await
    }

    async fn load_diary_history(&self) -> Result<Vec<DiaryEntry>, DomainError> {
        self.load_list(keys::DIARY_HISTORY).await
    }

    async fn save_diary_history(&self, history: &[DiaryEntry]) -> Result<(), DomainError> {
        self.save_list(keys::DIARY_HISTORY, history).await
    }

    async fn load_todo_list(&self) -> Result<Vec<ToDoItem>, DomainError> {
        let value = match self.read_document(keys::TODO_LIST).await? {
            Some(value) => migrate::upgrade_todo_list(value),
            None => return Ok(Vec::new()),
        };

        Ok(decode_or_empty(keys::TODO_LIST, value))
    }

    async fn save_todo_list(&self, items: &[ToDoItem]) -> Result<(), DomainError> {
        self.save_list(keys::TODO_LIST, items).await
    }

    async fn load_mood_history(&self) -> Result<Vec<MoodRecord>, DomainError> {
        self.load_list(keys::MOOD_HISTORY).await
    }

    async fn save_mood_history(&self, history: &[MoodRecord]) -> Result<(), DomainError> {
        self.save_list(keys::MOOD_HISTORY, history).await
    }

    async fn load_monster(&self) -> Result<Option<Monster>, DomainError> {
        let value = match self.read_document(keys::MONSTER).await? {
            Some(value) => value,
            None => return Ok(None),
        };

        match serde_json::from_value(value) {
            Ok(monster) => Ok(Some(monster)),
            Err(e) => {
                tracing::warn!("Could not parse stored monster: {}", e);
                Ok(None)
            }
        }
    }

    async fn save_monster(&self, monster: &Monster) -> Result<(), DomainError> {
        let value =
            serde_json::to_value(monster).map_err(|e| DomainError::Repository(e.to_string()))?;
        self.write_document(keys::MONSTER, value).await
    }

    async fn clear_monster(&self) -> Result<(), DomainError> {
        self.delete_document(keys::MONSTER).await
    }

    async fn load_assistant_name(&self) -> Result<Option<String>, DomainError> {
        let value = match self.read_document(keys::AI_NAME).await? {
            Some(value) => value,
            None => return Ok(None),
        };

        match value {
            Value::String(name) => Ok(Some(name)),
            other => {
                tracing::warn!("Could not parse stored assistant name: {}", other);
                Ok(None)
            }
        }
    }

    async fn save_assistant_name(&self, name: &str) -> Result<(), DomainError> {
        self.write_document(keys::AI_NAME, Value::String(name.to_string()))
            .await
    }

    async fn load_login_streak(&self) -> Result<Option<LoginStreak>, DomainError> {
        let value = match self.read_document(keys::LOGIN_DATA).await? {
            Some(value) => value,
            None => return Ok(None),
        };

        match serde_json::from_value(value) {
            Ok(streak) => Ok(Some(streak)),
            Err(e) => {
                tracing::warn!("Could not parse stored login data: {}", e);
                Ok(None)
            }
        }
    }

    async fn save_login_streak(&self, streak: &LoginStreak) -> Result<(), DomainError> {
        let value =
            serde_json::to_value(streak).map_err(|e| DomainError::Repository(e.to_string()))?;
        self.write_document(keys::LOGIN_DATA, value).await
    }
}
