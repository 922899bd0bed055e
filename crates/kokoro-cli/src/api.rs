//! Kokoro API Client

use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// API Client for the Kokoro server
pub struct KokoroClient {
    client: Client,
    base_url: String,
    api_key: String,
}

// ============================================
// API Response Types
// ============================================

#[derive(Debug, Deserialize)]
pub struct AssistantResponse {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatTurnResponse {
    pub reply: String,
}

#[derive(Debug, Deserialize)]
pub struct MonsterResponse {
    pub name: String,
    pub description: String,
    pub score: u32,
    pub current_hp: u32,
    pub image_url: String,
}

#[derive(Debug, Deserialize)]
pub struct AttackResponse {
    pub power: u32,
    pub remaining_hp: u32,
    pub defeated: bool,
    pub power_bank: u32,
}

#[derive(Debug, Deserialize)]
pub struct DismissResponse {
    pub cleared: bool,
}

#[derive(Debug, Deserialize)]
pub struct PowerResponse {
    pub power: u32,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub awarded: bool,
    pub days: u32,
    pub points: u32,
    pub power_bank: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToDoItemResponse {
    pub id: i64,
    pub title: String,
    pub due_date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub memo: String,
    pub is_completed: bool,
    pub is_favorite: bool,
}

#[derive(Debug, Deserialize)]
pub struct ToggleToDoResponse {
    pub item: ToDoItemResponse,
    pub power_bank: u32,
}

#[derive(Debug, Deserialize)]
pub struct SaveDiaryResponse {
    pub credited: u32,
    pub power_bank: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepRecordResponse {
    pub duration: f32,
}

#[derive(Debug, Deserialize)]
pub struct SaveSleepResponse {
    pub record: SleepRecordResponse,
    pub credited: u32,
    pub power_bank: u32,
}

#[derive(Debug, Deserialize)]
pub struct SaveMoodResponse {
    pub undo_window_ms: u64,
}

#[derive(Debug, Deserialize)]
pub struct UndoMoodResponse {
    pub restored: bool,
}

#[derive(Debug, Deserialize)]
pub struct WeatherResponse {
    pub condition: String,
    pub temp_c: f64,
    pub message: String,
    pub place: Option<String>,
    pub updated_at: DateTime<Utc>,
}

// ============================================
// API Request Types
// ============================================

#[derive(Serialize)]
struct SetAssistantRequest<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct ChatTurnRequest<'a> {
    message: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateToDoRequest<'a> {
    title: &'a str,
    due_date: Option<NaiveDate>,
    start_time: Option<&'a str>,
    end_time: Option<&'a str>,
    memo: &'a str,
}

#[derive(Serialize)]
struct SaveDiaryRequest<'a> {
    date: NaiveDate,
    plan: &'a str,
    score: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SaveSleepRequest<'a> {
    date: NaiveDate,
    bed_time: &'a str,
    wake_time: &'a str,
}

#[derive(Serialize)]
struct SaveMoodRequest<'a> {
    date: NaiveDate,
    score: i8,
    emoji: &'a str,
}

impl KokoroClient {
    /// Create a new API client
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .client
            .request(method, &url)
            .header("Authorization", format!("Bearer {}", self.api_key));

        if let Some(body) = body {
            request = request.json(&body);
        }

        let resp = request
            .send()
            .await
            .context("Failed to connect to Kokoro API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        resp.json().await.context("Failed to parse response")
    }

    // ============================================
    // Assistant / session
    // ============================================

    pub async fn get_assistant(&self) -> Result<AssistantResponse> {
        self.request(Method::GET, "/kokoro/assistant", None).await
    }

    pub async fn set_assistant(&self, name: &str) -> Result<AssistantResponse> {
        let body = serde_json::to_value(SetAssistantRequest { name })?;
        self.request(Method::PUT, "/kokoro/assistant", Some(body))
            .await
    }

    pub async fn login(&self) -> Result<LoginResponse> {
        self.request(Method::POST, "/kokoro/login", None).await
    }

    pub async fn power(&self) -> Result<PowerResponse> {
        self.request(Method::GET, "/kokoro/power", None).await
    }

    // ============================================
    // Chat
    // ============================================

    pub async fn start_chat(&self) -> Result<()> {
        let _: serde_json::Value = self.request(Method::POST, "/kokoro/chat/start", None).await?;
        Ok(())
    }

    pub async fn send_message(&self, message: &str) -> Result<ChatTurnResponse> {
        let body = serde_json::to_value(ChatTurnRequest { message })?;
        self.request(Method::POST, "/kokoro/chat/message", Some(body))
            .await
    }

    pub async fn finish_chat(&self) -> Result<MonsterResponse> {
        self.request(Method::POST, "/kokoro/chat/finish", None).await
    }

    // ============================================
    // Monster
    // ============================================

    pub async fn get_monster(&self) -> Result<Option<MonsterResponse>> {
        let url = format!("{}/kokoro/monster", self.base_url);
        let resp = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .context("Failed to connect to Kokoro API")?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        Ok(Some(resp.json().await.context("Failed to parse response")?))
    }

    pub async fn attack(&self) -> Result<AttackResponse> {
        self.request(Method::POST, "/kokoro/monster/attack", None)
            .await
    }

    pub async fn dismiss_monster(&self) -> Result<DismissResponse> {
        self.request(Method::DELETE, "/kokoro/monster", None).await
    }

    // ============================================
    // Records
    // ============================================

    pub async fn save_diary(&self, date: NaiveDate, plan: &str, score: u32) -> Result<SaveDiaryResponse> {
        let body = serde_json::to_value(SaveDiaryRequest { date, plan, score })?;
        self.request(Method::PUT, "/kokoro/diary", Some(body)).await
    }

    pub async fn save_sleep(
        &self,
        date: NaiveDate,
        bed_time: &str,
        wake_time: &str,
    ) -> Result<SaveSleepResponse> {
        let body = serde_json::to_value(SaveSleepRequest {
            date,
            bed_time,
            wake_time,
        })?;
        self.request(Method::PUT, "/kokoro/sleep", Some(body)).await
    }

    pub async fn save_mood(&self, date: NaiveDate, score: i8, emoji: &str) -> Result<SaveMoodResponse> {
        let body = serde_json::to_value(SaveMoodRequest { date, score, emoji })?;
        self.request(Method::PUT, "/kokoro/mood", Some(body)).await
    }

    pub async fn undo_mood(&self) -> Result<UndoMoodResponse> {
        self.request(Method::POST, "/kokoro/mood/undo", None).await
    }

    // ============================================
    // To-dos
    // ============================================

    pub async fn list_todos(&self) -> Result<Vec<ToDoItemResponse>> {
        self.request(Method::GET, "/kokoro/todos", None).await
    }

    pub async fn add_todo(
        &self,
        title: &str,
        due_date: Option<NaiveDate>,
        start_time: Option<&str>,
        memo: &str,
    ) -> Result<ToDoItemResponse> {
        let body = serde_json::to_value(CreateToDoRequest {
            title,
            due_date,
            start_time,
            end_time: None,
            memo,
        })?;
        self.request(Method::POST, "/kokoro/todos", Some(body)).await
    }

    pub async fn toggle_todo(&self, id: i64) -> Result<ToggleToDoResponse> {
        self.request(Method::POST, &format!("/kokoro/todos/{}/toggle", id), None)
            .await
    }

    pub async fn favorite_todo(&self, id: i64) -> Result<ToDoItemResponse> {
        self.request(Method::POST, &format!("/kokoro/todos/{}/favorite", id), None)
            .await
    }

    pub async fn delete_todo(&self, id: i64) -> Result<()> {
        let _: serde_json::Value = self
            .request(Method::DELETE, &format!("/kokoro/todos/{}", id), None)
            .await?;
        Ok(())
    }

    pub async fn sort_todos(&self) -> Result<Vec<ToDoItemResponse>> {
        self.request(Method::POST, "/kokoro/todos/sort", None).await
    }

    // ============================================
    // Weather
    // ============================================

    pub async fn weather(
        &self,
        lat: Option<f64>,
        lon: Option<f64>,
        zip: Option<&str>,
    ) -> Result<WeatherResponse> {
        let url = format!("{}/api/weather", self.base_url);
        let mut request = self.client.get(&url);

        if let (Some(lat), Some(lon)) = (lat, lon) {
            request = request.query(&[("lat", lat.to_string()), ("lon", lon.to_string())]);
        } else if let Some(zip) = zip {
            request = request.query(&[("zip", zip)]);
        }

        let resp = request.send().await.context("Failed to connect to Kokoro API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        resp.json().await.context("Failed to parse response")
    }
}
