//! Request/Response DTOs
//!
//! Wire types for the HTTP API, kept separate from the domain entities so
//! the OpenAPI derives stay out of the domain crate.

pub mod assistant;
pub mod chat;
pub mod journal;
pub mod monster;
pub mod todo;
pub mod weather;

pub use assistant::{AssistantResponse, SetAssistantRequest};
pub use chat::{ChatTurnRequest, ChatTurnResponse, StartChatResponse};
pub use journal::{
    AchievementsDto, CustomAchievementDto, DiaryEntryResponse, MoodRecordResponse,
    SaveDiaryRequest, SaveDiaryResponse, SaveMoodRequest, SaveMoodResponse, SaveSleepRequest,
    SaveSleepResponse, SleepRecordResponse, UndoMoodResponse,
};
pub use monster::{
    AttackResponse, DismissResponse, LoginResponse, MonsterResponse, PowerResponse,
    StressRecordResponse,
};
pub use todo::{
    CreateToDoRequest, EditToDoRequest, ReorderToDoRequest, ToDoItemResponse, ToggleToDoResponse,
};
pub use weather::{WeatherErrorBody, WeatherParams, WeatherResponse};
