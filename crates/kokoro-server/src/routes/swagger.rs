//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    // Diary models
    AchievementsDto,
    // Assistant models
    AssistantResponse,
    // Monster models
    AttackResponse,
    // Chat models
    ChatTurnRequest,
    ChatTurnResponse,
    // ToDo models
    CreateToDoRequest,
    CustomAchievementDto,
    DiaryEntryResponse,
    DismissResponse,
    EditToDoRequest,
    LoginResponse,
    MonsterResponse,
    // Mood models
    MoodRecordResponse,
    PowerResponse,
    ReorderToDoRequest,
    SaveDiaryRequest,
    SaveDiaryResponse,
    SaveMoodRequest,
    SaveMoodResponse,
    // Sleep models
    SaveSleepRequest,
    SaveSleepResponse,
    SetAssistantRequest,
    SleepRecordResponse,
    StartChatResponse,
    StressRecordResponse,
    ToDoItemResponse,
    ToggleToDoResponse,
    UndoMoodResponse,
    WeatherErrorBody,
    // Weather models
    WeatherResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::assistant::get_assistant,
        crate::routes::assistant::set_assistant,
        crate::routes::chat::start_chat,
        crate::routes::chat::send_message,
        crate::routes::chat::finish_chat,
        crate::routes::monster::get_monster,
        crate::routes::monster::attack_monster,
        crate::routes::monster::slay_monster,
        crate::routes::monster::dismiss_monster,
        crate::routes::monster::get_stress_history,
        crate::routes::login::login,
        crate::routes::login::get_power,
        crate::routes::diary::list_diary,
        crate::routes::diary::save_diary,
        crate::routes::diary::delete_diary,
        crate::routes::sleep::list_sleep,
        crate::routes::sleep::save_sleep,
        crate::routes::mood::list_mood,
        crate::routes::mood::save_mood,
        crate::routes::mood::undo_mood,
        crate::routes::todos::list_todos,
        crate::routes::todos::create_todo,
        crate::routes::todos::edit_todo,
        crate::routes::todos::delete_todo,
        crate::routes::todos::toggle_todo,
        crate::routes::todos::favorite_todo,
        crate::routes::todos::reorder_todos,
        crate::routes::todos::sort_todos,
        crate::routes::weather::current_weather,
    ),
    components(schemas(
        SetAssistantRequest,
        AssistantResponse,
        StartChatResponse,
        ChatTurnRequest,
        ChatTurnResponse,
        MonsterResponse,
        AttackResponse,
        DismissResponse,
        PowerResponse,
        LoginResponse,
        StressRecordResponse,
        AchievementsDto,
        CustomAchievementDto,
        SaveDiaryRequest,
        SaveDiaryResponse,
        DiaryEntryResponse,
        SaveSleepRequest,
        SaveSleepResponse,
        SleepRecordResponse,
        SaveMoodRequest,
        SaveMoodResponse,
        MoodRecordResponse,
        UndoMoodResponse,
        CreateToDoRequest,
        EditToDoRequest,
        ReorderToDoRequest,
        ToDoItemResponse,
        ToggleToDoResponse,
        WeatherResponse,
        WeatherErrorBody,
    )),
    tags(
        (name = "Assistant", description = "Companion naming"),
        (name = "Chat", description = "Companion conversation and monster creation"),
        (name = "Monster", description = "Stress monster lifecycle"),
        (name = "Login", description = "Login bonus and power bank"),
        (name = "Diary", description = "Daily diary"),
        (name = "Sleep", description = "Sleep log"),
        (name = "Mood", description = "Mood tracking"),
        (name = "ToDo", description = "To-do list"),
        (name = "Weather", description = "Weather proxy"),
    ),
    info(
        title = "Kokoro API",
        description = "Self-care companion: chat your stress into a monster, then beat it",
    )
)]
pub struct ApiDoc;
