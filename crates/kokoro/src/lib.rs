//! Kokoro Domain Library
//!
//! Core domain types and interfaces for the Kokoro self-care companion.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Monster, DiaryEntry, ToDoItem, ...)
//!   - `value_objects/`: Immutable value types (WeatherCondition, Screen)
//!   - `rewards`: The power-bank reward engine
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Persisted-document access interfaces
//!   - `services/`: External service interfaces (companion AI, weather)
//!
//! # Usage
//!
//! ```rust,ignore
//! use kokoro::domain::{Monster, PowerBank, ToDoItem};
//! use kokoro::ports::{StateRepository, CompanionProvider};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    sort_by_schedule, AchievementList, AttackOutcome, ChatMessage, CustomAchievement, DiaryEntry,
    DomainError, LoginBonus, LoginStreak, MessageRole, Monster, MoodRecord, PowerBank, Screen,
    SleepRecord, StressAnalysis, StressRecord, ToDoItem, WeatherCondition,
};
pub use ports::{
    keys, CompanionProvider, StateRepository, WeatherObservation, WeatherProvider, WeatherQuery,
};
