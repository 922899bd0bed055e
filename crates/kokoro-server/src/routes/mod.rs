//! Kokoro API Routes
//!
//! - /kokoro/assistant - assistant naming
//! - /kokoro/chat - companion chat session (心の対話)
//! - /kokoro/monster - stress monster lifecycle and attacks
//! - /kokoro/login - login bonus / power bank
//! - /kokoro/diary, /kokoro/sleep, /kokoro/mood - self-care records
//! - /kokoro/todos - to-do list
//! - /api/weather - weather proxy (public)

pub mod assistant;
pub mod chat;
pub mod diary;
pub mod login;
pub mod monster;
pub mod mood;
pub mod sleep;
pub mod swagger;
pub mod todos;
pub mod weather;

use axum::http::StatusCode;
use kokoro::DomainError;

/// Map a domain error to the HTTP error tuple used by the API routes.
pub(crate) fn error_response(e: DomainError) -> (StatusCode, String) {
    let status = match &e {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::Repository(_) | DomainError::ExternalService(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, e.to_string())
}
