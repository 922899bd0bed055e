//! Chat session DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Session opened
#[derive(Debug, Serialize, ToSchema)]
pub struct StartChatResponse {
    pub assistant_name: String,
}

/// One user message
#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatTurnRequest {
    pub message: String,
}

/// The companion's reply
#[derive(Debug, Serialize, ToSchema)]
pub struct ChatTurnResponse {
    pub reply: String,
}
