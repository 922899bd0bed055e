//! Assistant name DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Set (or rename) the assistant
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetAssistantRequest {
    pub name: String,
}

/// Current assistant name, if one has been chosen
#[derive(Debug, Serialize, ToSchema)]
pub struct AssistantResponse {
    pub name: Option<String>,
}
