//! Companion Provider Port
//!
//! Abstract interface for the generative companion: chat turns, transcript
//! analysis, and monster illustration. Implementations live in
//! infrastructure crates and may be swapped between providers.

use async_trait::async_trait;

use crate::domain::errors::DomainError;
use crate::domain::{ChatMessage, StressAnalysis};

/// Generative companion interface
///
/// Each operation is a single request/response with no retry policy;
/// graceful degradation on failure is the caller's responsibility.
#[async_trait]
pub trait CompanionProvider: Send + Sync {
    /// One chat turn: reply to `message` given the prior transcript.
    /// The system instruction is personalized with `assistant_name`.
    async fn reply(
        &self,
        assistant_name: &str,
        history: &[ChatMessage],
        message: &str,
    ) -> Result<String, DomainError>;

    /// Analyze the full transcript into a stress score and monster
    /// name/description, via a constrained output schema.
    async fn analyze(&self, history: &[ChatMessage]) -> Result<StressAnalysis, DomainError>;

    /// Generate a monster illustration from its description. Returns an
    /// image reference (data URL).
    async fn illustrate(&self, description: &str) -> Result<String, DomainError>;
}
