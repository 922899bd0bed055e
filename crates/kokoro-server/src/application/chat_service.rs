//! Chat Application Service
//!
//! Holds the single companion chat session and composes "create monster
//! from transcript". The conversation never dead-ends: failures degrade to
//! a canned reply, a placeholder illustration, or the fallback monster.

use std::sync::{Arc, Mutex};

use kokoro::domain::entities::PLACEHOLDER_IMAGE;
use kokoro::{ChatMessage, CompanionProvider, DomainError, Monster};

/// Reply used whenever the companion cannot be reached.
pub const FALLBACK_REPLY: &str =
    "ごめんなさい、今ちょっと接続に問題があるみたいです。少し時間をおいてからもう一度試してくださいね。";

struct ChatSession {
    assistant_name: String,
    messages: Vec<ChatMessage>,
}

/// Application service for the companion conversation
pub struct ChatService {
    companion: Option<Arc<dyn CompanionProvider>>,
    session: Mutex<Option<ChatSession>>,
}

impl ChatService {
    pub fn new(companion: Option<Arc<dyn CompanionProvider>>) -> Self {
        Self {
            companion,
            session: Mutex::new(None),
        }
    }

    /// Open a fresh session, discarding any previous transcript.
    pub fn start(&self, assistant_name: String) {
        let mut session = self.session.lock().expect("chat session poisoned");
        *session = Some(ChatSession {
            assistant_name,
            messages: Vec::new(),
        });
    }

    pub fn is_active(&self) -> bool {
        self.session.lock().expect("chat session poisoned").is_some()
    }

    /// One chat turn. The transcript grows by the user message and the
    /// reply, even when the reply is the canned fallback.
    pub async fn send(&self, text: &str) -> Result<String, DomainError> {
        let (assistant_name, history) = {
            let session = self.session.lock().expect("chat session poisoned");
            let session = session
                .as_ref()
                .ok_or_else(|| DomainError::Conflict("chat session not started".to_string()))?;
            (session.assistant_name.clone(), session.messages.clone())
        };

        let reply = match &self.companion {
            Some(companion) => match companion.reply(&assistant_name, &history, text).await {
                Ok(reply) => reply,
                Err(e) => {
                    tracing::warn!("Chat turn failed, using fallback reply: {}", e);
                    FALLBACK_REPLY.to_string()
                }
            },
            None => {
                tracing::warn!("Companion not configured, using fallback reply");
                FALLBACK_REPLY.to_string()
            }
        };

        let mut session = self.session.lock().expect("chat session poisoned");
        if let Some(session) = session.as_mut() {
            session.messages.push(ChatMessage::user(text));
            session.messages.push(ChatMessage::model(reply.clone()));
        }

        Ok(reply)
    }

    /// Close the session and turn its transcript into a monster.
    ///
    /// Analysis failure yields the fixed fallback monster; illustration
    /// failure yields the placeholder image. The flow always completes.
    pub async fn finish(&self) -> Result<Monster, DomainError> {
        let session = {
            let mut session = self.session.lock().expect("chat session poisoned");
            session
                .take()
                .ok_or_else(|| DomainError::Conflict("chat session not started".to_string()))?
        };

        let companion = match &self.companion {
            Some(companion) => companion,
            None => {
                tracing::warn!("Companion not configured, creating fallback monster");
                return Ok(Monster::fallback());
            }
        };

        let analysis = match companion.analyze(&session.messages).await {
            Ok(analysis) => analysis,
            Err(e) => {
                tracing::warn!("Transcript analysis failed, creating fallback monster: {}", e);
                return Ok(Monster::fallback());
            }
        };

        let image_url = match companion.illustrate(&analysis.monster_description).await {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("Illustration failed, using placeholder: {}", e);
                PLACEHOLDER_IMAGE.to_string()
            }
        };

        Ok(Monster::from_analysis(analysis, image_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use kokoro::StressAnalysis;

    /// Scripted companion double
    struct ScriptedCompanion {
        reply_fails: bool,
        analysis_fails: bool,
        image_fails: bool,
    }

    #[async_trait]
    impl CompanionProvider for ScriptedCompanion {
        async fn reply(
            &self,
            assistant_name: &str,
            history: &[ChatMessage],
            _message: &str,
        ) -> Result<String, DomainError> {
            if self.reply_fails {
                return Err(DomainError::ExternalService("down".to_string()));
            }
            Ok(format!("{}です。{}件目のお返事です。", assistant_name, history.len() + 1))
        }

        async fn analyze(&self, _history: &[ChatMessage]) -> Result<StressAnalysis, DomainError> {
            if self.analysis_fails {
                return Err(DomainError::ExternalService("down".to_string()));
            }
            Ok(StressAnalysis {
                stress_score: 120,
                monster_name: "締め切りデビル".to_string(),
                monster_description: "時計".to_string(),
            })
        }

        async fn illustrate(&self, _description: &str) -> Result<String, DomainError> {
            if self.image_fails {
                return Err(DomainError::ExternalService("down".to_string()));
            }
            Ok("data:image/png;base64,xyz".to_string())
        }
    }

    fn service(reply_fails: bool, analysis_fails: bool, image_fails: bool) -> ChatService {
        ChatService::new(Some(Arc::new(ScriptedCompanion {
            reply_fails,
            analysis_fails,
            image_fails,
        })))
    }

    #[tokio::test]
    async fn test_send_requires_session() {
        let service = service(false, false, false);
        let err = service.send("こんにちは").await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_failed_turn_returns_canned_reply() {
        let service = service(true, false, false);
        service.start("モチ".to_string());
        let reply = service.send("つらい").await.unwrap();
        assert_eq!(reply, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_finish_builds_monster_with_full_hp() {
        let service = service(false, false, false);
        service.start("モチ".to_string());
        service.send("課題が終わらない").await.unwrap();

        let monster = service.finish().await.unwrap();
        assert_eq!(monster.score, 120);
        assert_eq!(monster.current_hp, 120);
        assert!(!service.is_active());
    }

    #[tokio::test]
    async fn test_analysis_failure_yields_fallback_monster() {
        let service = service(false, true, false);
        service.start("モチ".to_string());

        let monster = service.finish().await.unwrap();
        assert_eq!(monster.score, 50);
        assert_eq!(monster.image_url, PLACEHOLDER_IMAGE);
    }

    #[tokio::test]
    async fn test_image_failure_uses_placeholder() {
        let service = service(false, false, true);
        service.start("モチ".to_string());

        let monster = service.finish().await.unwrap();
        assert_eq!(monster.score, 120);
        assert_eq!(monster.image_url, PLACEHOLDER_IMAGE);
    }

    #[tokio::test]
    async fn test_missing_companion_degrades_gracefully() {
        let service = ChatService::new(None);
        service.start("モチ".to_string());

        assert_eq!(service.send("ねえ").await.unwrap(), FALLBACK_REPLY);
        let monster = service.finish().await.unwrap();
        assert_eq!(monster.score, 50);
    }

    /// Full journey: name the assistant, chat, turn the transcript into a
    /// monster, then attack with a bank of 50 against 120 HP.
    #[tokio::test]
    async fn test_chat_to_attack_round_trip() {
        use crate::adapters::MemoryStateRepository;
        use crate::application::{BattleService, PowerVault};
        use kokoro::StateRepository;

        let repo = Arc::new(MemoryStateRepository::new());
        let vault = Arc::new(PowerVault::new());
        let battle = BattleService::new(Arc::clone(&repo), Arc::clone(&vault));
        let chat = service(false, false, false);

        repo.save_assistant_name("Mochi").await.unwrap();
        let name = repo.load_assistant_name().await.unwrap().unwrap();
        chat.start(name);
        chat.send("最近ずっと眠れない").await.unwrap();

        let monster = chat.finish().await.unwrap();
        let monster = battle.adopt(monster).await.unwrap();
        assert_eq!(monster.current_hp, 120);

        vault.credit(50);
        let (updated, outcome, bank) = battle.attack().await.unwrap();
        assert_eq!(updated.current_hp, 70);
        assert_eq!(outcome.power, 50);
        assert_eq!(bank, 0);
    }
}
