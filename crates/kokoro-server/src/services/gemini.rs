//! Gemini-backed companion
//!
//! Implements the CompanionProvider port over the Gemini REST API: chat
//! turns with a personalized system instruction, schema-constrained
//! transcript analysis, and mascot-style image generation.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::{json, Value};

use kokoro::{ChatMessage, CompanionProvider, DomainError, StressAnalysis};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const CHAT_MODEL: &str = "gemini-2.5-flash";
const IMAGE_MODEL: &str = "gemini-2.5-flash-image";

const SYSTEM_INSTRUCTION_CHAT: &str = r#"あなたは、日本の優しくて共感力の高いセルフケアアシスタント「{AI_NAME}」です。
あなたの目的は、ユーザーの悩みを聞き、慰め、内省を助ける優しい質問をすることです。
ユーザーが感情を表現できる、安全で協力的な空間を作ってください。
あなたの性格は、穏やかで親切、そして少しフレンドリーでふわふわした生き物のような感じです。

基本的には優しい伴走者ですが、ユーザーが勉強の計画など具体的な悩みについて助けを求めている場合は、問題解決の手助けもできます。
ただし、いきなり解決策を提示するのではなく、まず「もしよければ、解決のための具体的な提案をいくつか考えてみましょうか？」のように、ユーザーに提案が必要かどうかを優しく尋ねてください。
提案が必要か尋ねる際は、必ず文末に特殊なタグ [PROPOSAL_CHECK] を付けてください。例：「もしよければ、一緒に計画を考えてみましょうか？[PROPOSAL_CHECK]」

返答は簡潔で、協力的で、通常1〜3文にしてください。
シンプルで分かりやすい言葉遣いをしてください。
医療的なアドバイスはしないでください。ユーザーが深刻な苦痛を感じているように見える場合は、信頼できる人や専門家に相談することを優しく提案してください。"#;

const SYSTEM_INSTRUCTION_ANALYSIS: &str = r#"あなたはユーザーのチャット履歴を分析する専門家です。
ユーザーの悩みやネガティブな感情を抽出し、それを具現化したユニークな「ストレスモンスター」として表現してください。
出力は必ず指定されたJSON形式に従ってください。

分析のステップ：
1.  **ストレススコア**: ユーザーのストレス度合いを1から200の数値で評価します。数値が高いほどストレスが深刻であることを示します。軽度な悩みであれば50前後、深刻な悩みであれば150以上を目安にしてください。上限は200です。
2.  **モンスター名**: ユーザーの悩みを擬人化した、ユニークで記憶に残りやすいキャラクターの名前を考えてください。少しユーモラスで、倒したくなるような名前が良いでしょう。
3.  **モンスターの説明**: モンスターの見た目、性格、背景を具体的に記述します。この説明は画像生成AIのプロンプトとして使用されるため、創造的で視覚的な表現を豊かに含めてください。"#;

/// Gemini implementation of the companion port
#[derive(Clone)]
pub struct GeminiCompanion {
    client: Client,
    api_key: String,
    chat_model: String,
    image_model: String,
}

impl GeminiCompanion {
    /// Creates a new companion using the provided API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            chat_model: CHAT_MODEL.to_string(),
            image_model: IMAGE_MODEL.to_string(),
        }
    }

    /// Overrides the chat model name if needed.
    pub fn with_chat_model(mut self, model: impl Into<String>) -> Self {
        self.chat_model = model.into();
        self
    }

    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<Value, DomainError> {
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            BASE_URL,
            model = model,
            api_key = self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status, body));
        }

        response
            .json()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Parse error: {}", e)))
    }
}

#[async_trait]
impl CompanionProvider for GeminiCompanion {
    async fn reply(
        &self,
        assistant_name: &str,
        history: &[ChatMessage],
        message: &str,
    ) -> Result<String, DomainError> {
        let mut contents: Vec<Content> = history.iter().map(Content::from_message).collect();
        contents.push(Content::user(message));

        let request = GenerateContentRequest {
            contents,
            system_instruction: Some(Content::system(
                &SYSTEM_INSTRUCTION_CHAT.replace("{AI_NAME}", assistant_name),
            )),
            generation_config: None,
        };

        let payload = self.generate(&self.chat_model, &request).await?;
        extract_text(&payload)
            .ok_or_else(|| DomainError::ExternalService("Received an empty response".to_string()))
    }

    async fn analyze(&self, history: &[ChatMessage]) -> Result<StressAnalysis, DomainError> {
        let transcript: Vec<String> = history
            .iter()
            .map(|m| format!("{}: {}", m.role, m.text))
            .collect();
        let prompt = format!(
            "以下のチャット履歴を分析してください：\n\n{}",
            transcript.join("\n")
        );

        let request = GenerateContentRequest {
            contents: vec![Content::user(&prompt)],
            system_instruction: Some(Content::system(SYSTEM_INSTRUCTION_ANALYSIS)),
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: analysis_schema(),
            }),
        };

        let payload = self.generate(&self.chat_model, &request).await?;
        let text = extract_text(&payload)
            .ok_or_else(|| DomainError::ExternalService("Received an empty response".to_string()))?;

        serde_json::from_str(text.trim())
            .map_err(|e| DomainError::ExternalService(format!("Parse error: {}", e)))
    }

    async fn illustrate(&self, description: &str) -> Result<String, DomainError> {
        // ゆるキャラ風、2Dフラット、人間禁止
        let prompt = format!(
            "A flat 2D vector illustration of a cute 'Yuru-chara' style mascot monster.\n\
             Description: {}\n\
             Style: Flat design, thick bold outlines, simple cute shapes, sticker art style, \
             vibrant pastel colors, white background.\n\
             IMPORTANT: This is a non-human creature. NO humans, NO anime girls, NO anime boys. \
             Just a cute weird creature.",
            description
        );

        // The image model supports neither responseMimeType nor responseSchema
        let request = GenerateContentRequest {
            contents: vec![Content::user(&prompt)],
            system_instruction: None,
            generation_config: None,
        };

        let payload = self.generate(&self.image_model, &request).await?;
        extract_inline_image(&payload)
            .ok_or_else(|| DomainError::ExternalService("No image generated".to_string()))
    }
}

// ============================================
// Request Types
// ============================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

impl Content {
    fn user(text: &str) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }

    fn system(text: &str) -> Self {
        Self {
            role: None,
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }

    fn from_message(message: &ChatMessage) -> Self {
        Self {
            role: Some(message.role.to_string()),
            parts: vec![Part {
                text: message.text.clone(),
            }],
        }
    }
}

/// Constrained output schema for the transcript analysis.
fn analysis_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "stressScore": { "type": "INTEGER" },
            "monsterName": { "type": "STRING" },
            "monsterDescription": { "type": "STRING" },
        },
        "required": ["stressScore", "monsterName", "monsterDescription"],
    })
}

// ============================================
// Helper Functions
// ============================================

fn extract_text(root: &Value) -> Option<String> {
    let candidates = root.get("candidates")?.as_array()?;

    let mut collected = Vec::new();
    for candidate in candidates {
        if let Some(parts) = candidate
            .get("content")
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.as_array())
        {
            for part in parts {
                if let Some(text) = part.get("text").and_then(|t| t.as_str()) {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        collected.push(trimmed.to_string());
                    }
                }
            }
        }
    }

    if collected.is_empty() {
        None
    } else {
        Some(collected.join("\n\n"))
    }
}

/// Find the first inline image part and render it as a data URL.
fn extract_inline_image(root: &Value) -> Option<String> {
    let candidates = root.get("candidates")?.as_array()?;

    for candidate in candidates {
        let parts = candidate
            .get("content")
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.as_array());

        let Some(parts) = parts else {
            continue;
        };

        for part in parts {
            let Some(inline) = part.get("inlineData") else {
                continue;
            };
            let Some(data) = inline.get("data").and_then(|d| d.as_str()) else {
                continue;
            };
            let mime_type = inline
                .get("mimeType")
                .and_then(|m| m.as_str())
                .unwrap_or("image/png");

            return Some(format!("data:{};base64,{}", mime_type, data));
        }
    }

    None
}

fn map_http_error(status: StatusCode, body: String) -> DomainError {
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or(body);

    DomainError::ExternalService(format!("Gemini API error ({}): {}", status.as_u16(), message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_joins_parts() {
        let payload = json!({
            "candidates": [{
                "content": { "parts": [{ "text": " こんにちは " }, { "text": "元気？" }] }
            }]
        });
        assert_eq!(extract_text(&payload).unwrap(), "こんにちは\n\n元気？");
    }

    #[test]
    fn test_extract_text_empty_is_none() {
        let payload = json!({ "candidates": [] });
        assert!(extract_text(&payload).is_none());
    }

    #[test]
    fn test_extract_inline_image_builds_data_url() {
        let payload = json!({
            "candidates": [{
                "content": { "parts": [
                    { "text": "here you go" },
                    { "inlineData": { "mimeType": "image/webp", "data": "QUJD" } }
                ] }
            }]
        });
        assert_eq!(
            extract_inline_image(&payload).unwrap(),
            "data:image/webp;base64,QUJD"
        );
    }

    #[test]
    fn test_inline_image_defaults_to_png() {
        let payload = json!({
            "candidates": [{
                "content": { "parts": [{ "inlineData": { "data": "QUJD" } }] }
            }]
        });
        assert_eq!(
            extract_inline_image(&payload).unwrap(),
            "data:image/png;base64,QUJD"
        );
    }

    #[test]
    fn test_analysis_text_parses_into_analysis() {
        let text = r#"{"stressScore": 120, "monsterName": "締め切りデビル", "monsterDescription": "時計"}"#;
        let analysis: StressAnalysis = serde_json::from_str(text).unwrap();
        assert_eq!(analysis.stress_score, 120);
    }

    #[test]
    fn test_map_http_error_prefers_upstream_message() {
        let err = map_http_error(
            StatusCode::BAD_REQUEST,
            r#"{"error": {"message": "invalid schema"}}"#.to_string(),
        );
        assert!(err.to_string().contains("invalid schema"));
    }
}
