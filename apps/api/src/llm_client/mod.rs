/// LLM Client: the single point of entry for all Claude API calls in HR Desk.
///
/// ARCHITECTURAL RULE: No other module may call the Anthropic API directly.
/// Generation code depends on the `LanguageModel` trait; `LlmClient` is the production
/// implementation.
///
/// Model: claude-sonnet-4-5 (hardcoded, not configurable)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for all LLM calls in HR Desk.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 4096;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// A file handed to the model next to the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attachment {
    /// Base64 PDF.
    Document { media_type: String, data: String },
    /// Base64 PNG, JPEG, GIF or WEBP.
    Image { media_type: String, data: String },
    /// Decoded plain text, sent inline.
    Text(String),
}

/// One single-turn request: system prompt, user prompt and an optional attachment.
#[derive(Debug, Clone, Copy)]
pub struct LlmRequest<'a> {
    pub system: &'a str,
    pub prompt: &'a str,
    pub attachment: Option<&'a Attachment>,
}

/// The seam between generation flows and the hosted model.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Sends one request and returns the text of the reply.
    async fn complete(&self, request: LlmRequest<'_>) -> Result<String, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: Vec<RequestBlock<'a>>,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
enum RequestBlock<'a> {
    Text { text: &'a str },
    Image { source: Base64Source<'a> },
    Document { source: Base64Source<'a> },
}

#[derive(Debug, Serialize, PartialEq)]
struct Base64Source<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    media_type: &'a str,
    data: &'a str,
}

impl<'a> Base64Source<'a> {
    fn new(media_type: &'a str, data: &'a str) -> Self {
        Self {
            kind: "base64",
            media_type,
            data,
        }
    }
}

/// Attachment first, then the instructions.
fn content_blocks<'a>(prompt: &'a str, attachment: Option<&'a Attachment>) -> Vec<RequestBlock<'a>> {
    let mut blocks = Vec::with_capacity(2);
    match attachment {
        Some(Attachment::Document { media_type, data }) => blocks.push(RequestBlock::Document {
            source: Base64Source::new(media_type, data),
        }),
        Some(Attachment::Image { media_type, data }) => blocks.push(RequestBlock::Image {
            source: Base64Source::new(media_type, data),
        }),
        Some(Attachment::Text(text)) => blocks.push(RequestBlock::Text { text }),
        None => {}
    }
    blocks.push(RequestBlock::Text { text: prompt });
    blocks
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Extracts the text content from the first text block.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// Wraps the Anthropic Messages API. One POST per call, no retries.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()?,
            api_key,
        })
    }

    /// Makes a raw call to the Claude API, returning the full response object.
    pub async fn call(&self, request: LlmRequest<'_>) -> Result<LlmResponse, LlmError> {
        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system: request.system,
            messages: vec![AnthropicMessage {
                role: "user",
                content: content_blocks(request.prompt, request.attachment),
            }],
        };

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<AnthropicError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let llm_response: LlmResponse = response.json().await?;

        debug!(
            "LLM call succeeded: input_tokens={}, output_tokens={}",
            llm_response.usage.input_tokens, llm_response.usage.output_tokens
        );

        Ok(llm_response)
    }
}

#[async_trait]
impl LanguageModel for LlmClient {
    async fn complete(&self, request: LlmRequest<'_>) -> Result<String, LlmError> {
        let response = self.call(request).await?;
        let text = response.text().ok_or(LlmError::EmptyContent)?;
        Ok(strip_json_fences(text).to_string())
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_pdf_attachment_becomes_document_block_before_prompt() {
        let pdf = Attachment::Document {
            media_type: "application/pdf".to_string(),
            data: "JVBERi0=".to_string(),
        };
        let blocks = content_blocks("Extract the information now.", Some(&pdf));
        let json = serde_json::to_value(&blocks).unwrap();
        assert_eq!(json[0]["type"], "document");
        assert_eq!(json[0]["source"]["type"], "base64");
        assert_eq!(json[0]["source"]["media_type"], "application/pdf");
        assert_eq!(json[1]["type"], "text");
        assert_eq!(json[1]["text"], "Extract the information now.");
    }

    #[test]
    fn test_text_attachment_is_inlined() {
        let text = Attachment::Text("Jane Doe\njane@example.com".to_string());
        let blocks = content_blocks("Parse.", Some(&text));
        assert_eq!(
            blocks[0],
            RequestBlock::Text {
                text: "Jane Doe\njane@example.com"
            }
        );
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn test_no_attachment_sends_prompt_only() {
        let blocks = content_blocks("Hello", None);
        assert_eq!(blocks, vec![RequestBlock::Text { text: "Hello" }]);
    }
}
