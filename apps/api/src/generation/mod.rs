// Structured generation: each flow turns typed input into a prompt, makes one model call
// and validates the reply against its output contract before anything else sees it.
// All model calls go through llm_client::LanguageModel.

pub mod handlers;
pub mod inflight;
pub mod job_description;
pub mod prompts;
pub mod resume_parser;
pub mod schema;
pub mod skill_suggest;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use thiserror::Error;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::schema::{conform, OutputContract, Validated};
use crate::llm_client::{LanguageModel, LlmError, LlmRequest};

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The model produced no usable output.
    #[error("{flow} produced no output")]
    Declined { flow: &'static str },

    #[error("Model call failed: {0}")]
    Model(#[from] LlmError),

    #[error("{flow} output failed schema validation: {reason}")]
    SchemaValidation { flow: &'static str, reason: String },

    #[error("Generation request was cancelled")]
    Cancelled,

    #[error("An identical generation request is already in flight")]
    Duplicate,
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::InvalidInput(msg) => AppError::Validation(msg),
            GenerationError::Declined { flow } => {
                AppError::Generation(format!("{flow} produced no output"))
            }
            GenerationError::Model(e) => AppError::Generation(e.to_string()),
            GenerationError::SchemaValidation { flow, reason } => {
                AppError::SchemaValidation { flow, reason }
            }
            GenerationError::Cancelled => AppError::Cancelled,
            GenerationError::Duplicate => {
                AppError::Conflict(GenerationError::Duplicate.to_string())
            }
        }
    }
}

/// Stable digest of a flow's input, used to spot double submissions.
pub fn fingerprint<T: Hash + ?Sized>(flow: &str, input: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    flow.hash(&mut hasher);
    input.hash(&mut hasher);
    hasher.finish()
}

/// Makes one model call and conforms the reply to `T`'s contract.
pub async fn generate<T: OutputContract>(
    model: &dyn LanguageModel,
    request: LlmRequest<'_>,
) -> Result<T, GenerationError> {
    let raw = model.complete(request).await.map_err(|e| {
        warn!(flow = T::FLOW, "Model call failed: {e}");
        GenerationError::Model(e)
    })?;

    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        warn!(flow = T::FLOW, "Model declined to produce output");
        return Err(GenerationError::Declined { flow: T::FLOW });
    }

    match conform::<T>(trimmed) {
        Validated::Valid(output) if output.is_empty() => {
            warn!(flow = T::FLOW, "Model returned an empty result");
            Err(GenerationError::Declined { flow: T::FLOW })
        }
        Validated::Valid(output) => {
            info!(flow = T::FLOW, "Generation succeeded");
            Ok(output)
        }
        Validated::Invalid { reason } => {
            warn!(flow = T::FLOW, "Schema validation failed: {reason}");
            Err(GenerationError::SchemaValidation {
                flow: T::FLOW,
                reason,
            })
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::llm_client::{Attachment, LanguageModel, LlmError, LlmRequest};

    /// Replies with scripted outputs in order and records what it was asked.
    pub struct ScriptedModel {
        replies: Mutex<Vec<Result<String, LlmError>>>,
        pub prompts: Mutex<Vec<(String, Option<Attachment>)>>,
    }

    impl ScriptedModel {
        pub fn replying(replies: Vec<Result<String, LlmError>>) -> Self {
            Self {
                replies: Mutex::new(replies.into_iter().rev().collect()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn ok(reply: &str) -> Self {
            Self::replying(vec![Ok(reply.to_string())])
        }

        pub fn last_prompt(&self) -> String {
            self.prompts
                .lock()
                .unwrap()
                .last()
                .map(|(p, _)| p.clone())
                .unwrap_or_default()
        }
    }

    #[async_trait]
    impl LanguageModel for ScriptedModel {
        async fn complete(&self, request: LlmRequest<'_>) -> Result<String, LlmError> {
            self.prompts
                .lock()
                .unwrap()
                .push((request.prompt.to_string(), request.attachment.cloned()));
            self.replies
                .lock()
                .unwrap()
                .pop()
                .unwrap_or(Err(LlmError::EmptyContent))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ScriptedModel;
    use super::*;
    use crate::generation::skill_suggest::SkillSuggestionOutput;

    fn request() -> LlmRequest<'static> {
        LlmRequest {
            system: "system",
            prompt: "prompt",
            attachment: None,
        }
    }

    #[tokio::test]
    async fn test_generate_valid_output() {
        let model = ScriptedModel::ok(r#"{"suggestedSkills": "Rust, Go"}"#);
        let out: SkillSuggestionOutput = generate(&model, request()).await.unwrap();
        assert_eq!(out.suggested_skills, "Rust, Go");
    }

    #[tokio::test]
    async fn test_generate_empty_reply_is_declined() {
        let model = ScriptedModel::ok("   ");
        let err = generate::<SkillSuggestionOutput>(&model, request())
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::Declined { .. }));
    }

    #[tokio::test]
    async fn test_generate_empty_field_is_declined() {
        let model = ScriptedModel::ok(r#"{"suggestedSkills": ""}"#);
        let err = generate::<SkillSuggestionOutput>(&model, request())
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::Declined { .. }));
    }

    #[tokio::test]
    async fn test_generate_wrong_shape_fails_schema() {
        let model = ScriptedModel::ok(r#"{"skills": ["Rust"]}"#);
        let err = generate::<SkillSuggestionOutput>(&model, request())
            .await
            .unwrap_err();
        match err {
            GenerationError::SchemaValidation { flow, reason } => {
                assert_eq!(flow, "suggest_skills");
                assert!(reason.contains("suggestedSkills"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_generate_model_failure_propagates() {
        let model = ScriptedModel::replying(vec![Err(LlmError::Api {
            status: 500,
            message: "overloaded".to_string(),
        })]);
        let err = generate::<SkillSuggestionOutput>(&model, request())
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::Model(_)));
    }

    #[test]
    fn test_fingerprint_depends_on_flow_and_input() {
        assert_eq!(fingerprint("a", "x"), fingerprint("a", "x"));
        assert_ne!(fingerprint("a", "x"), fingerprint("b", "x"));
        assert_ne!(fingerprint("a", "x"), fingerprint("a", "y"));
    }

    #[test]
    fn test_error_mapping() {
        let err: AppError = GenerationError::Duplicate.into();
        assert!(matches!(err, AppError::Conflict(_)));
        let err: AppError = GenerationError::Cancelled.into();
        assert!(matches!(err, AppError::Cancelled));
        let err: AppError = GenerationError::InvalidInput("x".into()).into();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
