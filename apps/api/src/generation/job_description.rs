use serde::{Deserialize, Serialize};

use crate::generation::prompts::{JOB_DESCRIPTION_PROMPT, JOB_DESCRIPTION_ROLE};
use crate::generation::schema::OutputContract;
use crate::generation::{generate, GenerationError};
use crate::llm_client::prompts::system_prompt;
use crate::llm_client::{LanguageModel, LlmRequest};

pub const FLOW: &str = "generate_job_description";

#[derive(Debug, Clone, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDescriptionInput {
    pub job_title: String,
    /// Comma-separated responsibilities, skills or qualifications.
    pub keywords: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDescriptionOutput {
    /// Markdown.
    pub job_description: String,
}

impl OutputContract for JobDescriptionOutput {
    const FLOW: &'static str = FLOW;

    fn is_empty(&self) -> bool {
        self.job_description.trim().is_empty()
    }
}

pub async fn generate_job_description(
    model: &dyn LanguageModel,
    input: &JobDescriptionInput,
    company: &str,
) -> Result<JobDescriptionOutput, GenerationError> {
    let job_title = input.job_title.trim();
    let keywords = input.keywords.trim();
    if job_title.is_empty() || keywords.is_empty() {
        return Err(GenerationError::InvalidInput(
            "jobTitle and keywords are required".to_string(),
        ));
    }

    let prompt = JOB_DESCRIPTION_PROMPT
        .replace("{company}", company)
        .replace("{job_title}", job_title)
        .replace("{keywords}", keywords);
    let system = system_prompt(JOB_DESCRIPTION_ROLE);

    generate(
        model,
        LlmRequest {
            system: &system,
            prompt: &prompt,
            attachment: None,
        },
    )
    .await
}
