use serde::{Deserialize, Serialize};

use crate::generation::prompts::{SKILLS_PROMPT, SKILLS_ROLE};
use crate::generation::schema::OutputContract;
use crate::generation::{generate, GenerationError};
use crate::llm_client::prompts::system_prompt;
use crate::llm_client::{LanguageModel, LlmRequest};

pub const FLOW: &str = "suggest_skills";

#[derive(Debug, Clone, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSuggestionInput {
    /// Comma-separated.
    pub employee_skills: String,
    pub job_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSuggestionOutput {
    /// Comma-separated.
    pub suggested_skills: String,
}

impl OutputContract for SkillSuggestionOutput {
    const FLOW: &'static str = FLOW;

    fn is_empty(&self) -> bool {
        split_skills(&self.suggested_skills).is_empty()
    }
}

/// The model's reply plus its split form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSuggestions {
    pub suggested_skills: String,
    pub skills: Vec<String>,
}

/// Splits on commas, trims, and drops empty entries.
pub fn split_skills(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub async fn suggest_skills(
    model: &dyn LanguageModel,
    input: &SkillSuggestionInput,
) -> Result<SkillSuggestions, GenerationError> {
    let employee_skills = input.employee_skills.trim();
    let job_description = input.job_description.trim();
    if employee_skills.is_empty() || job_description.is_empty() {
        return Err(GenerationError::InvalidInput(
            "employeeSkills and jobDescription are required".to_string(),
        ));
    }

    let prompt = SKILLS_PROMPT
        .replace("{employee_skills}", employee_skills)
        .replace("{job_description}", job_description);
    let system = system_prompt(SKILLS_ROLE);

    let output: SkillSuggestionOutput = generate(
        model,
        LlmRequest {
            system: &system,
            prompt: &prompt,
            attachment: None,
        },
    )
    .await?;

    let skills = split_skills(&output.suggested_skills);
    Ok(SkillSuggestions {
        suggested_skills: output.suggested_skills,
        skills,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::testing::ScriptedModel;

    #[test]
    fn test_split_skills_trims_and_drops_empties() {
        assert_eq!(
            split_skills(" Kubernetes, ,Terraform ,, GraphQL "),
            vec!["Kubernetes", "Terraform", "GraphQL"]
        );
        assert!(split_skills(" , ,").is_empty());
    }

    #[tokio::test]
    async fn test_suggest_skills_returns_split_list() {
        let model = ScriptedModel::ok(r#"{"suggestedSkills": "Next.js, GraphQL, Docker"}"#);
        let input = SkillSuggestionInput {
            employee_skills: "React, Node.js, TypeScript, AWS".to_string(),
            job_description: "Senior Software Engineer building web products".to_string(),
        };
        let out = suggest_skills(&model, &input).await.unwrap();
        assert_eq!(out.skills, vec!["Next.js", "GraphQL", "Docker"]);
        assert!(model.last_prompt().contains("Employee Skills: React, Node.js"));
    }

    #[tokio::test]
    async fn test_only_separators_is_declined() {
        let model = ScriptedModel::ok(r#"{"suggestedSkills": " , , "}"#);
        let input = SkillSuggestionInput {
            employee_skills: "Figma".to_string(),
            job_description: "UI/UX Designer for the product team".to_string(),
        };
        let err = suggest_skills(&model, &input).await.unwrap_err();
        assert!(matches!(err, GenerationError::Declined { .. }));
    }
}
