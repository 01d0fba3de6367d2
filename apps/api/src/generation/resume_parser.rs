use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::generation::prompts::{RESUME_PROMPT, RESUME_ROLE};
use crate::generation::schema::OutputContract;
use crate::generation::{generate, GenerationError};
use crate::llm_client::prompts::system_prompt;
use crate::llm_client::{Attachment, LanguageModel, LlmRequest};
use crate::models::hiring::ResumeProfile;

pub const FLOW: &str = "parse_resume";

const IMAGE_TYPES: [&str; 4] = ["image/png", "image/jpeg", "image/gif", "image/webp"];

impl OutputContract for ResumeProfile {
    const FLOW: &'static str = FLOW;
}

/// Builds the model attachment from a `data:<mime>;base64,<payload>` URI.
pub fn attachment_from_data_uri(uri: &str) -> Result<Attachment, GenerationError> {
    let invalid = |msg: &str| GenerationError::InvalidInput(msg.to_string());

    let rest = uri
        .trim()
        .strip_prefix("data:")
        .ok_or_else(|| invalid("resume must be a data URI"))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| invalid("data URI has no payload"))?;
    let media_type = header
        .strip_suffix(";base64")
        .ok_or_else(|| invalid("data URI must be base64 encoded"))?
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|e| GenerationError::InvalidInput(format!("invalid base64 payload: {e}")))?;
    if bytes.is_empty() {
        return Err(invalid("resume file is empty"));
    }

    let data = payload.trim().to_string();
    if media_type == "application/pdf" {
        return Ok(Attachment::Document { media_type, data });
    }
    if IMAGE_TYPES.contains(&media_type.as_str()) {
        return Ok(Attachment::Image { media_type, data });
    }
    if media_type == "text/plain" {
        return String::from_utf8(bytes)
            .map(Attachment::Text)
            .map_err(|_| invalid("text resume is not valid UTF-8"));
    }
    Err(GenerationError::InvalidInput(format!(
        "unsupported resume type '{media_type}'"
    )))
}

/// Encodes raw file bytes as a data URI.
pub fn data_uri(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{media_type};base64,{}", STANDARD.encode(bytes))
}

pub async fn parse_resume(
    model: &dyn LanguageModel,
    resume_data_uri: &str,
) -> Result<ResumeProfile, GenerationError> {
    let attachment = attachment_from_data_uri(resume_data_uri)?;
    let system = system_prompt(RESUME_ROLE);

    generate(
        model,
        LlmRequest {
            system: &system,
            prompt: RESUME_PROMPT,
            attachment: Some(&attachment),
        },
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::testing::ScriptedModel;

    const FULL_REPLY: &str = r#"{
        "name": "Jane Doe",
        "email": "jane@example.com",
        "phone": "555-000-1111",
        "skills": ["Rust", "SQL"],
        "experience": [{"title": "Engineer", "company": "Acme", "duration": "2020 - Present"}],
        "education": [{"institution": "MIT", "degree": "B.S.", "year": "2019"}],
        "resumeSummary": "Backend engineer."
    }"#;

    #[test]
    fn test_pdf_data_uri_becomes_document() {
        let uri = data_uri("application/pdf", b"%PDF-1.4");
        match attachment_from_data_uri(&uri).unwrap() {
            Attachment::Document { media_type, data } => {
                assert_eq!(media_type, "application/pdf");
                assert_eq!(STANDARD.decode(data).unwrap(), b"%PDF-1.4");
            }
            other => panic!("unexpected attachment {other:?}"),
        }
    }

    #[test]
    fn test_image_and_text_data_uris() {
        let png = data_uri("image/png", &[0x89, b'P', b'N', b'G']);
        assert!(matches!(
            attachment_from_data_uri(&png).unwrap(),
            Attachment::Image { .. }
        ));
        let txt = data_uri("text/plain", b"Jane Doe");
        assert_eq!(
            attachment_from_data_uri(&txt).unwrap(),
            Attachment::Text("Jane Doe".to_string())
        );
    }

    #[test]
    fn test_rejects_malformed_uris() {
        for uri in [
            "not a uri",
            "data:application/pdf,plain-text",
            "data:application/pdf;base64,@@@",
            "data:application/zip;base64,UEsDBA==",
            "data:application/pdf;base64,",
        ] {
            assert!(
                matches!(
                    attachment_from_data_uri(uri),
                    Err(GenerationError::InvalidInput(_))
                ),
                "{uri} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_parse_resume_sends_attachment() {
        let model = ScriptedModel::ok(FULL_REPLY);
        let uri = data_uri("application/pdf", b"%PDF-1.4");
        let profile = parse_resume(&model, &uri).await.unwrap();

        assert_eq!(profile.name, "Jane Doe");
        assert_eq!(profile.experience[0].company, "Acme");
        let prompts = model.prompts.lock().unwrap();
        assert!(matches!(prompts[0].1, Some(Attachment::Document { .. })));
    }

    #[tokio::test]
    async fn test_missing_email_fails_schema_validation() {
        let reply = FULL_REPLY.replace(r#""email": "jane@example.com","#, "");
        let model = ScriptedModel::ok(&reply);
        let uri = data_uri("text/plain", b"Jane Doe, engineer");
        let err = parse_resume(&model, &uri).await.unwrap_err();
        match err {
            GenerationError::SchemaValidation { flow, reason } => {
                assert_eq!(flow, FLOW);
                assert!(reason.contains("email"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
