// Shared prompt fragments.
// Each generation flow defines its own templates in generation/prompts.rs.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Appended to every system prompt: the reply must be exactly the described object.
pub const SCHEMA_INSTRUCTION: &str = "\
    Return exactly one JSON object with the fields described below and nothing else. \
    Every field is required. Use empty strings or empty arrays rather than omitting a field.";

/// Joins the JSON-only rule, the role description and the schema rule into one system prompt.
pub fn system_prompt(role: &str) -> String {
    format!("{role}\n\n{JSON_ONLY_SYSTEM}\n{SCHEMA_INSTRUCTION}")
}
