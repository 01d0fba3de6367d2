//! Output contracts: the shape each flow's reply must have before it is handed back.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// A typed shape a model reply must conform to.
pub trait OutputContract: DeserializeOwned + Send {
    /// Flow name used in logs and errors.
    const FLOW: &'static str;

    /// True when the reply parsed but carries nothing; treated as a declined generation.
    fn is_empty(&self) -> bool {
        false
    }
}

/// Result of checking a raw reply against a contract.
#[derive(Debug, Clone, PartialEq)]
pub enum Validated<T> {
    Valid(T),
    Invalid { reason: String },
}

/// Checks that `raw` is a JSON object with every field of `T` present and well-typed.
pub fn conform<T: OutputContract>(raw: &str) -> Validated<T> {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            return Validated::Invalid {
                reason: format!("reply is not valid JSON: {e}"),
            }
        }
    };

    if !value.is_object() {
        return Validated::Invalid {
            reason: "reply is not a JSON object".to_string(),
        };
    }

    match serde_json::from_value::<T>(value) {
        Ok(output) => Validated::Valid(output),
        Err(e) => Validated::Invalid {
            reason: e.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct Sample {
        job_title: String,
        tags: Vec<String>,
    }

    impl OutputContract for Sample {
        const FLOW: &'static str = "sample";
    }

    #[test]
    fn test_conform_valid() {
        let v = conform::<Sample>(r#"{"jobTitle": "Recruiter", "tags": ["hr"]}"#);
        assert_eq!(
            v,
            Validated::Valid(Sample {
                job_title: "Recruiter".to_string(),
                tags: vec!["hr".to_string()],
            })
        );
    }

    #[test]
    fn test_conform_missing_field_names_it() {
        match conform::<Sample>(r#"{"jobTitle": "Recruiter"}"#) {
            Validated::Invalid { reason } => assert!(reason.contains("tags")),
            other => panic!("expected invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_conform_wrong_type() {
        let v = conform::<Sample>(r#"{"jobTitle": 3, "tags": []}"#);
        assert!(matches!(v, Validated::Invalid { .. }));
    }

    #[test]
    fn test_conform_rejects_non_object_and_garbage() {
        assert!(matches!(conform::<Sample>("[1, 2]"), Validated::Invalid { .. }));
        assert!(matches!(
            conform::<Sample>("Sure! Here is the JSON"),
            Validated::Invalid { .. }
        ));
    }
}
