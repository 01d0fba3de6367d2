use anyhow::{Context, Result};
use chrono::NaiveDate;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Company named in generated job postings.
    pub company_name: String,
    /// Day the seed fixtures are relative to. `None` means today.
    pub seed_anchor_date: Option<NaiveDate>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let seed_anchor_date = match std::env::var("SEED_ANCHOR_DATE") {
            Ok(raw) => Some(
                NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                    .context("SEED_ANCHOR_DATE must be a YYYY-MM-DD date")?,
            ),
            Err(_) => None,
        };

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            company_name: std::env::var("COMPANY_NAME")
                .unwrap_or_else(|_| "Synergy Corp".to_string()),
            seed_anchor_date,
        })
    }

    /// Resolves the seed anchor, falling back to the current UTC day.
    pub fn anchor_date(&self) -> NaiveDate {
        self.seed_anchor_date
            .unwrap_or_else(|| chrono::Utc::now().date_naive())
    }

    #[cfg(test)]
    pub fn for_tests(anchor: NaiveDate) -> Self {
        Config {
            anthropic_api_key: "test-key".to_string(),
            port: 0,
            rust_log: "debug".to_string(),
            company_name: "Synergy Corp".to_string(),
            seed_anchor_date: Some(anchor),
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
