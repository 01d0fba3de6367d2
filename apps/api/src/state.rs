use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::generation::inflight::InflightRegistry;
use crate::llm_client::LanguageModel;
use crate::seed::SeedData;
use crate::workspace::Workspace;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Every page's store. Never held across a model call.
    pub workspace: Arc<Mutex<Workspace>>,
    /// Production: `LlmClient`. Tests swap in scripted models.
    pub llm: Arc<dyn LanguageModel>,
    pub config: Config,
    pub inflight: Arc<InflightRegistry>,
}

impl AppState {
    pub fn new(config: Config, llm: Arc<dyn LanguageModel>) -> Self {
        let seed = SeedData::build(config.anchor_date());
        Self {
            workspace: Arc::new(Mutex::new(Workspace::from_seed(seed))),
            llm,
            config,
            inflight: InflightRegistry::new(),
        }
    }
}
