use std::sync::Arc;

use crate::agent::ChatAgent;
use crate::config::Config;
use crate::cost::CostTracker;
use crate::cvs::CvStore;
use crate::prompts::PromptStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable chat agent. Production: `AgentClient`; tests use a canned agent.
    pub agent: Arc<dyn ChatAgent>,
    pub prompts: Arc<PromptStore>,
    pub cvs: Arc<CvStore>,
    pub cost: Arc<CostTracker>,
}
