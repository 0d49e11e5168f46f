use reqwest::Client;

use crate::config::Config;
use crate::layout::PageConfig;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only: nothing here changes after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// HTTP client reused for every Gemini call; keys are bound per request.
    pub http: Client,
    /// Paper size and margins for every rendered resume.
    pub page_config: PageConfig,
}

impl AppState {
    pub fn new(config: Config, http: Client) -> Self {
        let page_config = crate::layout::default_page_config(config.paper_size);
        Self {
            config,
            http,
            page_config,
        }
    }
}
